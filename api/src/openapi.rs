//! OpenAPI description of the HTTP surface

use actix_web::HttpResponse;
use utoipa::OpenApi;

use vm_core::services::verification::VerificationResult;
use vm_shared::errors::ErrorResponse;

use crate::dto::{SendEmailCodeRequest, VerifyEmailCodeRequest};
use crate::routes::emails::{send, verify};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Verimail API",
        description = "Issue and verify email verification codes"
    ),
    paths(send::send, verify::verify),
    components(schemas(
        SendEmailCodeRequest,
        VerifyEmailCodeRequest,
        VerificationResult,
        ErrorResponse
    )),
    tags(
        (name = "Emails", description = "Verification code endpoints")
    )
)]
pub struct ApiDoc;

/// Handler for GET /openapi.json
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
