use actix_web::{web, HttpResponse};
use validator::Validate;

use vm_core::services::verification::{EmailSenderTrait, VerificationResult, VerificationStoreTrait};
use vm_shared::errors::ErrorResponse;

use super::{result_response, AppState, VERIFY_VALIDATION_MESSAGE};
use crate::dto::VerifyEmailCodeRequest;
use crate::handlers::validation_error_response;

/// Handler for POST /api/emails/verify
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com", "code": "482913" }
/// ```
///
/// A code verifies at most once. Wrong, expired and unknown codes all answer
/// 500 with the same generic error.
#[utoipa::path(
    post,
    path = "/api/emails/verify",
    request_body = VerifyEmailCodeRequest,
    responses(
        (status = 200, description = "Code verified", body = VerificationResult),
        (status = 400, description = "Email or code missing", body = ErrorResponse),
        (status = 500, description = "Code invalid or expired", body = VerificationResult)
    ),
    tag = "Emails"
)]
pub async fn verify<E, S>(
    state: web::Data<AppState<E, S>>,
    request: web::Json<VerifyEmailCodeRequest>,
) -> HttpResponse
where
    E: EmailSenderTrait + 'static,
    S: VerificationStoreTrait + 'static,
{
    if let Err(errors) = request.validate() {
        tracing::warn!("Validation failed for verify request");
        return validation_error_response(VERIFY_VALIDATION_MESSAGE, Some(&errors));
    }

    let result = state
        .verification_service
        .verify_code(&request.into_inner().into())
        .await;

    result_response(result)
}
