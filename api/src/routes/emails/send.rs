use actix_web::{web, HttpResponse};
use validator::Validate;

use vm_core::services::verification::{EmailSenderTrait, VerificationResult, VerificationStoreTrait};
use vm_shared::email::mask_email;
use vm_shared::errors::ErrorResponse;

use super::{result_response, AppState, SEND_VALIDATION_MESSAGE};
use crate::dto::SendEmailCodeRequest;
use crate::handlers::validation_error_response;

/// Handler for POST /api/emails/send
///
/// Sends a verification code to the specified address.
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com" }
/// ```
///
/// # Response
///
/// - 200 with `{"succeeded": true}` once the provider accepted the email
/// - 400 with an error body when the address is missing or malformed
/// - 500 with `{"succeeded": false, "error": "..."}` when sending failed
#[utoipa::path(
    post,
    path = "/api/emails/send",
    request_body = SendEmailCodeRequest,
    responses(
        (status = 200, description = "Code sent", body = VerificationResult),
        (status = 400, description = "Recipient email missing or malformed", body = ErrorResponse),
        (status = 500, description = "Sending failed", body = VerificationResult)
    ),
    tag = "Emails"
)]
pub async fn send<E, S>(
    state: web::Data<AppState<E, S>>,
    request: web::Json<SendEmailCodeRequest>,
) -> HttpResponse
where
    E: EmailSenderTrait + 'static,
    S: VerificationStoreTrait + 'static,
{
    if let Err(errors) = request.validate() {
        tracing::warn!(
            email = %request.email.as_deref().map(mask_email).unwrap_or_default(),
            "Validation failed for send request"
        );
        return validation_error_response(SEND_VALIDATION_MESSAGE, Some(&errors));
    }

    let result = state
        .verification_service
        .send_verification_code(&request.into_inner().into())
        .await;

    result_response(result)
}
