//! Email verification route handlers
//!
//! - `POST /api/emails/send` issues a code to an address
//! - `POST /api/emails/verify` checks a submitted code

pub mod send;
pub mod verify;

use actix_web::HttpResponse;
use std::sync::Arc;

use vm_core::services::verification::{
    EmailSenderTrait, VerificationResult, VerificationService, VerificationStoreTrait,
};

/// 400 message for a send request without a usable address
pub const SEND_VALIDATION_MESSAGE: &str = "Recipient email not provided!";

/// 400 message for a verify request with missing fields
pub const VERIFY_VALIDATION_MESSAGE: &str = "Code is invalid or expired";

/// Application state that holds shared services
pub struct AppState<E, S>
where
    E: EmailSenderTrait,
    S: VerificationStoreTrait,
{
    pub verification_service: Arc<VerificationService<E, S>>,
}

impl<E, S> AppState<E, S>
where
    E: EmailSenderTrait,
    S: VerificationStoreTrait,
{
    pub fn new(verification_service: VerificationService<E, S>) -> Self {
        Self {
            verification_service: Arc::new(verification_service),
        }
    }
}

/// 200 with the result on success, 500 with the result otherwise
pub(crate) fn result_response(result: VerificationResult) -> HttpResponse {
    if result.succeeded {
        HttpResponse::Ok().json(result)
    } else {
        HttpResponse::InternalServerError().json(result)
    }
}
