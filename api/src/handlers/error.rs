//! Error responses for rejected requests

use actix_web::{error::InternalError, web, HttpResponse};
use std::collections::HashMap;
use validator::ValidationErrors;

use vm_shared::errors::{error_codes, ErrorResponse};

/// Build a 400 response carrying `message` and any field errors
pub fn validation_error_response(
    message: &str,
    errors: Option<&ValidationErrors>,
) -> HttpResponse {
    let mut response = ErrorResponse::new(error_codes::VALIDATION_ERROR, message);

    if let Some(errors) = errors {
        let fields: HashMap<String, Vec<String>> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let messages = errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();
        response = response.add_detail("fields", fields);
    }

    HttpResponse::BadRequest().json(response)
}

/// JSON extractor config whose parse failures answer with `message`
///
/// Malformed bodies, wrong content types and oversized payloads all produce
/// the same 400 body as a request that fails validation.
pub fn json_config(message: &'static str, limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(move |err, req| {
            tracing::warn!(path = %req.path(), error = %err, "Rejected unreadable request body");
            let response = validation_error_response(message, None);
            InternalError::from_response(err, response).into()
        })
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
