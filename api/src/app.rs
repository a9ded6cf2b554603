//! Application factory
//!
//! Builds the Actix-web application from shared state. Middleware is added
//! by the caller so tests can mount the bare routes.

use actix_web::{web, App, HttpResponse};

use vm_core::services::verification::{EmailSenderTrait, VerificationStoreTrait};
use vm_shared::config::AppConfig;

use crate::handlers::{json_config, not_found};
use crate::openapi::openapi_json;
use crate::routes::emails::{
    send::send, verify::verify, AppState, SEND_VALIDATION_MESSAGE, VERIFY_VALIDATION_MESSAGE,
};

/// Create and configure the application with all dependencies
pub fn create_app<E, S>(
    app_state: web::Data<AppState<E, S>>,
    config: &AppConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    E: EmailSenderTrait + 'static,
    S: VerificationStoreTrait + 'static,
{
    let limit = config.server.max_payload_size;

    App::new()
        // Add application state
        .app_data(app_state)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Generated API description
        .route("/openapi.json", web::get().to(openapi_json))
        .service(
            web::scope("/api/emails")
                .service(
                    web::resource("/send")
                        .app_data(json_config(SEND_VALIDATION_MESSAGE, limit))
                        .route(web::post().to(send::<E, S>)),
                )
                .service(
                    web::resource("/verify")
                        .app_data(json_config(VERIFY_VALIDATION_MESSAGE, limit))
                        .route(web::post().to(verify::<E, S>)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "verimail-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
