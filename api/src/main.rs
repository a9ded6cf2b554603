use actix_web::{web, HttpServer};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use vm_api::app::create_app;
use vm_api::middleware::create_cors;
use vm_api::routes::AppState;
use vm_api::telemetry::init_tracing;
use vm_core::services::verification::{VerificationService, VerificationServiceConfig};
use vm_infra::{create_email_sender, create_verification_store};
use vm_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging)?;

    tracing::info!(environment = %config.environment, "Starting Verimail API Server");

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

    // Wire collaborators; the in-memory store starts its sweeper here
    let email_sender = create_email_sender(&config.email)?;
    let store = create_verification_store(&config.cache).await?;

    let verification_service = VerificationService::new(
        Arc::new(email_sender),
        Arc::new(store),
        VerificationServiceConfig::from_settings(&config.email, &config.verification),
    );
    let app_state = web::Data::new(AppState::new(verification_service));

    let bind_address = config.server.bind_address();
    tracing::info!("Server will bind to: {}", bind_address);

    let workers = config.server.workers;
    let app_config = config.clone();

    let mut server = HttpServer::new(move || {
        create_app(app_state.clone(), &app_config)
            .wrap(create_cors(&app_config.cors, app_config.environment))
            .wrap(TracingLogger::default())
    });

    if workers > 0 {
        server = server.workers(workers);
    }

    server.bind(&bind_address)?.run().await?;

    tracing::info!("Server stopped");
    Ok(())
}
