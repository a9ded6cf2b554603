//! CORS middleware configuration for cross-origin requests.
//!
//! The configuration is environment-aware: development accepts any origin,
//! other environments only accept the configured origins.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use vm_shared::config::{CorsConfig, Environment};

/// Creates a CORS middleware instance for the given settings.
///
/// Any origin is allowed in development or when the configured list
/// contains `*`. Otherwise only the listed origins are allowed, and an empty
/// list rejects every cross-origin request.
pub fn create_cors(config: &CorsConfig, environment: Environment) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(config.max_age);

    if environment.is_development() || config.allows_any_origin() {
        tracing::info!(%environment, "Configuring permissive CORS");
        return cors.allow_any_origin();
    }

    tracing::info!(%environment, origins = ?config.allowed_origins, "Configuring restricted CORS");
    config
        .allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    async fn ok() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[actix_web::test]
    async fn test_development_allows_any_origin() {
        let cors = create_cors(&CorsConfig::default(), Environment::Development);
        let app = test::init_service(App::new().wrap(cors).route("/", web::get().to(ok))).await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "https://anywhere.example"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[actix_web::test]
    async fn test_production_only_allows_configured_origins() {
        let config = CorsConfig {
            allowed_origins: vec!["https://app.verimail.io".to_string()],
            max_age: 600,
        };
        let cors = create_cors(&config, Environment::Production);
        let app = test::init_service(App::new().wrap(cors).route("/", web::get().to(ok))).await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "https://app.verimail.io"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("https://app.verimail.io")
        );

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "https://evil.example"))
            .to_request();
        let resp = test::try_call_service(&app, req).await;
        assert!(match resp {
            Ok(resp) => !resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Err(_) => true,
        });
    }
}
