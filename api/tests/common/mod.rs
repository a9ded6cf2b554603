//! Shared helpers for API integration tests

use actix_web::web;
use std::sync::Arc;

use vm_api::routes::AppState;
use vm_core::services::verification::{CodeGenerator, VerificationService, VerificationServiceConfig};
use vm_infra::{InMemoryVerificationStore, MockEmailService};

pub const TEST_CODE: &str = "482913";

pub type TestState = AppState<MockEmailService, InMemoryVerificationStore>;

pub struct FixedCodeGenerator(pub &'static str);

impl CodeGenerator for FixedCodeGenerator {
    fn generate(&self) -> String {
        self.0.to_string()
    }
}

/// Helper function to create test application state
pub fn create_test_app_state(
    simulate_send_failure: bool,
) -> (web::Data<TestState>, Arc<InMemoryVerificationStore>) {
    let email_sender = Arc::new(MockEmailService::with_options(false, simulate_send_failure));
    let store = Arc::new(InMemoryVerificationStore::new());

    let service = VerificationService::new(
        email_sender,
        store.clone(),
        VerificationServiceConfig::default(),
    )
    .with_code_generator(Arc::new(FixedCodeGenerator(TEST_CODE)));

    (web::Data::new(AppState::new(service)), store)
}
