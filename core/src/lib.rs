//! # Verimail Core
//!
//! Core business logic and domain layer for the Verimail backend.
//! This crate contains the verification entry entity, the verification
//! service, the traits its collaborators implement, and error types.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
