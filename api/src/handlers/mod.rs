pub mod error;

pub use error::{json_config, not_found, validation_error_response};
