//! Route handlers

pub mod emails;

pub use emails::AppState;
