pub mod email;

pub use email::{SendEmailCodeRequest, VerifyEmailCodeRequest};
