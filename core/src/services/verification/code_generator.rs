//! Verification code generation

use rand::Rng;

use crate::domain::entities::verification_code::{MAX_CODE, MIN_CODE};

/// Source of fresh verification codes
pub trait CodeGenerator: Send + Sync {
    /// Produce a new code
    fn generate(&self) -> String;
}

/// Six-digit codes drawn uniformly from `MIN_CODE..=MAX_CODE`
///
/// Uses the thread-local RNG, which is seeded from the OS per thread, so no
/// generator state is shared between requests or processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        let code: u32 = rand::thread_rng().gen_range(MIN_CODE..=MAX_CODE);
        code.to_string()
    }
}
