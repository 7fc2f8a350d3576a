//! Upstream generative-model providers.
//!
//! The rest of the crate sees a provider as a black box: system instruction
//! and prompt in, text out, fallible. [`GenerationClient`] adds bounded retry
//! on top of any [`LLMProvider`].

pub mod gemini;
pub mod retry;

use async_trait::async_trait;

use crate::error::Result;

pub use gemini::GeminiProvider;
pub use retry::{GenerationClient, RetryPolicy};

/// A text-generation backend.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Generate text for `prompt` under the given system instruction.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String>;

    /// Provider name used in logs.
    fn name(&self) -> &str;

    /// Model identifier requests are sent to.
    fn model(&self) -> &str;
}
