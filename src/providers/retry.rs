//! Bounded retry around an [`LLMProvider`].
//!
//! Every upstream error is treated as retryable. Attempts are separated by a
//! fixed delay (no exponential growth, no jitter). Once attempts run out the
//! caller gets [`TutorlyError::Generation`].

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{Result, TutorlyError};
use crate::learning::prompts::SYSTEM_PROMPT;

use super::LLMProvider;

/// How many times to call the provider and how long to wait in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Same attempt count, no waiting. Meant for tests.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            delay: Duration::ZERO,
        }
    }
}

/// Provider wrapper that retries failed generations.
pub struct GenerationClient {
    provider: Arc<dyn LLMProvider>,
    policy: RetryPolicy,
    system_prompt: String,
}

impl GenerationClient {
    /// Wrap `provider`. `max_attempts` is clamped to at least 1.
    pub fn new(provider: Arc<dyn LLMProvider>, mut policy: RetryPolicy) -> Self {
        policy.max_attempts = policy.max_attempts.max(1);
        Self {
            provider,
            policy,
            system_prompt: SYSTEM_PROMPT.to_string(),
        }
    }

    /// Generate text for `prompt`, retrying on any provider error.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let max = self.policy.max_attempts;
        let mut last_error = String::new();

        for attempt in 1..=max {
            match self.provider.complete(&self.system_prompt, prompt).await {
                Ok(text) => {
                    debug!(
                        provider = %self.provider.name(),
                        model = %self.provider.model(),
                        attempt,
                        "Generation succeeded"
                    );
                    return Ok(text);
                }
                Err(e) => {
                    warn!(
                        provider = %self.provider.name(),
                        model = %self.provider.model(),
                        attempt,
                        max_attempts = max,
                        error = %e,
                        "Generation attempt failed"
                    );
                    last_error = e.to_string();
                    if attempt < max {
                        tokio::time::sleep(self.policy.delay).await;
                    }
                }
            }
        }

        Err(TutorlyError::Generation {
            attempts: max,
            last_error,
        })
    }
}
