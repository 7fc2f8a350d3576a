//! Error types for Tutorly.
//!
//! Every failure inside the content pipeline is a [`TutorlyError`]. The HTTP
//! layer turns any of them into a 500 response carrying the `Display` text.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum TutorlyError {
    /// Missing or invalid startup configuration (e.g. no API key).
    #[error("{0}")]
    Config(String),

    /// A single upstream provider call failed.
    #[error("Provider error: {0}")]
    Provider(String),

    /// Every attempt against the upstream provider failed.
    ///
    /// `last_error` is kept for logs only; the display text deliberately
    /// carries no upstream detail.
    #[error("Failed to generate content after multiple attempts")]
    Generation { attempts: u32, last_error: String },

    /// Model output did not contain a recoverable list of quiz questions.
    #[error("Error parsing quiz questions: {0}")]
    QuizParse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TutorlyError>;
