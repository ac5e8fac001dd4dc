//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{ImageRefError, QuestionError};
use quiz_core::quiz::FailureKind;

/// Shown when the question batch cannot be produced.
pub const QUESTIONS_FAILED_MESSAGE: &str =
    "Could not generate the quiz questions. Please check the API key and configuration.";

/// Shown when an illustration cannot be produced.
pub const IMAGE_FAILED_MESSAGE: &str = "Sorry, I couldn't create an image for the question.";

/// Errors emitted while resolving provider configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error(
        "No API key found. Set the {} environment variable and try again.",
        .vars.join(" or ")
    )]
    MissingCredential { vars: Vec<&'static str> },

    #[error("The API key is empty. Provide a key and try again.")]
    BlankCredential,
}

/// Errors emitted by a `ContentProvider`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProviderError {
    #[error(transparent)]
    Configuration(#[from] ConfigError),
    #[error("content generation failed: {0}")]
    ContentGenerationFailed(String),
    #[error("image generation failed: {0}")]
    ImageGenerationFailed(String),
    #[error("provider request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("provider returned malformed JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("provider returned an invalid question: {0}")]
    InvalidQuestion(#[from] QuestionError),
    #[error("provider returned an invalid image: {0}")]
    InvalidImage(#[from] ImageRefError),
}

/// Which provider call produced an error; selects the player-facing wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderCall {
    Questions,
    Image,
}

impl ProviderError {
    /// Message safe to show a young player.
    #[must_use]
    pub fn user_message(&self, call: ProviderCall) -> String {
        match (self, call) {
            (ProviderError::Configuration(err), _) => err.to_string(),
            (_, ProviderCall::Questions) => QUESTIONS_FAILED_MESSAGE.to_string(),
            (_, ProviderCall::Image) => IMAGE_FAILED_MESSAGE.to_string(),
        }
    }

    /// How the error screen should classify this failure.
    #[must_use]
    pub fn failure_kind(&self, call: ProviderCall) -> FailureKind {
        match (self, call) {
            (ProviderError::Configuration(_), _) => FailureKind::ConfigurationMissing,
            (_, ProviderCall::Questions) => FailureKind::ContentGenerationFailed,
            (_, ProviderCall::Image) => FailureKind::ImageGenerationFailed,
        }
    }
}
