//! The content provider port and its Gemini adapter.

mod gemini;
pub mod prompts;

use async_trait::async_trait;

use quiz_core::model::{ImageRef, Question};

use crate::error::{ConfigError, ProviderError};

pub use gemini::GeminiProvider;

/// Source of quiz questions and their illustrations.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Check that the provider can be called at all.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when required configuration is missing.
    fn check_configuration(&self) -> Result<(), ConfigError>;

    /// Produce up to `count` validated questions.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` for configuration, transport or content failures.
    async fn generate_questions(&self, count: usize) -> Result<Vec<Question>, ProviderError>;

    /// Produce one illustration for a question.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` for configuration, transport or content failures.
    async fn generate_image(&self, question_text: &str) -> Result<ImageRef, ProviderError>;
}
