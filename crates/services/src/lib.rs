#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod provider;
pub mod runner;

pub use config::{Credential, ProviderSettings};
pub use error::{ConfigError, ProviderCall, ProviderError};
pub use provider::{ContentProvider, GeminiProvider};
pub use runner::QuizRunner;
