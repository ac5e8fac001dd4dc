use std::env;

use quiz_core::quiz::QUIZ_LENGTH;

use crate::error::ConfigError;

/// Environment variables checked, in order, for the provider credential.
pub const CREDENTIAL_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-4.0-generate-001";

/// Where the API key comes from.
///
/// `Env` is resolved on every use so a key exported after startup is picked up
/// by the next retry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credential {
    Env(Vec<&'static str>),
    Static(String),
}

impl Credential {
    #[must_use]
    pub fn from_env_vars() -> Self {
        Self::Env(CREDENTIAL_VARS.to_vec())
    }

    /// Resolve the key, treating blank values as absent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingCredential` when no variable holds a key,
    /// and `ConfigError::BlankCredential` for a blank static key.
    pub fn resolve(&self) -> Result<String, ConfigError> {
        match self {
            Credential::Env(vars) => vars
                .iter()
                .filter_map(|var| env::var(var).ok())
                .map(|value| value.trim().to_string())
                .find(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingCredential { vars: vars.clone() }),
            Credential::Static(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
            Credential::Static(_) => Err(ConfigError::BlankCredential),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ProviderSettings {
    pub base_url: String,
    pub text_model: String,
    pub image_model: String,
    pub quiz_length: usize,
    pub credential: Credential,
}

impl ProviderSettings {
    /// Read model names, endpoint and quiz length from the environment.
    ///
    /// Never fails: the credential is checked lazily through `Credential::resolve`.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("QUIZ_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let text_model =
            env::var("QUIZ_TEXT_MODEL").unwrap_or_else(|_| DEFAULT_TEXT_MODEL.into());
        let image_model =
            env::var("QUIZ_IMAGE_MODEL").unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.into());
        let quiz_length = parse_quiz_length(env::var("QUIZ_LENGTH").ok().as_deref());
        Self {
            base_url,
            text_model,
            image_model,
            quiz_length,
            credential: Credential::from_env_vars(),
        }
    }

    #[must_use]
    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = credential;
        self
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            text_model: DEFAULT_TEXT_MODEL.into(),
            image_model: DEFAULT_IMAGE_MODEL.into(),
            quiz_length: QUIZ_LENGTH,
            credential: Credential::from_env_vars(),
        }
    }
}

fn parse_quiz_length(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|length| *length > 0)
        .unwrap_or(QUIZ_LENGTH)
}
