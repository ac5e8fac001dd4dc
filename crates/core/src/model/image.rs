use std::fmt;

use thiserror::Error;
use url::Url;

/// Image shown when illustration generation fails.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://picsum.photos/512/512";

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImageRefError {
    #[error("image reference cannot be empty")]
    Empty,

    #[error("invalid image url: {0}")]
    InvalidUrl(String),

    #[error("image mime type must start with image/")]
    InvalidMimeType,
}

//
// ─── IMAGE REFERENCE ───────────────────────────────────────────────────────────
//

/// Where a question illustration comes from: a remote URL, inline bytes, or
/// the stock placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    Url(Url),
    Data { mime_type: String, base64: String },
    Placeholder,
}

impl ImageRef {
    pub fn from_url(raw: impl AsRef<str>) -> Result<Self, ImageRefError> {
        let s = raw.as_ref().trim();
        if s.is_empty() {
            return Err(ImageRefError::Empty);
        }
        let url = Url::parse(s).map_err(|_| ImageRefError::InvalidUrl(s.to_string()))?;
        Ok(Self::Url(url))
    }

    pub fn from_base64(
        mime_type: impl Into<String>,
        base64: impl Into<String>,
    ) -> Result<Self, ImageRefError> {
        let mime_type = mime_type.into();
        if !mime_type.starts_with("image/") {
            return Err(ImageRefError::InvalidMimeType);
        }
        let base64 = base64.into();
        if base64.trim().is_empty() {
            return Err(ImageRefError::Empty);
        }
        Ok(Self::Data { mime_type, base64 })
    }

    #[must_use]
    pub fn placeholder() -> Self {
        Self::Placeholder
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }

    /// Value suitable for an `<img src>` attribute.
    #[must_use]
    pub fn to_src(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::Data { mime_type, base64 } => write!(f, "data:{mime_type};base64,{base64}"),
            Self::Placeholder => f.write_str(PLACEHOLDER_IMAGE_URL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_renders_as_src() {
        let image = ImageRef::from_base64("image/jpeg", "AAAA").unwrap();
        assert_eq!(image.to_src(), "data:image/jpeg;base64,AAAA");
        assert!(!image.is_placeholder());
    }

    #[test]
    fn placeholder_is_the_fixed_url() {
        let image = ImageRef::placeholder();
        assert!(image.is_placeholder());
        assert_eq!(image.to_src(), PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn rejects_empty_and_non_image_inputs() {
        assert_eq!(ImageRef::from_url("  "), Err(ImageRefError::Empty));
        assert_eq!(
            ImageRef::from_base64("text/plain", "AAAA"),
            Err(ImageRefError::InvalidMimeType)
        );
        assert!(matches!(
            ImageRef::from_url("not a url"),
            Err(ImageRefError::InvalidUrl(_))
        ));
    }
}
