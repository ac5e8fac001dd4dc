use thiserror::Error;

use crate::model::{ImageRefError, QuestionError};

/// Any validation failure raised by this crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Image(#[from] ImageRefError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;

    fn build() -> Result<Question, Error> {
        Ok(Question::new("", Vec::new(), "", "")?)
    }

    #[test]
    fn validation_errors_convert_transparently() {
        let err = build().unwrap_err();
        assert!(matches!(err, Error::Question(QuestionError::EmptyText)));
        assert_eq!(err.to_string(), QuestionError::EmptyText.to_string());
    }
}
