use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::image::ImageRef;

/// Number of answer options every question carries.
pub const OPTION_COUNT: usize = 3;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("expected {expected} options, got {actual}")]
    OptionCount { expected: usize, actual: usize },

    #[error("option text cannot be empty")]
    EmptyOption,

    #[error("duplicate option: {0}")]
    DuplicateOption(String),

    #[error("correct answer {0:?} is not one of the options")]
    AnswerNotInOptions(String),

    #[error("fun fact cannot be empty")]
    EmptyFunFact,

    #[error("question batch is empty")]
    EmptyBatch,
}

//
// ─── DRAFT (provider wire shape) ───────────────────────────────────────────────
//

/// A question exactly as the content provider returns it, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub fun_fact: String,
}

impl QuestionDraft {
    /// Trim every field and validate into a `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if any field breaks a question invariant.
    pub fn validate(self) -> Result<Question, QuestionError> {
        Question::new(
            self.question_text.trim(),
            self.options
                .iter()
                .map(|option| option.trim().to_string())
                .collect(),
            self.correct_answer.trim(),
            self.fun_fact.trim(),
        )
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A validated multiple-choice question. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct_answer: String,
    fun_fact: String,
}

impl Question {
    /// Build a question, enforcing the option invariants.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` for blank text, a wrong option count, blank or
    /// duplicate options, or a correct answer that is not an option.
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
        fun_fact: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }

        if options.len() != OPTION_COUNT {
            return Err(QuestionError::OptionCount {
                expected: OPTION_COUNT,
                actual: options.len(),
            });
        }

        let mut seen = HashSet::with_capacity(options.len());
        for option in &options {
            if option.trim().is_empty() {
                return Err(QuestionError::EmptyOption);
            }
            if !seen.insert(option.as_str()) {
                return Err(QuestionError::DuplicateOption(option.clone()));
            }
        }

        let correct_answer = correct_answer.into();
        if !options.contains(&correct_answer) {
            return Err(QuestionError::AnswerNotInOptions(correct_answer));
        }

        let fun_fact = fun_fact.into();
        if fun_fact.trim().is_empty() {
            return Err(QuestionError::EmptyFunFact);
        }

        Ok(Self {
            text,
            options,
            correct_answer,
            fun_fact,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn fun_fact(&self) -> &str {
        &self.fun_fact
    }

    #[must_use]
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|candidate| candidate == option)
    }

    #[must_use]
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_answer == option
    }

    /// Attach the illustration fetched for this question.
    #[must_use]
    pub fn with_image(self, image: ImageRef) -> QuestionWithImage {
        QuestionWithImage {
            question: self,
            image,
        }
    }
}

/// A question paired with its illustration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionWithImage {
    question: Question,
    image: ImageRef,
}

impl QuestionWithImage {
    #[must_use]
    pub fn question(&self) -> &Question {
        &self.question
    }

    #[must_use]
    pub fn image(&self) -> &ImageRef {
        &self.image
    }
}

//
// ─── BATCH ─────────────────────────────────────────────────────────────────────
//

/// Non-empty, ordered list of questions for one quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBatch(Vec<Question>);

impl QuestionBatch {
    /// Keep at most `limit` questions.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyBatch` if nothing is left.
    pub fn new(mut questions: Vec<Question>, limit: usize) -> Result<Self, QuestionError> {
        questions.truncate(limit);
        if questions.is_empty() {
            return Err(QuestionError::EmptyBatch);
        }
        Ok(Self(questions))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.0.iter()
    }
}
