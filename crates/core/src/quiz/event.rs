use crate::model::{ImageRef, QuestionBatch, SessionId};

use super::state::{FailureKind, QuizState};

/// Everything that can happen to a quiz: player input and provider results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    StartRequested,
    QuestionsLoaded {
        session: SessionId,
        batch: QuestionBatch,
    },
    QuestionsFailed {
        session: SessionId,
        kind: FailureKind,
        message: String,
    },
    ImageLoaded {
        session: SessionId,
        index: usize,
        image: ImageRef,
    },
    ImageFailed {
        session: SessionId,
        index: usize,
        message: String,
    },
    OptionSelected {
        option: String,
    },
    AdvanceRequested,
    PlayAgainRequested,
    QuitRequested,
    RetryRequested,
    ConfigurationChecked(Result<(), String>),
}

impl QuizEvent {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            QuizEvent::StartRequested => "start_requested",
            QuizEvent::QuestionsLoaded { .. } => "questions_loaded",
            QuizEvent::QuestionsFailed { .. } => "questions_failed",
            QuizEvent::ImageLoaded { .. } => "image_loaded",
            QuizEvent::ImageFailed { .. } => "image_failed",
            QuizEvent::OptionSelected { .. } => "option_selected",
            QuizEvent::AdvanceRequested => "advance_requested",
            QuizEvent::PlayAgainRequested => "play_again_requested",
            QuizEvent::QuitRequested => "quit_requested",
            QuizEvent::RetryRequested => "retry_requested",
            QuizEvent::ConfigurationChecked(_) => "configuration_checked",
        }
    }

    /// Session a provider result belongs to; `None` for player input.
    #[must_use]
    pub fn session(&self) -> Option<SessionId> {
        match self {
            QuizEvent::QuestionsLoaded { session, .. }
            | QuizEvent::QuestionsFailed { session, .. }
            | QuizEvent::ImageLoaded { session, .. }
            | QuizEvent::ImageFailed { session, .. } => Some(*session),
            _ => None,
        }
    }
}

/// Side effects requested by the reducer. Performed elsewhere; each provider
/// effect answers with exactly one event unless its session was cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchQuestions {
        session: SessionId,
        count: usize,
    },
    FetchImage {
        session: SessionId,
        index: usize,
        question_text: String,
    },
    CheckConfiguration,
    CancelSession {
        session: SessionId,
    },
}

/// Result of feeding one event to the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: QuizState,
    pub effects: Vec<Effect>,
}

impl Transition {
    #[must_use]
    pub fn new(state: QuizState, effects: Vec<Effect>) -> Self {
        Self { state, effects }
    }

    #[must_use]
    pub fn without_effects(state: QuizState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }
}
