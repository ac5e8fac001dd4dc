use crate::model::{Question, QuestionBatch, QuestionWithImage, QuizOutcome, SessionId};

/// Number of questions requested for one quiz.
pub const QUIZ_LENGTH: usize = 10;

//
// ─── FAILURES ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    ConfigurationMissing,
    ContentGenerationFailed,
    ImageGenerationFailed,
}

/// What the error screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizFailure {
    kind: FailureKind,
    message: String,
}

impl QuizFailure {
    #[must_use]
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

//
// ─── ROUND ─────────────────────────────────────────────────────────────────────
//

/// Progress through a loaded question batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    questions: QuestionBatch,
    index: usize,
    score: usize,
}

impl Round {
    pub(crate) fn new(questions: QuestionBatch) -> Self {
        Self {
            questions,
            index: 0,
            score: 0,
        }
    }

    /// Zero-based position of the current question.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// One-based position, as shown to the player.
    #[must_use]
    pub fn question_number(&self) -> usize {
        self.index + 1
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    #[must_use]
    pub fn outcome(&self) -> QuizOutcome {
        QuizOutcome::new(self.score, self.total())
    }

    pub(crate) fn record_answer(&mut self, correct: bool) {
        if correct {
            self.score += 1;
        }
    }

    /// Move to the following question, or `None` after the last one.
    pub(crate) fn advance(self) -> Option<Self> {
        let index = self.index + 1;
        if index < self.questions.len() {
            Some(Self { index, ..self })
        } else {
            None
        }
    }
}

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Lifecycle stage of the quiz. Question data only lives in the stages that
/// need it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Start,
    LoadingQuestions,
    LoadingImage(Round),
    Playing {
        round: Round,
        card: QuestionWithImage,
    },
    ShowingAnswer {
        round: Round,
        card: QuestionWithImage,
        selected: String,
    },
    Finished(QuizOutcome),
    Error(QuizFailure),
}

impl Phase {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Start => "start",
            Phase::LoadingQuestions => "loading_questions",
            Phase::LoadingImage(_) => "loading_image",
            Phase::Playing { .. } => "playing",
            Phase::ShowingAnswer { .. } => "showing_answer",
            Phase::Finished(_) => "finished",
            Phase::Error(_) => "error",
        }
    }

    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        match self {
            Phase::LoadingImage(round)
            | Phase::Playing { round, .. }
            | Phase::ShowingAnswer { round, .. } => Some(round),
            Phase::Start | Phase::LoadingQuestions | Phase::Finished(_) | Phase::Error(_) => None,
        }
    }
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Everything the quiz screen renders from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    pub(crate) session: SessionId,
    pub(crate) quiz_length: usize,
    pub(crate) phase: Phase,
}

impl QuizState {
    /// Initial state: the start screen when configuration is usable, the
    /// error screen otherwise.
    #[must_use]
    pub fn new(quiz_length: usize, configuration: Result<(), String>) -> Self {
        let phase = match configuration {
            Ok(()) => Phase::Start,
            Err(message) => Phase::Error(QuizFailure::new(
                FailureKind::ConfigurationMissing,
                message,
            )),
        };
        Self {
            session: SessionId::default(),
            quiz_length: quiz_length.max(1),
            phase,
        }
    }

    #[must_use]
    pub fn session(&self) -> SessionId {
        self.session
    }

    #[must_use]
    pub fn quiz_length(&self) -> usize {
        self.quiz_length
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Correct answers so far (or in total, once finished).
    #[must_use]
    pub fn score(&self) -> usize {
        match &self.phase {
            Phase::Finished(outcome) => outcome.score(),
            phase => phase.round().map_or(0, Round::score),
        }
    }
}

impl Default for QuizState {
    fn default() -> Self {
        Self::new(QUIZ_LENGTH, Ok(()))
    }
}
