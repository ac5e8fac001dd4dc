//! The quiz state machine: a state container and a pure reducer.

mod event;
mod reduce;
mod state;

pub use event::{Effect, QuizEvent, Transition};
pub use reduce::reduce;
pub use state::{FailureKind, Phase, QUIZ_LENGTH, QuizFailure, QuizState, Round};
