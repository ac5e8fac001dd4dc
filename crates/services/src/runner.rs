use std::sync::{Arc, Mutex, PoisonError};

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use quiz_core::model::{QuestionBatch, SessionId};
use quiz_core::quiz::{Effect, QuizEvent, QuizState};

use crate::error::{ProviderCall, ProviderError};
use crate::provider::ContentProvider;

/// Performs the effects requested by the quiz reducer.
///
/// Each session owns a cancellation token. Work for a newer session cancels the
/// token of any older one, so a fetch that belongs to an abandoned quiz resolves
/// to no event at all.
pub struct QuizRunner {
    provider: Arc<dyn ContentProvider>,
    quiz_length: usize,
    sessions: Mutex<Sessions>,
}

#[derive(Default)]
struct Sessions {
    active: Option<ActiveSession>,
    /// Highest session cancelled so far; work at or below it never starts.
    retired: Option<SessionId>,
}

struct ActiveSession {
    id: SessionId,
    token: CancellationToken,
}

impl Sessions {
    fn retire(&mut self, session: SessionId) {
        if self.retired.is_none_or(|retired| retired < session) {
            self.retired = Some(session);
        }
    }
}

impl QuizRunner {
    #[must_use]
    pub fn new(provider: Arc<dyn ContentProvider>, quiz_length: usize) -> Self {
        Self {
            provider,
            quiz_length,
            sessions: Mutex::new(Sessions::default()),
        }
    }

    #[must_use]
    pub fn quiz_length(&self) -> usize {
        self.quiz_length
    }

    /// Starting state, with configuration checked up front.
    #[must_use]
    pub fn initial_state(&self) -> QuizState {
        let configuration = self
            .provider
            .check_configuration()
            .map_err(|err| err.to_string());
        if let Err(message) = &configuration {
            warn!(%message, "quiz provider is not configured");
        }
        QuizState::new(self.quiz_length, configuration)
    }

    /// Perform one effect and return the event that reports its result.
    ///
    /// Returns `None` for effects with nothing to report and for work whose
    /// session was cancelled or superseded.
    pub async fn run(&self, effect: Effect) -> Option<QuizEvent> {
        match effect {
            Effect::FetchQuestions { session, count } => {
                let token = self.token_for(session)?;
                let result = tokio::select! {
                    biased;
                    () = token.cancelled() => {
                        debug!(session = %session, "question fetch cancelled");
                        return None;
                    }
                    result = self.provider.generate_questions(count) => result,
                };
                let batch = result.and_then(|questions| {
                    QuestionBatch::new(questions, count).map_err(ProviderError::from)
                });
                Some(match batch {
                    Ok(batch) => QuizEvent::QuestionsLoaded { session, batch },
                    Err(err) => {
                        warn!(session = %session, error = %err, "question fetch failed");
                        QuizEvent::QuestionsFailed {
                            session,
                            kind: err.failure_kind(ProviderCall::Questions),
                            message: err.user_message(ProviderCall::Questions),
                        }
                    }
                })
            }
            Effect::FetchImage {
                session,
                index,
                question_text,
            } => {
                let token = self.token_for(session)?;
                let result = tokio::select! {
                    biased;
                    () = token.cancelled() => {
                        debug!(session = %session, index, "image fetch cancelled");
                        return None;
                    }
                    result = self.provider.generate_image(&question_text) => result,
                };
                Some(match result {
                    Ok(image) => QuizEvent::ImageLoaded {
                        session,
                        index,
                        image,
                    },
                    Err(err) => {
                        warn!(session = %session, index, error = %err, "image fetch failed");
                        QuizEvent::ImageFailed {
                            session,
                            index,
                            message: err.user_message(ProviderCall::Image),
                        }
                    }
                })
            }
            Effect::CheckConfiguration => Some(QuizEvent::ConfigurationChecked(
                self.provider
                    .check_configuration()
                    .map_err(|err| err.to_string()),
            )),
            Effect::CancelSession { session } => {
                self.cancel(session);
                None
            }
        }
    }

    /// Cancel work for `session`, in flight or not yet started.
    pub fn cancel(&self, session: SessionId) {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        sessions.retire(session);
        if let Some(current) = sessions.active.take_if(|current| current.id == session) {
            debug!(session = %session, "cancelling quiz session");
            current.token.cancel();
        }
    }

    /// Cancel whatever is in flight.
    pub fn cancel_all(&self) {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(current) = sessions.active.take() {
            sessions.retire(current.id);
            current.token.cancel();
        }
    }

    /// Token for `session`; `None` when it was cancelled or a newer session
    /// already took over.
    fn token_for(&self, session: SessionId) -> Option<CancellationToken> {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        if sessions.retired.is_some_and(|retired| session <= retired) {
            debug!(session = %session, "dropping work for cancelled session");
            return None;
        }
        match sessions.active.as_ref() {
            Some(current) if current.id == session => return Some(current.token.clone()),
            Some(current) if current.id > session => {
                debug!(session = %session, active = %current.id, "dropping work for stale session");
                return None;
            }
            _ => {}
        }

        if let Some(previous) = sessions.active.take() {
            debug!(session = %previous.id, "superseded by a newer session");
            previous.token.cancel();
        }
        let token = CancellationToken::new();
        sessions.active = Some(ActiveSession {
            id: session,
            token: token.clone(),
        });
        Some(token)
    }
}
