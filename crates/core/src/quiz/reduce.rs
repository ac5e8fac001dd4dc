use tracing::{debug, info, warn};

use crate::model::{ImageRef, SessionId};

use super::event::{Effect, QuizEvent, Transition};
use super::state::{FailureKind, Phase, QuizFailure, QuizState, Round};

/// Apply one event to the quiz.
///
/// Pure: side effects are returned as `Effect`s for the caller to perform.
/// Events that do not fit the current phase, and provider results from another
/// session or question, leave the state untouched.
#[must_use]
pub fn reduce(state: QuizState, event: QuizEvent) -> Transition {
    let QuizState {
        session,
        quiz_length,
        phase,
    } = state;

    match (phase, event) {
        (Phase::Start, QuizEvent::StartRequested)
        | (Phase::Finished(_), QuizEvent::PlayAgainRequested) => {
            begin_session(session, quiz_length)
        }

        (Phase::LoadingQuestions, QuizEvent::QuestionsLoaded { session: from, batch })
            if from == session =>
        {
            info!(session = %session, questions = batch.len(), "quiz questions loaded");
            load_image(session, quiz_length, Round::new(batch))
        }

        (
            Phase::LoadingQuestions,
            QuizEvent::QuestionsFailed {
                session: from,
                kind,
                message,
            },
        ) if from == session =>
        {
            warn!(session = %session, %message, "quiz question generation failed");
            fail(
                session,
                quiz_length,
                QuizFailure::new(kind, message),
            )
        }

        (
            Phase::LoadingImage(round),
            QuizEvent::ImageLoaded {
                session: from,
                index,
                image,
            },
        ) if from == session && index == round.index() => {
            show_question(session, quiz_length, round, image)
        }

        (
            Phase::LoadingImage(round),
            QuizEvent::ImageFailed {
                session: from,
                index,
                message,
            },
        ) if from == session && index == round.index() => {
            warn!(
                session = %session,
                index,
                %message,
                "question image failed, using placeholder"
            );
            show_question(session, quiz_length, round, ImageRef::placeholder())
        }

        (Phase::Playing { mut round, card }, QuizEvent::OptionSelected { option })
            if card.question().has_option(&option) =>
        {
            let correct = card.question().is_correct(&option);
            round.record_answer(correct);
            debug!(session = %session, index = round.index(), correct, "answer recorded");
            Transition::without_effects(QuizState {
                session,
                quiz_length,
                phase: Phase::ShowingAnswer {
                    round,
                    card,
                    selected: option,
                },
            })
        }

        (Phase::ShowingAnswer { round, .. }, QuizEvent::AdvanceRequested) => {
            let outcome = round.outcome();
            match round.advance() {
                Some(next) => load_image(session, quiz_length, next),
                None => {
                    info!(
                        session = %session,
                        score = outcome.score(),
                        total = outcome.total(),
                        "quiz finished"
                    );
                    Transition::without_effects(QuizState {
                        session,
                        quiz_length,
                        phase: Phase::Finished(outcome),
                    })
                }
            }
        }

        (
            Phase::LoadingQuestions
            | Phase::LoadingImage(_)
            | Phase::Playing { .. }
            | Phase::ShowingAnswer { .. },
            QuizEvent::QuitRequested,
        ) => {
            info!(session = %session, "quiz abandoned");
            Transition::new(
                QuizState {
                    session,
                    quiz_length,
                    phase: Phase::Start,
                },
                vec![Effect::CancelSession { session }],
            )
        }

        (phase @ Phase::Error(_), QuizEvent::RetryRequested) => Transition::new(
            QuizState {
                session,
                quiz_length,
                phase,
            },
            vec![Effect::CheckConfiguration],
        ),

        (Phase::Error(_), QuizEvent::ConfigurationChecked(result)) => match result {
            Ok(()) => Transition::without_effects(QuizState {
                session,
                quiz_length,
                phase: Phase::Start,
            }),
            Err(message) => fail(
                session,
                quiz_length,
                QuizFailure::new(FailureKind::ConfigurationMissing, message),
            ),
        },

        (phase, event) => {
            debug!(
                session = %session,
                phase = phase.name(),
                event = event.name(),
                from_session = ?event.session(),
                "ignoring quiz event"
            );
            Transition::without_effects(QuizState {
                session,
                quiz_length,
                phase,
            })
        }
    }
}

fn begin_session(previous: SessionId, quiz_length: usize) -> Transition {
    let session = previous.next();
    info!(session = %session, count = quiz_length, "starting quiz session");
    Transition::new(
        QuizState {
            session,
            quiz_length,
            phase: Phase::LoadingQuestions,
        },
        vec![Effect::FetchQuestions {
            session,
            count: quiz_length,
        }],
    )
}

fn load_image(session: SessionId, quiz_length: usize, round: Round) -> Transition {
    let Some(question) = round.current_question() else {
        return fail(
            session,
            quiz_length,
            QuizFailure::new(
                FailureKind::ContentGenerationFailed,
                "The quiz ran out of questions.",
            ),
        );
    };
    let effect = Effect::FetchImage {
        session,
        index: round.index(),
        question_text: question.text().to_string(),
    };
    Transition::new(
        QuizState {
            session,
            quiz_length,
            phase: Phase::LoadingImage(round),
        },
        vec![effect],
    )
}

fn show_question(
    session: SessionId,
    quiz_length: usize,
    round: Round,
    image: ImageRef,
) -> Transition {
    let Some(question) = round.current_question().cloned() else {
        return fail(
            session,
            quiz_length,
            QuizFailure::new(
                FailureKind::ImageGenerationFailed,
                "The quiz ran out of questions.",
            ),
        );
    };
    Transition::without_effects(QuizState {
        session,
        quiz_length,
        phase: Phase::Playing {
            card: question.with_image(image),
            round,
        },
    })
}

fn fail(session: SessionId, quiz_length: usize, failure: QuizFailure) -> Transition {
    Transition::without_effects(QuizState {
        session,
        quiz_length,
        phase: Phase::Error(failure),
    })
}
