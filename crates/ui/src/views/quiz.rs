use std::sync::Arc;

use dioxus::prelude::*;
use futures::StreamExt;
use futures::future::{FutureExt, LocalBoxFuture};
use futures::stream::FuturesUnordered;
use tracing::debug;

use quiz_core::{Phase, QuizEvent, QuizState, reduce};
use services::QuizRunner;

use super::loading::{IMAGE_LOADING_TEXT, QUESTIONS_LOADING_TEXT};
use super::{ErrorScreen, LoadingScreen, QuizCard, ResultsScreen, StartScreen};
use crate::context::AppContext;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

type PendingEffect = LocalBoxFuture<'static, Option<QuizEvent>>;

/// Owns the quiz state and the loop that applies events to it.
#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let runner = ctx.runner();

    let quiz = use_signal({
        let runner = Arc::clone(&runner);
        move || runner.initial_state()
    });

    let events = use_coroutine({
        let runner = Arc::clone(&runner);
        move |rx: UnboundedReceiver<QuizEvent>| drive_quiz(Arc::clone(&runner), quiz, rx)
    });

    use_drop({
        let runner = Arc::clone(&runner);
        move || runner.cancel_all()
    });

    #[cfg(test)]
    {
        if let Some(handles) = try_consume_context::<QuizTestHandles>() {
            handles.register(events);
        }
    }

    let on_event = use_callback(move |event: QuizEvent| events.send(event));

    rsx! {
        QuizScreen { state: quiz(), on_event }
    }
}

/// Apply every incoming event, and every event produced by a finished effect,
/// to `quiz`. Effects run concurrently inside this one task.
async fn drive_quiz(
    runner: Arc<QuizRunner>,
    mut quiz: Signal<QuizState>,
    mut events: UnboundedReceiver<QuizEvent>,
) {
    let mut pending: FuturesUnordered<PendingEffect> = FuturesUnordered::new();

    loop {
        let event = tokio::select! {
            biased;
            received = events.next() => match received {
                Some(event) => event,
                None => break,
            },
            Some(result) = pending.next(), if !pending.is_empty() => match result {
                Some(event) => event,
                None => continue,
            },
        };

        debug!(event = event.name(), "quiz event");
        let effects = quiz.with_mut(|state| {
            let transition = reduce(std::mem::take(state), event);
            *state = transition.state;
            transition.effects
        });

        for effect in effects {
            let runner = Arc::clone(&runner);
            pending.push(async move { runner.run(effect).await }.boxed_local());
        }
    }
}

/// Pick the screen for the current phase.
#[component]
pub fn QuizScreen(state: QuizState, on_event: EventHandler<QuizEvent>) -> Element {
    let quit = move |()| on_event.call(QuizEvent::QuitRequested);

    match state.phase() {
        Phase::Start => rsx! {
            StartScreen { on_start: move |()| on_event.call(QuizEvent::StartRequested) }
        },
        Phase::LoadingQuestions => rsx! {
            LoadingScreen { text: QUESTIONS_LOADING_TEXT.to_string(), on_quit: quit }
        },
        Phase::LoadingImage(_) => rsx! {
            LoadingScreen { text: IMAGE_LOADING_TEXT.to_string(), on_quit: quit }
        },
        Phase::Playing { round, card } | Phase::ShowingAnswer { round, card, .. } => {
            let answered = match state.phase() {
                Phase::ShowingAnswer { selected, .. } => Some(selected.clone()),
                _ => None,
            };
            let key = format!("{}-{}", state.session(), round.question_number());
            rsx! {
                QuizCard {
                    key: "{key}",
                    card: card.clone(),
                    question_number: round.question_number(),
                    total: round.total(),
                    answered,
                    on_answer: move |option: String| on_event.call(QuizEvent::OptionSelected { option }),
                    on_next: move |()| on_event.call(QuizEvent::AdvanceRequested),
                    on_quit: quit,
                }
            }
        }
        Phase::Finished(outcome) => rsx! {
            ResultsScreen {
                outcome: *outcome,
                on_play_again: move |()| on_event.call(QuizEvent::PlayAgainRequested),
            }
        },
        Phase::Error(failure) => rsx! {
            ErrorScreen {
                failure: failure.clone(),
                on_retry: move |()| on_event.call(QuizEvent::RetryRequested),
            }
        },
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    events: Rc<RefCell<Option<Coroutine<QuizEvent>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, events: Coroutine<QuizEvent>) {
        *self.events.borrow_mut() = Some(events);
    }

    pub(crate) fn send(&self, event: QuizEvent) {
        self.events
            .borrow()
            .as_ref()
            .expect("quiz coroutine registered")
            .send(event);
    }
}
