use std::sync::Arc;

use async_trait::async_trait;
use quiz_core::model::{ImageRef, PLACEHOLDER_IMAGE_URL, Question, QuestionBatch};
use quiz_core::{QuizEvent, QuizState, reduce};
use services::{ConfigError, ContentProvider, ProviderError};

use super::test_harness::{ViewHarness, render_screen, setup_view_harness};

struct FakeProvider {
    configured: bool,
}

#[async_trait]
impl ContentProvider for FakeProvider {
    fn check_configuration(&self) -> Result<(), ConfigError> {
        if self.configured {
            Ok(())
        } else {
            Err(ConfigError::MissingCredential {
                vars: vec!["API_KEY", "GEMINI_API_KEY"],
            })
        }
    }

    async fn generate_questions(&self, count: usize) -> Result<Vec<Question>, ProviderError> {
        (0..count).map(|n| question(n).map_err(ProviderError::from)).collect()
    }

    async fn generate_image(&self, _question_text: &str) -> Result<ImageRef, ProviderError> {
        Ok(ImageRef::from_base64("image/png", "iVBORw0KGgo=")?)
    }
}

struct StalledProvider;

#[async_trait]
impl ContentProvider for StalledProvider {
    fn check_configuration(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    async fn generate_questions(&self, _count: usize) -> Result<Vec<Question>, ProviderError> {
        std::future::pending().await
    }

    async fn generate_image(&self, _question_text: &str) -> Result<ImageRef, ProviderError> {
        std::future::pending().await
    }
}

fn question(n: usize) -> Result<Question, quiz_core::model::QuestionError> {
    Question::new(
        format!("Question number {n}?"),
        vec!["Noah".into(), "Moses".into(), "David".into()],
        "Noah",
        "The ark had three decks.",
    )
}

fn apply(state: QuizState, events: impl IntoIterator<Item = QuizEvent>) -> QuizState {
    events
        .into_iter()
        .fold(state, |state, event| reduce(state, event).state)
}

fn playing_state(total: usize) -> QuizState {
    let loading = apply(QuizState::new(total, Ok(())), [QuizEvent::StartRequested]);
    let session = loading.session();
    let batch = QuestionBatch::new((0..total).map(|n| question(n).unwrap()).collect(), total)
        .unwrap();
    apply(
        loading,
        [
            QuizEvent::QuestionsLoaded { session, batch },
            QuizEvent::ImageFailed {
                session,
                index: 0,
                message: "no image".into(),
            },
        ],
    )
}

#[test]
fn start_screen_invites_the_player() {
    let html = render_screen(QuizState::new(10, Ok(())));
    assert!(html.contains("Start Quiz!"), "missing start button in {html}");
}

#[test]
fn missing_configuration_renders_error_screen() {
    let html = render_screen(QuizState::new(10, Err("No API key found.".into())));
    assert!(html.contains("Oops! Something went wrong."), "missing title in {html}");
    assert!(html.contains("No API key found."), "missing message in {html}");
    assert!(html.contains("Try Again"), "missing retry in {html}");
}

#[test]
fn loading_screens_show_progress_text() {
    let loading = apply(QuizState::new(3, Ok(())), [QuizEvent::StartRequested]);
    let html = render_screen(loading.clone());
    assert!(html.contains("Creating your quiz..."), "missing text in {html}");
    assert!(html.contains("Start over"), "missing quit in {html}");

    let session = loading.session();
    let batch = QuestionBatch::new(vec![question(0).unwrap()], 3).unwrap();
    let html = render_screen(apply(
        loading,
        [QuizEvent::QuestionsLoaded { session, batch }],
    ));
    assert!(html.contains("Painting a picture for you..."), "missing text in {html}");
}

#[test]
fn question_card_renders_progress_and_options() {
    let html = render_screen(playing_state(3));
    assert!(html.contains("Question 1 / 3"), "missing progress in {html}");
    assert!(html.contains("Question number 0?"), "missing question in {html}");
    assert!(html.contains("Moses"), "missing option in {html}");
    assert!(html.contains(PLACEHOLDER_IMAGE_URL), "missing placeholder in {html}");
    assert!(!html.contains("Did you know?"), "fun fact shown early in {html}");
}

#[test]
fn answered_card_reveals_fun_fact_and_marks() {
    let state = apply(
        playing_state(3),
        [QuizEvent::OptionSelected {
            option: "Moses".into(),
        }],
    );
    let html = render_screen(state);
    assert!(html.contains("Did you know?"), "missing fun fact title in {html}");
    assert!(html.contains("The ark had three decks."), "missing fun fact in {html}");
    assert!(html.contains("option--wrong"), "missing wrong mark in {html}");
    assert!(html.contains("option--correct"), "missing correct mark in {html}");
    assert!(html.contains("Next"), "missing next in {html}");
}

#[test]
fn results_screen_shows_score_and_headline() {
    let state = apply(
        playing_state(1),
        [
            QuizEvent::OptionSelected {
                option: "Noah".into(),
            },
            QuizEvent::AdvanceRequested,
        ],
    );
    let html = render_screen(state);
    assert!(html.contains("Wow! Perfect Score!"), "missing headline in {html}");
    assert!(html.contains("You answered"), "missing label in {html}");
    assert!(html.contains("100%"), "missing percentage in {html}");
    assert!(html.contains("Play Again!"), "missing play again in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_starts_on_start_screen() {
    let mut harness = setup_view_harness(Arc::new(FakeProvider { configured: true }), 2);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Start Quiz!"), "missing start in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_reports_missing_key_at_launch() {
    let mut harness = setup_view_harness(Arc::new(FakeProvider { configured: false }), 2);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("GEMINI_API_KEY"), "missing key hint in {html}");
    assert!(html.contains("Try Again"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_runs_effects_until_first_question() {
    let mut harness = setup_view_harness(Arc::new(FakeProvider { configured: true }), 2);
    harness.rebuild();

    harness.send(QuizEvent::StartRequested);
    for _ in 0..5 {
        harness.drive_async().await;
    }

    let html = harness.render();
    assert!(html.contains("Question 1 / 2"), "missing first question in {html}");
    assert!(html.contains("data:image/png;base64,"), "missing image in {html}");
}

async fn started_harness(quiz_length: usize) -> ViewHarness {
    let mut harness = setup_view_harness(Arc::new(FakeProvider { configured: true }), quiz_length);
    harness.rebuild();
    harness.send(QuizEvent::StartRequested);
    for _ in 0..5 {
        harness.drive_async().await;
    }
    harness
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_keeps_the_first_pick() {
    let mut harness = started_harness(2).await;

    harness.send(QuizEvent::OptionSelected {
        option: "Moses".into(),
    });
    harness.drive_async().await;
    harness.send(QuizEvent::OptionSelected {
        option: "Noah".into(),
    });
    harness.drive_async().await;

    let html = harness.render();
    assert_eq!(html.matches("option--wrong").count(), 1, "first pick lost in {html}");
    assert_eq!(html.matches("option--correct").count(), 1, "bad marks in {html}");
    assert!(html.contains("Did you know?"), "missing fun fact in {html}");
    assert!(html.contains("The ark had three decks."), "missing fun fact in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_advances_to_a_fresh_card() {
    let mut harness = started_harness(2).await;

    harness.send(QuizEvent::OptionSelected {
        option: "Moses".into(),
    });
    harness.drive_async().await;
    harness.send(QuizEvent::AdvanceRequested);
    for _ in 0..5 {
        harness.drive_async().await;
    }

    let html = harness.render();
    assert!(html.contains("Question 2 / 2"), "missing second question in {html}");
    assert!(!html.contains("Did you know?"), "fun fact carried over in {html}");
    assert!(!html.contains("option--"), "marks carried over in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_quit_while_loading_returns_to_start() {
    let mut harness = setup_view_harness(Arc::new(StalledProvider), 2);
    harness.rebuild();

    harness.send(QuizEvent::StartRequested);
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Creating your quiz..."), "missing loading text in {html}");

    harness.send(QuizEvent::QuitRequested);
    for _ in 0..5 {
        harness.drive_async().await;
    }

    let html = harness.render();
    assert!(html.contains("Start Quiz!"), "missing start in {html}");
    assert!(!html.contains("Creating your quiz..."), "still loading in {html}");
}
