use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{ContentProvider, GeminiProvider, QuizRunner};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

struct DesktopApp {
    runner: Arc<QuizRunner>,
}

impl UiApp for DesktopApp {
    fn runner(&self) -> Arc<QuizRunner> {
        Arc::clone(&self.runner)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app");
    eprintln!();
    eprintln!("Environment (a local .env file is read too):");
    eprintln!("  API_KEY or GEMINI_API_KEY   provider key (required)");
    eprintln!("  QUIZ_TEXT_MODEL             question model");
    eprintln!("  QUIZ_IMAGE_MODEL            illustration model");
    eprintln!("  QUIZ_API_BASE_URL           provider endpoint");
    eprintln!("  QUIZ_LENGTH                 questions per quiz (default 10)");
    eprintln!("  RUST_LOG                    log filter (default info)");
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    if let Some(arg) = std::env::args().nth(1) {
        if arg == "--help" || arg == "-h" {
            print_usage();
            return Ok(());
        }
        print_usage();
        return Err(ArgsError::UnknownArg(arg).into());
    }

    let provider = GeminiProvider::from_env();
    let settings = provider.settings();
    info!(
        text_model = %settings.text_model,
        image_model = %settings.image_model,
        quiz_length = settings.quiz_length,
        "starting quiz"
    );
    if let Err(err) = provider.check_configuration() {
        // The UI opens on the error screen; the player can fix the key and retry.
        warn!(error = %err, "provider key missing at launch");
    }

    let quiz_length = settings.quiz_length;
    let runner = Arc::new(QuizRunner::new(Arc::new(provider), quiz_length));
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { runner });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Kid's Bible Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
