use std::sync::Arc;

use services::QuizRunner;

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn runner(&self) -> Arc<QuizRunner>;
}

#[derive(Clone)]
pub struct AppContext {
    runner: Arc<QuizRunner>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            runner: app.runner(),
        }
    }

    #[must_use]
    pub fn runner(&self) -> Arc<QuizRunner> {
        Arc::clone(&self.runner)
    }
}

// Provided by the composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
