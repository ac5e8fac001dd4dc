mod error;
mod loading;
mod quiz;
mod quiz_card;
mod results;
mod start;

pub use error::ErrorScreen;
pub use loading::LoadingScreen;
pub use quiz::{QuizScreen, QuizView};
pub use quiz_card::QuizCard;
pub use results::ResultsScreen;
pub use start::StartScreen;

#[cfg(test)]
pub(crate) use quiz::QuizTestHandles;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
