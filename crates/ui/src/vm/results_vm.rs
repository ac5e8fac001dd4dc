use quiz_core::model::QuizOutcome;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub headline: &'static str,
    pub score: String,
    pub total: String,
    pub percentage: String,
}

impl From<&QuizOutcome> for ResultsVm {
    fn from(outcome: &QuizOutcome) -> Self {
        Self {
            headline: outcome.headline(),
            score: outcome.score().to_string(),
            total: format!("/{}", outcome.total()),
            percentage: format!("{}%", outcome.percentage()),
        }
    }
}
