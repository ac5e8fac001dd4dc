use quiz_core::model::QuestionWithImage;

/// How an option button looks once the player has (or has not) answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Open,
    Correct,
    Wrong,
    Dimmed,
}

impl OptionState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Open => "option",
            Self::Correct => "option option--correct",
            Self::Wrong => "option option--wrong",
            Self::Dimmed => "option option--dimmed",
        }
    }

    #[must_use]
    pub fn mark(self) -> Option<&'static str> {
        match self {
            Self::Correct => Some("✓"),
            Self::Wrong => Some("✗"),
            Self::Open | Self::Dimmed => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub label: String,
    pub state: OptionState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizCardVm {
    pub progress: String,
    pub question_text: String,
    pub image_src: String,
    pub options: Vec<OptionVm>,
    pub answered: bool,
    pub fun_fact: Option<String>,
}

impl QuizCardVm {
    #[must_use]
    pub fn new(
        card: &QuestionWithImage,
        question_number: usize,
        total: usize,
        selected: Option<&str>,
    ) -> Self {
        let question = card.question();
        let options = question
            .options()
            .iter()
            .map(|option| {
                let state = match selected {
                    None => OptionState::Open,
                    Some(_) if question.is_correct(option) => OptionState::Correct,
                    Some(choice) if choice == option => OptionState::Wrong,
                    Some(_) => OptionState::Dimmed,
                };
                OptionVm {
                    label: option.clone(),
                    state,
                }
            })
            .collect();

        Self {
            progress: format!("Question {question_number} / {total}"),
            question_text: question.text().to_string(),
            image_src: card.image().to_src(),
            options,
            answered: selected.is_some(),
            fun_fact: selected.map(|_| question.fun_fact().to_string()),
        }
    }
}
