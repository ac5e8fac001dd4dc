use dioxus::prelude::*;

use quiz_core::model::QuizOutcome;

use crate::vm::ResultsVm;

#[component]
pub fn ResultsScreen(outcome: QuizOutcome, on_play_again: EventHandler<()>) -> Element {
    let vm = ResultsVm::from(&outcome);

    rsx! {
        section { class: "card results-card",
            span { class: "trophy", "🏆" }
            h1 { class: "title", "{vm.headline}" }
            p { class: "lead", "You answered" }
            div { class: "score-badge",
                span { class: "score", "{vm.score}" }
                span { class: "score-total", "{vm.total}" }
            }
            p { class: "score-percentage", "{vm.percentage}" }
            p { class: "lead", "You are a Bible superstar!" }
            button {
                id: "play-again",
                class: "btn btn--go",
                onclick: move |_| on_play_again.call(()),
                "Play Again!"
            }
        }
    }
}
