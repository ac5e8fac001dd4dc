use dioxus::prelude::*;

use quiz_core::model::QuestionWithImage;

use crate::vm::QuizCardVm;

/// One question with its illustration and answer buttons.
///
/// `answered` carries the option the quiz recorded, if any. The card also
/// remembers its own first pick so a second click is ignored even before the
/// recorded answer arrives. Key the card by session and question so that
/// memory starts empty for every question.
#[component]
pub fn QuizCard(
    card: QuestionWithImage,
    question_number: usize,
    total: usize,
    answered: Option<String>,
    on_answer: EventHandler<String>,
    on_next: EventHandler<()>,
    on_quit: EventHandler<()>,
) -> Element {
    let mut picked = use_signal(|| answered.clone());
    let selected = answered.or_else(|| picked());
    let vm = QuizCardVm::new(&card, question_number, total, selected.as_deref());

    rsx! {
        section { class: "card quiz-card",
            p { class: "quiz-progress", "{vm.progress}" }
            div { class: "quiz-image",
                img { src: "{vm.image_src}", alt: "Quiz question illustration" }
            }
            p { class: "quiz-question", "{vm.question_text}" }
            div { class: "quiz-options",
                for option in vm.options {
                    button {
                        key: "{option.label}",
                        class: option.state.class(),
                        disabled: vm.answered,
                        onclick: {
                            let label = option.label.clone();
                            move |_| {
                                if picked.peek().is_some() {
                                    return;
                                }
                                picked.set(Some(label.clone()));
                                on_answer.call(label.clone());
                            }
                        },
                        span { class: "option-label", "{option.label}" }
                        if let Some(mark) = option.state.mark() {
                            span { class: "option-mark", "{mark}" }
                        }
                    }
                }
            }
            if let Some(fact) = vm.fun_fact {
                div { class: "fun-fact",
                    p { class: "fun-fact-title", "Did you know?" }
                    p { "{fact}" }
                }
                button {
                    id: "next-question",
                    class: "btn btn--primary",
                    onclick: move |_| on_next.call(()),
                    "Next"
                }
            }
            button {
                class: "btn btn--link",
                onclick: move |_| on_quit.call(()),
                "Start over"
            }
        }
    }
}
