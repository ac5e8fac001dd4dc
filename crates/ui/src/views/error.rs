use dioxus::prelude::*;

use quiz_core::quiz::QuizFailure;

#[component]
pub fn ErrorScreen(failure: QuizFailure, on_retry: EventHandler<()>) -> Element {
    rsx! {
        section { class: "card error-card",
            h2 { class: "error-title", "Oops! Something went wrong." }
            p { class: "error-message", "{failure.message()}" }
            button {
                id: "retry",
                class: "btn btn--primary",
                onclick: move |_| on_retry.call(()),
                "Try Again"
            }
        }
    }
}
