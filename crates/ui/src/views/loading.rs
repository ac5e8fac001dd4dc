use dioxus::prelude::*;

pub const QUESTIONS_LOADING_TEXT: &str = "Creating your quiz...";
pub const IMAGE_LOADING_TEXT: &str = "Painting a picture for you...";

#[component]
pub fn LoadingScreen(text: String, on_quit: EventHandler<()>) -> Element {
    rsx! {
        section { class: "card loading-card",
            div { class: "spinner" }
            p { class: "loading-text", "{text}" }
            button {
                class: "btn btn--link",
                onclick: move |_| on_quit.call(()),
                "Start over"
            }
        }
    }
}
