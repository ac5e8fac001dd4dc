use dioxus::prelude::*;

#[component]
pub fn StartScreen(on_start: EventHandler<()>) -> Element {
    rsx! {
        section { class: "card start-card",
            span { class: "star star--top", "★" }
            span { class: "star star--bottom", "★" }
            h1 { class: "title", "Kid's Bible Quiz" }
            p { class: "lead", "Let's see how much you know about the Bible. Are you ready?" }
            button {
                id: "start-quiz",
                class: "btn btn--go",
                onclick: move |_| on_start.call(()),
                "Start Quiz!"
            }
        }
    }
}
