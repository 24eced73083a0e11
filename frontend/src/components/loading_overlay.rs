use dioxus::prelude::*;

/// Full-screen veil shown while a comparison is running.
#[component]
pub fn LoadingOverlay(message: String) -> Element {
    rsx! {
        div {
            class: "x-loading-overlay",
            div {
                style: "display: flex; flex-direction: column; align-items: center; gap: 12px;",
                div { class: "x-spinner" }
                LoadingIndicator { message }
            }
        }
    }
}

#[component]
pub fn LoadingIndicator(message: String) -> Element {
    rsx! {
        div {
            style: "color:black; background: white; font-size: 26px; border: 1px solid black; padding: 10px; border-radius: 5px; margin: 15px;",
            "{message}"
        }
    }
}
