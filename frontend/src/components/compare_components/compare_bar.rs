//! Both upload areas plus the compare button.

use common::document_slot::DocumentSlot;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdCompareArrows};

use super::file_picker::TemplateFilePicker;
use crate::{components::loading_overlay::LoadingOverlay, data_definitions::compare_control::CompareControl};

#[component]
pub fn CompareBar() -> Element {
    let control = use_context::<CompareControl>();
    let disabled = use_memo(move || {
        let snapshot = control.snapshot.read();
        !snapshot.can_compare || snapshot.in_flight || *control.loading.read()
    });
    let button_background = use_memo(move || if disabled() { "rgba(79,70,229,0.35)" } else { "#4F46E5" });
    let button_cursor = use_memo(move || if disabled() { "not-allowed" } else { "pointer" });

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                width: 100%;
            ",
            div {
                style: "display: flex; flex-direction: row; gap: 20px; width: 100%;",
                for slot in DocumentSlot::ALL {
                    TemplateFilePicker { key: "{slot}", slot }
                }
            }
            div {
                style: "display: flex; justify-content: center;",
                button {
                    disabled: disabled(),
                    style: "
                        display: inline-flex;
                        align-items: center;
                        gap: 8px;
                        padding: 10px 24px;
                        font-size: 16px;
                        color: white;
                        background: {button_background};
                        border: none;
                        border-radius: 8px;
                        cursor: {button_cursor};
                    ",
                    onclick: move |_| {
                        if !disabled() {
                            dioxus::logger::tracing::info!("Compare templates");
                            control.compare.call(());
                        }
                    },
                    Icon { icon: MdCompareArrows, style: "width: 22px; height: 22px;" }
                    "Compare Templates"
                }
            }
            if *control.loading.read() {
                LoadingOverlay { message: "Comparing templates..." }
            }
        }
    }
}
