//! The two canvases, side by side.

use common::document_slot::DocumentSlot;
use dioxus::prelude::*;

use super::viewer_toolbar::ViewerToolbar;
use crate::{
    data_definitions::compare_control::CompareControl,
    pdf_render::{canvas_id, panel_id},
};

/// Always mounted, so the canvases exist before the first render of a comparison.
#[component]
pub fn DualPdfViewer() -> Element {
    let control = use_context::<CompareControl>();
    let display = use_memo(move || if control.snapshot.read().has_result { "flex" } else { "none" });

    rsx! {
        div {
            id: "x-dual-viewer",
            style: "
                display: {display};
                flex-direction: column;
                gap: 8px;
                width: 100%;
            ",
            ViewerToolbar {}
            if let Some(error) = control.render_error.read().clone() {
                div {
                    style: "color: darkred; border: 1px solid red; padding: 8px; border-radius: 5px;",
                    "{error}"
                }
            }
            div {
                style: "
                    position: relative;
                    width: 100%;
                    height: 75vh;
                ",
                for slot in DocumentSlot::ALL {
                    PdfPanel { key: "{slot}", slot }
                }
            }
        }
    }
}

#[component]
fn PdfPanel(slot: DocumentSlot) -> Element {
    let control = use_context::<CompareControl>();
    let geometry_style = control.enforcer.geometry(slot).style();

    rsx! {
        div {
            id: panel_id(slot),
            style: "
                {geometry_style}
                box-sizing: border-box;
                background: #E5E7EB;
                border: 1px solid rgba(0, 0, 0, 0.3);
            ",
            div {
                style: "
                    position: sticky;
                    top: 0;
                    padding: 6px 12px;
                    background: white;
                    border-bottom: 1px solid rgba(0, 0, 0, 0.3);
                    font-weight: 500;
                ",
                "{slot.label()}"
            }
            div {
                class: "x-canvas-frame",
                canvas { id: canvas_id(slot), class: "x-pdf-canvas", width: "0", height: "0" }
            }
        }
    }
}
