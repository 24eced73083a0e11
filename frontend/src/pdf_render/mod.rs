//! Browser implementations of the viewer seams: pdf.js rendering, canvases and panel styling.

// wasm-bindgen expands imports into unsafe glue
#[allow(unsafe_code)]
pub(crate) mod pdfjs_bindings;
pub mod pdfjs_backend;
pub mod canvas_surface;
pub mod dom_layout;

use common::document_slot::DocumentSlot;

/// Class toggled on both canvases while the alignment grid is shown.
pub const GRID_OVERLAY_CLASS: &str = "x-grid-overlay";

pub fn canvas_id(slot: DocumentSlot) -> &'static str {
    match slot {
        DocumentSlot::Old => "x-old-pdf-canvas",
        DocumentSlot::New => "x-new-pdf-canvas",
    }
}

pub fn panel_id(slot: DocumentSlot) -> &'static str {
    match slot {
        DocumentSlot::Old => "x-old-pdf-panel",
        DocumentSlot::New => "x-new-pdf-panel",
    }
}

/// Best-effort text of a value thrown from JavaScript.
pub(crate) fn js_error_text(error: &wasm_bindgen::JsValue) -> String {
    error.as_string().unwrap_or_else(|| format!("{error:?}"))
}
