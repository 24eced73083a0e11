//! Small helpers around `window` that the rest of the UI calls fire-and-forget.

use dioxus::logger::tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::pdf_render::js_error_text;

pub fn show_alert(message: &str) {
    let Some(window) = web_sys::window() else { return };
    if let Err(e) = window.alert_with_message(message) {
        warn!("alert failed: {}", js_error_text(&e));
    }
}

pub fn navigate_to(href: &str) {
    let Some(window) = web_sys::window() else { return };
    if let Err(e) = window.location().set_href(href) {
        warn!("navigation to {href} failed: {}", js_error_text(&e));
    }
}

/// Empties a file input so the same file can be picked again.
pub fn clear_file_input(input_id: &str) {
    let input = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(input_id))
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok());
    match input {
        Some(input) => input.set_value(""),
        None => warn!("file input #{input_id} not found"),
    }
}
