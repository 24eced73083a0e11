use anyhow::{Context, anyhow};
use common::document_slot::DocumentSlot;
use dioxus::logger::tracing::warn;
use viewer::layout::{PanelGeometry, PanelLayout};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::{js_error_text, panel_id};

/// Writes panel geometry straight into the inline style of the panel elements.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DomPanelLayout;

impl DomPanelLayout {
    fn try_apply(&self, slot: DocumentSlot, geometry: &PanelGeometry) -> anyhow::Result<()> {
        let id = panel_id(slot);
        let document = web_sys::window().and_then(|w| w.document()).context("no document available")?;
        let panel = document
            .get_element_by_id(id)
            .with_context(|| format!("panel #{id} not found"))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| anyhow!("#{id} is not an html element"))?;
        let style = panel.style();
        for (name, value) in geometry.style_declarations() {
            style
                .set_property(name, &value)
                .map_err(|e| anyhow!("{name}: {}", js_error_text(&e)))?;
        }
        Ok(())
    }
}

impl PanelLayout for DomPanelLayout {
    fn apply_geometry(&self, slot: DocumentSlot, geometry: &PanelGeometry) {
        if let Err(e) = self.try_apply(slot, geometry) {
            warn!("Layout of {slot} panel: {e:#}");
        }
    }
}
