use anyhow::{Context, anyhow};
use dioxus::logger::tracing::warn;
use viewer::backend::RenderSurface;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{GRID_OVERLAY_CLASS, js_error_text, pdfjs_bindings::cancel_canvas_render};

/// A `<canvas>` looked up by id on every use, so it survives re-renders of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasSurface {
    canvas_id: &'static str,
}

impl CanvasSurface {
    pub fn new(canvas_id: &'static str) -> Self {
        Self { canvas_id }
    }

    pub fn canvas(&self) -> anyhow::Result<HtmlCanvasElement> {
        let document = web_sys::window().and_then(|w| w.document()).context("no document available")?;
        let element = document
            .get_element_by_id(self.canvas_id)
            .with_context(|| format!("canvas #{} not found", self.canvas_id))?;
        element.dyn_into::<HtmlCanvasElement>().map_err(|_| anyhow!("#{} is not a canvas", self.canvas_id))
    }

    fn context_2d(canvas: &HtmlCanvasElement) -> anyhow::Result<CanvasRenderingContext2d> {
        canvas
            .get_context("2d")
            .map_err(|e| anyhow!("getContext failed: {}", js_error_text(&e)))?
            .context("canvas has no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| anyhow!("unexpected 2d context type"))
    }

    fn try_clear(&self) -> anyhow::Result<()> {
        let canvas = self.canvas()?;
        let context = Self::context_2d(&canvas)?;
        context.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
        Ok(())
    }
}

impl RenderSurface for CanvasSurface {
    fn cancel_paint(&self) {
        match self.canvas() {
            Ok(canvas) => cancel_canvas_render(&canvas),
            Err(e) => warn!("Could not cancel paint: {e:#}"),
        }
    }

    fn clear(&self) {
        if let Err(e) = self.try_clear() {
            warn!("Could not clear #{}: {e:#}", self.canvas_id);
        }
    }

    fn resize(&self, width: u32, height: u32) {
        match self.canvas() {
            Ok(canvas) => {
                canvas.set_width(width);
                canvas.set_height(height);
            }
            Err(e) => warn!("Could not resize: {e:#}"),
        }
    }

    fn set_grid_overlay(&self, enabled: bool) {
        let toggled = self.canvas().and_then(|canvas| {
            canvas
                .class_list()
                .toggle_with_force(GRID_OVERLAY_CLASS, enabled)
                .map_err(|e| anyhow!(js_error_text(&e)))
        });
        if let Err(e) = toggled {
            warn!("Could not toggle grid on #{}: {e:#}", self.canvas_id);
        }
    }
}
