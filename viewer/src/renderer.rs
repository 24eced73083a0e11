//! Paints the current page of both documents into their surfaces.

use common::document_slot::DocumentSlot;
use futures::future::join;
use tracing::{debug, warn};

use crate::{
    backend::{PaintOutcome, RenderBackend, RenderSurface, SlotPair, Viewport},
    error::RenderError,
    viewer_state::AttachedDocument,
    zoom::ZoomLevel,
};

/// Indicator data published once both sides of a page have been painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderReport {
    pub page: u32,
    pub total_pages: u32,
    pub zoom: ZoomLevel,
}

impl RenderReport {
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }

    pub fn zoom_label(&self) -> String {
        format!("{}%", self.zoom.percent())
    }
}

/// What happened to one surface during a render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotRender {
    /// No document in this slot; surface untouched.
    Detached,
    /// The document ends before the requested page; surface cleared.
    Blanked,
    Painted(Viewport),
    /// A reset or a newer render happened while this render was suspended, or took the
    /// surface over mid-paint; surface left alone from then on.
    Abandoned,
}

pub(crate) async fn render_slot<B: RenderBackend>(
    backend: &B,
    surface: &B::Surface,
    document: Option<AttachedDocument<B::Document>>,
    page_number: u32,
    scale: f64,
    is_current: &impl Fn() -> bool,
) -> Result<SlotRender, RenderError> {
    let Some(document) = document else {
        return Ok(SlotRender::Detached);
    };
    if page_number > document.page_count {
        surface.cancel_paint();
        surface.clear();
        return Ok(SlotRender::Blanked);
    }

    let page = backend.fetch_page(&document.handle, page_number).await?;
    if !is_current() {
        return Ok(SlotRender::Abandoned);
    }

    let viewport = backend.viewport(&page, scale)?;
    let (width, height) = viewport.pixel_size();
    surface.cancel_paint();
    surface.clear();
    surface.resize(width, height);
    match backend.paint(&page, surface, viewport).await {
        Ok(PaintOutcome::Completed) => {}
        Ok(PaintOutcome::Cancelled) => return Ok(SlotRender::Abandoned),
        Err(e) if !is_current() => {
            debug!("Ignoring failure of superseded paint: {e}");
            return Ok(SlotRender::Abandoned);
        }
        Err(e) => return Err(e),
    }
    if !is_current() {
        return Ok(SlotRender::Abandoned);
    }
    Ok(SlotRender::Painted(viewport))
}

/// Renders both slots concurrently and waits for both, even when one of them fails.
pub(crate) async fn render_both<B: RenderBackend>(
    backend: &B,
    surfaces: &SlotPair<B::Surface>,
    documents: SlotPair<Option<AttachedDocument<B::Document>>>,
    page_number: u32,
    scale: f64,
    is_current: &impl Fn() -> bool,
) -> Result<SlotPair<SlotRender>, RenderError> {
    let SlotPair { old, new } = documents;
    let (old, new) = join(
        render_slot(backend, &surfaces.old, old, page_number, scale, is_current),
        render_slot(backend, &surfaces.new, new, page_number, scale, is_current),
    )
    .await;

    for (slot, outcome) in [(DocumentSlot::Old, &old), (DocumentSlot::New, &new)] {
        match outcome {
            Ok(render) => debug!("Page {page_number} {slot}: {render:?}"),
            Err(e) => warn!("Page {page_number} {slot}: {e}"),
        }
    }
    Ok(SlotPair::new(old?, new?))
}
