//! Seams to the PDF rendering library and the drawing surfaces.

use bytes::Bytes;
use common::document_slot::DocumentSlot;

use crate::error::RenderError;

/// Page dimensions at a given scale, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Whole-pixel size a surface must have before the page is painted into it.
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width.max(0.0).floor() as u32, self.height.max(0.0).floor() as u32)
    }
}

/// How a paint ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintOutcome {
    Completed,
    /// The surface was taken over by a newer paint or a reset before this one finished.
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentOpened<D> {
    pub handle: D,
    pub page_count: u32,
}

/// PDF rendering library: opens raw bytes, fetches pages and paints them.
#[allow(async_fn_in_trait)]
pub trait RenderBackend {
    type Document: Clone;
    type Page;
    type Surface: RenderSurface;

    async fn open_document(&self, bytes: Bytes) -> Result<DocumentOpened<Self::Document>, RenderError>;

    async fn fetch_page(&self, document: &Self::Document, page_number: u32) -> Result<Self::Page, RenderError>;

    fn viewport(&self, page: &Self::Page, scale: f64) -> Result<Viewport, RenderError>;

    async fn paint(
        &self,
        page: &Self::Page,
        surface: &Self::Surface,
        viewport: Viewport,
    ) -> Result<PaintOutcome, RenderError>;
}

/// A drawable target, one per document slot. Holds at most one paint at a time.
pub trait RenderSurface {
    /// Stops the paint in progress, if any; its `paint` call then ends with
    /// [`PaintOutcome::Cancelled`]. Must run before the surface is cleared or resized.
    fn cancel_paint(&self);

    fn clear(&self);

    fn resize(&self, width: u32, height: u32);

    fn set_grid_overlay(&self, enabled: bool);
}

/// One value per document slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotPair<T> {
    pub old: T,
    pub new: T,
}

impl<T> SlotPair<T> {
    pub fn new(old: T, new: T) -> Self {
        Self { old, new }
    }

    pub fn get(&self, slot: DocumentSlot) -> &T {
        match slot {
            DocumentSlot::Old => &self.old,
            DocumentSlot::New => &self.new,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (DocumentSlot, &T)> {
        DocumentSlot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }
}
