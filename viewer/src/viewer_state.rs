//! Paging, zoom and document state for the side-by-side viewer.

use common::document_slot::DocumentSlot;

use crate::zoom::ZoomLevel;

/// An opened document and its page count.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachedDocument<D> {
    pub handle: D,
    pub page_count: u32,
}

/// Single source of truth for what the viewer renders.
///
/// Holds `1 <= current_page <= total_pages` at all times. Mutation only happens through
/// the methods below, which refuse out-of-range values instead of clamping silently.
#[derive(Debug)]
pub struct ViewerState<D> {
    current_page: u32,
    total_pages: u32,
    zoom: ZoomLevel,
    old_document: Option<AttachedDocument<D>>,
    new_document: Option<AttachedDocument<D>>,
    generation: u64,
}

impl<D> Default for ViewerState<D> {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            zoom: ZoomLevel::default(),
            old_document: None,
            new_document: None,
            generation: 0,
        }
    }
}

impl<D> ViewerState<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to defaults with both documents detached. Bumps the generation so renders
    /// started before the reset can tell they no longer own the surfaces.
    pub fn reset_for_new_comparison(&mut self) {
        let generation = self.generation + 1;
        *self = Self { generation, ..Self::default() };
    }

    pub fn set_page(&mut self, page: u32) -> bool {
        if page < 1 || page > self.total_pages {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn change_page(&mut self, delta: i32) -> bool {
        let Some(page) = self.current_page.checked_add_signed(delta) else {
            return false;
        };
        self.set_page(page)
    }

    pub fn set_zoom(&mut self, factor: f64) -> bool {
        let Some(zoom) = ZoomLevel::from_factor(factor) else {
            return false;
        };
        self.zoom = zoom;
        true
    }

    pub fn zoom_in(&mut self) -> bool {
        let zoom = self.zoom.zoomed_in();
        let changed = zoom != self.zoom;
        self.zoom = zoom;
        changed
    }

    pub fn zoom_out(&mut self) -> bool {
        let zoom = self.zoom.zoomed_out();
        let changed = zoom != self.zoom;
        self.zoom = zoom;
        changed
    }

    /// The viewer pages through as many pages as the longer document has.
    pub fn attach_document(&mut self, slot: DocumentSlot, handle: D, page_count: u32) {
        self.total_pages = self.total_pages.max(page_count);
        let document = Some(AttachedDocument { handle, page_count });
        match slot {
            DocumentSlot::Old => self.old_document = document,
            DocumentSlot::New => self.new_document = document,
        }
    }

    pub fn document(&self, slot: DocumentSlot) -> Option<&AttachedDocument<D>> {
        match slot {
            DocumentSlot::Old => self.old_document.as_ref(),
            DocumentSlot::New => self.new_document.as_ref(),
        }
    }

    pub fn has_documents(&self) -> bool {
        self.old_document.is_some() || self.new_document.is_some()
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    pub fn zoom_factor(&self) -> f64 {
        self.zoom.factor()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
