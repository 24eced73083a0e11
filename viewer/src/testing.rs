//! Recording fakes for the backend, surfaces, layout target and HTTP client.

use std::{
    cell::{Cell, RefCell},
    collections::{HashMap, HashSet},
    rc::Rc,
};

use bytes::Bytes;
use common::{comparison::UploadResponse, document_slot::DocumentSlot, viewer_const::PDF_MIME_TYPE};
use futures::channel::oneshot;

use crate::{
    backend::{DocumentOpened, PaintOutcome, RenderBackend, RenderSurface, Viewport},
    error::{RenderError, UploadError},
    layout::{PanelGeometry, PanelLayout},
    selection::SelectedFile,
    upload::ComparisonClient,
};

/// A "PDF" whose bytes are `name:page_count`, understood by [`FakeBackend`].
pub fn pdf_file(name: &str, pages: u32) -> SelectedFile {
    SelectedFile::new(format!("{name}.pdf"), PDF_MIME_TYPE, format!("{name}:{pages}"))
}

#[derive(Debug, Clone, PartialEq)]
pub struct FakeDocument {
    pub name: String,
    pub page_count: u32,
    pub fail_paint: bool,
    pub fail_viewport: bool,
}

impl FakeDocument {
    pub fn new(name: &str, page_count: u32) -> Self {
        Self { name: name.to_string(), page_count, fail_paint: false, fail_viewport: false }
    }

    pub fn failing_paint(mut self) -> Self {
        self.fail_paint = true;
        self
    }

    pub fn failing_viewport(mut self) -> Self {
        self.fail_viewport = true;
        self
    }
}

#[derive(Debug)]
pub struct FakePage {
    document: FakeDocument,
    number: u32,
}

type Gates<K> = Rc<RefCell<HashMap<K, oneshot::Receiver<()>>>>;

fn gate<K: std::hash::Hash + Eq>(gates: &Gates<K>, key: K) -> oneshot::Sender<()> {
    let (tx, rx) = oneshot::channel();
    gates.borrow_mut().insert(key, rx);
    tx
}

async fn pass<K: std::hash::Hash + Eq>(gates: &Gates<K>, key: &K) {
    let gate = gates.borrow_mut().remove(key);
    if let Some(gate) = gate {
        let _ = gate.await;
    }
}

/// Pages are 100x150 at scale 1. Opens, page fetches and paints can be held until
/// released. Like pdf.js, a paint is refused while another one runs on the same surface.
#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    open_gates: Gates<String>,
    fetch_gates: Gates<(String, u32)>,
    paint_gates: Gates<(String, u32)>,
    failing_paints: Rc<RefCell<HashSet<String>>>,
    opened: Rc<Cell<usize>>,
}

impl FakeBackend {
    /// Holds opening document `name` until the returned sender fires.
    pub fn hold_open(&self, name: &str) -> oneshot::Sender<()> {
        gate(&self.open_gates, name.to_string())
    }

    /// Holds the fetch of `page` of document `name` until the returned sender fires.
    pub fn hold_fetch(&self, name: &str, page: u32) -> oneshot::Sender<()> {
        gate(&self.fetch_gates, (name.to_string(), page))
    }

    /// Holds the paint of `page` of document `name`, with the surface busy, until the
    /// returned sender fires.
    pub fn hold_paint(&self, name: &str, page: u32) -> oneshot::Sender<()> {
        gate(&self.paint_gates, (name.to_string(), page))
    }

    /// Every later paint of document `name` fails.
    pub fn fail_paints_of(&self, name: &str) {
        self.failing_paints.borrow_mut().insert(name.to_string());
    }

    pub fn opened(&self) -> usize {
        self.opened.get()
    }
}

impl RenderBackend for FakeBackend {
    type Document = FakeDocument;
    type Page = FakePage;
    type Surface = FakeSurface;

    async fn open_document(&self, bytes: Bytes) -> Result<DocumentOpened<FakeDocument>, RenderError> {
        let text = String::from_utf8_lossy(&bytes).to_string();
        let parsed = text.split_once(':').and_then(|(name, pages)| Some((name.to_string(), pages.parse::<u32>().ok()?)));
        let Some((name, page_count)) = parsed else {
            return Err(RenderError::OpenFailed { reason: "not a PDF".into() });
        };
        pass(&self.open_gates, &name).await;
        self.opened.set(self.opened.get() + 1);
        Ok(DocumentOpened { handle: FakeDocument::new(&name, page_count), page_count })
    }

    async fn fetch_page(&self, document: &FakeDocument, page_number: u32) -> Result<FakePage, RenderError> {
        pass(&self.fetch_gates, &(document.name.clone(), page_number)).await;
        Ok(FakePage { document: document.clone(), number: page_number })
    }

    fn viewport(&self, page: &FakePage, scale: f64) -> Result<Viewport, RenderError> {
        if page.document.fail_viewport {
            return Err(RenderError::Viewport { page: page.number, reason: "no viewport".into() });
        }
        Ok(Viewport { scale, width: 100.0 * scale, height: 150.0 * scale })
    }

    async fn paint(
        &self,
        page: &FakePage,
        surface: &FakeSurface,
        _viewport: Viewport,
    ) -> Result<PaintOutcome, RenderError> {
        let name = &page.document.name;
        if page.document.fail_paint || self.failing_paints.borrow().contains(name) {
            return Err(RenderError::Paint { page: page.number, reason: "paint refused".into() });
        }
        let Some(ticket) = surface.begin_paint() else {
            return Err(RenderError::Paint {
                page: page.number,
                reason: "Cannot use the same canvas during multiple render() operations".into(),
            });
        };
        pass(&self.paint_gates, &(name.clone(), page.number)).await;
        if !surface.finish_paint(ticket) {
            return Ok(PaintOutcome::Cancelled);
        }
        surface.record(SurfaceEvent::Paint(name.clone(), page.number));
        Ok(PaintOutcome::Completed)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// A paint in progress was cancelled.
    Cancel,
    Clear,
    Resize(u32, u32),
    Paint(String, u32),
    Grid(bool),
}

#[derive(Debug, Default)]
pub struct FakeSurface {
    events: RefCell<Vec<SurfaceEvent>>,
    /// Ticket of the paint in progress.
    painting: Cell<Option<u64>>,
    tickets: Cell<u64>,
}

impl FakeSurface {
    fn begin_paint(&self) -> Option<u64> {
        if self.painting.get().is_some() {
            return None;
        }
        let ticket = self.tickets.get() + 1;
        self.tickets.set(ticket);
        self.painting.set(Some(ticket));
        Some(ticket)
    }

    /// False when the paint was cancelled in the meantime.
    fn finish_paint(&self, ticket: u64) -> bool {
        if self.painting.get() != Some(ticket) {
            return false;
        }
        self.painting.set(None);
        true
    }

    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.borrow().clone()
    }

    pub fn forget(&self) {
        self.events.borrow_mut().clear();
    }

    fn record(&self, event: SurfaceEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl RenderSurface for FakeSurface {
    fn cancel_paint(&self) {
        if self.painting.take().is_some() {
            self.record(SurfaceEvent::Cancel);
        }
    }

    fn clear(&self) {
        self.record(SurfaceEvent::Clear);
    }

    fn resize(&self, width: u32, height: u32) {
        self.record(SurfaceEvent::Resize(width, height));
    }

    fn set_grid_overlay(&self, enabled: bool) {
        self.record(SurfaceEvent::Grid(enabled));
    }
}

#[derive(Debug, Default)]
pub struct FakeLayout {
    applied: RefCell<Vec<(DocumentSlot, PanelGeometry)>>,
}

impl FakeLayout {
    pub fn applied(&self) -> Vec<(DocumentSlot, PanelGeometry)> {
        self.applied.borrow().clone()
    }
}

impl PanelLayout for FakeLayout {
    fn apply_geometry(&self, slot: DocumentSlot, geometry: &PanelGeometry) {
        self.applied.borrow_mut().push((slot, geometry.clone()));
    }
}

/// Answers every submission with a preset response. Clones share state.
#[derive(Debug, Clone)]
pub struct FakeClient {
    response: Rc<RefCell<Result<UploadResponse, UploadError>>>,
    calls: Rc<Cell<usize>>,
    last_sent: Rc<RefCell<Option<(String, String)>>>,
    hold: Rc<RefCell<Option<oneshot::Receiver<()>>>>,
}

impl FakeClient {
    fn with_response(response: Result<UploadResponse, UploadError>) -> Self {
        Self {
            response: Rc::new(RefCell::new(response)),
            calls: Rc::default(),
            last_sent: Rc::default(),
            hold: Rc::default(),
        }
    }

    pub fn succeeding(output_file: &str) -> Self {
        Self::with_response(Ok(success_response(output_file)))
    }

    pub fn rejecting(error: Option<&str>) -> Self {
        Self::with_response(Ok(rejection_response(error)))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_response(Err(UploadError::TransportFailure(message.to_string())))
    }

    pub fn set_response(&self, response: Result<UploadResponse, UploadError>) {
        *self.response.borrow_mut() = response;
    }

    /// Holds the next submission until the returned sender fires.
    pub fn hold_next(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.hold.borrow_mut() = Some(rx);
        tx
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_sent(&self) -> Option<(String, String)> {
        self.last_sent.borrow().clone()
    }
}

pub fn success_response(output_file: &str) -> UploadResponse {
    UploadResponse { success: true, output_file: Some(output_file.to_string()), ..Default::default() }
}

pub fn rejection_response(error: Option<&str>) -> UploadResponse {
    UploadResponse { success: false, error: error.map(str::to_string), ..Default::default() }
}

impl ComparisonClient for FakeClient {
    async fn submit(&self, old: &SelectedFile, new: &SelectedFile) -> Result<UploadResponse, UploadError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_sent.borrow_mut() = Some((old.name().to_string(), new.name().to_string()));
        let hold = self.hold.borrow_mut().take();
        if let Some(hold) = hold {
            let _ = hold.await;
        }
        self.response.borrow().clone()
    }
}
