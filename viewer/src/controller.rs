//! The comparison controller: owns every piece of viewer state and the command interface.

use std::cell::{Cell, RefCell};

use common::{comparison::ComparisonResult, document_slot::DocumentSlot, download_format::DownloadFormat};
use futures::future::join;
use tracing::{debug, info, warn};

use crate::{
    backend::{DocumentOpened, RenderBackend, RenderSurface, SlotPair},
    command::ViewerCommand,
    error::{CompareError, OpenFailure, RenderError, SelectionError},
    layout::{LayoutEnforcer, PanelLayout},
    renderer::{RenderReport, SlotRender, render_both},
    selection::SelectedFile,
    snapshot::ControllerSnapshot,
    upload::{ComparisonClient, SubmittedComparison, UploadCoordinator},
    viewer_state::ViewerState,
};

/// Result of opening and first-rendering the documents of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonLoad {
    /// Indicator of the first page, if anything could be rendered.
    pub report: Option<RenderReport>,
    pub open_failures: Vec<OpenFailure>,
    /// A newer comparison started while the documents were being opened.
    pub superseded: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompareOutcome {
    /// A submission was already in flight.
    Ignored,
    Loaded(ComparisonLoad),
}

/// Single owner of the selections, the viewer state, the comparison result and the
/// shared grid flag. Everything runs on one event loop, so interior mutability is used
/// instead of locks; no borrow is held across an await point.
pub struct ComparisonController<B: RenderBackend, C, L> {
    backend: B,
    surfaces: SlotPair<B::Surface>,
    layout: L,
    enforcer: LayoutEnforcer,
    upload: UploadCoordinator<C>,
    state: RefCell<ViewerState<B::Document>>,
    result: RefCell<Option<ComparisonResult>>,
    download_format: Cell<Option<DownloadFormat>>,
    grid_enabled: Cell<bool>,
    latest_sequence: Cell<u64>,
    last_render: Cell<Option<RenderReport>>,
}

impl<B, C, L> ComparisonController<B, C, L>
where
    B: RenderBackend,
    C: ComparisonClient,
    L: PanelLayout,
{
    pub fn new(backend: B, client: C, surfaces: SlotPair<B::Surface>, layout: L) -> Self {
        Self {
            backend,
            surfaces,
            layout,
            enforcer: LayoutEnforcer::default(),
            upload: UploadCoordinator::new(client),
            state: RefCell::new(ViewerState::new()),
            result: RefCell::new(None),
            download_format: Cell::new(None),
            grid_enabled: Cell::new(false),
            latest_sequence: Cell::new(0),
            last_render: Cell::new(None),
        }
    }

    pub fn with_layout_enforcer(mut self, enforcer: LayoutEnforcer) -> Self {
        self.enforcer = enforcer;
        self
    }

    pub fn select_file(&self, slot: DocumentSlot, candidate: SelectedFile) -> Result<(), SelectionError> {
        self.upload.select_file(slot, candidate)
    }

    pub fn can_compare(&self) -> bool {
        self.upload.can_submit()
    }

    /// Submits both selections and, on success, loads the returned comparison.
    /// Upload failures leave the viewer exactly as it was.
    pub async fn compare(&self) -> Result<CompareOutcome, CompareError> {
        let Some(submitted) = self.upload.submit_comparison().await? else {
            return Ok(CompareOutcome::Ignored);
        };
        let load = self.load_comparison(submitted).await?;
        Ok(CompareOutcome::Loaded(load))
    }

    /// Resets the viewer, opens both submitted documents concurrently and renders page 1
    /// once both opens have settled.
    pub async fn load_comparison(&self, submitted: SubmittedComparison) -> Result<ComparisonLoad, RenderError> {
        let SubmittedComparison { result, old, new } = submitted;
        *self.result.borrow_mut() = Some(result);

        let generation = {
            let mut state = self.state.borrow_mut();
            state.reset_for_new_comparison();
            state.generation()
        };
        self.last_render.set(None);
        // surfaces are detached before new documents open
        for (_, surface) in self.surfaces.iter() {
            surface.cancel_paint();
            surface.clear();
            surface.resize(0, 0);
        }

        let (old_opened, new_opened) =
            join(self.backend.open_document(old.bytes()), self.backend.open_document(new.bytes())).await;

        if self.state.borrow().generation() != generation {
            debug!("Comparison superseded while opening documents");
            return Ok(ComparisonLoad { report: None, open_failures: Vec::new(), superseded: true });
        }

        let mut open_failures = Vec::new();
        {
            let mut state = self.state.borrow_mut();
            for (slot, opened) in [(DocumentSlot::Old, old_opened), (DocumentSlot::New, new_opened)] {
                match opened {
                    Ok(DocumentOpened { handle, page_count }) => {
                        info!("Opened {slot} document with {page_count} pages");
                        state.attach_document(slot, handle, page_count);
                    }
                    Err(error) => {
                        warn!("Could not open {slot} document: {error}");
                        open_failures.push(OpenFailure { slot, error });
                    }
                }
            }
        }

        let page = self.state.borrow().current_page();
        let report = self.render_page(page).await?;
        Ok(ComparisonLoad { report, open_failures, superseded: false })
    }

    /// Paints `page_number` of both documents. The indicator and layout are only updated
    /// after both sides finished, and only if no reset or newer render happened meanwhile.
    pub async fn render_page(&self, page_number: u32) -> Result<Option<RenderReport>, RenderError> {
        let (documents, scale, generation, total_pages, zoom) = {
            let state = self.state.borrow();
            if !state.has_documents() {
                debug!("No document attached, skipping render of page {page_number}");
                return Ok(None);
            }
            let documents = SlotPair::new(
                state.document(DocumentSlot::Old).cloned(),
                state.document(DocumentSlot::New).cloned(),
            );
            (documents, state.zoom_factor(), state.generation(), state.total_pages(), state.zoom())
        };
        let sequence = self.latest_sequence.get() + 1;
        self.latest_sequence.set(sequence);

        let is_current =
            || self.state.borrow().generation() == generation && self.latest_sequence.get() == sequence;
        let rendered = render_both(&self.backend, &self.surfaces, documents, page_number, scale, &is_current).await?;

        if !is_current() || rendered.old == SlotRender::Abandoned || rendered.new == SlotRender::Abandoned {
            debug!("Render of page {page_number} superseded");
            return Ok(None);
        }

        let report = RenderReport { page: page_number, total_pages, zoom };
        self.last_render.set(Some(report));
        self.enforcer.enforce(&self.layout);
        Ok(Some(report))
    }

    /// Entry point for the UI layer.
    pub async fn dispatch(&self, command: ViewerCommand) -> Result<Option<RenderReport>, RenderError> {
        if !command.renders() {
            self.toggle_grid();
            return Ok(None);
        }
        let page = {
            let mut state = self.state.borrow_mut();
            if !state.has_documents() {
                debug!("Ignoring {command:?}: no document attached");
                return Ok(None);
            }
            let changed = match command {
                ViewerCommand::PreviousPage => state.change_page(-1),
                ViewerCommand::NextPage => state.change_page(1),
                ViewerCommand::GoToPage(page) => state.set_page(page),
                ViewerCommand::ZoomIn => state.zoom_in(),
                ViewerCommand::ZoomOut => state.zoom_out(),
                ViewerCommand::SetZoom(factor) => state.set_zoom(factor),
                ViewerCommand::ToggleGrid => false,
            };
            if !changed {
                return Ok(None);
            }
            state.current_page()
        };
        self.render_page(page).await
    }

    pub fn toggle_grid(&self) -> bool {
        let enabled = !self.grid_enabled.get();
        self.grid_enabled.set(enabled);
        for (_, surface) in self.surfaces.iter() {
            surface.set_grid_overlay(enabled);
        }
        enabled
    }

    pub fn set_download_format(&self, format: Option<DownloadFormat>) {
        self.download_format.set(format);
    }

    /// Where to navigate for the artifact, once both an output file and a format are known.
    pub fn download_href(&self) -> Option<String> {
        let format = self.download_format.get()?;
        let result = self.result.borrow();
        let output_file = result.as_ref()?.output_file.as_deref()?;
        Some(format.download_path(output_file))
    }

    pub fn comparison_result(&self) -> Option<ComparisonResult> {
        self.result.borrow().clone()
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&ViewerState<B::Document>) -> R) -> R {
        f(&self.state.borrow())
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        let state = self.state.borrow();
        let result = self.result.borrow();
        let output_file = result.as_ref().and_then(|r| r.output_file.clone());
        let download_format = self.download_format.get();
        let has_documents = state.has_documents();
        let page = state.current_page();
        ControllerSnapshot {
            old_file: self.upload.selected(DocumentSlot::Old).map(|f| f.summary()),
            new_file: self.upload.selected(DocumentSlot::New).map(|f| f.summary()),
            can_compare: self.upload.can_submit(),
            in_flight: self.upload.is_in_flight(),
            has_result: result.is_some(),
            has_documents,
            last_render: self.last_render.get(),
            can_go_previous: has_documents && page > 1,
            can_go_next: has_documents && page < state.total_pages(),
            can_zoom_in: has_documents && !state.zoom().is_max(),
            can_zoom_out: has_documents && !state.zoom().is_min(),
            grid_enabled: self.grid_enabled.get(),
            report: result.as_ref().map(|r| r.report.clone()),
            can_download: output_file.is_some() && download_format.is_some(),
            output_file,
            download_format,
        }
    }
}
