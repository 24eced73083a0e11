//! Context shared by the components of the compare page.

use std::rc::Rc;

use common::{document_slot::DocumentSlot, download_format::DownloadFormat};
use dioxus::{
    logger::tracing::{debug, error, info, warn},
    prelude::*,
};
use viewer::{
    backend::SlotPair,
    command::ViewerCommand,
    controller::{CompareOutcome, ComparisonController},
    error::CompareError,
    layout::LayoutEnforcer,
    selection::SelectedFile,
    snapshot::ControllerSnapshot,
};

use crate::{
    api::compare_api::HttpComparisonClient,
    browser::{clear_file_input, navigate_to, show_alert},
    config::ClientConfig,
    pdf_render::{canvas_id, canvas_surface::CanvasSurface, dom_layout::DomPanelLayout, pdfjs_backend::PdfJsBackend},
};

pub type BrowserController = ComparisonController<PdfJsBackend, HttpComparisonClient, DomPanelLayout>;

pub const INVALID_FILE_MESSAGE: &str = "Please select a PDF file";

/// Alert text when the browser fails to hand over the bytes of a picked file.
pub fn unreadable_file_message(name: &str) -> String {
    format!("Could not read {name}. Please select the file again.")
}

pub fn file_input_id(slot: DocumentSlot) -> &'static str {
    match slot {
        DocumentSlot::Old => "x-old-template-input",
        DocumentSlot::New => "x-new-template-input",
    }
}

pub fn build_controller(config: &ClientConfig) -> BrowserController {
    let surfaces = SlotPair::new(
        CanvasSurface::new(canvas_id(DocumentSlot::Old)),
        CanvasSurface::new(canvas_id(DocumentSlot::New)),
    );
    ComparisonController::new(
        PdfJsBackend::new(config.pdfjs_worker_src.clone()),
        HttpComparisonClient::new(config),
        surfaces,
        DomPanelLayout,
    )
    .with_layout_enforcer(LayoutEnforcer::new(config.panel_gutter_px))
}

#[derive(Clone, Copy, PartialEq)]
pub struct CompareControl {
    pub snapshot: ReadSignal<ControllerSnapshot>,
    /// A comparison request is being sent or its documents are loading.
    pub loading: ReadSignal<bool>,
    /// Last render or open failure, shown above the viewer.
    pub render_error: ReadSignal<Option<String>>,
    pub enforcer: LayoutEnforcer,
    pub select_file: Callback<(DocumentSlot, SelectedFile)>,
    pub compare: Callback<()>,
    pub dispatch: Callback<ViewerCommand>,
    pub set_download_format: Callback<Option<DownloadFormat>>,
    pub download: Callback<()>,
}

/// Creates the controller for this page and provides [`CompareControl`] to its children.
pub fn use_compare_control(config: ClientConfig) -> CompareControl {
    let controller = use_hook({
        let config = config.clone();
        move || Rc::new(build_controller(&config))
    });
    let mut snapshot = use_signal({
        let controller = controller.clone();
        move || controller.snapshot()
    });
    let mut loading = use_signal(|| false);
    let mut render_error = use_signal(|| None::<String>);

    let select_file = use_callback({
        let controller = controller.clone();
        move |(slot, file): (DocumentSlot, SelectedFile)| {
            if let Err(e) = controller.select_file(slot, file) {
                warn!("Rejected {slot} selection: {e}");
                show_alert(INVALID_FILE_MESSAGE);
                clear_file_input(file_input_id(slot));
            }
            snapshot.set(controller.snapshot());
        }
    });

    let compare = use_callback({
        let controller = controller.clone();
        move |_: ()| {
            let controller = controller.clone();
            spawn(async move {
                loading.set(true);
                let outcome = controller.compare().await;
                loading.set(false);
                match outcome {
                    Ok(CompareOutcome::Ignored) => debug!("Comparison already in flight"),
                    Ok(CompareOutcome::Loaded(load)) => {
                        let failures = load.open_failures.iter().map(|f| f.to_string()).collect::<Vec<_>>();
                        render_error.set((!failures.is_empty()).then(|| failures.join("; ")));
                    }
                    Err(CompareError::Upload(e)) => {
                        error!("Comparison failed: {e}");
                        show_alert(&e.to_string());
                    }
                    Err(CompareError::Render(e)) => {
                        error!("First render failed: {e}");
                        render_error.set(Some(e.to_string()));
                    }
                }
                snapshot.set(controller.snapshot());
            });
        }
    });

    let dispatch = use_callback({
        let controller = controller.clone();
        move |command: ViewerCommand| {
            let controller = controller.clone();
            spawn(async move {
                match controller.dispatch(command).await {
                    Ok(Some(report)) => {
                        info!("{command:?}: {} at {}", report.page_label(), report.zoom_label());
                        render_error.set(None);
                    }
                    Ok(None) => {}
                    Err(e) => {
                        error!("{command:?} failed: {e}");
                        render_error.set(Some(e.to_string()));
                    }
                }
                snapshot.set(controller.snapshot());
            });
        }
    });

    let set_download_format = use_callback({
        let controller = controller.clone();
        move |format: Option<DownloadFormat>| {
            controller.set_download_format(format);
            snapshot.set(controller.snapshot());
        }
    });

    let download = use_callback({
        let controller = controller.clone();
        let config = config.clone();
        move |_: ()| match controller.download_href() {
            Some(href) => navigate_to(&config.url(&href)),
            None => warn!("Download requested without output file or format"),
        }
    });

    CompareControl {
        snapshot: snapshot.into(),
        loading: loading.into(),
        render_error: render_error.into(),
        enforcer: LayoutEnforcer::new(config.panel_gutter_px),
        select_file,
        compare,
        dispatch,
        set_download_format,
        download,
    }
}
