//! [`RenderBackend`] on top of pdf.js.

use bytes::Bytes;
use dioxus::logger::tracing::debug;
use serde::Deserialize;
use viewer::{
    backend::{DocumentOpened, PaintOutcome, RenderBackend, Viewport},
    error::RenderError,
};
use wasm_bindgen::JsValue;

use super::{
    canvas_surface::CanvasSurface,
    js_error_text,
    pdfjs_bindings::{document_page_count, fetch_pdf_page, open_pdf_document, page_viewport, paint_pdf_page},
};

#[derive(Debug, Clone)]
pub struct PdfJsDocument(JsValue);

#[derive(Debug)]
pub struct PdfJsPage {
    page: JsValue,
    number: u32,
}

#[derive(Debug, Deserialize)]
struct JsViewport {
    width: f64,
    height: f64,
}

#[derive(Debug, Clone)]
pub struct PdfJsBackend {
    worker_src: String,
}

impl PdfJsBackend {
    pub fn new(worker_src: impl Into<String>) -> Self {
        Self { worker_src: worker_src.into() }
    }
}

impl RenderBackend for PdfJsBackend {
    type Document = PdfJsDocument;
    type Page = PdfJsPage;
    type Surface = CanvasSurface;

    async fn open_document(&self, bytes: Bytes) -> Result<DocumentOpened<PdfJsDocument>, RenderError> {
        debug!("Opening document of {} bytes", bytes.len());
        let document = open_pdf_document(&bytes, &self.worker_src)
            .await
            .map_err(|e| RenderError::OpenFailed { reason: js_error_text(&e) })?;
        let page_count = document_page_count(&document);
        Ok(DocumentOpened { handle: PdfJsDocument(document), page_count })
    }

    async fn fetch_page(&self, document: &PdfJsDocument, page_number: u32) -> Result<PdfJsPage, RenderError> {
        let page = fetch_pdf_page(&document.0, page_number)
            .await
            .map_err(|e| RenderError::PageFetch { page: page_number, reason: js_error_text(&e) })?;
        Ok(PdfJsPage { page, number: page_number })
    }

    fn viewport(&self, page: &PdfJsPage, scale: f64) -> Result<Viewport, RenderError> {
        let value = page_viewport(&page.page, scale)
            .map_err(|e| RenderError::Viewport { page: page.number, reason: js_error_text(&e) })?;
        let JsViewport { width, height } = serde_wasm_bindgen::from_value(value)
            .map_err(|e| RenderError::Viewport { page: page.number, reason: e.to_string() })?;
        Ok(Viewport { scale, width, height })
    }

    async fn paint(
        &self,
        page: &PdfJsPage,
        surface: &CanvasSurface,
        viewport: Viewport,
    ) -> Result<PaintOutcome, RenderError> {
        let canvas = surface
            .canvas()
            .map_err(|e| RenderError::Paint { page: page.number, reason: format!("{e:#}") })?;
        let painted = paint_pdf_page(&page.page, &canvas, viewport.scale)
            .await
            .map_err(|e| RenderError::Paint { page: page.number, reason: js_error_text(&e) })?;
        if painted.as_bool() == Some(false) {
            debug!("Paint of page {} cancelled", page.number);
            return Ok(PaintOutcome::Cancelled);
        }
        Ok(PaintOutcome::Completed)
    }
}
