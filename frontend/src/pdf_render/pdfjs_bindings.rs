use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

#[wasm_bindgen(module = "/pdfjs_bridge.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    pub async fn open_pdf_document(bytes: &[u8], worker_src: &str) -> Result<JsValue, JsValue>;

    pub fn document_page_count(document: &JsValue) -> u32;

    #[wasm_bindgen(catch)]
    pub async fn fetch_pdf_page(document: &JsValue, page_number: u32) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    pub fn page_viewport(page: &JsValue, scale: f64) -> Result<JsValue, JsValue>;

    pub fn cancel_canvas_render(canvas: &HtmlCanvasElement);

    /// Resolves to `false` when the paint was cancelled.
    #[wasm_bindgen(catch)]
    pub async fn paint_pdf_page(page: &JsValue, canvas: &HtmlCanvasElement, scale: f64) -> Result<JsValue, JsValue>;
}
