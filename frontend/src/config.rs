//! Client configuration, fixed at build time.
//!
//! | variable | default |
//! |---|---|
//! | `TEMPLATE_COMPARE_API_BASE` | origin of the page |
//! | `TEMPLATE_COMPARE_PDFJS_SRC` | pdf.js 3.11.174 from cdnjs |
//! | `TEMPLATE_COMPARE_PDFJS_WORKER` | matching worker from cdnjs |
//! | `TEMPLATE_COMPARE_PANEL_GUTTER_PX` | 20 |

use anyhow::{Context, anyhow};
use common::viewer_const::PANEL_GUTTER_PX;

pub const DEFAULT_PDFJS_SRC: &str = "https://cdnjs.cloudflare.com/ajax/libs/pdf.js/3.11.174/pdf.min.js";
pub const DEFAULT_PDFJS_WORKER: &str = "https://cdnjs.cloudflare.com/ajax/libs/pdf.js/3.11.174/pdf.worker.min.js";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Absolute base URL of the comparison service, without trailing slash.
    pub api_base: String,
    pub pdfjs_worker_src: String,
    pub panel_gutter_px: f64,
}

impl ClientConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_base = match option_env!("TEMPLATE_COMPARE_API_BASE") {
            Some(base) => base.to_string(),
            None => window_origin().context("TEMPLATE_COMPARE_API_BASE is unset and the page origin is unknown")?,
        };
        let panel_gutter_px = match option_env!("TEMPLATE_COMPARE_PANEL_GUTTER_PX") {
            Some(raw) => parse_gutter(raw)?,
            None => PANEL_GUTTER_PX,
        };
        Ok(Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            pdfjs_worker_src: option_env!("TEMPLATE_COMPARE_PDFJS_WORKER").unwrap_or(DEFAULT_PDFJS_WORKER).to_string(),
            panel_gutter_px,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

/// Needed by the app shell before any page config exists.
pub fn pdfjs_script_src() -> &'static str {
    option_env!("TEMPLATE_COMPARE_PDFJS_SRC").unwrap_or(DEFAULT_PDFJS_SRC)
}

fn window_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

fn parse_gutter(raw: &str) -> anyhow::Result<f64> {
    let gutter = raw
        .trim()
        .parse::<f64>()
        .with_context(|| format!("TEMPLATE_COMPARE_PANEL_GUTTER_PX={raw:?} is not a number"))?;
    if !gutter.is_finite() || gutter < 0.0 {
        return Err(anyhow!("TEMPLATE_COMPARE_PANEL_GUTTER_PX must be a non-negative number, got {gutter}"));
    }
    Ok(gutter)
}
