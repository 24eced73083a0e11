//! Constants shared by the viewer core and the frontend.

pub const ZOOM_MIN: f64 = 0.5;
pub const ZOOM_MAX: f64 = 3.0;
pub const ZOOM_STEP: f64 = 0.25;
pub const ZOOM_DEFAULT: f64 = 1.5;

pub const PDF_MIME_TYPE: &str = "application/pdf";

pub const UPLOAD_PATH: &str = "/upload";
pub const DOWNLOAD_PATH_PREFIX: &str = "/download/";

/// Horizontal gap between the two document panels.
pub const PANEL_GUTTER_PX: f64 = 20.0;

pub const GENERIC_UPLOAD_ERROR: &str = "Unknown error";
