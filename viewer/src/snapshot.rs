//! Read-only view of the controller for the UI layer.

use common::{comparison::ComparisonReport, download_format::DownloadFormat};

use crate::{renderer::RenderReport, selection::FileSummary};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ControllerSnapshot {
    pub old_file: Option<FileSummary>,
    pub new_file: Option<FileSummary>,
    pub can_compare: bool,
    pub in_flight: bool,
    pub has_result: bool,
    pub has_documents: bool,
    /// Last render that completed on both sides; drives the page and zoom indicators.
    pub last_render: Option<RenderReport>,
    /// Button states come from the viewer state, not from `last_render`.
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub can_zoom_in: bool,
    pub can_zoom_out: bool,
    pub grid_enabled: bool,
    pub report: Option<ComparisonReport>,
    pub output_file: Option<String>,
    pub download_format: Option<DownloadFormat>,
    pub can_download: bool,
}

impl ControllerSnapshot {
    pub fn page_label(&self) -> String {
        self.last_render.map(|r| r.page_label()).unwrap_or_else(|| "Page - of -".to_string())
    }

    pub fn zoom_label(&self) -> String {
        self.last_render.map(|r| r.zoom_label()).unwrap_or_else(|| "-".to_string())
    }
}
