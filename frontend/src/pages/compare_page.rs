use dioxus::prelude::*;

use crate::components::compare_components::{
    compare_bar::CompareBar, comparison_summary::ComparisonSummary, download_bar::DownloadBar,
    dual_pdf_viewer::DualPdfViewer,
};
use crate::components::error_boundary::{ComponentErrorDisplay, SectionErrorBoundary};
use crate::config::ClientConfig;
use crate::data_definitions::compare_control::use_compare_control;

/// Compare page
#[component]
pub fn ComparePage() -> Element {
    let config = use_hook(|| ClientConfig::from_env().map_err(|e| format!("{e:#}")));

    rsx! {
        document::Title { "Template Compare" }
        match config {
            Ok(config) => rsx! { CompareWorkspace { config } },
            Err(error_txt) => rsx! {
                ComponentErrorDisplay { title: "Configuration error", error_txt }
            },
        }
    }
}

#[component]
fn CompareWorkspace(config: ClientConfig) -> Element {
    let control = use_compare_control(config);
    use_context_provider(move || control);

    rsx! {
        div {
            id: "x-compare-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                min-height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
            ",

            div {
                style: "
                    color: #0F172A;
                    font-size: 40px;
                    font-weight: 500;
                    letter-spacing: -0.02em;
                ",
                "Compare "
                span { style: "color:#4F46E5;", "Templates" }
            }

            SectionErrorBoundary { section: "Upload", CompareBar {} }
            SectionErrorBoundary {
                section: "Summary",
                div {
                    style: "display: flex; flex-direction: row; gap: 20px; align-items: flex-start; justify-content: space-between; flex-wrap: wrap;",
                    ComparisonSummary {}
                    DownloadBar {}
                }
            }
            SectionErrorBoundary { section: "Viewer", DualPdfViewer {} }
        }
    }
}
