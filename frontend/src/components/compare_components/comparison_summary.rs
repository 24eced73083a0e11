//! Counts and similarity of the last comparison.

use dioxus::prelude::*;

use crate::data_definitions::compare_control::CompareControl;

#[component]
pub fn ComparisonSummary() -> Element {
    let control = use_context::<CompareControl>();
    let report = use_memo(move || control.snapshot.read().report.clone());

    let Some(report) = report() else {
        return rsx! {};
    };
    let similarity = format!("{:.1}%", report.semantic_similarity * 100.0);
    let confidence = format!("{:.1}%", report.confidence * 100.0);

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                width: 100%;
            ",
            div {
                style: "display: flex; flex-direction: row; gap: 16px; flex-wrap: wrap;",
                SummaryStat { label: "Additions", value: report.additions().to_string(), color: "#15803D" }
                SummaryStat { label: "Removals", value: report.removals().to_string(), color: "#B91C1C" }
                SummaryStat { label: "Suggestions", value: report.suggestions.len().to_string(), color: "#4F46E5" }
                SummaryStat { label: "Similarity", value: similarity, color: "#0F172A" }
                SummaryStat { label: "Confidence", value: confidence, color: "#0F172A" }
            }
            if !report.suggestions.is_empty() {
                ul {
                    style: "margin: 0; padding-left: 20px; color: rgba(0,0,0,0.8);",
                    for (i, suggestion) in report.suggestions.iter().enumerate() {
                        li { key: "{i}", "{suggestion}" }
                    }
                }
            }
            if !report.ai_analysis.is_empty() {
                p {
                    style: "margin: 0; white-space: pre-wrap; color: rgba(0,0,0,0.8);",
                    "{report.ai_analysis}"
                }
            }
        }
    }
}

#[component]
fn SummaryStat(label: String, value: String, color: String) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                min-width: 120px;
                padding: 12px 16px;
                background: white;
                border: 1px solid rgba(0, 0, 0, 0.15);
                border-radius: 10px;
            ",
            span { style: "font-size: 28px; font-weight: 600; color: {color};", "{value}" }
            span { style: "font-size: 13px; color: rgba(0,0,0,0.6);", "{label}" }
        }
    }
}
