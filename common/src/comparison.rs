//! Response models of the comparison endpoint.

use serde::{Deserialize, Serialize};

use crate::viewer_const::GENERIC_UPLOAD_ERROR;

/// JSON body returned by `POST /upload`.
///
/// Error responses (`400 {"error": ...}`) carry no `success` field, so it defaults to `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UploadResponse {
    pub success: bool,
    pub comparison: Option<ComparisonReport>,
    pub old_text: Option<String>,
    pub new_text: Option<String>,
    pub output_file: Option<String>,
    pub error: Option<String>,
    pub semantic_similarity: Option<f64>,
    pub auto_labels: Option<Vec<AutoLabel>>,
}

impl UploadResponse {
    /// Splits the response into the comparison result or the message to show the user.
    pub fn into_result(self) -> Result<ComparisonResult, String> {
        if !self.success {
            return Err(self.error.unwrap_or_else(|| GENERIC_UPLOAD_ERROR.to_string()));
        }
        Ok(ComparisonResult {
            report: self.comparison.unwrap_or_default(),
            old_text: self.old_text.unwrap_or_default(),
            new_text: self.new_text.unwrap_or_default(),
            output_file: self.output_file.filter(|f| !f.is_empty()),
        })
    }
}

/// A successful comparison, as held by the display layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ComparisonResult {
    pub report: ComparisonReport,
    pub old_text: String,
    pub new_text: String,
    pub output_file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ComparisonReport {
    pub differences: Vec<Difference>,
    pub suggestions: Vec<String>,
    pub confidence: f64,
    pub semantic_similarity: f64,
    pub labels: Vec<AutoLabel>,
    pub ai_analysis: String,
}

impl ComparisonReport {
    pub fn additions(&self) -> usize {
        self.differences.iter().filter(|d| d.kind == DifferenceKind::Added).count()
    }

    pub fn removals(&self) -> usize {
        self.differences.iter().filter(|d| d.kind == DifferenceKind::Removed).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Difference {
    #[serde(default)]
    pub line: u64,
    #[serde(rename = "type")]
    pub kind: DifferenceKind,
    #[serde(default)]
    pub old: String,
    #[serde(default)]
    pub new: String,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifferenceKind {
    Added,
    Removed,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AutoLabel {
    pub line: u64,
    pub label: String,
    pub confidence: f64,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_without_success_is_a_rejection() {
        let response: UploadResponse = serde_json::from_str(r#"{"error": "Both files required"}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.into_result(), Err("Both files required".to_string()));
    }

    #[test]
    fn rejection_without_message_uses_generic_text() {
        let response: UploadResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(response.into_result(), Err(GENERIC_UPLOAD_ERROR.to_string()));
    }

    #[test]
    fn success_body_parses_report() {
        let body = r#"{
            "success": true,
            "output_file": "cmp_123.pdf",
            "old_text": "a",
            "new_text": "b",
            "semantic_similarity": 0.75,
            "comparison": {
                "differences": [
                    {"line": 1, "type": "removed", "old": "a", "new": "", "label": "DELETION"},
                    {"line": 1, "type": "added", "old": "", "new": "b", "label": "ADDITION"},
                    {"line": 2, "type": "added", "old": "", "new": "c", "label": "ADDITION"}
                ],
                "suggestions": ["Consider reviewing major structural changes"],
                "confidence": 0.95,
                "labels": [{"line": 1, "label": "DATE", "confidence": 0.8, "text": "b"}],
                "ai_analysis": "Analysis: Found 2 key changes",
                "extra_field": 3
            }
        }"#;
        let result = serde_json::from_str::<UploadResponse>(body).unwrap().into_result().unwrap();
        assert_eq!(result.output_file.as_deref(), Some("cmp_123.pdf"));
        assert_eq!(result.report.additions(), 2);
        assert_eq!(result.report.removals(), 1);
        assert_eq!(result.report.labels[0].label, "DATE");
        assert_eq!(result.old_text, "a");
    }

    #[test]
    fn success_without_optional_fields_uses_defaults() {
        let result = serde_json::from_str::<UploadResponse>(r#"{"success": true, "output_file": ""}"#)
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(result.output_file, None);
        assert_eq!(result.report, ComparisonReport::default());
        assert!(result.new_text.is_empty());
    }

    #[test]
    fn unknown_difference_kind_is_tolerated() {
        let diff: Difference = serde_json::from_str(r#"{"type": "moved"}"#).unwrap();
        assert_eq!(diff.kind, DifferenceKind::Other);
    }
}
