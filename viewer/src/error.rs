//! Error kinds of the comparison viewer.

use common::document_slot::DocumentSlot;
use thiserror::Error;

/// Raised at the file-input boundary. The slot keeps its previous selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("{name} is not a PDF file (content type {content_type:?})")]
    InvalidFileType { name: String, content_type: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Please select both files")]
    MissingSelection,
    #[error("Error processing files: {0}")]
    TransportFailure(String),
    #[error("Error processing files: unreadable server response: {0}")]
    MalformedResponse(String),
    #[error("Error: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("failed to open document: {reason}")]
    OpenFailed { reason: String },
    #[error("failed to fetch page {page}: {reason}")]
    PageFetch { page: u32, reason: String },
    #[error("failed to measure page {page}: {reason}")]
    Viewport { page: u32, reason: String },
    #[error("failed to paint page {page}: {reason}")]
    Paint { page: u32, reason: String },
}

/// A document that could not be opened after a successful comparison.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{slot} document: {error}")]
pub struct OpenFailure {
    pub slot: DocumentSlot,
    pub error: RenderError,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error(transparent)]
    Render(#[from] RenderError),
}
