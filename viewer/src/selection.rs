//! File selections for the old and new template slots.

use bytes::Bytes;
use common::{document_slot::DocumentSlot, viewer_const::PDF_MIME_TYPE};

use crate::error::SelectionError;

/// A file the user picked, with its contents already read.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    name: String,
    content_type: String,
    bytes: Bytes,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self { name: name.into(), content_type: content_type.into(), bytes: bytes.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn bytes(&self) -> Bytes {
        self.bytes.clone()
    }

    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_pdf(&self) -> bool {
        self.content_type == PDF_MIME_TYPE
    }

    pub fn size_label(&self) -> String {
        format!("Size: {:.2} MB", self.size_bytes() as f64 / 1024.0 / 1024.0)
    }

    pub fn summary(&self) -> FileSummary {
        FileSummary { name: self.name.clone(), size_label: self.size_label() }
    }
}

/// What the file picker shows once a slot holds a valid file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSummary {
    pub name: String,
    pub size_label: String,
}

#[derive(Debug, Default)]
pub struct FileSelections {
    old: Option<SelectedFile>,
    new: Option<SelectedFile>,
}

impl FileSelections {
    /// Stores `candidate` if it is a PDF. A rejected candidate leaves the slot untouched.
    pub fn select_file(&mut self, slot: DocumentSlot, candidate: SelectedFile) -> Result<(), SelectionError> {
        if !candidate.is_pdf() {
            return Err(SelectionError::InvalidFileType {
                name: candidate.name,
                content_type: candidate.content_type,
            });
        }
        match slot {
            DocumentSlot::Old => self.old = Some(candidate),
            DocumentSlot::New => self.new = Some(candidate),
        }
        Ok(())
    }

    pub fn get(&self, slot: DocumentSlot) -> Option<&SelectedFile> {
        match slot {
            DocumentSlot::Old => self.old.as_ref(),
            DocumentSlot::New => self.new.as_ref(),
        }
    }

    pub fn both_selected(&self) -> bool {
        self.old.is_some() && self.new.is_some()
    }

    /// `(old, new)` when both slots are filled.
    pub fn pair(&self) -> Option<(SelectedFile, SelectedFile)> {
        Some((self.old.clone()?, self.new.clone()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(name: &str) -> SelectedFile {
        SelectedFile::new(name, PDF_MIME_TYPE, vec![0_u8; 16])
    }

    #[test]
    fn rejects_non_pdf_and_keeps_previous() {
        let mut selections = FileSelections::default();
        selections.select_file(DocumentSlot::Old, pdf("old.pdf")).unwrap();

        let err = selections
            .select_file(DocumentSlot::Old, SelectedFile::new("notes.txt", "text/plain", "hi"))
            .unwrap_err();

        assert_eq!(
            err,
            SelectionError::InvalidFileType { name: "notes.txt".into(), content_type: "text/plain".into() }
        );
        assert_eq!(selections.get(DocumentSlot::Old).map(SelectedFile::name), Some("old.pdf"));
        assert!(!selections.both_selected());
    }

    #[test]
    fn missing_content_type_is_rejected() {
        let mut selections = FileSelections::default();
        assert!(selections.select_file(DocumentSlot::New, SelectedFile::new("a.pdf", "", "x")).is_err());
        assert!(selections.get(DocumentSlot::New).is_none());
    }

    #[test]
    fn both_selected_needs_both_slots() {
        let mut selections = FileSelections::default();
        selections.select_file(DocumentSlot::New, pdf("new.pdf")).unwrap();
        assert!(!selections.both_selected());
        assert!(selections.pair().is_none());
        selections.select_file(DocumentSlot::Old, pdf("old.pdf")).unwrap();
        assert!(selections.both_selected());
        let (old, new) = selections.pair().unwrap();
        assert_eq!((old.name(), new.name()), ("old.pdf", "new.pdf"));
    }

    #[test]
    fn size_label_uses_megabytes() {
        let file = SelectedFile::new("big.pdf", PDF_MIME_TYPE, vec![0_u8; 1024 * 1024 * 3 / 2]);
        assert_eq!(file.size_label(), "Size: 1.50 MB");
        assert_eq!(file.size_bytes(), 1_572_864);
    }
}
