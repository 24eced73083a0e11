//! The two document positions compared by the viewer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DocumentSlot {
    Old,
    New,
}

impl DocumentSlot {
    pub const ALL: [DocumentSlot; 2] = [DocumentSlot::Old, DocumentSlot::New];

    /// Multipart field name expected by the comparison endpoint.
    pub fn form_field(self) -> &'static str {
        match self {
            Self::Old => "old_template",
            Self::New => "new_template",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Old => "Old template",
            Self::New => "New template",
        }
    }
}

impl std::fmt::Display for DocumentSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Old => write!(f, "old"),
            Self::New => write!(f, "new"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_fields_match_endpoint() {
        assert_eq!(DocumentSlot::Old.form_field(), "old_template");
        assert_eq!(DocumentSlot::New.form_field(), "new_template");
        assert_eq!(DocumentSlot::ALL, [DocumentSlot::Old, DocumentSlot::New]);
    }
}
