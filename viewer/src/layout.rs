//! Fixed side-by-side geometry for the two document panels.

use common::{document_slot::DocumentSlot, viewer_const::PANEL_GUTTER_PX};

/// CSS placement of one panel inside the viewer row.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelGeometry {
    pub left: String,
    pub width: String,
}

impl PanelGeometry {
    /// Declarations to apply to the panel element, in order.
    pub fn style_declarations(&self) -> [(&'static str, String); 6] {
        [
            ("position", "absolute".to_string()),
            ("top", "0".to_string()),
            ("height", "100%".to_string()),
            ("left", self.left.clone()),
            ("width", self.width.clone()),
            ("overflow", "auto".to_string()),
        ]
    }

    pub fn style(&self) -> String {
        self.style_declarations()
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Where panel geometry gets applied.
pub trait PanelLayout {
    fn apply_geometry(&self, slot: DocumentSlot, geometry: &PanelGeometry);
}

/// Pins the panels back to two equal columns after surfaces were resized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEnforcer {
    gutter_px: f64,
}

impl Default for LayoutEnforcer {
    fn default() -> Self {
        Self::new(PANEL_GUTTER_PX)
    }
}

impl LayoutEnforcer {
    pub fn new(gutter_px: f64) -> Self {
        Self { gutter_px: gutter_px.max(0.0) }
    }

    pub fn geometry(&self, slot: DocumentSlot) -> PanelGeometry {
        let half_gutter = self.gutter_px / 2.0;
        let width = format!("calc(50% - {half_gutter}px)");
        let left = match slot {
            DocumentSlot::Old => "0".to_string(),
            DocumentSlot::New => format!("calc(50% + {half_gutter}px)"),
        };
        PanelGeometry { left, width }
    }

    pub fn enforce<L: PanelLayout>(&self, target: &L) {
        for slot in DocumentSlot::ALL {
            target.apply_geometry(slot, &self.geometry(slot));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeLayout;

    #[test]
    fn columns_are_equal_halves_split_by_gutter() {
        let enforcer = LayoutEnforcer::new(20.0);
        let old = enforcer.geometry(DocumentSlot::Old);
        let new = enforcer.geometry(DocumentSlot::New);
        assert_eq!(old.width, "calc(50% - 10px)");
        assert_eq!(old.width, new.width);
        assert_eq!(old.left, "0");
        assert_eq!(new.left, "calc(50% + 10px)");
    }

    #[test]
    fn style_string_pins_full_height() {
        let style = LayoutEnforcer::new(8.0).geometry(DocumentSlot::New).style();
        assert_eq!(
            style,
            "position: absolute; top: 0; height: 100%; left: calc(50% + 4px); width: calc(50% - 4px); overflow: auto;"
        );
    }

    #[test]
    fn enforce_applies_both_panels() {
        let layout = FakeLayout::default();
        LayoutEnforcer::default().enforce(&layout);
        let applied = layout.applied();
        assert_eq!(applied.len(), 2);
        assert_eq!(applied[0].0, DocumentSlot::Old);
        assert_eq!(applied[1].0, DocumentSlot::New);
    }
}
