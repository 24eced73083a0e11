//! Commands the UI layer dispatches to the viewer.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerCommand {
    PreviousPage,
    NextPage,
    GoToPage(u32),
    ZoomIn,
    ZoomOut,
    SetZoom(f64),
    ToggleGrid,
}

impl ViewerCommand {
    /// Whether the command needs a re-render when it changes state.
    pub fn renders(self) -> bool {
        !matches!(self, Self::ToggleGrid)
    }
}
