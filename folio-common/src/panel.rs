/// Open/closed state of the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelVisibility {
    #[default]
    Closed,
    Open,
}

impl PanelVisibility {
    /// Explicit toggle control
    pub fn toggle(self) -> Self {
        match self {
            PanelVisibility::Closed => PanelVisibility::Open,
            PanelVisibility::Open => PanelVisibility::Closed,
        }
    }

    /// Outside pointer-down. Closing is the only transition.
    pub fn dismiss(self) -> Self {
        PanelVisibility::Closed
    }

    pub fn is_open(self) -> bool {
        self == PanelVisibility::Open
    }
}
