/// Which pane receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Drawer,
    #[default]
    Page,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    Navigate(String),
    NavigateBack,
    ToggleGroup(String),

    // Drawer
    ToggleDrawer,
    CloseDrawer,
    SwitchFocus,

    // Page
    PageScrolled(usize),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    CycleIconTheme,

    // App control
    Quit,
    None,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    Help,
    Logs,
}
