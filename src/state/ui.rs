#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the theme preference.
///
/// Provided as an `RwSignal` context by [`crate::app::App`]; initialized
/// from localStorage on mount and flipped by the theme toggle button.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    /// True when the dark theme is active. Defaults to light.
    pub dark_mode: bool,
}
