//! Display selection.

use super::backend::DisplayBackend;

/// Selects the displays a wallpaper operation applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen<H> {
    /// Every display.
    All,
    /// The main display (the one with the menu bar).
    Main,
    /// The display at a 0-based position in the OS order.
    Index(usize),
    /// Exactly these displays.
    Handles(Vec<H>),
}

impl<H> Default for Screen<H> {
    fn default() -> Self { Self::All }
}

impl<H: Clone> Screen<H> {
    /// Resolves the selector to display handles.
    ///
    /// A missing main display or an out of range index resolves to an empty list.
    pub fn resolve<B>(&self, backend: &B) -> Vec<H>
    where B: DisplayBackend<Screen = H> {
        match self {
            Self::All => backend.screens(),
            Self::Main => backend.main_screen().into_iter().collect(),
            Self::Index(index) => backend.screens().into_iter().nth(*index).into_iter().collect(),
            Self::Handles(handles) => handles.clone(),
        }
    }
}
