//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`auth`,
//! `events`) so navigation and theming can evolve independently of wire
//! data. Nothing in here survives a page reload except dark mode, which
//! is persisted separately by `util::dark_mode`.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the sidebar, mobile navigation, and theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    /// Mobile drawer visibility; ignored on wide layouts.
    pub nav_open: bool,
}

impl UiState {
    #[must_use]
    pub fn toggled_nav(self) -> Self {
        Self { nav_open: !self.nav_open, ..self }
    }

    /// Closing an already-closed drawer is a no-op.
    #[must_use]
    pub fn with_nav_closed(self) -> Self {
        Self { nav_open: false, ..self }
    }

    #[must_use]
    pub fn with_dark_mode(self, enabled: bool) -> Self {
        Self { dark_mode: enabled, ..self }
    }
}
