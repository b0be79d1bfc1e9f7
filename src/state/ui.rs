#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Visual theme, read from `localStorage` at startup and provided via
/// context. The login page uses it to pick the logo and illustration
/// assets; the `dark` class on `<html>` handles the rest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn logo_asset(self) -> &'static str {
        match self {
            Self::Light => "/assets/image/logo-light.png",
            Self::Dark => "/assets/image/logo-dark.png",
        }
    }

    pub fn illustration_asset(self) -> &'static str {
        match self {
            Self::Light => "/assets/image/auth/designer.gif",
            Self::Dark => "/assets/image/auth/designer-dark.gif",
        }
    }
}

/// UI state shared via context.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
}
