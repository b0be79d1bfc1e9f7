//! Theme initialization.
//!
//! Reads the user's preference from `localStorage` and applies the
//! `.dark` class to the `<html>` element so themed styles and asset
//! selection agree. Requires a browser environment; on the server the
//! theme stays at its default.

use crate::state::ui::Theme;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "lumen_theme";

/// Read the theme preference from localStorage.
///
/// Returns `Theme::Dark` if the user previously chose dark, or if the
/// system prefers dark mode and no preference is stored.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::Light;
        };

        // Check localStorage first.
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                return if val == "dark" { Theme::Dark } else { Theme::Light };
            }
        }

        // Fall back to system preference.
        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches());
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Apply or remove the `.dark` class on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                match theme {
                    Theme::Dark => {
                        let _ = class_list.add_1("dark");
                    }
                    Theme::Light => {
                        let _ = class_list.remove_1("dark");
                    }
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
