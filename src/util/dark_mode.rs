//! Theme initialization and toggle.
//!
//! The persisted `"theme"` key in `localStorage` wins; with nothing stored
//! the OS-level `prefers-color-scheme` signal decides. The active theme is
//! a `dark-mode` class on `<body>`, and every toggle writes the new value
//! back so the choice survives reloads.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; non-hydrate
//! paths safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "theme";
#[cfg(feature = "hydrate")]
const BODY_CLASS: &str = "dark-mode";

/// Read the theme preference.
///
/// Returns `true` if `"dark"` was previously persisted, or if the system
/// prefers dark mode and no preference is stored.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match stored_theme(&window) {
            Some(value) => value == "dark",
            None => window
                .match_media("(prefers-color-scheme: dark)")
                .ok()
                .flatten()
                .map_or(false, |mq| mq.matches()),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

#[cfg(feature = "hydrate")]
fn stored_theme(window: &web_sys::Window) -> Option<String> {
    window.local_storage().ok().flatten()?.get_item(STORAGE_KEY).ok().flatten()
}

/// Apply or clear the `dark-mode` class on `<body>`.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let classes = body.class_list();
            let _ = if dark {
                classes.add_1(BODY_CLASS)
            } else {
                classes.remove_1(BODY_CLASS)
            };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

/// Toggle the theme, restyle `<body>`, and persist `"dark"` or `"light"`.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, if next { "dark" } else { "light" });
        }
    }
    next
}
