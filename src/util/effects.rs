//! Transient animation helpers shared by buttons, cards, and form chrome.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

use leptos::prelude::*;

/// Lifetime of a click ripple before it is detached.
pub const RIPPLE_MS: u32 = 600;
/// Lifetime of a transient shake applied to a rejected form.
pub const SHAKE_MS: u32 = 500;
/// Per-card delay step for staggered entry animation.
pub const STAGGER_STEP_S: f64 = 0.1;

/// CSS `animation-delay` value for the card at `index`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn stagger_delay(index: usize) -> String {
    format!("{:.1}s", index as f64 * STAGGER_STEP_S)
}

/// Offset of a click within the element it hit, from viewport coordinates.
#[must_use]
pub fn click_offset(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> (f64, f64) {
    (client_x - rect_left, client_y - rect_top)
}

/// Set `flag` now and clear it after `duration_ms`. Used for one-shot
/// classes like `shake`.
pub fn trigger_transient(flag: RwSignal<bool>, duration_ms: u32) {
    flag.set(true);
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(duration_ms))).await;
            flag.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = duration_ms;
    }
}
