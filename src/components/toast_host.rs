//! Singleton toast container and its timed choreography.
//!
//! DESIGN
//! ======
//! `App` owns the `RwSignal<ToastsState>` and mounts exactly one `ToastHost`;
//! everything else reaches the toasts through context. A toast is appended
//! hidden, promoted to visible one tick later, auto-dismissed when its
//! duration is positive, and detached a fixed grace period after its exit
//! transition starts. Concurrent toasts share nothing but the container;
//! their timers are independent and unordered relative to each other.

#[cfg(test)]
#[path = "toast_host_test.rs"]
mod toast_host_test;

use leptos::prelude::*;

use crate::state::toast::{TOAST_DEFAULT_DURATION_MS, Toast, ToastKind, ToastPhase, ToastsState};

/// Shorthand for [`show_toast`] with the default duration.
pub fn show_toast_default(toasts: RwSignal<ToastsState>, message: impl Into<String>, kind: ToastKind) {
    let _ = show_toast(toasts, message, kind, TOAST_DEFAULT_DURATION_MS);
}

/// Append a toast and run its visible lifecycle. A `duration_ms` of `0`
/// keeps the toast until its close button is used.
pub fn show_toast(
    toasts: RwSignal<ToastsState>,
    message: impl Into<String>,
    kind: ToastKind,
    duration_ms: u32,
) -> u64 {
    let id = toasts
        .try_update(|s| s.push(message, kind, duration_ms))
        .unwrap_or_default();
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            // Insert hidden, then show on a later tick so the entry
            // transition has a starting state to animate from.
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                crate::state::toast::TOAST_ENTER_TICK_MS,
            )))
            .await;
            toasts.update(|s| s.mark_shown(id));
            if duration_ms > 0 {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(duration_ms))).await;
                dismiss_toast(toasts, id);
            }
        });
    }
    id
}

/// Begin a toast's exit and detach it after the grace period. Safe to call
/// for toasts that are already leaving or gone; the auto-dismiss timer and
/// the close button can both land here without double-removal.
pub fn dismiss_toast(toasts: RwSignal<ToastsState>, id: u64) {
    let started = toasts.try_update(|s| s.begin_dismiss(id)).unwrap_or(false);
    if !started {
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                crate::state::toast::TOAST_EXIT_MS,
            )))
            .await;
            toasts.update(|s| s.remove(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        toasts.update(|s| s.remove(id));
    }
}

/// Fixed-position container rendering every live toast.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastsState>>();

    view! {
        <div class="toast-container">
            {move || {
                toasts
                    .get()
                    .items()
                    .iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=toast_classes(toast)>
                                <div class="toast-icon">
                                    <i class=format!("fas fa-{}", toast.kind.icon())></i>
                                </div>
                                <div class="toast-content">{toast.message.clone()}</div>
                                <button class="toast-close" on:click=move |_| dismiss_toast(toasts, id)>
                                    <i class="fas fa-times"></i>
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

fn toast_classes(toast: &Toast) -> String {
    let mut classes = format!("toast {}", toast.kind.class());
    if toast.phase == ToastPhase::Shown {
        classes.push_str(" show");
    }
    classes
}
