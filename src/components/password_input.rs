//! Password field with a visibility toggle.

#[cfg(test)]
#[path = "password_input_test.rs"]
mod password_input_test;

use leptos::prelude::*;

/// Delay before the eye icon swaps, smoothing the toggle animation.
pub const ICON_SWAP_DELAY_MS: u32 = 100;

/// Input `type` for the current visibility.
#[must_use]
pub fn input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

/// Eye icon classes for the current visibility.
#[must_use]
pub fn toggle_icon(visible: bool) -> &'static str {
    if visible { "fas fa-eye-slash" } else { "fas fa-eye" }
}

/// Password input whose value can be revealed with an animated eye toggle.
#[component]
pub fn PasswordInput(
    id: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let visible = RwSignal::new(false);
    // The icon trails the type switch so the swap lands mid-animation.
    let icon_visible = RwSignal::new(false);
    let focused = RwSignal::new(false);

    let on_toggle = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let next = !visible.get();
        visible.set(next);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(ICON_SWAP_DELAY_MS))).await;
                icon_visible.set(next);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        icon_visible.set(next);
    };

    // Focus keeps the label raised; blur lowers it only for empty fields.
    let wrap_class = move || {
        if focused.get() || !value.get().is_empty() {
            "input-group input-focused"
        } else {
            "input-group"
        }
    };

    view! {
        <div class=wrap_class>
            <input
                id=id
                name=id
                class="form-input"
                type=move || input_type(visible.get())
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:focus=move |_| focused.set(true)
                on:blur=move |_| focused.set(false)
            />
            <span
                class=move || if visible.get() { "password-toggle active" } else { "password-toggle" }
                on:click=on_toggle
            >
                <i class=move || toggle_icon(icon_visible.get())></i>
            </span>
        </div>
    }
}
