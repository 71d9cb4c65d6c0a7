//! Sign-in page with password visibility toggle and animated failure path.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::password_input::PasswordInput;
use crate::components::ripple_button::RippleButton;
use crate::components::toast_host::show_toast_default;
use crate::state::toast::{ToastKind, ToastsState};

#[component]
pub fn LoginPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let shake = RwSignal::new(false);
    let email_focused = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if email.get().trim().is_empty() || password.get().is_empty() {
            show_toast_default(toasts, "Enter your email and password first.", ToastKind::Warning);
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let navigate = navigate.clone();
            let Some(form) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlFormElement>().ok())
            else {
                busy.set(false);
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::submit_form(&form).await {
                    Ok(response) => {
                        let message = response.message.unwrap_or_else(|| "Signed in.".to_owned());
                        show_toast_default(toasts, message, ToastKind::Success);
                        navigate("/", NavigateOptions::default());
                    }
                    Err(reason) => {
                        crate::util::effects::trigger_transient(shake, crate::util::effects::SHAKE_MS);
                        show_toast_default(toasts, reason, ToastKind::Error);
                    }
                }
                // Cleared on both paths so the control never sticks.
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
            busy.set(false);
        }
    };

    let email_wrap = move || {
        if email_focused.get() || !email.get().is_empty() {
            "input-group input-focused"
        } else {
            "input-group"
        }
    };

    view! {
        <div class="login-page">
            <div class=move || if shake.get() { "login-card shake" } else { "login-card" }>
                <h1 class="animate-fade-in">"LMS Portal"</h1>
                <p class="login-subtitle">"Sign in to continue"</p>
                <form class="login-form" action="/api/auth/login" method="post" on:submit=on_submit>
                    <div class=email_wrap>
                        <input
                            class="form-input"
                            type="email"
                            name="email"
                            placeholder="you@school.edu"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            on:focus=move |_| email_focused.set(true)
                            on:blur=move |_| email_focused.set(false)
                        />
                    </div>
                    <PasswordInput id="login-password" value=password placeholder="Password"/>
                    <RippleButton
                        class="btn-primary"
                        button_type="submit"
                        loading=Signal::derive(move || busy.get())
                    >
                        "Sign In"
                    </RippleButton>
                </form>
            </div>
        </div>
    }
}
