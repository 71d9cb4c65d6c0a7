//! Application shell: routes, shared state, startup effects.
//!
//! ARCHITECTURE
//! ============
//! `App` owns every cross-page signal (toasts, notifications, chrome state)
//! and provides them through context, so the toast container and theme flag
//! are explicit owned singletons rather than ambient document lookups.
//! Components never share state with each other except through these
//! signals and browser storage.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::toast_host::ToastHost;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::state::notifications::NotificationsState;
use crate::state::toast::ToastsState;
use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastsState::default());
    let notifications = RwSignal::new(NotificationsState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(toasts);
    provide_context(notifications);
    provide_context(ui);

    // Restore the persisted theme; effects only run in the browser.
    Effect::new(move || {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    // Kick off the initial notification feed exactly once.
    let fetched = RwSignal::new(false);
    Effect::new(move || {
        if fetched.get() {
            return;
        }
        fetched.set(true);
        notifications.update(|s| s.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let batch = crate::net::api::fetch_notifications().await;
            notifications.update(|s| s.replace(batch));
        });
        #[cfg(not(feature = "hydrate"))]
        notifications.update(|s| s.loading = false);
    });

    view! {
        <Title text="LMS Portal"/>
        <Router>
            <Routes fallback=|| view! { <p class="route-missing">"Page not found"</p> }>
                <Route path=path!("/") view=DashboardPage/>
                <Route path=path!("/login") view=LoginPage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
