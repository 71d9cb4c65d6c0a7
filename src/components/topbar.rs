//! Top bar: sidebar toggle, theme toggle, notifications, account menu.

use leptos::prelude::*;

use crate::components::notification_bell::NotificationBell;
use crate::state::ui::{MenuId, UiState};
use crate::util::dark_mode;

#[component]
pub fn Topbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_sidebar = move |_| ui.update(UiState::toggle_sidebar);

    let on_theme = move |_| {
        let next = dark_mode::toggle(ui.get().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    let profile_open = move || ui.get().menu_is_open(MenuId::Profile);
    let on_profile = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        ui.update(|u| {
            let _ = u.toggle_menu(MenuId::Profile);
        });
    };

    view! {
        <header class="topbar">
            <button class="sidebar-toggle" on:click=on_sidebar title="Toggle sidebar">
                <i class="fas fa-bars"></i>
            </button>
            <span class="topbar-spacer"></span>
            <button class="theme-toggle" on:click=on_theme title="Toggle theme">
                <i class=move || if ui.get().dark_mode { "fas fa-sun" } else { "fas fa-moon" }></i>
            </button>
            <NotificationBell/>
            <div class="dropdown">
                <button class="dropdown-toggle" on:click=on_profile>"Account"</button>
                <Show when=profile_open>
                    <div class="dropdown-menu show" on:click=move |ev| ev.stop_propagation()>
                        <a class="dropdown-item" href="/profile">"Profile"</a>
                        <a class="dropdown-item" href="/settings">"Settings"</a>
                        <a class="dropdown-item" href="/login">"Sign out"</a>
                    </div>
                </Show>
            </div>
        </header>
    }
}
