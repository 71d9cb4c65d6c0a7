//! Notification bell, unread badge, and dropdown list.
//!
//! Opening the menu marks every unread entry as read. Each mark-read runs
//! as its own task with its own simulated latency, so badge decrements land
//! one at a time and possibly out of order.

use leptos::prelude::*;

use crate::state::notifications::NotificationsState;
use crate::state::ui::{MenuId, UiState};

#[component]
pub fn NotificationBell() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let unread = move || notifications.get().unread_count();
    let menu_open = move || ui.get().menu_is_open(MenuId::Notifications);

    let on_bell = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let opened = ui
            .try_update(|u| u.toggle_menu(MenuId::Notifications))
            .unwrap_or(false);
        if opened {
            mark_all_read(notifications);
        }
    };

    view! {
        <div class="notification-bell-wrap">
            <button class="notification-bell" on:click=on_bell title="Notifications">
                <i class="fas fa-bell"></i>
                <Show when=move || { unread() > 0 }>
                    <span class="notification-count">{unread}</span>
                </Show>
            </button>
            <Show when=menu_open>
                <div class="notification-dropdown show" on:click=move |ev| ev.stop_propagation()>
                    <div class="notification-list">
                        <Show
                            when=move || !notifications.get().items.is_empty()
                            fallback=move || {
                                view! {
                                    <div class="notification-empty">
                                        {move || if notifications.get().loading { "Loading..." } else { "No notifications" }}
                                    </div>
                                }
                            }
                        >
                            {move || {
                                notifications
                                    .get()
                                    .items
                                    .iter()
                                    .map(|n| {
                                        let id = n.id;
                                        view! {
                                            <div class=format!(
                                                "notification-item {}",
                                                if n.read { "read" } else { "unread" },
                                            )>
                                                <div class="notification-content">
                                                    <div class="notification-title">{n.title.clone()}</div>
                                                    <div class="notification-message">{n.message.clone()}</div>
                                                    <div class="notification-time">{n.time.clone()}</div>
                                                </div>
                                                <button
                                                    class="notification-mark-read"
                                                    title="Mark as read"
                                                    on:click=move |ev| {
                                                        ev.stop_propagation();
                                                        mark_one_read(notifications, id);
                                                    }
                                                >
                                                    <i class="fas fa-check"></i>
                                                </button>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </Show>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Launch one independent mark-read task per unread entry.
pub fn mark_all_read(notifications: RwSignal<NotificationsState>) {
    #[cfg(feature = "hydrate")]
    {
        for id in notifications.get_untracked().unread_ids() {
            mark_one_read(notifications, id);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = notifications;
    }
}

/// Mark a single entry read once its simulated round trip completes.
pub fn mark_one_read(notifications: RwSignal<NotificationsState>, id: u32) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let id = crate::net::api::mark_notification_read(id).await;
            notifications.update(|s| {
                let _ = s.mark_read(id);
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (notifications, id);
    }
}
