//! Collapsible navigation sidebar with exclusive submenus.

use leptos::prelude::*;

use crate::state::ui::{SubmenuId, UiState};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let sidebar_class = move || if ui.get().sidebar_open { "sidebar show" } else { "sidebar" };

    view! {
        <aside class=sidebar_class>
            <div class="sidebar-brand">"LMS Portal"</div>
            <nav class="sidebar-nav">
                <a class="sidebar-link" href="/">"Dashboard"</a>
                <SidebarSection
                    id=SubmenuId::Courses
                    label="Courses"
                    entries=vec![
                        ("Mathematics", "/courses/math"),
                        ("Science", "/courses/science"),
                        ("History", "/courses/history"),
                    ]
                />
                <SidebarSection
                    id=SubmenuId::Reports
                    label="Reports"
                    entries=vec![
                        ("Grades", "/reports/grades"),
                        ("Attendance", "/reports/attendance"),
                    ]
                />
            </nav>
        </aside>
    }
}

/// One collapsible sidebar section; opening it closes its siblings.
#[component]
fn SidebarSection(
    id: SubmenuId,
    label: &'static str,
    entries: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let open = move || ui.get().submenu_is_open(id);

    let on_toggle = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ui.update(|u| u.toggle_submenu(id));
    };

    view! {
        <div class="sidebar-section">
            <a
                href="#"
                class=move || if open() { "submenu-toggle active" } else { "submenu-toggle" }
                on:click=on_toggle
            >
                {label}
            </a>
            <div class=move || if open() { "sidebar-submenu show" } else { "sidebar-submenu" }>
                {entries
                    .into_iter()
                    .map(|(name, href)| view! { <a class="sidebar-sublink" href=href>{name}</a> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
