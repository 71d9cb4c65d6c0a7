//! Dashboard page: shell chrome, chart grid, async announcements, uploads.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. Charts render from the portal sample tables,
//! the announcements panel is fetched after mount, and the coursework form
//! exercises the multipart submit path with the default toast fallbacks.

use leptos::prelude::*;

use crate::charts::render::{ChartCanvas, mount_inline_charts};
use crate::charts::spec::{
    ChartKind, attendance, completion_options, course_completion, doughnut_options,
    grade_distribution, performance_comparison, progress_options, radar_options, stacked_options,
    student_progress,
};
use crate::components::content_panel::ContentPanel;
use crate::components::ripple_button::RippleButton;
use crate::components::sidebar::Sidebar;
use crate::components::topbar::Topbar;
use crate::components::upload_preview::UploadPreview;
use crate::state::toast::ToastsState;
use crate::state::ui::UiState;
use crate::util::effects::stagger_delay;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();

    let main_class = move || {
        if ui.get().sidebar_open { "main-content" } else { "main-content expanded" }
    };
    // Clicks that bubble to the page close any open dropdown; the menus
    // themselves stop propagation.
    let on_outside_click = move |_| ui.update(UiState::close_menus);

    let upload_busy = RwSignal::new(false);
    let on_upload_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if upload_busy.get() {
            return;
        }
        upload_busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(form) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlFormElement>().ok())
            else {
                upload_busy.set(false);
                return;
            };
            leptos::task::spawn_local(async move {
                use crate::components::toast_host::show_toast_default;
                use crate::state::toast::ToastKind;

                // No callbacks supplied here, so both outcomes fall back to
                // the generic toasts.
                match crate::net::api::submit_form(&form).await {
                    Ok(response) => {
                        let message = response.message.unwrap_or_else(|| "Success!".to_owned());
                        show_toast_default(toasts, message, ToastKind::Success);
                    }
                    Err(reason) => show_toast_default(toasts, reason, ToastKind::Error),
                }
                upload_busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = toasts;
            upload_busy.set(false);
        }
    };

    view! {
        <div class="dashboard" on:click=on_outside_click>
            <Sidebar/>
            <div class=main_class>
                <Topbar/>
                <main class="dashboard-body">
                    <section class="card-grid">
                        <div class="card" style:animation-delay=stagger_delay(0)>
                            <h3 class="animate-fade-in">"Grade Distribution"</h3>
                            <ChartCanvas
                                canvas_id="gradeDistributionChart"
                                kind=ChartKind::Doughnut
                                spec=grade_distribution()
                                options=doughnut_options()
                            />
                        </div>
                        <div class="card" style:animation-delay=stagger_delay(1)>
                            <h3 class="animate-fade-in">"Student Progress"</h3>
                            <ChartCanvas
                                canvas_id="studentProgressChart"
                                kind=ChartKind::Line
                                spec=student_progress()
                                options=progress_options()
                            />
                        </div>
                        <div class="card" style:animation-delay=stagger_delay(2)>
                            <h3 class="animate-fade-in">"Attendance"</h3>
                            <ChartCanvas
                                canvas_id="attendanceChart"
                                kind=ChartKind::Bar
                                spec=attendance()
                                options=stacked_options()
                            />
                        </div>
                        <div class="card" style:animation-delay=stagger_delay(3)>
                            <h3 class="animate-fade-in">"Performance vs. Class"</h3>
                            <ChartCanvas
                                canvas_id="performanceComparisonChart"
                                kind=ChartKind::Radar
                                spec=performance_comparison()
                                options=radar_options()
                            />
                        </div>
                        <div class="card" style:animation-delay=stagger_delay(4)>
                            <h3 class="animate-fade-in">"Course Completion"</h3>
                            <ChartCanvas
                                canvas_id="courseCompletionChart"
                                kind=ChartKind::Bar
                                spec=course_completion()
                                options=completion_options()
                            />
                        </div>
                    </section>

                    <section class="card" style:animation-delay=stagger_delay(5)>
                        <h3 class="animate-fade-in">"Announcements"</h3>
                        // Injected fragments may carry their own inline
                        // chart containers, so rediscover after each load.
                        <ContentPanel
                            url="/fragments/announcements"
                            panel_id="announcements-panel"
                            on_loaded=Callback::new(|()| mount_inline_charts())
                        />
                    </section>

                    <section class="card upload-card" style:animation-delay=stagger_delay(6)>
                        <h3 class="animate-fade-in">"Submit coursework"</h3>
                        <form action="/api/uploads" method="post" on:submit=on_upload_submit>
                            <UploadPreview input_id="coursework-files"/>
                            <RippleButton
                                class="btn-primary"
                                button_type="submit"
                                loading=Signal::derive(move || upload_busy.get())
                            >
                                "Upload"
                            </RippleButton>
                        </form>
                    </section>
                </main>
            </div>
        </div>
    }
}
