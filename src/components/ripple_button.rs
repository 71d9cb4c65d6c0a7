//! Button wrapper that spawns click ripples and carries a loading state.

use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct Ripple {
    id: u64,
    x: f64,
    y: f64,
}

/// Button with a momentary ripple at the click point. While `loading` is
/// true the control is disabled and marked with the loading class.
#[component]
pub fn RippleButton(
    #[prop(optional)] class: &'static str,
    #[prop(optional)] button_type: &'static str,
    loading: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let ripples = RwSignal::new(Vec::<Ripple>::new());
    let next_id = RwSignal::new(0_u64);
    let btn_type = if button_type.is_empty() { "button" } else { button_type };

    let classes = move || {
        let base = if class.is_empty() { "btn".to_owned() } else { format!("btn {class}") };
        if loading.get() { format!("{base} btn-loading") } else { base }
    };

    let on_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(el) = ev
                .current_target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
            else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            let (x, y) = crate::util::effects::click_offset(
                f64::from(ev.client_x()),
                f64::from(ev.client_y()),
                rect.left(),
                rect.top(),
            );
            let id = next_id.get_untracked();
            next_id.set(id + 1);
            ripples.update(|r| r.push(Ripple { id, x, y }));
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                    crate::util::effects::RIPPLE_MS,
                )))
                .await;
                ripples.update(|r| r.retain(|ripple| ripple.id != id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, next_id);
        }
    };

    view! {
        <button type=btn_type class=classes disabled=move || loading.get() on:click=on_click>
            {children()}
            {move || {
                ripples
                    .get()
                    .iter()
                    .map(|r| {
                        view! {
                            <span
                                class="ripple"
                                style=format!("left: {}px; top: {}px;", r.x, r.y)
                            ></span>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </button>
    }
}
