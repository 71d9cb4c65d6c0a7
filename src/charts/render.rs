//! Chart.js interop: capability check, config handoff, inline discovery.
//!
//! ERROR HANDLING
//! ==============
//! Every failure path here degrades to a skipped chart plus a log line. A
//! missing library, a malformed inline attribute, or a rejected constructor
//! call never surfaces past this module.

use leptos::prelude::*;

use super::spec::{ChartKind, ChartSpec};

/// Whether the page bundled Chart.js. When this is `false` every chart
/// mount is skipped.
#[must_use]
pub fn charting_available() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .map(|w| js_sys::Reflect::has(&w, &wasm_bindgen::JsValue::from_str("Chart")).unwrap_or(false))
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

#[cfg(feature = "hydrate")]
fn mount_chart(
    canvas: &web_sys::HtmlCanvasElement,
    kind: ChartKind,
    spec: &ChartSpec,
    options: &serde_json::Value,
) {
    use wasm_bindgen::JsCast;

    let config = serde_json::json!({
        "type": kind.js_name(),
        "data": spec,
        "options": options,
    });
    let Ok(raw) = serde_json::to_string(&config) else {
        return;
    };
    let Ok(parsed) = js_sys::JSON::parse(&raw) else {
        log::error!("chart config did not parse as a JS value");
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(constructor) = js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str("Chart")) else {
        return;
    };
    let Ok(constructor) = constructor.dyn_into::<js_sys::Function>() else {
        return;
    };
    let canvas_value: &wasm_bindgen::JsValue = canvas.as_ref();
    let args = js_sys::Array::of2(canvas_value, &parsed);
    if js_sys::Reflect::construct(&constructor, &args).is_err() {
        log::error!("chart construction failed for {}", kind.js_name());
    }
}

/// Discover `[data-chart]` containers, typically inside freshly injected
/// markup, and mount a chart per container. Malformed inline JSON is caught,
/// logged, and the chart skipped.
pub fn mount_inline_charts() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        if !charting_available() {
            log::warn!("Chart.js is not loaded; inline charts skipped");
            return;
        }
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(containers) = document.query_selector_all("[data-chart]") else {
            return;
        };
        for index in 0..containers.length() {
            let Some(node) = containers.get(index) else {
                continue;
            };
            let Ok(container) = node.dyn_into::<web_sys::Element>() else {
                continue;
            };
            mount_inline_chart(&container);
        }
    }
}

#[cfg(feature = "hydrate")]
fn mount_inline_chart(container: &web_sys::Element) {
    use wasm_bindgen::JsCast;

    let Some(kind) = container.get_attribute("data-chart").as_deref().and_then(ChartKind::from_attr) else {
        return;
    };
    let Some(canvas) = container.query_selector("canvas").ok().flatten() else {
        return;
    };
    let Ok(canvas) = canvas.dyn_into::<web_sys::HtmlCanvasElement>() else {
        return;
    };
    let Some(raw) = container.get_attribute("data-chart-data") else {
        return;
    };
    let spec = match ChartSpec::parse_inline(&raw) {
        Ok(spec) => spec,
        Err(err) => {
            log::error!("inline chart data is malformed: {err}");
            return;
        }
    };
    let options = match container.get_attribute("data-chart-options") {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                log::error!("inline chart options are malformed: {err}");
                return;
            }
        },
        None => serde_json::json!({ "responsive": true, "maintainAspectRatio": false }),
    };
    mount_chart(&canvas, kind, &spec, &options);
}

/// Canvas that mounts a chart after render. Skipped with a log line when
/// Chart.js is absent.
#[component]
pub fn ChartCanvas(
    /// Element id for the canvas, matching the page stylesheet.
    canvas_id: &'static str,
    kind: ChartKind,
    spec: ChartSpec,
    #[prop(optional, into)] options: Option<serde_json::Value>,
) -> impl IntoView {
    let node = NodeRef::<leptos::html::Canvas>::new();

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            let Some(canvas) = node.get() else {
                return;
            };
            if !charting_available() {
                log::warn!("Chart.js is not loaded; skipping chart {canvas_id}");
                return;
            }
            let options = options
                .clone()
                .unwrap_or_else(|| serde_json::json!({ "responsive": true, "maintainAspectRatio": false }));
            mount_chart(&canvas, kind, &spec, &options);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&spec, &options, kind, canvas_id, node);
        }
    });

    view! {
        <div class="chart-container">
            <canvas id=canvas_id node_ref=node></canvas>
        </div>
    }
}
