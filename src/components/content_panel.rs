//! Async markup loading into live DOM targets.
//!
//! SYSTEM CONTEXT
//! ==============
//! `load_content` is the imperative loader; `ContentPanel` wraps it for
//! declarative use. In-flight requests are never cancelled: when the same
//! target is loaded twice in quick succession the completions race and the
//! last one to land wins.

#[cfg(test)]
#[path = "content_panel_test.rs"]
mod content_panel_test;

use leptos::prelude::*;

/// Placeholder markup shown while a fragment is in flight.
pub const LOADING_MARKUP: &str = r#"<div class="loading-spinner"></div>"#;

#[cfg(any(test, feature = "hydrate"))]
fn error_markup(reason: &str) -> String {
    format!(r#"<div class="alert alert-danger">Error loading content: {reason}</div>"#)
}

/// Fetch `url` and inject the response markup into the element matching
/// `target_selector`.
///
/// A missing target is a silent no-op. On success the optional `callback`
/// runs after injection; on failure the target shows the reason instead and
/// the callback is skipped.
pub fn load_content(url: &str, target_selector: &str, callback: Option<Callback<()>>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(Some(target)) = document.query_selector(target_selector) else {
            return;
        };
        target.set_inner_html(LOADING_MARKUP);
        let url = url.to_owned();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_fragment(&url).await {
                Ok(html) => {
                    target.set_inner_html(&html);
                    if let Some(callback) = callback {
                        callback.run(());
                    }
                }
                Err(reason) => target.set_inner_html(&error_markup(&reason)),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, target_selector, callback);
    }
}

/// Container that loads `url` into itself once mounted.
#[component]
pub fn ContentPanel(
    /// Fragment endpoint to load.
    url: &'static str,
    /// Element id used as the injection target.
    panel_id: &'static str,
    /// Runs after each successful injection.
    #[prop(optional)] on_loaded: Option<Callback<()>>,
) -> impl IntoView {
    Effect::new(move || {
        load_content(url, &format!("#{panel_id}"), on_loaded);
    });

    view! { <div class="content-panel" id=panel_id></div> }
}
