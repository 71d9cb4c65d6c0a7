//! HTTP helpers and the simulated notification endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side:
//! stubs, since these calls are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Fallible calls return `Result<_, String>`; the formatted messages are
//! exactly what error surfaces (toasts, inline alerts) display. There is no
//! retry anywhere: a failed call fails once and reports once.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;

use crate::state::notifications::{Notification, sample_notifications};

/// Simulated latency of the notification feed.
pub const NOTIFICATIONS_DELAY_MS: u64 = 1000;
/// Simulated latency of a single mark-read call.
pub const MARK_READ_DELAY_MS: u64 = 500;

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// HTTP method for a form, defaulting to POST when the form does not name
/// one.
#[must_use]
pub fn resolve_method(raw: &str) -> String {
    let method = raw.trim().to_ascii_uppercase();
    if method.is_empty() { "POST".to_owned() } else { method }
}

/// Structured success payload returned by form endpoints.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FormResponse {
    /// Optional server message echoed into the success toast.
    #[serde(default)]
    pub message: Option<String>,
}

/// Fetch a markup fragment as raw text.
///
/// # Errors
///
/// Returns the failure reason when the request cannot be sent or the server
/// responds with a non-2xx status.
pub async fn fetch_fragment(url: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.text().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err("not available on server".to_owned())
    }
}

/// Send a form's fields as a multipart payload to the form's own action,
/// using its configured method.
///
/// # Errors
///
/// A non-2xx status is failure; so is an unreadable form, an unsendable
/// request, or a success body that does not parse as [`FormResponse`].
#[cfg(feature = "hydrate")]
pub async fn submit_form(form: &web_sys::HtmlFormElement) -> Result<FormResponse, String> {
    let data = web_sys::FormData::new_with_form(form)
        .map_err(|_| "could not read form fields".to_owned())?;
    let action = form.action();
    let builder = match resolve_method(&form.method()).as_str() {
        "GET" => gloo_net::http::Request::get(&action),
        "PUT" => gloo_net::http::Request::put(&action),
        "DELETE" => gloo_net::http::Request::delete(&action),
        _ => gloo_net::http::Request::post(&action),
    };
    let resp = builder
        .body(data)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(resp.status()));
    }
    resp.json::<FormResponse>().await.map_err(|e| e.to_string())
}

/// Fetch the notification feed.
///
/// Simulated: a fixed delay followed by a fixed in-memory batch. Swapping in
/// a real endpoint replaces only this body; callers already treat it as an
/// asynchronous, non-blocking call whose completion replaces the whole list.
pub async fn fetch_notifications() -> Vec<Notification> {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(NOTIFICATIONS_DELAY_MS)).await;
    sample_notifications()
}

/// Mark one notification read. Simulated per-item latency; each call
/// completes independently of its siblings, in whatever order the timers
/// land.
pub async fn mark_notification_read(id: u32) -> u32 {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(MARK_READ_DELAY_MS)).await;
    id
}
