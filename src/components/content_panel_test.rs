#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn loading_placeholder_is_a_spinner() {
    assert!(LOADING_MARKUP.contains("loading-spinner"));
}

#[test]
fn error_markup_is_a_visible_alert_naming_the_reason() {
    let markup = error_markup("request failed: 404");
    assert!(markup.contains("alert-danger"));
    assert!(markup.contains("Error loading content: request failed: 404"));
}

#[test]
fn load_content_without_a_browser_is_a_noop() {
    load_content("/missing", "#panel", None);
}
