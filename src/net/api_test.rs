use super::*;

#[test]
fn resolve_method_defaults_to_post() {
    assert_eq!(resolve_method(""), "POST");
    assert_eq!(resolve_method("   "), "POST");
}

#[test]
fn resolve_method_uppercases_whatever_the_form_names() {
    assert_eq!(resolve_method("get"), "GET");
    assert_eq!(resolve_method("Post"), "POST");
    assert_eq!(resolve_method("put"), "PUT");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(404), "request failed: 404");
    assert_eq!(request_failed_message(500), "request failed: 500");
}

#[test]
fn form_response_parses_message() {
    let parsed: FormResponse = serde_json::from_str(r#"{"message":"Saved"}"#).unwrap();
    assert_eq!(parsed.message.as_deref(), Some("Saved"));
}

#[test]
fn form_response_tolerates_missing_message() {
    let parsed: FormResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(parsed, FormResponse::default());

    let parsed: FormResponse = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
    assert_eq!(parsed.message, None);
}
