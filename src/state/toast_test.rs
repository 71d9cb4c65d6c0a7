use super::*;

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn push_inserts_hidden() {
    let mut toasts = ToastsState::default();
    let id = toasts.push("Saved", ToastKind::Success, 1000);
    let toast = toasts.get(id).unwrap();
    assert_eq!(toast.phase, ToastPhase::Entering);
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.duration_ms, 1000);
    assert_eq!(toast.message, "Saved");
}

#[test]
fn mark_shown_promotes_entering_only() {
    let mut toasts = ToastsState::default();
    let id = toasts.push("hello", ToastKind::Info, 0);
    toasts.mark_shown(id);
    assert_eq!(toasts.get(id).unwrap().phase, ToastPhase::Shown);

    assert!(toasts.begin_dismiss(id));
    toasts.mark_shown(id);
    assert_eq!(toasts.get(id).unwrap().phase, ToastPhase::Leaving);
}

#[test]
fn full_lifecycle_runs_in_order() {
    let mut toasts = ToastsState::default();
    let id = toasts.push("Saved", ToastKind::Success, 1000);
    toasts.mark_shown(id);
    assert_eq!(toasts.get(id).unwrap().phase, ToastPhase::Shown);
    assert!(toasts.begin_dismiss(id));
    assert_eq!(toasts.get(id).unwrap().phase, ToastPhase::Leaving);
    toasts.remove(id);
    assert!(toasts.get(id).is_none());
    assert!(toasts.is_empty());
}

#[test]
fn zero_duration_waits_for_manual_close() {
    let mut toasts = ToastsState::default();
    let id = toasts.push("sticky", ToastKind::Warning, 0);
    assert_eq!(toasts.get(id).unwrap().duration_ms, 0);
}

// =============================================================
// Idempotence
// =============================================================

#[test]
fn begin_dismiss_reports_false_for_leaving_or_missing() {
    let mut toasts = ToastsState::default();
    let id = toasts.push("x", ToastKind::Info, 0);
    assert!(toasts.begin_dismiss(id));
    assert!(!toasts.begin_dismiss(id));
    toasts.remove(id);
    assert!(!toasts.begin_dismiss(id));
    assert!(!toasts.begin_dismiss(999));
}

#[test]
fn remove_is_idempotent() {
    let mut toasts = ToastsState::default();
    let id = toasts.push("x", ToastKind::Info, 0);
    toasts.remove(id);
    toasts.remove(id);
    toasts.remove(999);
    assert!(toasts.is_empty());
}

#[test]
fn mark_shown_on_missing_id_is_a_noop() {
    let mut toasts = ToastsState::default();
    toasts.mark_shown(42);
    assert!(toasts.is_empty());
}

// =============================================================
// Coexistence
// =============================================================

#[test]
fn ids_are_unique_and_increasing() {
    let mut toasts = ToastsState::default();
    let a = toasts.push("a", ToastKind::Info, 0);
    let b = toasts.push("b", ToastKind::Info, 0);
    let c = toasts.push("c", ToastKind::Info, 0);
    assert!(a < b && b < c);
}

// There is deliberately no maximum-count policy; many toasts coexist.
#[test]
fn toasts_accumulate_without_bound() {
    let mut toasts = ToastsState::default();
    for i in 0..100 {
        toasts.push(format!("toast {i}"), ToastKind::Info, 0);
    }
    assert_eq!(toasts.len(), 100);
}

#[test]
fn dismissing_one_toast_leaves_siblings_alone() {
    let mut toasts = ToastsState::default();
    let a = toasts.push("a", ToastKind::Info, 0);
    let b = toasts.push("b", ToastKind::Error, 0);
    assert!(toasts.begin_dismiss(a));
    toasts.remove(a);
    assert!(toasts.get(a).is_none());
    assert_eq!(toasts.get(b).unwrap().phase, ToastPhase::Entering);
}

// =============================================================
// Constants and kinds
// =============================================================

#[test]
fn exit_grace_matches_hide_transition() {
    assert_eq!(TOAST_EXIT_MS, 300);
}

#[test]
fn default_duration_is_three_seconds() {
    assert_eq!(TOAST_DEFAULT_DURATION_MS, 3000);
}

#[test]
fn kind_defaults_to_info() {
    assert_eq!(ToastKind::default(), ToastKind::Info);
}

#[test]
fn kind_classes_are_distinct() {
    assert_eq!(ToastKind::Success.class(), "toast-success");
    assert_eq!(ToastKind::Error.class(), "toast-error");
    assert_eq!(ToastKind::Warning.class(), "toast-warning");
    assert_eq!(ToastKind::Info.class(), "toast-info");
}

#[test]
fn kind_icons_follow_severity() {
    assert_eq!(ToastKind::Success.icon(), "check-circle");
    assert_eq!(ToastKind::Error.icon(), "exclamation-circle");
    assert_eq!(ToastKind::Warning.icon(), "exclamation-triangle");
    assert_eq!(ToastKind::Info.icon(), "info-circle");
}
