#![cfg(not(feature = "hydrate"))]

use super::*;

fn toast(kind: ToastKind, phase: ToastPhase) -> Toast {
    Toast {
        id: 1,
        message: "Saved".to_owned(),
        kind,
        duration_ms: 1000,
        phase,
    }
}

#[test]
fn entering_toast_is_not_yet_visible() {
    assert_eq!(toast_classes(&toast(ToastKind::Success, ToastPhase::Entering)), "toast toast-success");
}

#[test]
fn shown_toast_carries_the_show_class() {
    assert_eq!(toast_classes(&toast(ToastKind::Success, ToastPhase::Shown)), "toast toast-success show");
}

#[test]
fn leaving_toast_drops_the_show_class() {
    assert_eq!(toast_classes(&toast(ToastKind::Error, ToastPhase::Leaving)), "toast toast-error");
}
