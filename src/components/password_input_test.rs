use super::*;

#[test]
fn hidden_password_uses_the_password_type() {
    assert_eq!(input_type(false), "password");
    assert_eq!(input_type(true), "text");
}

#[test]
fn icon_flips_between_eye_and_eye_slash() {
    assert_eq!(toggle_icon(false), "fas fa-eye");
    assert_eq!(toggle_icon(true), "fas fa-eye-slash");
}

#[test]
fn icon_swap_trails_the_type_switch() {
    assert_eq!(ICON_SWAP_DELAY_MS, 100);
}
