use super::*;

#[test]
fn stagger_delay_steps_by_a_tenth_of_a_second() {
    assert_eq!(stagger_delay(0), "0.0s");
    assert_eq!(stagger_delay(1), "0.1s");
    assert_eq!(stagger_delay(4), "0.4s");
    assert_eq!(stagger_delay(12), "1.2s");
}

#[test]
fn click_offset_is_relative_to_the_element_origin() {
    assert_eq!(click_offset(150.0, 90.0, 100.0, 50.0), (50.0, 40.0));
    assert_eq!(click_offset(10.0, 10.0, 40.0, 5.0), (-30.0, 5.0));
}

#[test]
fn transient_lifetimes_match_their_css_animations() {
    assert_eq!(RIPPLE_MS, 600);
    assert_eq!(SHAKE_MS, 500);
}
