use super::*;

#[test]
fn zero_bytes() {
    assert_eq!(format_file_size(0), "0 Bytes");
}

#[test]
fn small_counts_stay_in_bytes() {
    assert_eq!(format_file_size(1), "1 Bytes");
    assert_eq!(format_file_size(512), "512 Bytes");
    assert_eq!(format_file_size(1023), "1023 Bytes");
}

#[test]
fn exact_units_drop_their_decimals() {
    assert_eq!(format_file_size(1024), "1 KB");
    assert_eq!(format_file_size(2048), "2 KB");
    assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
    assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
}

#[test]
fn fractional_sizes_keep_up_to_two_decimals() {
    assert_eq!(format_file_size(1536), "1.5 KB");
    assert_eq!(format_file_size(1126), "1.1 KB");
    assert_eq!(format_file_size(1_572_864), "1.5 MB");
}

#[test]
fn sizes_past_the_last_unit_stay_in_terabytes() {
    assert!(format_file_size(u64::MAX).ends_with(" TB"));
}
