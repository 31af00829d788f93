use super::*;

#[test]
fn progress_clamps_out_of_range_input() {
    assert_eq!(Progress::new(-0.5).value(), 0.0);
    assert_eq!(Progress::new(1.5).value(), 1.0);
    assert_eq!(Progress::new(0.25).value(), 0.25);
}

#[test]
fn progress_collapses_nan_to_zero() {
    assert_eq!(Progress::new(f64::NAN).value(), 0.0);
}

#[test]
fn progress_serializes_as_plain_number() {
    let json = serde_json::to_string(&Progress::new(0.5)).unwrap();
    assert_eq!(json, "0.5");
    let back: Progress = serde_json::from_str("0.5").unwrap();
    assert_eq!(back, Progress::new(0.5));
}

#[test]
fn progress_deserialization_clamps() {
    let raw: Progress = serde_json::from_str("2.0").unwrap();
    assert_eq!(raw, Progress::ONE);
}
