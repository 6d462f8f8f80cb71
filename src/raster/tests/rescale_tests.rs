//! Tests for linear rescaling

use crate::errors::MapError;
use crate::raster::rescale_linear;

#[test]
fn test_rescale_to_unit_range() {
    assert_eq!(rescale_linear(&[1.0, 2.0, 3.0], 0.0, 1.0).unwrap(), vec![0.0, 0.5, 1.0]);
}

#[test]
fn test_rescale_to_byte_range() {
    let out = rescale_linear(&[-1.0, 0.0, 1.0], 0.0, 255.0).unwrap();
    assert_eq!(out, vec![0.0, 127.5, 255.0]);
}

#[test]
fn test_rescale_inverted_range() {
    let out = rescale_linear(&[0.0, 10.0], 1.0, 0.0).unwrap();
    assert_eq!(out, vec![1.0, 0.0]);
}

#[test]
fn test_constant_input_is_degenerate() {
    let result = rescale_linear(&[5.0, 5.0, 5.0], 0.0, 1.0);
    assert!(matches!(result, Err(MapError::DegenerateInput(_))));
}

#[test]
fn test_infinite_input_is_degenerate() {
    let result = rescale_linear(&[0.0, f64::INFINITY], 0.0, 1.0);
    assert!(matches!(result, Err(MapError::DegenerateInput(_))));
}

#[test]
fn test_nan_input_is_degenerate() {
    let result = rescale_linear(&[0.0, f64::NAN, 2.0], 0.0, 1.0);
    assert!(matches!(result, Err(MapError::DegenerateInput(_))));
}

#[test]
fn test_overflowing_range_is_degenerate() {
    let result = rescale_linear(&[-f64::MAX, f64::MAX], 0.0, 1.0);
    assert!(matches!(result, Err(MapError::DegenerateInput(_))));
}

#[test]
fn test_empty_input_is_rejected() {
    assert!(matches!(rescale_linear(&[], 0.0, 1.0), Err(MapError::InvalidArgument(_))));
}
