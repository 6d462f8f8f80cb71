//! Linear value rescaling

use crate::errors::{MapError, MapResult};

/// Rescale values linearly so the minimum maps to `min_out` and the maximum to `max_out`
///
/// # Arguments
/// * `values` - Input values
/// * `min_out` - Output value for the smallest input
/// * `max_out` - Output value for the largest input
///
/// # Returns
/// The rescaled values, `InvalidArgument` for empty input, or `DegenerateInput`
/// when every value is equal or any value is NaN or infinite
pub fn rescale_linear(values: &[f64], min_out: f64, max_out: f64) -> MapResult<Vec<f64>> {
    if values.is_empty() {
        return Err(MapError::InvalidArgument("Cannot rescale an empty array".to_string()));
    }

    if let Some(position) = values.iter().position(|v| !v.is_finite()) {
        return Err(MapError::DegenerateInput(format!(
            "Value {} at index {} is not finite",
            values[position], position
        )));
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if !range.is_finite() {
        return Err(MapError::DegenerateInput(format!(
            "Value range [{}, {}] overflows",
            min, max
        )));
    }
    if range == 0.0 {
        return Err(MapError::DegenerateInput(format!(
            "All {} values equal {}; range is zero",
            values.len(),
            min
        )));
    }

    let span = max_out - min_out;
    Ok(values
        .iter()
        .map(|v| span * (v - min) / range + min_out)
        .collect())
}
