//! Series statistics shared by the engine and the quality classifier

/// Added to divisors so that zero means and flat starts stay finite
pub const EPSILON: f64 = 1e-9;

/// Arithmetic mean (0 for an empty slice)
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation around a precomputed mean
pub fn std_dev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Mean and population standard deviation in one call
pub fn mean_std(values: &[f64]) -> (f64, f64) {
    let m = mean(values);
    (m, std_dev(values, m))
}

/// Standard deviation relative to the absolute mean
pub fn volatility(values: &[f64]) -> f64 {
    let (m, s) = mean_std(values);
    s / (m.abs() + EPSILON)
}

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Rounds to the nearest integer, ties toward positive infinity
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Formats with one decimal, exact halfway values rounded away from zero
///
/// `{:.1}` already rounds on the exact binary value, so it only differs on
/// true ties. A one-decimal tie is an odd multiple of 0.05 held exactly,
/// which in binary means a fractional part of .25 or .75.
pub fn format_fixed1(value: f64) -> String {
    let magnitude = value.abs();
    let is_tie = (magnitude * 4.0).fract() == 0.0 && (magnitude * 2.0).fract() != 0.0;
    if !is_tie {
        return format!("{:.1}", value);
    }

    let rounded = (magnitude * 10.0 + 0.5).floor() / 10.0;
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{:.1}", sign, rounded)
}
