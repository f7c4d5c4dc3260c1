//! Order statistics over elapsed values.
//!
//! Percentiles use linear interpolation between closest ranks (the
//! "type 7" estimator, the default of NumPy and pandas). For ascending
//! values `x[0..n]` and quantile `q`:
//!
//! ```text
//! h  = (n - 1) * q
//! lo = floor(h)
//! p  = x[lo] + (h - lo) * (x[lo + 1] - x[lo])
//! ```
//!
//! The median is the same estimator at `q = 0.5`.

/// Quantile value for the given sorted slice
///
/// **Public** - `sorted` must be ascending and non-empty, `q` in [0, 1]
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    debug_assert!(!sorted.is_empty());

    let h = (sorted.len() - 1) as f64 * q.clamp(0.0, 1.0);
    let lo = h.floor() as usize;

    match sorted.get(lo + 1) {
        Some(next) => {
            let fraction = h - lo as f64;
            sorted[lo] + fraction * (next - sorted[lo])
        }
        None => sorted[lo],
    }
}

/// Arithmetic mean
///
/// **Public** - `values` must be non-empty
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sort elapsed values ascending
pub fn sorted(values: impl IntoIterator<Item = f64>) -> Vec<f64> {
    let mut values: Vec<f64> = values.into_iter().collect();
    values.sort_unstable_by(f64::total_cmp);
    values
}
