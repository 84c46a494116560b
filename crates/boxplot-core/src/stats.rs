// File: crates/boxplot-core/src/stats.rs
// Summary: Quantiles and per-category box plot statistics (quartiles, fences, upper outliers).

use crate::data::Record;
use crate::health::HealthStatus;

/// Whisker reach in IQR multiples.
pub const FENCE_FACTOR: f64 = 1.5;

/// Quantile of an unsorted sample, `p` in `[0, 1]`.
///
/// Linear interpolation between closest ranks (R-7): `h = (n - 1) p`, result
/// `x[floor(h)] + (x[floor(h) + 1] - x[floor(h)]) * frac(h)`. `NaN` and infinite entries
/// are skipped.
/// Returns `None` when no numeric value is left.
pub fn quantile(values: &[f64], p: f64) -> Option<f64> {
    let sorted = sorted_numeric(values);
    quantile_sorted(&sorted, p)
}

/// Same as [`quantile`] on data already sorted ascending and finite.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 || p.is_nan() {
        return None;
    }
    if p <= 0.0 || n < 2 {
        return Some(sorted[0]);
    }
    if p >= 1.0 {
        return Some(sorted[n - 1]);
    }
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let v0 = sorted[lo];
    let v1 = sorted[(lo + 1).min(n - 1)];
    Some(v0 + (v1 - v0) * (h - lo as f64))
}

fn sorted_numeric(values: &[f64]) -> Vec<f64> {
    let mut v: Vec<f64> = values.iter().copied().filter(|x| x.is_finite()).collect();
    v.sort_by(f64::total_cmp);
    v
}

/// Five-number-style summary for one category.
/// Contract: `q1 <= median <= q3`, `lower_fence <= q1`, `upper_fence >= q3`.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxPlotStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower_fence: f64,
    pub upper_fence: f64,
    /// Values strictly above `upper_fence`, ascending. The lower tail is not marked.
    pub outliers: Vec<f64>,
}

impl BoxPlotStats {
    /// Compute statistics for a sample; `None` when the sample has no finite value.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let sorted = sorted_numeric(values);
        let q1 = quantile_sorted(&sorted, 0.25)?;
        let median = quantile_sorted(&sorted, 0.5)?;
        let q3 = quantile_sorted(&sorted, 0.75)?;
        let iqr = q3 - q1;
        let lower_fence = q1 - FENCE_FACTOR * iqr;
        let upper_fence = q3 + FENCE_FACTOR * iqr;
        let outliers = sorted.iter().copied().filter(|&v| v > upper_fence).collect();
        Some(Self { q1, median, q3, iqr, lower_fence, upper_fence, outliers })
    }
}

/// Earnings in millions for one category.
///
/// With `exclude_above` set, the sample is truncated to values strictly below the cutoff
/// before anything else is computed, so quartiles shift along with the markers.
pub fn category_values(records: &[Record], status: HealthStatus, exclude_above: Option<f64>) -> Vec<f64> {
    records
        .iter()
        .filter(|r| r.health == status)
        .map(Record::earnings_millions)
        .filter(|&v| exclude_above.map_or(true, |cut| v < cut))
        .collect()
}

/// Statistics for one row of the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct CategorySummary {
    pub status: HealthStatus,
    /// Sample size after filtering.
    pub count: usize,
    /// `None` for an empty category.
    pub stats: Option<BoxPlotStats>,
}

/// Summaries for all categories in the fixed axis order.
pub fn summarize(records: &[Record], exclude_above: Option<f64>) -> Vec<CategorySummary> {
    HealthStatus::ALL
        .into_iter()
        .map(|status| {
            let values = category_values(records, status, exclude_above);
            CategorySummary { status, count: values.len(), stats: BoxPlotStats::from_values(&values) }
        })
        .collect()
}
