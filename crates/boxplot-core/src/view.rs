// File: crates/boxplot-core/src/view.rs
// View state driven by the controls: x domain maximum and the outlier filter flag.

use crate::error::ChartError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Upper end of the x domain `[0, max_domain_value]`, in millions.
    pub max_domain_value: f64,
    /// Truncate every category's sample at the outlier cutoff before computing stats.
    pub outliers_excluded: bool,
}

impl ViewState {
    pub const fn new(max_domain_value: f64, outliers_excluded: bool) -> Self {
        Self { max_domain_value, outliers_excluded }
    }

    /// A zero or negative maximum collapses or inverts the x axis.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.max_domain_value.is_finite() && self.max_domain_value > 0.0 {
            Ok(())
        } else {
            Err(ChartError::NonPositiveDomain(self.max_domain_value))
        }
    }

    pub fn with_max(mut self, max_domain_value: f64) -> Self {
        self.max_domain_value = max_domain_value;
        self
    }

    pub fn with_outliers_excluded(mut self, excluded: bool) -> Self {
        self.outliers_excluded = excluded;
        self
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(2.0, false)
    }
}
