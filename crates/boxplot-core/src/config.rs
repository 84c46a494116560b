// File: crates/boxplot-core/src/config.rs
// Summary: Chart configuration with page defaults, optionally loaded from TOML.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::theme::{self, Theme};
use crate::types::Layout;

/// Absolute cutoff (millions) applied when outliers are excluded.
pub const DEFAULT_OUTLIER_CUTOFF: f64 = 0.2;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Titles {
    pub chart: String,
    pub x_axis: String,
    pub y_axis: String,
}

impl Default for Titles {
    fn default() -> Self {
        Self {
            chart: "Distribution of Earnings for Employed People by Health Status".into(),
            x_axis: "Earnings (in millions)".into(),
            y_axis: "Health".into(),
        }
    }
}

/// Everything a caller may tune. Missing TOML keys keep their defaults.
///
/// ```toml
/// data = "df.csv"
/// theme = "dark"
/// outlier_cutoff = 0.2
///
/// [layout]
/// width = 500
/// height = 400
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub layout: Layout,
    pub titles: Titles,
    pub outlier_cutoff: f64,
    /// Requested number of x-axis ticks; the actual count follows nice steps.
    pub tick_count: usize,
    /// CSV location, a path or an `http(s)://` URL.
    pub data: String,
    /// Theme preset name, see [`theme::presets`].
    pub theme: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            titles: Titles::default(),
            outlier_cutoff: DEFAULT_OUTLIER_CUTOFF,
            tick_count: 10,
            data: "df.csv".into(),
            theme: "light".into(),
        }
    }
}

impl ChartConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_toml_str(&text)?;
        log::debug!("loaded chart config from {}", path.display());
        Ok(cfg)
    }

    pub fn theme(&self) -> Theme {
        theme::find(&self.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        assert_eq!(ChartConfig::from_toml_str("").unwrap(), ChartConfig::default());
    }

    #[test]
    fn partial_override() {
        let cfg = ChartConfig::from_toml_str(
            "data = \"https://example.org/df.csv\"\noutlier_cutoff = 0.5\n[layout]\nwidth = 800\n[titles]\ny_axis = \"Self-reported health\"\n",
        )
        .unwrap();
        assert_eq!(cfg.data, "https://example.org/df.csv");
        assert_eq!(cfg.outlier_cutoff, 0.5);
        assert_eq!(cfg.layout.width, 800);
        assert_eq!(cfg.layout.height, 400);
        assert_eq!(cfg.titles.y_axis, "Self-reported health");
        assert_eq!(cfg.titles.x_axis, "Earnings (in millions)");
    }

    #[test]
    fn bad_toml_is_reported() {
        assert!(matches!(ChartConfig::from_toml_str("tick_count = \"many\""), Err(ConfigError::Parse(_))));
    }
}
