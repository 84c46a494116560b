// File: crates/boxplot-core/src/error.rs
// Summary: Error types for data fetching, rendering and configuration.

use std::path::PathBuf;

/// Failure while fetching or decoding the earnings dataset.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("fetching {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column {0:?}")]
    MissingColumn(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// The x domain `[0, max]` needs `max > 0`.
    #[error("x domain maximum must be positive and finite, got {0}")]
    NonPositiveDomain(f64),
    #[error("raster backend: {0}")]
    Raster(&'static str),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("reading config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing config: {0}")]
    Parse(#[from] toml::de::Error),
}
