// File: crates/boxplot-core/src/lib.rs
// Summary: Core library entry point; box plot of earnings by health status with SVG/PNG output.

pub mod chart;
pub mod config;
pub mod controls;
pub mod data;
pub mod error;
pub mod health;
pub mod stats;
pub mod axis;
pub mod types;
pub mod scale;
pub mod scene;
pub mod view;
pub mod theme;
pub mod svg;
pub mod raster;

pub use chart::{ChartRenderer, DrawOutcome, FetchState, RenderTicket};
pub use config::ChartConfig;
pub use controls::{ControlEvent, Controls};
pub use data::{CsvFile, DataSource, HttpCsv, InMemory, Record};
pub use error::{ChartError, ConfigError, DataError};
pub use health::HealthStatus;
pub use stats::{quantile, BoxPlotStats, CategorySummary};
pub use scene::Scene;
pub use view::ViewState;
pub use theme::Theme;
