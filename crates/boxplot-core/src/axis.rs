// File: crates/boxplot-core/src/axis.rs
// Summary: Axis model (orientation, ticks, labels) built from the x and category scales.

use crate::scale::{BandScale, LinearScale};

/// Length of tick marks, pixels.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between a tick mark and its label, pixels.
pub const TICK_PADDING: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Offset along the axis, pixels.
    pub position: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orient: Orient,
    /// Translation of the axis group inside the plot.
    pub translate: (f64, f64),
    /// Pixel extent of the domain line, in scale-range order.
    pub extent: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Axis along the bottom edge for a linear scale, `count` nice ticks.
    pub fn bottom(scale: &LinearScale, count: usize, translate: (f64, f64)) -> Self {
        let precision = scale.tick_precision(count);
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|v| Tick { position: scale.apply(v), label: format!("{:.*}", precision, v) })
            .collect();
        Self { orient: Orient::Bottom, translate, extent: scale.range, ticks }
    }

    /// Category axis on the left edge; each label sits at the middle of its band.
    pub fn left(scale: &BandScale, translate: (f64, f64)) -> Self {
        let half = scale.bandwidth() * 0.5;
        let ticks = scale
            .domain
            .iter()
            .filter_map(|&status| {
                scale.position(status).map(|p| Tick { position: p + half, label: status.label().to_string() })
            })
            .collect();
        Self { orient: Orient::Left, translate, extent: scale.range, ticks }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.ticks.iter().map(|t| t.label.as_str()).collect()
    }
}
