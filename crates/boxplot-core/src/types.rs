// File: crates/boxplot-core/src/types.rs
// Summary: Canvas size, plot insets and per-row geometry of the box plot.

use serde::Deserialize;

/// Default canvas width in pixels.
pub const WIDTH: u32 = 500;
/// Default canvas height in pixels.
pub const HEIGHT: u32 = 400;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        // leaves a 420 x 340 plot on the default canvas
        Self::new(60, 20, 30, 30)
    }
}

/// Vertical placement of the marks inside one category band, relative to the band's top.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RowGeometry {
    pub box_offset: f64,
    pub box_height: f64,
    pub whisker_offset: f64,
    pub marker_radius: f64,
}

impl Default for RowGeometry {
    fn default() -> Self {
        Self { box_offset: 20.0, box_height: 25.0, whisker_offset: 34.0, marker_radius: 3.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    pub row: RowGeometry,
    pub font_size: f32,
}

impl Layout {
    /// Plot width; the x scale range is `[0, plot_width]`.
    pub fn plot_width(&self) -> f64 {
        self.width.saturating_sub(self.insets.hsum()) as f64
    }

    /// Plot height; the category band range is `[plot_height, 0]`.
    pub fn plot_height(&self) -> f64 {
        self.height.saturating_sub(self.insets.vsum()) as f64
    }

    /// Translation of the plot group inside the canvas.
    pub fn origin(&self) -> (f64, f64) {
        (self.insets.left as f64, self.insets.top as f64)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            row: RowGeometry::default(),
            font_size: 12.0,
        }
    }
}
