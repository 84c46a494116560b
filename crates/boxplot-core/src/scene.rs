// File: crates/boxplot-core/src/scene.rs
// Summary: Retained element list for the chart canvas; coordinates are in plot space.

use crate::axis::Axis;
use crate::health::HealthStatus;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub anchor: Anchor,
    /// Rotation in degrees about the plot origin, applied before `x`/`y`.
    pub rotate: Option<f64>,
    pub font_size: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Whisker,
    Median,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub row: HealthStatus,
    pub kind: LineKind,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub row: HealthStatus,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub row: HealthStatus,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Text(Text),
    Axis(Axis),
    Line(Line),
    Rect(Rect),
    Circle(Circle),
}

impl Element {
    /// Titles survive a redraw; everything else is regenerated.
    pub fn is_dynamic(&self) -> bool {
        !matches!(self, Element::Text(_))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    elements: Vec<Element>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Remove every axis, line, rectangle and circle.
    pub fn clear_dynamic(&mut self) {
        self.elements.retain(|e| !e.is_dynamic());
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn texts(&self) -> impl Iterator<Item = &Text> + '_ {
        self.elements.iter().filter_map(|e| match e { Element::Text(t) => Some(t), _ => None })
    }

    pub fn axes(&self) -> impl Iterator<Item = &Axis> + '_ {
        self.elements.iter().filter_map(|e| match e { Element::Axis(a) => Some(a), _ => None })
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> + '_ {
        self.elements.iter().filter_map(|e| match e { Element::Line(l) => Some(l), _ => None })
    }

    pub fn rects(&self) -> impl Iterator<Item = &Rect> + '_ {
        self.elements.iter().filter_map(|e| match e { Element::Rect(r) => Some(r), _ => None })
    }

    pub fn circles(&self) -> impl Iterator<Item = &Circle> + '_ {
        self.elements.iter().filter_map(|e| match e { Element::Circle(c) => Some(c), _ => None })
    }

    /// Rectangle drawn for `row`, if any.
    pub fn box_for(&self, row: HealthStatus) -> Option<&Rect> {
        self.rects().find(|r| r.row == row)
    }

    pub fn line_for(&self, row: HealthStatus, kind: LineKind) -> Option<&Line> {
        self.lines().find(|l| l.row == row && l.kind == kind)
    }

    /// Number of marks (lines, rects, circles) drawn for `row`.
    pub fn marks_for(&self, row: HealthStatus) -> usize {
        self.lines().filter(|l| l.row == row).count()
            + self.rects().filter(|r| r.row == row).count()
            + self.circles().filter(|c| c.row == row).count()
    }
}
