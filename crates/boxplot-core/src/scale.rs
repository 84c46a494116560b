// File: crates/boxplot-core/src/scale.rs
// Summary: Linear (earnings) and band (category) scales, plus nice tick generation.

use crate::health::HealthStatus;

/// Continuous value -> pixel transform. Unclamped: values outside the domain map outside
/// the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    #[inline]
    pub fn apply(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            // degenerate domain maps everything to the middle of the range
            return (r0 + r1) * 0.5;
        }
        r0 + (v - d0) / span * (r1 - r0)
    }

    /// Roughly `count` round tick values covering the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }

    /// Decimal places needed to label ticks produced by `ticks(count)` without
    /// losing precision.
    pub fn tick_precision(&self, count: usize) -> usize {
        let step = tick_step(self.domain.0, self.domain.1, count);
        precision_fixed(step)
    }
}

/// Discrete category -> pixel band, zero padding.
///
/// A reversed range (`range.0 > range.1`) assigns bands from the low pixel end in reverse
/// domain order, so the first domain entry gets the band nearest `range.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    pub domain: Vec<HealthStatus>,
    pub range: (f64, f64),
}

impl BandScale {
    pub fn new(domain: Vec<HealthStatus>, range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn step(&self) -> f64 {
        if self.domain.is_empty() {
            return 0.0;
        }
        (self.range.1 - self.range.0).abs() / self.domain.len() as f64
    }

    /// Zero padding makes bandwidth equal to the step.
    pub fn bandwidth(&self) -> f64 {
        self.step()
    }

    /// Top (lowest pixel) edge of the band for `status`; `None` if not in the domain.
    pub fn position(&self, status: HealthStatus) -> Option<f64> {
        let i = self.domain.iter().position(|&d| d == status)?;
        let n = self.domain.len();
        let start = self.range.0.min(self.range.1);
        let slot = if self.range.1 < self.range.0 { n - 1 - i } else { i };
        Some(start + self.step() * slot as f64)
    }
}

/// Increment between nice ticks, encoded like the common nice-ticks algorithm:
/// positive means a multiple `k * inc`, negative means a fraction `k / -inc`.
fn tick_bounds(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        let mut i1 = (start * inc).round();
        let mut i2 = (stop * inc).round();
        if i1 / inc < start {
            i1 += 1.0;
        }
        if i2 / inc > stop {
            i2 -= 1.0;
        }
        (i1, i2, -inc)
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut i1 = (start / inc).round();
        let mut i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
        (i1, i2, inc)
    }
}

/// Nice tick values in `[start, stop]`.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_bounds(lo, hi, count as f64);
    if i2 < i1 {
        return Vec::new();
    }
    let n = (i2 - i1 + 1.0) as usize;
    let mut out: Vec<f64> = (0..n)
        .map(|k| {
            let i = i1 + k as f64;
            if inc < 0.0 { i / -inc } else { i * inc }
        })
        .collect();
    if reverse {
        out.reverse();
    }
    out
}

/// Distance between neighbouring ticks from [`ticks`].
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || start == stop {
        return 0.0;
    }
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let (_, _, inc) = tick_bounds(lo, hi, count as f64);
    if inc < 0.0 { 1.0 / -inc } else { inc }
}

fn precision_fixed(step: f64) -> usize {
    decimals_for(step)
}

/// Smallest number of decimal places that represents `step` exactly (up to 12).
pub fn decimals_for(step: f64) -> usize {
    if step <= 0.0 || !step.is_finite() {
        return 0;
    }
    let step = step.abs();
    (0..12)
        .find(|&d| {
            let scaled = step * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() < 1e-9 * scaled.max(1.0)
        })
        .unwrap_or(12)
}
