// File: crates/boxplot-core/src/controls.rs
// Summary: Slider and checkbox state, and the control-change entry point that yields a ViewState.

use crate::scale::decimals_for;
use crate::view::ViewState;

/// DOM id of the range input.
pub const SLIDER_ID: &str = "range";
/// DOM id of the outlier checkbox.
pub const CHECKBOX_ID: &str = "check";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slider {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: f64,
}

impl Slider {
    pub const fn new(min: f64, max: f64, step: f64, value: f64) -> Self {
        Self { min, max, step, value }
    }

    /// Accept a raw input value: clamp to `[min, max]` and snap to the step grid.
    /// Unparsable input leaves the value unchanged. Returns the value now held.
    pub fn set_raw(&mut self, raw: &str) -> f64 {
        match raw.trim().parse::<f64>() {
            Ok(v) if !v.is_nan() => self.value = self.snap(v),
            _ => log::warn!("ignoring slider value {raw:?}"),
        }
        self.value
    }

    fn snap(&self, v: f64) -> f64 {
        let v = v.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return v;
        }
        let snapped = self.min + ((v - self.min) / self.step).round() * self.step;
        // strip float noise such as 0.30000000000000004
        let scale = 10f64.powi(self.decimals() as i32);
        ((snapped * scale).round() / scale).min(self.max)
    }

    fn decimals(&self) -> usize {
        decimals_for(self.step)
    }

    /// Text shown next to the slider.
    pub fn display(&self) -> String {
        format!("{:.*}", self.decimals(), self.value)
    }
}

impl Default for Slider {
    fn default() -> Self {
        Self::new(0.0, 2.0, 0.1, 2.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Checkbox {
    pub checked: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ControlEvent {
    SliderChanged(String),
    CheckboxToggled(bool),
}

/// The slider and the checkbox together. Every change produces the `ViewState` to render.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Controls {
    pub slider: Slider,
    pub checkbox: Checkbox,
}

impl Controls {
    /// Current view described by the controls.
    pub fn view(&self) -> ViewState {
        ViewState::new(self.slider.value, self.checkbox.checked)
    }

    /// Either control changed: re-sync the slider from its raw value and take the
    /// checkbox state, then report the view to render. No debouncing is applied.
    pub fn on_control_change(&mut self, raw_slider_value: &str, checkbox_checked: bool) -> ViewState {
        self.slider.set_raw(raw_slider_value);
        self.checkbox.checked = checkbox_checked;
        log::debug!("controls: max={} excluded={}", self.slider.display(), checkbox_checked);
        self.view()
    }

    /// Single-control variant of [`on_control_change`](Self::on_control_change).
    pub fn apply(&mut self, event: &ControlEvent) -> ViewState {
        match event {
            ControlEvent::SliderChanged(raw) => {
                let checked = self.checkbox.checked;
                self.on_control_change(raw, checked)
            }
            ControlEvent::CheckboxToggled(checked) => {
                let raw = self.slider.value.to_string();
                self.on_control_change(&raw, *checked)
            }
        }
    }
}
