// File: crates/boxplot-dioxus/src/page.rs
// Summary: Static HTML page with the plot container, slider and checkbox around the rendered SVG.

use std::fmt::Write as _;

use boxplot_core::controls::{CHECKBOX_ID, SLIDER_ID};
use boxplot_core::svg::escape;
use boxplot_core::{ChartRenderer, Controls};

/// DOM id of the chart container.
pub const PLOT_ID: &str = "plot";

/// Label next to the outlier checkbox.
pub const CHECKBOX_LABEL: &str = "Exclude outliers";

/// Snapshot of the page for the current chart and control state. No script is attached:
/// controls reflect the state the chart was rendered with.
pub fn static_page(chart: &ChartRenderer, controls: &Controls) -> String {
    let slider = &controls.slider;
    let mut html = String::with_capacity(8192);
    html.push_str("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">");
    let _ = write!(html, "<title>{}</title>", escape(&chart.config().titles.chart));
    html.push_str("</head><body>");
    let _ = write!(html, r#"<div id="{PLOT_ID}">"#);
    html.push_str(&chart.to_svg());
    let _ = write!(
        html,
        r#"<input type="range" min="{}" max="{}" step="{}" value="{}" id="{SLIDER_ID}"><span id="{SLIDER_ID}-value">{}</span>"#,
        slider.min,
        slider.max,
        slider.step,
        slider.value,
        slider.display()
    );
    let checked = if controls.checkbox.checked { " checked" } else { "" };
    let _ = write!(
        html,
        r#"<label><input type="checkbox" id="{CHECKBOX_ID}"{checked}> {CHECKBOX_LABEL}</label>"#
    );
    html.push_str("</div></body></html>\n");
    html
}
