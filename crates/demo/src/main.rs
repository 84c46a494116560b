// File: crates/demo/src/main.rs
// Summary: Demo loads the earnings CSV, applies slider/checkbox values and writes the box plot to SVG, PNG and HTML.

use anyhow::{Context, Result};
use boxplot_core::data::source_for;
use boxplot_core::raster::write_png;
use boxplot_core::{ChartConfig, ChartRenderer, Controls, DataSource, DrawOutcome};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "boxplot-demo", about = "Earnings distribution by health status, as SVG and PNG")]
struct Args {
    /// TOML chart configuration
    #[arg(long)]
    config: Option<PathBuf>,
    /// CSV path or http(s) URL with `Earn` and `Health` columns
    #[arg(long)]
    data: Option<String>,
    /// Slider value: upper end of the x axis, in millions
    #[arg(long, default_value = "2")]
    max: String,
    /// Checkbox: drop values at or above the cutoff before computing quartiles
    #[arg(long)]
    exclude_outliers: bool,
    /// Theme preset (light, dark, high-contrast-dark)
    #[arg(long)]
    theme: Option<String>,
    /// Output directory
    #[arg(long, default_value = "target/out")]
    out: PathBuf,
    /// Also write one SVG per slider step
    #[arg(long)]
    sweep: bool,
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ChartConfig::from_path(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => ChartConfig::default(),
    };
    if let Some(data) = &args.data { config.data = data.clone(); }
    if let Some(theme) = &args.theme { config.theme = theme.clone(); }

    let location = resolve_location(&config.data)?;
    let source = source_for(&location);
    println!("Using input: {}", source.describe());

    let mut controls = Controls::default();
    let view = controls.on_control_change(&args.max, args.exclude_outliers);
    println!(
        "Slider = {}, outliers excluded = {}",
        controls.slider.display(),
        view.outliers_excluded
    );

    let mut chart = ChartRenderer::new(config);
    let outcome = chart
        .redraw(view, &*source)
        .with_context(|| format!("slider value {} cannot be rendered", controls.slider.display()))?;
    if let DrawOutcome::Failed { error, .. } = outcome {
        return Err(error).with_context(|| format!("failed to load CSV '{}'", source.describe()));
    }
    print_summary(&chart);

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;
    let svg_path = args.out.join("boxplot.svg");
    std::fs::write(&svg_path, chart.to_svg())?;
    println!("Wrote {}", svg_path.display());
    let png_path = args.out.join("boxplot.png");
    write_png(chart.scene(), &chart.config().layout, &chart.config().theme(), &png_path)?;
    println!("Wrote {}", png_path.display());
    let html_path = args.out.join("boxplot.html");
    std::fs::write(&html_path, boxplot_dioxus::page::static_page(&chart, &controls))?;
    println!("Wrote {}", html_path.display());

    if args.sweep {
        sweep(&mut chart, &mut controls, &*source, &args.out)?;
    }
    Ok(())
}

/// Walk the slider from one step up to its maximum, one SVG per position.
fn sweep(chart: &mut ChartRenderer, controls: &mut Controls, source: &dyn DataSource, out: &Path) -> Result<()> {
    let slider = controls.slider;
    let steps = ((slider.max - slider.min) / slider.step).round() as usize;
    let checked = controls.checkbox.checked;
    for i in 1..=steps {
        let raw = (slider.min + slider.step * i as f64).to_string();
        let view = controls.on_control_change(&raw, checked);
        chart.redraw(view, source)?;
        let path = out.join(format!("boxplot_{}.svg", controls.slider.display()));
        std::fs::write(&path, chart.to_svg())?;
    }
    println!("Wrote {} sweep frames to {}", steps, out.display());
    Ok(())
}

fn print_summary(chart: &ChartRenderer) {
    println!("{:<10} {:>6} {:>8} {:>8} {:>8} {:>8} {:>8}", "Health", "n", "q1", "median", "q3", "upper", "outliers");
    for row in chart.summaries() {
        match &row.stats {
            Some(s) => println!(
                "{:<10} {:>6} {:>8.4} {:>8.4} {:>8.4} {:>8.4} {:>8}",
                row.status.label(),
                row.count,
                s.q1,
                s.median,
                s.q3,
                s.upper_fence,
                s.outliers.len()
            ),
            None => println!("{:<10} {:>6} {:>8}", row.status.label(), row.count, "-"),
        }
    }
}

/// URLs pass through; local paths are checked, trying a .csv/.cvs swap if needed.
fn resolve_location(raw: &str) -> Result<String> {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        return Ok(raw.to_string());
    }
    let p = Path::new(raw);
    if p.exists() {
        return Ok(raw.to_string());
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            println!("  (extension swapped between .csv/.cvs)");
            return Ok(alt.display().to_string());
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}
