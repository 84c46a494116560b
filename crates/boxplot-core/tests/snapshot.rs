// File: crates/boxplot-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic chart to SVG text and PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot files.
// - Else, if a snapshot exists, compares (SVG text exactly, PNG by decoded pixels).
// - Else, logs a note and returns (skips) without failing to ease first run.

use boxplot_core::{ChartConfig, ChartRenderer, HealthStatus, InMemory, Record, ViewState};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn snapshot_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

fn chart(view: ViewState) -> ChartRenderer {
    let mut records = Vec::new();
    for (i, h) in HealthStatus::ALL.into_iter().enumerate() {
        for k in 0..10u32 {
            let earn = 10_000.0 * (i as f64 + 1.0) + 9_000.0 * k as f64 + 1_000.0 * (k * k) as f64;
            records.push(Record::new(earn, h));
        }
    }
    records.push(Record::new(1_200_000.0, HealthStatus::Poor));
    let mut r = ChartRenderer::new(ChartConfig::default());
    r.redraw(view, &InMemory::new(records)).expect("redraw");
    r
}

fn write_or_compare_text(path: &std::path::Path, text: &str) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, text).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), text.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read_to_string(path).expect("read snapshot");
        assert_eq!(text, want, "SVG differs from golden snapshot: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn write_or_compare_png(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

#[test]
fn golden_full_domain_svg() {
    let r = chart(ViewState::new(2.0, false));
    write_or_compare_text(&snapshot_path("full_domain.svg"), &r.to_svg());
}

#[test]
fn golden_excluded_outliers_svg() {
    let r = chart(ViewState::new(0.3, true));
    write_or_compare_text(&snapshot_path("excluded_outliers.svg"), &r.to_svg());
}

#[test]
fn golden_full_domain_png() {
    let r = chart(ViewState::new(2.0, false));
    let bytes = r.to_png().expect("render bytes");
    write_or_compare_png(&snapshot_path("full_domain.png"), &bytes);
}

#[test]
fn svg_is_deterministic() {
    let a = chart(ViewState::new(1.2, false)).to_svg();
    let b = chart(ViewState::new(1.2, false)).to_svg();
    assert_eq!(a, b);
}
