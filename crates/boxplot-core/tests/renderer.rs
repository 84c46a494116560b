// File: crates/boxplot-core/tests/renderer.rs
// Purpose: End-to-end redraw behavior: clearing, scaling, outlier filter, empty rows, ordering.

use boxplot_core::scene::LineKind;
use boxplot_core::{
    ChartConfig, ChartRenderer, Controls, DataError, DataSource, DrawOutcome, FetchState, HealthStatus, InMemory,
    Record, ViewState,
};

fn rec(millions: f64, health: HealthStatus) -> Record {
    Record::new(millions * 1_000_000.0, health)
}

fn sample() -> InMemory {
    let mut records = Vec::new();
    for (i, h) in HealthStatus::ALL.into_iter().enumerate() {
        let base = 0.02 * (i as f64 + 1.0);
        for k in 0..8 {
            records.push(rec(base + 0.01 * k as f64, h));
        }
    }
    // one far point in Good
    records.push(rec(1.5, HealthStatus::Good));
    InMemory::new(records)
}

struct Failing;

impl DataSource for Failing {
    fn fetch(&self) -> Result<Vec<Record>, DataError> {
        Err(DataError::MissingColumn("Earn"))
    }
    fn describe(&self) -> String {
        "failing".into()
    }
}

#[test]
fn every_category_gets_box_whisker_and_median() {
    let mut r = ChartRenderer::new(ChartConfig::default());
    let outcome = r.redraw(ViewState::default(), &sample()).unwrap();
    assert!(matches!(outcome, DrawOutcome::Drawn { categories: 5, .. }));
    assert_eq!(r.scene().rects().count(), 5);
    assert_eq!(r.scene().lines().count(), 10);
    assert_eq!(r.scene().axes().count(), 2);
    assert_eq!(r.scene().texts().count(), 3);
    for h in HealthStatus::ALL {
        let b = r.scene().box_for(h).unwrap();
        assert_eq!(b.height, 25.0);
        let top = r.y_scale().position(h).unwrap();
        assert_eq!(b.y, top + 20.0);
        let m = r.scene().line_for(h, LineKind::Median).unwrap();
        assert!(m.x1 >= b.x && m.x1 <= b.x + b.width);
        assert_eq!((m.y1, m.y2), (top + 20.0, top + 45.0));
    }
    // the 1.5 value is the only upper outlier
    let circles: Vec<_> = r.scene().circles().collect();
    assert_eq!(circles.len(), 1);
    assert_eq!(circles[0].row, HealthStatus::Good);
    assert!((circles[0].cx - 1.5 / 2.0 * 420.0).abs() < 1e-9);
}

#[test]
fn redraw_replaces_previous_marks() {
    let mut r = ChartRenderer::new(ChartConfig::default());
    let data = sample();
    r.redraw(ViewState::default(), &data).unwrap();
    r.redraw(ViewState::default().with_max(1.0), &data).unwrap();
    r.redraw(ViewState::default().with_max(0.5), &data).unwrap();
    assert_eq!(r.scene().rects().count(), 5);
    assert_eq!(r.scene().axes().count(), 2);
    assert_eq!(r.scene().texts().count(), 3);
    let bottom = r.scene().axes().next().unwrap();
    assert_eq!(bottom.ticks.last().unwrap().label, "0.50");
}

#[test]
fn doubling_the_domain_halves_pixel_positions() {
    let data = sample();
    let mut r = ChartRenderer::new(ChartConfig::default());
    r.redraw(ViewState::new(1.0, false), &data).unwrap();
    let at_one = *r.scene().box_for(HealthStatus::Fair).unwrap();
    r.redraw(ViewState::new(2.0, false), &data).unwrap();
    let at_two = *r.scene().box_for(HealthStatus::Fair).unwrap();
    assert!((at_one.x - 2.0 * at_two.x).abs() < 1e-9);
    assert!((at_one.width - 2.0 * at_two.width).abs() < 1e-9);

    let x1 = r.x_scale(&ViewState::new(1.0, false)).apply(0.7);
    let x2 = r.x_scale(&ViewState::new(2.0, false)).apply(0.7);
    assert!((x1 - 2.0 * x2).abs() < 1e-9);
}

#[test]
fn excluding_outliers_recomputes_quartiles() {
    let records = vec![
        rec(0.05, HealthStatus::Poor),
        rec(0.1, HealthStatus::Poor),
        rec(0.15, HealthStatus::Poor),
        rec(0.25, HealthStatus::Poor),
    ];
    let data = InMemory::new(records);
    let mut r = ChartRenderer::new(ChartConfig::default());

    r.redraw(ViewState::new(2.0, false), &data).unwrap();
    let with = r.summaries()[0].stats.clone().unwrap();
    let box_with = *r.scene().box_for(HealthStatus::Poor).unwrap();

    r.redraw(ViewState::new(2.0, true), &data).unwrap();
    let without = r.summaries()[0].stats.clone().unwrap();
    let box_without = *r.scene().box_for(HealthStatus::Poor).unwrap();

    assert_eq!(r.summaries()[0].count, 3);
    assert_ne!(with.q3, without.q3);
    assert_ne!(with.median, without.median);
    assert!((without.median - 0.1).abs() < 1e-12);
    assert!(box_without.width < box_with.width);
}

#[test]
fn empty_category_draws_nothing() {
    let data = InMemory::new(vec![rec(0.1, HealthStatus::Good), rec(0.2, HealthStatus::Good)]);
    let mut r = ChartRenderer::new(ChartConfig::default());
    let outcome = r.redraw(ViewState::default(), &data).unwrap();
    assert!(matches!(outcome, DrawOutcome::Drawn { categories: 1, .. }));
    for h in [HealthStatus::Poor, HealthStatus::Fair, HealthStatus::VeryGood, HealthStatus::Excellent] {
        assert_eq!(r.scene().marks_for(h), 0);
    }
    assert_eq!(r.scene().marks_for(HealthStatus::Good), 3);
}

#[test]
fn filter_can_empty_a_category() {
    let data = InMemory::new(vec![rec(0.9, HealthStatus::Excellent), rec(0.1, HealthStatus::Fair)]);
    let mut r = ChartRenderer::new(ChartConfig::default());
    r.redraw(ViewState::new(2.0, true), &data).unwrap();
    assert_eq!(r.scene().marks_for(HealthStatus::Excellent), 0);
    assert_eq!(r.scene().marks_for(HealthStatus::Fair), 3);
}

#[test]
fn stale_response_is_not_drawn_after_newer_one() {
    let data = sample();
    let mut r = ChartRenderer::new(ChartConfig::default());
    let first = r.render(ViewState::new(2.0, false)).unwrap();
    let second = r.render(ViewState::new(1.0, false)).unwrap();
    assert!(second.generation() > first.generation());

    // second resolves first
    let b = r.resolve(second, data.fetch());
    assert!(b.is_drawn());
    let drawn = r.scene().clone();

    let a = r.resolve(first, data.fetch());
    assert!(matches!(a, DrawOutcome::Stale { generation: 1, latest: 2 }));
    assert_eq!(r.scene(), &drawn);
    assert_eq!(r.state(), FetchState::Idle);
    assert_eq!(r.scene().axes().next().unwrap().ticks.last().unwrap().label, "1.0");
}

#[test]
fn earlier_request_resolving_first_is_also_discarded() {
    let data = sample();
    let mut r = ChartRenderer::new(ChartConfig::default());
    let first = r.render(ViewState::new(2.0, false)).unwrap();
    let second = r.render(ViewState::new(1.0, false)).unwrap();
    assert!(matches!(r.resolve(first, data.fetch()), DrawOutcome::Stale { .. }));
    assert_eq!(r.scene().rects().count(), 0);
    assert!(r.resolve(second, data.fetch()).is_drawn());
    assert_eq!(r.scene().rects().count(), 5);
}

#[test]
fn failed_fetch_leaves_axes_only() {
    let mut r = ChartRenderer::new(ChartConfig::default());
    r.redraw(ViewState::default(), &sample()).unwrap();
    let outcome = r.redraw(ViewState::default(), &Failing).unwrap();
    assert!(matches!(outcome, DrawOutcome::Failed { error: DataError::MissingColumn(_), .. }));
    assert_eq!(r.scene().axes().count(), 2);
    assert_eq!(r.scene().rects().count(), 0);
    assert_eq!(r.scene().lines().count(), 0);
}

#[test]
fn controls_drive_redraws() {
    let data = sample();
    let mut controls = Controls::default();
    let mut r = ChartRenderer::new(ChartConfig::default());
    r.redraw(controls.view(), &data).unwrap();

    let view = controls.on_control_change("0.8", true);
    r.redraw(view, &data).unwrap();
    assert_eq!(r.view(), ViewState::new(0.8, true));

    let view = controls.on_control_change("0", true);
    assert!(r.redraw(view, &data).is_err());
    // the previous chart stays up
    assert_eq!(r.view(), ViewState::new(0.8, true));
    assert_eq!(r.scene().rects().count(), 5);
}

#[test]
fn svg_output_carries_marks_and_axis_ids() {
    let mut r = ChartRenderer::new(ChartConfig::default());
    r.redraw(ViewState::default(), &sample()).unwrap();
    let svg = r.to_svg();
    assert_eq!(svg.matches("<rect ").count(), 5);
    assert_eq!(svg.matches("<circle ").count(), 1);
    assert_eq!(svg.matches(r#"<g id="axis""#).count(), 2);
    assert!(svg.contains("Distribution of Earnings for Employed People by Health Status"));
    assert!(svg.contains(">Very good</text>"));
    assert!(svg.contains(r#"fill="rgb(0,128,0)""#));
}
