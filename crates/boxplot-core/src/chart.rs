// File: crates/boxplot-core/src/chart.rs
// Summary: ChartRenderer: redraw state machine, axes and per-category box plot marks.

use crate::axis::Axis;
use crate::config::ChartConfig;
use crate::data::{DataSource, Record};
use crate::error::{ChartError, DataError};
use crate::health::HealthStatus;
use crate::scale::{BandScale, LinearScale};
use crate::scene::{Anchor, Circle, Element, Line, LineKind, Rect, Scene, Text};
use crate::stats::{summarize, BoxPlotStats, CategorySummary};
use crate::view::ViewState;
use crate::{raster, svg};

/// Handle for one issued redraw. Hand it back to [`ChartRenderer::resolve`] with the
/// fetch result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderTicket {
    generation: u64,
    view: ViewState,
}

impl RenderTicket {
    pub fn generation(&self) -> u64 { self.generation }
    pub fn view(&self) -> ViewState { self.view }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    /// `latest` is the newest generation issued; `in_flight` counts unresolved tickets.
    FetchPending { latest: u64, in_flight: usize },
}

#[derive(Debug)]
pub enum DrawOutcome {
    /// Marks were drawn for `categories` non-empty rows.
    Drawn { generation: u64, categories: usize },
    /// A newer request was issued after this one; nothing was drawn.
    Stale { generation: u64, latest: u64 },
    /// The fetch failed; only the axes remain.
    Failed { generation: u64, error: DataError },
}

impl DrawOutcome {
    pub fn is_drawn(&self) -> bool {
        matches!(self, DrawOutcome::Drawn { .. })
    }
}

/// Owns the canvas scene and draws the box plot for a [`ViewState`].
///
/// Rendering is split in two: [`render`](Self::render) clears the marks, draws the axes
/// and issues a ticket; [`resolve`](Self::resolve) draws the boxes once the data arrives.
/// Only the most recently issued ticket is ever drawn.
pub struct ChartRenderer {
    config: ChartConfig,
    scene: Scene,
    view: ViewState,
    issued: u64,
    /// Latest ticket that has been resolved; resolving it again draws nothing.
    resolved: u64,
    state: FetchState,
    summaries: Vec<CategorySummary>,
}

impl ChartRenderer {
    pub fn new(config: ChartConfig) -> Self {
        let mut scene = Scene::new();
        push_titles(&mut scene, &config);
        Self {
            config,
            scene,
            view: ViewState::default(),
            issued: 0,
            resolved: 0,
            state: FetchState::Idle,
            summaries: Vec::new(),
        }
    }

    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn scene(&self) -> &Scene { &self.scene }
    pub fn state(&self) -> FetchState { self.state }
    /// View of the latest accepted render request.
    pub fn view(&self) -> ViewState { self.view }
    pub fn latest_generation(&self) -> u64 { self.issued }
    /// Statistics behind the marks currently on the canvas.
    pub fn summaries(&self) -> &[CategorySummary] { &self.summaries }

    /// x scale: `[0, max_domain_value]` onto `[0, plot_width]`.
    pub fn x_scale(&self, view: &ViewState) -> LinearScale {
        LinearScale::new((0.0, view.max_domain_value), (0.0, self.config.layout.plot_width()))
    }

    /// Category bands, first category nearest the bottom edge. The band range runs
    /// `[plot_height, 0]`, so rows read bottom-to-top in `HealthStatus::ALL` order.
    pub fn y_scale(&self) -> BandScale {
        BandScale::new(HealthStatus::ALL.to_vec(), (self.config.layout.plot_height(), 0.0))
    }

    /// Start a redraw: clear marks, draw both axes and issue a ticket for the data fetch.
    pub fn render(&mut self, view: ViewState) -> Result<RenderTicket, ChartError> {
        if let Err(e) = view.validate() {
            log::warn!("render rejected: {e}");
            return Err(e);
        }
        self.scene.clear_dynamic();
        self.summaries.clear();

        let x = self.x_scale(&view);
        let y = self.y_scale();
        let bottom = (0.0, self.config.layout.plot_height());
        self.scene.push(Element::Axis(Axis::bottom(&x, self.config.tick_count, bottom)));
        self.scene.push(Element::Axis(Axis::left(&y, (0.0, 0.0))));

        self.issued += 1;
        self.view = view;
        self.state = match self.state {
            FetchState::Idle => FetchState::FetchPending { latest: self.issued, in_flight: 1 },
            FetchState::FetchPending { in_flight, .. } => {
                FetchState::FetchPending { latest: self.issued, in_flight: in_flight + 1 }
            }
        };
        log::debug!(
            "render #{}: domain [0, {}], outliers_excluded={}",
            self.issued,
            view.max_domain_value,
            view.outliers_excluded
        );
        Ok(RenderTicket { generation: self.issued, view })
    }

    /// Finish a redraw with the fetched records. Stale tickets and tickets that were
    /// already resolved are discarded.
    pub fn resolve(&mut self, ticket: RenderTicket, fetched: Result<Vec<Record>, DataError>) -> DrawOutcome {
        if ticket.generation == self.resolved {
            log::warn!("ticket #{} was already resolved", ticket.generation);
            return DrawOutcome::Stale { generation: ticket.generation, latest: self.issued };
        }
        self.state = match self.state {
            FetchState::FetchPending { latest, in_flight } if in_flight > 1 => {
                FetchState::FetchPending { latest, in_flight: in_flight - 1 }
            }
            _ => FetchState::Idle,
        };

        if ticket.generation != self.issued {
            log::warn!("discarding stale response #{} (latest #{})", ticket.generation, self.issued);
            return DrawOutcome::Stale { generation: ticket.generation, latest: self.issued };
        }
        self.resolved = ticket.generation;

        let records = match fetched {
            Ok(records) => records,
            Err(error) => {
                log::error!("data fetch for render #{} failed: {error}", ticket.generation);
                return DrawOutcome::Failed { generation: ticket.generation, error };
            }
        };

        let categories = self.draw_rows(&records, &ticket.view);
        log::debug!("render #{} drew {categories} categories from {} records", ticket.generation, records.len());
        DrawOutcome::Drawn { generation: ticket.generation, categories }
    }

    /// Render and resolve in one step against `source`.
    pub fn redraw(&mut self, view: ViewState, source: &dyn DataSource) -> Result<DrawOutcome, ChartError> {
        let ticket = self.render(view)?;
        log::debug!("fetching {}", source.describe());
        Ok(self.resolve(ticket, source.fetch()))
    }

    /// SVG document of the current canvas.
    pub fn to_svg(&self) -> String {
        svg::to_svg(&self.scene, &self.config.layout, &self.config.theme())
    }

    /// PNG bytes of the current canvas.
    pub fn to_png(&self) -> Result<Vec<u8>, ChartError> {
        raster::render_png(&self.scene, &self.config.layout, &self.config.theme())
    }

    fn draw_rows(&mut self, records: &[Record], view: &ViewState) -> usize {
        let x = self.x_scale(view);
        let y = self.y_scale();
        let cutoff = view.outliers_excluded.then_some(self.config.outlier_cutoff);
        let summaries = summarize(records, cutoff);

        let mut drawn = 0;
        for summary in &summaries {
            let Some(stats) = &summary.stats else {
                log::debug!("no values for {}, row left empty", summary.status);
                continue;
            };
            let Some(top) = y.position(summary.status) else { continue };
            self.draw_row(summary.status, stats, top, &x);
            drawn += 1;
        }
        self.summaries = summaries;
        drawn
    }

    fn draw_row(&mut self, row: HealthStatus, stats: &BoxPlotStats, top: f64, x: &LinearScale) {
        let g = self.config.layout.row;
        let whisker_y = top + g.whisker_offset;
        let box_y = top + g.box_offset;

        // lower end clamped to the plot edge, upper end may run past the range
        self.scene.push(Element::Line(Line {
            row,
            kind: LineKind::Whisker,
            x1: x.apply(stats.lower_fence).max(0.0),
            y1: whisker_y,
            x2: x.apply(stats.upper_fence),
            y2: whisker_y,
        }));

        let (x_q1, x_q3) = (x.apply(stats.q1), x.apply(stats.q3));
        self.scene.push(Element::Rect(Rect { row, x: x_q1, y: box_y, width: x_q3 - x_q1, height: g.box_height }));

        let x_median = x.apply(stats.median);
        self.scene.push(Element::Line(Line {
            row,
            kind: LineKind::Median,
            x1: x_median,
            y1: box_y,
            x2: x_median,
            y2: box_y + g.box_height,
        }));

        for &v in &stats.outliers {
            self.scene.push(Element::Circle(Circle { row, cx: x.apply(v), cy: whisker_y, r: g.marker_radius }));
        }
    }
}

fn push_titles(scene: &mut Scene, config: &ChartConfig) {
    let layout = &config.layout;
    let cx = layout.width as f64 / 2.0;
    // positions in plot space, matching the page: chart title on the top edge,
    // x title under the axis labels, y title rotated along the left margin
    let titles = [
        (cx, 0.0, config.titles.chart.as_str(), None),
        (cx, layout.plot_height() + 28.0, config.titles.x_axis.as_str(), None),
        (-(layout.plot_height() * 0.5 + 10.0), -40.0, config.titles.y_axis.as_str(), Some(-90.0)),
    ];
    for (x, y, content, rotate) in titles {
        scene.push(Element::Text(Text {
            x,
            y,
            content: content.to_string(),
            anchor: Anchor::Middle,
            rotate,
            font_size: layout.font_size,
        }));
    }
}
