// File: crates/boxplot-dioxus/src/lib.rs
// Summary: Desktop page hosting the box plot with its slider and checkbox (Dioxus, desktop only).
// Notes:
// - UI deps sit behind the `desktop` feature, so the workspace builds without fetching
//   Dioxus unless explicitly enabled. `page` (static HTML export) is always available.
// - Each control change renders axes immediately, then fetches on a worker thread; only
//   the newest request's data is drawn.

pub mod page;

#[cfg(feature = "desktop")]
pub mod ui {
    use std::sync::Arc;

    use boxplot_core::controls::{CHECKBOX_ID, SLIDER_ID};
    use boxplot_core::data::source_for;
    use boxplot_core::{ChartConfig, ChartRenderer, ControlEvent, Controls, DataSource, DrawOutcome, ViewState};
    use dioxus::prelude::*;

    use crate::page::{CHECKBOX_LABEL, PLOT_ID};

    pub type SharedSource = Arc<dyn DataSource + Send + Sync>;

    #[derive(Props, Clone)]
    pub struct BoxPlotPageProps {
        pub source: SharedSource,
        #[props(default)]
        pub config: ChartConfig,
    }

    impl PartialEq for BoxPlotPageProps {
        fn eq(&self, _other: &Self) -> bool { false }
    }

    /// Signals shared by the event handlers; all `Copy`.
    #[derive(Clone, Copy)]
    struct PageState {
        renderer: Signal<ChartRenderer>,
        svg: Signal<String>,
        status: Signal<Option<String>>,
        source: Signal<SharedSource>,
    }

    impl PageState {
        /// Draw axes for `view` now and the boxes once the fetch comes back.
        /// Reads go through `peek` so an effect calling this does not subscribe to them.
        fn request(mut self, view: ViewState) {
            let ticket = match self.renderer.write().render(view) {
                Ok(ticket) => ticket,
                Err(e) => {
                    self.status.set(Some(e.to_string()));
                    return;
                }
            };
            self.svg.set(self.renderer.peek().to_svg());

            let source = self.source.peek().clone();
            spawn(async move {
                let (tx, rx) = futures::channel::oneshot::channel();
                std::thread::spawn(move || {
                    let _ = tx.send(source.fetch());
                });
                let Ok(fetched) = rx.await else {
                    log::warn!("fetch worker for render #{} went away", ticket.generation());
                    return;
                };
                let outcome = self.renderer.write().resolve(ticket, fetched);
                match outcome {
                    DrawOutcome::Drawn { .. } => {
                        self.status.set(None);
                        self.svg.set(self.renderer.peek().to_svg());
                    }
                    DrawOutcome::Failed { error, .. } => {
                        self.status.set(Some(format!("could not load data: {error}")));
                        self.svg.set(self.renderer.peek().to_svg());
                    }
                    DrawOutcome::Stale { .. } => {}
                }
            });
        }
    }

    /// The `plot` container: inline SVG chart, `range` slider and `check` checkbox.
    #[component]
    pub fn BoxPlotPage(props: BoxPlotPageProps) -> Element {
        let mut controls = use_signal(Controls::default);
        let renderer = use_signal(|| ChartRenderer::new(props.config.clone()));
        let svg = use_signal(String::new);
        let status = use_signal(|| Option::<String>::None);
        let source = use_signal(|| props.source.clone());
        let page = PageState { renderer, svg, status, source };

        // Initial draw with the default slider position, once after mount
        use_effect(move || page.request(controls.peek().view()));

        let slider = controls.read().slider;
        let checked = controls.read().checkbox.checked;
        let shown = slider.display();
        let markup = svg.read().clone();

        rsx! {
            div { id: PLOT_ID,
                div { dangerous_inner_html: markup }
                input {
                    r#type: "range",
                    id: SLIDER_ID,
                    min: slider.min.to_string(),
                    max: slider.max.to_string(),
                    step: slider.step.to_string(),
                    value: slider.value.to_string(),
                    onchange: move |evt: FormEvent| {
                        let view = controls.write().apply(&ControlEvent::SliderChanged(evt.value()));
                        page.request(view);
                    },
                }
                span { "{shown}" }
                label {
                    input {
                        r#type: "checkbox",
                        id: CHECKBOX_ID,
                        checked: checked,
                        onchange: move |evt: FormEvent| {
                            let view = controls.write().apply(&ControlEvent::CheckboxToggled(evt.checked()));
                            page.request(view);
                        },
                    }
                    " {CHECKBOX_LABEL}"
                }
                if let Some(msg) = status.read().clone() {
                    p { class: "status", "{msg}" }
                }
            }
        }
    }

    /// What the launcher hands to the root component.
    #[derive(Clone)]
    struct Setup {
        config: ChartConfig,
    }

    #[component]
    fn App() -> Element {
        let setup = use_context::<Setup>();
        let location = setup.config.data.clone();
        let source: SharedSource = use_hook(move || Arc::from(source_for(&location)));
        log::info!("box plot page reading {}", source.describe());
        rsx! { BoxPlotPage { source, config: setup.config.clone() } }
    }

    /// Open a desktop window showing the page for `config`.
    pub fn run_page(config: ChartConfig) -> Result<(), String> {
        let title = config.titles.chart.clone();
        let setup = Setup { config };
        let providers: Vec<Box<dyn Fn() -> Box<dyn std::any::Any> + Send + Sync>> =
            vec![Box::new(move || Box::new(setup.clone()) as Box<dyn std::any::Any>)];
        let cfg = dioxus_desktop::Config::new()
            .with_window(dioxus_desktop::WindowBuilder::new().with_title(title))
            .with_custom_head("<style>body{font-family:sans-serif;margin:16px}</style>".to_string());
        let globals: Vec<Box<dyn std::any::Any>> = vec![Box::new(cfg)];
        dioxus_desktop::launch::launch(App, providers, globals);
        Ok(())
    }
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_page(_config: boxplot_core::ChartConfig) -> Result<(), &'static str> {
    Err("boxplot-dioxus built without `desktop` feature; enable features to run the page")
}
