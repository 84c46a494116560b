// File: crates/boxplot-dioxus/src/bin/desktop_demo.rs
// Purpose: Launcher for the desktop box plot page. Optional argument: a .toml config or a CSV path/URL.

#[cfg(feature = "desktop")]
fn main() {
    pretty_env_logger::init();
    let config = match std::env::args().nth(1) {
        Some(arg) if arg.ends_with(".toml") => match boxplot_core::ChartConfig::from_path(&arg) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("boxplot-dioxus: cannot load {arg}: {e}");
                return;
            }
        },
        Some(location) => boxplot_core::ChartConfig { data: location, ..Default::default() },
        None => boxplot_core::ChartConfig::default(),
    };
    if let Err(e) = boxplot_dioxus::ui::run_page(config) {
        eprintln!("boxplot-dioxus demo error: {e}");
    }
}

#[cfg(not(feature = "desktop"))]
fn main() {
    eprintln!("This demo requires --features desktop");
}
