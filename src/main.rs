#![warn(clippy::all)]

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};
    use gol_desktop::Config;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let [w, h] = Config::WINDOW_SIZE;
    let [min_w, min_h] = Config::MIN_WINDOW_SIZE;
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(w, h))
            .with_min_inner_size(vec2(min_w, min_h)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    tracing::info!("starting");
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Ok(Box::new(gol_desktop::App::new()))),
    )
    .map_err(|err| anyhow::anyhow!("window event loop failed: {}", err))
}
