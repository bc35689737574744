mod app;

use anyhow::{Result, anyhow};
use app::{AppConfig, GradientClockApp};
use eframe::egui;
use tracing_subscriber::EnvFilter;

const WINDOW_TITLE: &str = "Gradient Clock";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    let config = AppConfig::default();
    tracing::info!(
        half_cycle_secs = config.half_cycle.as_secs(),
        "starting gradient clock"
    );

    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(|cc| Ok(Box::new(GradientClockApp::new(cc, config)))),
    )
    .map_err(|e| anyhow!("eframe failed: {e}"))?;

    Ok(())
}
