// main.rs - Window setup and entry point.

use eframe::egui;
use log::info;

mod grid;
mod patterns;
mod ui;

use grid::{GRID_HEIGHT, GRID_WIDTH};
use ui::LifeApp;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let size = ui::canvas_size();
    info!(
        "starting: {}x{} window, {}x{} cells",
        size.x, size.y, GRID_WIDTH, GRID_HEIGHT
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([size.x, size.y])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(|_cc| Box::new(LifeApp::default())),
    )
    .map_err(|e| anyhow::anyhow!("display failed: {e}"))?;

    info!("clean exit");
    Ok(())
}
