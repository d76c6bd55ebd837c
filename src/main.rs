mod app;
mod config;
mod state;
mod ui;

use anyhow::{Context, Result};
use app::PlanetExplorerApp;
use config::{Settings, WINDOW_SIZE, WINDOW_TITLE};
use eframe::egui;
use planet_explorer::data::images::ImageLocator;
use planet_explorer::data::loader::load_file;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let settings = Settings::from_args(std::env::args_os().skip(1));

    // A broken catalog is fatal at startup; later re-opens only report.
    let catalog = load_file(&settings.catalog_path).with_context(|| {
        format!(
            "loading planet catalog {}",
            settings.catalog_path.display()
        )
    })?;

    let mut state = AppState::new(ImageLocator::new(&settings.images_dir));
    state.set_catalog(catalog, settings.catalog_path.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can render the jpg pictures.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(PlanetExplorerApp::new(state)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("running the UI: {e}"))
}
