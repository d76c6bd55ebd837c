use eframe::egui;

use crate::state::AppState;
use crate::ui::{details, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PlanetExplorerApp {
    pub state: AppState,
}

impl PlanetExplorerApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for PlanetExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(if self.state.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: planet list ----
        egui::SidePanel::left("planet_list")
            .default_width(120.0)
            .resizable(false)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: query form ----
        egui::CentralPanel::default().show(ctx, |ui| {
            details::query_panel(ui, &mut self.state);
        });
    }
}
