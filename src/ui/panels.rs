use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use planet_explorer::data::Catalog;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – known planets
// ---------------------------------------------------------------------------

/// Render the clickable planet list.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Planets");
    ui.separator();

    let Some(catalog) = &state.catalog else {
        ui.label("No catalog loaded.");
        return;
    };

    // Collect names first so clicks can mutate state.
    let current = Catalog::normalize(&state.query);
    let entries: Vec<(String, bool)> = catalog
        .iter()
        .map(|p| (p.name().to_string(), p.key() == current))
        .collect();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (name, selected) in &entries {
                if ui.selectable_label(*selected, name).clicked() {
                    state.select_planet(name);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(path) = &state.catalog_path {
            ui.label(format!(
                "{} planets from {}",
                state.planet_count(),
                path.display()
            ));
        }

        ui.separator();

        if ui
            .selectable_label(state.dark_mode, "Toggle Dark Mode")
            .clicked()
        {
            state.toggle_dark_mode();
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open planet catalog")
        .add_filter("Planet catalog", &["txt"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        state.load_catalog(&path);
    }
}
