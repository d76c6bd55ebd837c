use eframe::egui::{self, Key, RichText, TextEdit, Ui};

use crate::config::IMAGE_SIZE;
use crate::state::{AppState, ImageSlot, Query};

// ---------------------------------------------------------------------------
// Query form and answer (central panel)
// ---------------------------------------------------------------------------

/// Render the name field, the query buttons and the last answer.
pub fn query_panel(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new("Enter a planet name:").size(16.0));

        let field = ui.add(TextEdit::singleline(&mut state.query).desired_width(200.0));
        // Enter in the field behaves like "Show Details".
        if field.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            state.run(Query::Details);
        }

        ui.add_space(4.0);
        for query in Query::ALL {
            if ui.button(query.label()).clicked() {
                state.run(query);
            }
        }

        ui.add_space(10.0);
        ui.scope(|ui: &mut Ui| {
            ui.set_max_width(400.0);
            ui.add(egui::Label::new(RichText::new(&state.output).size(16.0)).wrap());
        });

        ui.add_space(5.0);
        planet_image(ui, &state.image);
    });
}

fn planet_image(ui: &mut Ui, slot: &ImageSlot) {
    match slot {
        ImageSlot::Hidden => {}
        ImageSlot::Unavailable => {
            ui.label(RichText::new("No image available").size(16.0));
        }
        ImageSlot::Available(path) => {
            let uri = format!("file://{}", path.display());
            ui.add(
                egui::Image::from_uri(uri)
                    .fit_to_exact_size(egui::vec2(IMAGE_SIZE, IMAGE_SIZE)),
            );
        }
    }
}
