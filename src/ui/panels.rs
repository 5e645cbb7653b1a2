use eframe::egui::{self, RichText, Ui};

use crate::config::ViewMode;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(RichText::new(state.source_name()).strong());
        ui.separator();

        ui.label(format!("{} points", state.table.len()));
        ui.separator();

        ui.label(match state.mode {
            ViewMode::Scatter => "Scatter view",
            ViewMode::Line => "Line view",
        });
        ui.separator();

        if state.mode == ViewMode::Scatter {
            ui.toggle_value(&mut state.show_labels, "Labels");
        }
        ui.toggle_value(&mut state.show_profile, "Axis profiles");

        if ui
            .button("Reset camera")
            .on_hover_text("Double-click the view to do the same")
            .clicked()
        {
            state.reset_camera();
        }

        if state.table.is_empty() {
            ui.separator();
            ui.label(RichText::new("File has no records").weak());
        }
    });
}
