use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::data::model::PointTable;

// ---------------------------------------------------------------------------
// Axis profiles (bottom panel)
// ---------------------------------------------------------------------------

const AXIS_COLORS: [Color32; 3] = [
    Color32::from_rgb(0xe4, 0x57, 0x56),
    Color32::from_rgb(0x4c, 0xaf, 0x50),
    Color32::from_rgb(0x42, 0x85, 0xf4),
];

/// `[row, value]` pairs for one column.
fn profile_points(column: &[f64]) -> PlotPoints {
    column
        .iter()
        .enumerate()
        .map(|(row, &value)| [row as f64, value])
        .collect()
}

/// Plot x, y and z against row index.
pub fn axis_profiles(ui: &mut Ui, table: &PointTable) {
    Plot::new("axis_profiles")
        .legend(Legend::default())
        .x_axis_label("Row")
        .y_axis_label("Value")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let columns = [("x", table.x()), ("y", table.y()), ("z", table.z())];
            for ((name, column), color) in columns.into_iter().zip(AXIS_COLORS) {
                let line = Line::new(profile_points(column))
                    .name(name)
                    .color(color)
                    .width(1.5);
                plot_ui.line(line);
            }
        });
}
