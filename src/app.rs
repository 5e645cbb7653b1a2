use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, profile, viewport};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct XyzViewerApp {
    pub state: AppState,
}

impl XyzViewerApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for XyzViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: toolbar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: per-axis profiles ----
        if self.state.show_profile {
            egui::TopBottomPanel::bottom("profile_panel")
                .default_height(220.0)
                .resizable(true)
                .show(ctx, |ui| {
                    profile::axis_profiles(ui, &self.state.table);
                });
        }

        // ---- Central panel: 3D view ----
        egui::CentralPanel::default().show(ctx, |ui| {
            viewport::scene_view(ui, &mut self.state);
        });
    }
}
