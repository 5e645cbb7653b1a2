use std::path::PathBuf;

use anyhow::Result;
use eframe::egui;

use crate::app::XyzViewerApp;
use crate::config::ViewMode;
use crate::data::model::PointTable;
use crate::state::AppState;

/// Shows a finished table. Called once per run; the table is handed over.
pub trait Presenter {
    fn present(&mut self, table: PointTable, mode: ViewMode) -> Result<()>;
}

/// Opens a native window and blocks until the user closes it.
pub struct NativePresenter {
    pub source: PathBuf,
    pub show_labels: bool,
}

impl Presenter for NativePresenter {
    fn present(&mut self, table: PointTable, mode: ViewMode) -> Result<()> {
        let style = mode.style();
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(style.window_size)
                .with_min_inner_size([600.0, 400.0])
                .with_resizable(style.resizable),
            ..Default::default()
        };

        let state = AppState::new(self.source.clone(), table, mode, self.show_labels);
        let title = format!("XYZ Viewer – {} ({mode})", state.source_name());
        log::info!("Opening {mode} view of {} points", state.table.len());

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| Ok(Box::new(XyzViewerApp::new(state)))),
        )
        .map_err(|e| anyhow::anyhow!("viewer window failed: {e}"))
    }
}
