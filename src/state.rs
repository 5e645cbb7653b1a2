use std::path::PathBuf;

use crate::config::ViewMode;
use crate::data::model::PointTable;
use crate::ui::camera::Camera;
use crate::ui::scene::Scene;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// File the table was loaded from.
    pub source: PathBuf,

    /// Loaded points; never modified after startup.
    pub table: PointTable,

    /// Presentation chosen at startup.
    pub mode: ViewMode,

    /// Table laid out for `mode` (cached).
    pub scene: Scene,

    pub camera: Camera,

    /// Draw row-index labels next to scatter points.
    pub show_labels: bool,

    /// Show the per-axis profile panel.
    pub show_profile: bool,

    /// Row under the pointer, if any.
    pub hovered: Option<usize>,
}

impl AppState {
    pub fn new(source: PathBuf, table: PointTable, mode: ViewMode, show_labels: bool) -> Self {
        let scene = Scene::build(&table, mode);
        Self {
            source,
            table,
            mode,
            scene,
            camera: mode.default_camera(),
            show_labels: show_labels && mode == ViewMode::Scatter,
            show_profile: false,
            hovered: None,
        }
    }

    /// Put the camera back where the mode starts it.
    pub fn reset_camera(&mut self) {
        self.camera = self.mode.default_camera();
    }

    /// Short file name for the title bar.
    pub fn source_name(&self) -> String {
        self.source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }

    /// One-line description of the hovered row.
    pub fn hover_text(&self) -> Option<String> {
        let row = self.hovered?;
        let [x, y, z] = self.table.row(row)?;
        Some(format!("row {row}\nx = {x:.4}\ny = {y:.4}\nz = {z:.4}"))
    }
}
