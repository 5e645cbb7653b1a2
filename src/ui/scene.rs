use eframe::egui::{Color32, Stroke};
use glam::Vec3;

use crate::color::{ColorScale, colors_for, is_spread};
use crate::config::ViewMode;
use crate::data::model::{Bounds, PointTable};
use crate::ui::camera::Camera;

// ---------------------------------------------------------------------------
// Per-mode presentation settings
// ---------------------------------------------------------------------------

/// Fixed look of a view mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewStyle {
    /// Relative x:y:z lengths of the axis box.
    pub aspect: Vec3,
    pub eye: Vec3,
    pub up: Vec3,
    /// Window inner size in points.
    pub window_size: [f32; 2],
    pub resizable: bool,
    pub marker_radius: f32,
    pub line: Option<Stroke>,
    pub color_scale: ColorScale,
}

impl ViewMode {
    pub fn style(self) -> ViewStyle {
        match self {
            ViewMode::Scatter => ViewStyle {
                aspect: Vec3::ONE,
                eye: Vec3::splat(1.25),
                up: Vec3::Z,
                window_size: [1200.0, 800.0],
                resizable: true,
                marker_radius: 4.0,
                line: None,
                color_scale: ColorScale::Plasma,
            },
            ViewMode::Line => ViewStyle {
                aspect: Vec3::new(1.0, 1.0, 0.7),
                eye: Vec3::new(0.0, 1.0707, 1.0),
                up: Vec3::Z,
                window_size: [1600.0, 900.0],
                resizable: false,
                marker_radius: 2.0,
                line: Some(Stroke::new(2.0, Color32::from_rgb(0x00, 0x00, 0x8b))),
                color_scale: ColorScale::Viridis,
            },
        }
    }

    pub fn default_camera(self) -> Camera {
        let style = self.style();
        Camera::looking_at_origin(style.eye, style.up)
    }
}

// ---------------------------------------------------------------------------
// Scene – what the viewport draws
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ScenePoint {
    /// Row of the source table.
    pub row: usize,
    /// Position inside the axis box.
    pub position: Vec3,
    pub color: Color32,
    pub label: Option<String>,
}

/// Table rows mapped into the axis box, ready to project.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub points: Vec<ScenePoint>,
    /// Set for line views; joins consecutive points.
    pub line: Option<Stroke>,
    pub marker_radius: f32,
    /// Half extents of the axis box.
    pub half_extent: Vec3,
    /// Data range per axis, for annotations.
    pub bounds: Option<Bounds>,
}

impl Scene {
    /// Lay out `table` for `mode`. The box is centred at the origin and
    /// sized by the mode's aspect ratio; each axis is scaled independently.
    pub fn build(table: &PointTable, mode: ViewMode) -> Self {
        let style = mode.style();
        let half_extent = 0.5 * style.aspect;
        let bounds = table.bounds();

        let colors = match mode {
            ViewMode::Scatter => {
                let rows: Vec<f64> = (0..table.len()).map(|i| i as f64).collect();
                colors_for(&rows, style.color_scale)
            }
            ViewMode::Line => colors_for(table.z(), style.color_scale),
        };

        let points = table
            .rows()
            .zip(colors)
            .enumerate()
            .map(|(row, (values, color))| ScenePoint {
                row,
                position: bounds
                    .map(|b| to_box(values, &b, half_extent))
                    .unwrap_or(Vec3::ZERO),
                color,
                label: (mode == ViewMode::Scatter).then(|| row.to_string()),
            })
            .collect();

        Scene {
            points,
            line: style.line,
            marker_radius: style.marker_radius,
            half_extent,
            bounds,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive point pairs of the polyline; empty for scatter views.
    pub fn segments(&self) -> impl Iterator<Item = (&ScenePoint, &ScenePoint)> + '_ {
        let points: &[ScenePoint] = if self.line.is_some() { &self.points } else { &[] };
        points.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// The 8 corners of the axis box.
    pub fn box_corners(&self) -> [Vec3; 8] {
        let h = self.half_extent;
        std::array::from_fn(|i| {
            Vec3::new(
                if i & 1 == 0 { -h.x } else { h.x },
                if i & 2 == 0 { -h.y } else { h.y },
                if i & 4 == 0 { -h.z } else { h.z },
            )
        })
    }

    /// Corner index pairs forming the 12 box edges.
    pub fn box_edges() -> impl Iterator<Item = (usize, usize)> {
        (0..8usize).flat_map(|a| {
            [1usize, 2, 4]
                .into_iter()
                .filter(move |bit| a & bit == 0)
                .map(move |bit| (a, a | bit))
        })
    }
}

fn to_box(values: [f64; 3], bounds: &Bounds, half_extent: Vec3) -> Vec3 {
    let center = bounds.center();
    let span = bounds.span();
    let half = half_extent.to_array();
    let coord = |axis: usize| {
        if is_spread(span[axis]) {
            ((values[axis] - center[axis]) / span[axis] * 2.0 * half[axis] as f64) as f32
        } else {
            0.0
        }
    };
    Vec3::new(coord(0), coord(1), coord(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_points() -> PointTable {
        PointTable::from_points(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])
    }

    #[test]
    fn scatter_gets_one_labelled_point_per_row() {
        let scene = Scene::build(&two_points(), ViewMode::Scatter);
        assert_eq!(scene.points.len(), 2);
        let labels: Vec<_> = scene.points.iter().map(|p| p.label.as_deref()).collect();
        assert_eq!(labels, [Some("0"), Some("1")]);
        assert_eq!(scene.points[0].color, ColorScale::Plasma.sample(0.0));
        assert_eq!(scene.points[1].color, ColorScale::Plasma.sample(1.0));
        assert_eq!(scene.segments().count(), 0);
    }

    #[test]
    fn line_joins_consecutive_rows() {
        let scene = Scene::build(&two_points(), ViewMode::Line);
        let segments: Vec<_> = scene.segments().map(|(a, b)| (a.row, b.row)).collect();
        assert_eq!(segments, [(0, 1)]);
        assert!(scene.points.iter().all(|p| p.label.is_none()));

        let table: PointTable = (0..10).map(|i| [i as f64, 0.0, (i % 3) as f64]).collect();
        let scene = Scene::build(&table, ViewMode::Line);
        assert_eq!(scene.segments().count(), 9);
    }

    #[test]
    fn line_colours_follow_z() {
        let table = PointTable::from_points(&[[0.0, 0.0, 10.0], [1.0, 1.0, 0.0], [2.0, 2.0, 5.0]]);
        let scene = Scene::build(&table, ViewMode::Line);
        assert_eq!(scene.points[0].color, ColorScale::Viridis.sample(1.0));
        assert_eq!(scene.points[1].color, ColorScale::Viridis.sample(0.0));
        assert_eq!(scene.points[2].color, ColorScale::Viridis.sample(0.5));
    }

    #[test]
    fn points_fill_the_aspect_box() {
        let scene = Scene::build(&two_points(), ViewMode::Line);
        assert_eq!(scene.points[0].position, Vec3::new(-0.5, -0.5, -0.35));
        assert_eq!(scene.points[1].position, Vec3::new(0.5, 0.5, 0.35));

        let scene = Scene::build(&two_points(), ViewMode::Scatter);
        assert_eq!(scene.points[1].position, Vec3::splat(0.5));
    }

    #[test]
    fn flat_axis_collapses_to_the_centre() {
        let table = PointTable::from_points(&[[0.0, 7.0, 1.0], [2.0, 7.0, 1.0]]);
        let scene = Scene::build(&table, ViewMode::Scatter);
        assert_eq!(scene.points[0].position, Vec3::new(-0.5, 0.0, 0.0));
        assert_eq!(scene.points[1].position, Vec3::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn tiny_z_range_spreads_position_and_colour_alike() {
        let table = PointTable::from_points(&[[0.0, 0.0, 1.0], [1.0, 1.0, 1.0 + 4.0 * f64::EPSILON]]);
        let scene = Scene::build(&table, ViewMode::Line);
        assert!(scene.points[0].position.z < scene.points[1].position.z);
        assert_eq!(scene.points[0].color, ColorScale::Viridis.sample(0.0));
        assert_eq!(scene.points[1].color, ColorScale::Viridis.sample(1.0));
    }

    #[test]
    fn empty_table_gives_empty_scene() {
        for mode in [ViewMode::Scatter, ViewMode::Line] {
            let scene = Scene::build(&PointTable::default(), mode);
            assert!(scene.is_empty());
            assert!(scene.bounds.is_none());
            assert_eq!(scene.segments().count(), 0);
        }
    }

    #[test]
    fn single_row_line_has_no_segments() {
        let table = PointTable::from_points(&[[1.0, 1.0, 1.0]]);
        let scene = Scene::build(&table, ViewMode::Line);
        assert_eq!(scene.points.len(), 1);
        assert_eq!(scene.points[0].position, Vec3::ZERO);
        assert_eq!(scene.segments().count(), 0);
    }

    #[test]
    fn box_has_twelve_edges_along_one_axis_each() {
        let scene = Scene::build(&two_points(), ViewMode::Line);
        let corners = scene.box_corners();
        let edges: Vec<_> = Scene::box_edges().collect();
        assert_eq!(edges.len(), 12);
        for (a, b) in edges {
            let d = corners[b] - corners[a];
            let non_zero = d.to_array().iter().filter(|c| c.abs() > 0.0).count();
            assert_eq!(non_zero, 1);
        }
        assert_eq!(corners[7], Vec3::new(0.5, 0.5, 0.35));
    }

    #[test]
    fn line_style_matches_the_fixed_view() {
        let style = ViewMode::Line.style();
        assert_eq!(style.window_size, [1600.0, 900.0]);
        assert!(!style.resizable);
        assert_eq!(style.up, Vec3::Z);
        assert_eq!(style.aspect, Vec3::new(1.0, 1.0, 0.7));
    }
}
