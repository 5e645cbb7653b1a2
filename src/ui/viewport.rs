use eframe::egui::{Align2, Color32, FontId, Painter, Pos2, Response, Sense, Stroke, Ui, vec2};

use crate::state::AppState;
use crate::ui::camera::{Projected, Projector};
use crate::ui::scene::Scene;

/// Extra pick slack around a marker, in points.
const HOVER_SLACK: f32 = 4.0;
const ZOOM_PER_SCROLL: f32 = 0.002;

// ---------------------------------------------------------------------------
// 3D scene view (central panel)
// ---------------------------------------------------------------------------

/// Paint the scene and handle orbit / zoom / hover.
pub fn scene_view(ui: &mut Ui, state: &mut AppState) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
    handle_input(ui, &response, state);

    let rect = response.rect;
    let visuals = ui.visuals();
    let text_color = visuals.text_color();
    let weak_color = visuals.weak_text_color();
    painter.rect_filled(rect, 0.0, visuals.extreme_bg_color);

    let projector = Projector::new(&state.camera, rect);
    paint_axis_box(&painter, &projector, &state.scene, weak_color);

    let scene = &state.scene;
    if scene.is_empty() {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "No points in this file",
            FontId::proportional(16.0),
            weak_color,
        );
        state.hovered = None;
        return;
    }

    let projected: Vec<Option<Projected>> = scene
        .points
        .iter()
        .map(|p| projector.project(p.position))
        .collect();

    if let Some(stroke) = scene.line {
        for (a, b) in scene.segments() {
            if let (Some(pa), Some(pb)) = (projected[a.row], projected[b.row]) {
                painter.line_segment([pa.pos, pb.pos], stroke);
            }
        }
    }

    for index in draw_order(&projected) {
        let Some(p) = projected[index] else {
            continue;
        };
        let point = &scene.points[index];
        painter.circle_filled(p.pos, scene.marker_radius, point.color);
        if state.show_labels {
            if let Some(label) = &point.label {
                painter.text(
                    p.pos + vec2(scene.marker_radius + 2.0, -scene.marker_radius),
                    Align2::LEFT_BOTTOM,
                    label,
                    FontId::proportional(11.0),
                    text_color,
                );
            }
        }
    }

    state.hovered = response.hover_pos().and_then(|pointer| {
        nearest_point(&projected, pointer, scene.marker_radius + HOVER_SLACK)
    });

    if let Some(row) = state.hovered {
        if let Some(p) = projected[row] {
            painter.circle_stroke(p.pos, scene.marker_radius + 2.0, Stroke::new(1.5, text_color));
        }
        if let Some(text) = state.hover_text() {
            response.on_hover_text_at_pointer(text);
        }
    }
}

fn handle_input(ui: &Ui, response: &Response, state: &mut AppState) {
    if response.double_clicked() {
        log::debug!("Camera reset");
        state.reset_camera();
        return;
    }

    if response.dragged() {
        state.camera.orbit(response.drag_delta());
    }

    if response.hovered() {
        let (scroll, pinch) = ui.input(|i| (i.smooth_scroll_delta.y, i.zoom_delta()));
        if scroll != 0.0 || pinch != 1.0 {
            state.camera.zoom((-scroll * ZOOM_PER_SCROLL).exp() / pinch);
        }
    }
}

fn paint_axis_box(painter: &Painter, projector: &Projector, scene: &Scene, color: Color32) {
    let corners = scene.box_corners().map(|c| projector.project(c));
    let stroke = Stroke::new(1.0, color);
    for (a, b) in Scene::box_edges() {
        if let (Some(pa), Some(pb)) = (corners[a], corners[b]) {
            painter.line_segment([pa.pos, pb.pos], stroke);
        }
    }

    // Annotate the three edges leaving corner 0 (the min/min/min corner).
    let font = FontId::proportional(12.0);
    for (axis, (name, far)) in [("x", 1usize), ("y", 2), ("z", 4)].into_iter().enumerate() {
        let (Some(start), Some(end)) = (corners[0], corners[far]) else {
            continue;
        };
        let mid = start.pos + 0.5 * (end.pos - start.pos);
        painter.text(mid, Align2::CENTER_CENTER, name, font.clone(), color);

        if let Some(bounds) = &scene.bounds {
            painter.text(
                start.pos,
                Align2::RIGHT_TOP,
                format!("{:.3}", bounds.min[axis]),
                FontId::proportional(10.0),
                color,
            );
            painter.text(
                end.pos,
                Align2::LEFT_TOP,
                format!("{:.3}", bounds.max[axis]),
                FontId::proportional(10.0),
                color,
            );
        }
    }
}

/// Indices of projected points, farthest first.
fn draw_order(projected: &[Option<Projected>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..projected.len())
        .filter(|&i| projected[i].is_some())
        .collect();
    order.sort_by(|&a, &b| {
        let depth = |i: usize| projected[i].map_or(0.0, |p| p.depth);
        depth(b).total_cmp(&depth(a))
    });
    order
}

/// Closest projected point to `pointer` within `max_distance` points.
/// Ties go to the point nearer the eye.
fn nearest_point(projected: &[Option<Projected>], pointer: Pos2, max_distance: f32) -> Option<usize> {
    projected
        .iter()
        .enumerate()
        .filter_map(|(i, p)| {
            let p = (*p)?;
            let d = p.pos.distance(pointer);
            (d <= max_distance).then_some((i, d, p.depth))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1).then(a.2.total_cmp(&b.2)))
        .map(|(i, _, _)| i)
}

#[cfg(test)]
mod tests {
    use eframe::egui::pos2;

    use super::*;

    fn at(x: f32, y: f32, depth: f32) -> Option<Projected> {
        Some(Projected {
            pos: pos2(x, y),
            depth,
        })
    }

    #[test]
    fn far_points_are_drawn_first() {
        let projected = [at(0.0, 0.0, 1.0), None, at(5.0, 5.0, 3.0), at(1.0, 1.0, 2.0)];
        assert_eq!(draw_order(&projected), [2, 3, 0]);
    }

    #[test]
    fn nearest_point_respects_the_radius() {
        let projected = [at(10.0, 10.0, 1.0), at(20.0, 10.0, 1.0), None];
        assert_eq!(nearest_point(&projected, pos2(12.0, 10.0), 6.0), Some(0));
        assert_eq!(nearest_point(&projected, pos2(19.0, 11.0), 6.0), Some(1));
        assert_eq!(nearest_point(&projected, pos2(15.0, 30.0), 6.0), None);
        assert_eq!(nearest_point(&[], pos2(0.0, 0.0), 6.0), None);
    }

    #[test]
    fn overlapping_points_pick_the_nearer_one() {
        let projected = [at(10.0, 10.0, 5.0), at(10.0, 10.0, 2.0)];
        assert_eq!(nearest_point(&projected, pos2(10.0, 10.0), 6.0), Some(1));
    }
}
