use eframe::egui::{Pos2, Rect, Vec2, pos2};
use glam::{Mat4, Quat, Vec3};

/// An orbiting perspective camera looking at the centre of the axis box.
///
/// Scene coordinates are right-handed; `up` is normally +z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
}

/// A scene point mapped onto the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub pos: Pos2,
    /// Distance in front of the eye, along the view direction.
    pub depth: f32,
}

impl Camera {
    pub const DEFAULT_FOV_Y: f32 = 45.0_f32 * std::f32::consts::TAU / 360.0;
    const NEAR: f32 = 0.01;
    const MIN_DISTANCE: f32 = 0.2;
    const MAX_DISTANCE: f32 = 20.0;
    /// Radians per dragged point.
    const ORBIT_SPEED: f32 = 0.008;
    /// Closest the eye may get to the up axis, in radians.
    const POLE_MARGIN: f32 = 0.05;

    pub fn looking_at_origin(eye: Vec3, up: Vec3) -> Self {
        Self {
            eye,
            target: Vec3::ZERO,
            up: up.normalize_or(Vec3::Z),
            fov_y: Self::DEFAULT_FOV_Y,
        }
    }

    pub fn distance(&self) -> f32 {
        self.eye.distance(self.target)
    }

    fn clip_from_world(&self, rect: Rect) -> Mat4 {
        let aspect_ratio = rect.width() / rect.height().max(1.0);
        Mat4::perspective_infinite_rh(self.fov_y, aspect_ratio.max(1e-3), Self::NEAR)
            * Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Map a scene point into `rect`. `None` for points at or behind the eye.
    pub fn project(&self, rect: Rect, point: Vec3) -> Option<Projected> {
        Projector::new(self, rect).project(point)
    }

    /// Rotate the eye around the target by a screen-space drag.
    pub fn orbit(&mut self, drag: Vec2) {
        let offset = self.eye - self.target;
        let yaw = Quat::from_axis_angle(self.up, -drag.x * Self::ORBIT_SPEED);
        let mut offset = yaw * offset;

        let right = offset.cross(self.up).normalize_or_zero();
        if right != Vec3::ZERO {
            let polar = offset.angle_between(self.up);
            let wanted = (polar - drag.y * Self::ORBIT_SPEED)
                .clamp(Self::POLE_MARGIN, std::f32::consts::PI - Self::POLE_MARGIN);
            offset = Quat::from_axis_angle(right, polar - wanted) * offset;
        }

        self.eye = self.target + offset;
    }

    /// Scale the eye's distance to the target. `factor < 1` moves closer.
    pub fn zoom(&mut self, factor: f32) {
        if !(factor > 0.0) {
            return;
        }
        let offset = self.eye - self.target;
        let distance = (self.distance() * factor).clamp(Self::MIN_DISTANCE, Self::MAX_DISTANCE);
        self.eye = self.target + offset.normalize_or(Vec3::Y) * distance;
    }
}

/// Camera matrices for one frame, reused for every point.
pub struct Projector {
    clip_from_world: Mat4,
    rect: Rect,
}

impl Projector {
    pub fn new(camera: &Camera, rect: Rect) -> Self {
        Self {
            clip_from_world: camera.clip_from_world(rect),
            rect,
        }
    }

    pub fn project(&self, point: Vec3) -> Option<Projected> {
        let clip = self.clip_from_world * point.extend(1.0);
        if clip.w <= Camera::NEAR {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        let center = self.rect.center();
        Some(Projected {
            pos: pos2(
                center.x + 0.5 * ndc.x * self.rect.width(),
                center.y - 0.5 * ndc.y * self.rect.height(),
            ),
            depth: clip.w,
        })
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::vec2;

    use super::*;

    fn rect() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(1600.0, 900.0))
    }

    fn camera() -> Camera {
        Camera::looking_at_origin(Vec3::new(0.0, 1.0707, 1.0), Vec3::Z)
    }

    #[test]
    fn target_lands_in_the_middle() {
        let p = camera().project(rect(), Vec3::ZERO).unwrap();
        assert!((p.pos.x - 800.0).abs() < 1e-3);
        assert!((p.pos.y - 450.0).abs() < 1e-3);
        assert!((p.depth - camera().distance()).abs() < 1e-4);
    }

    #[test]
    fn up_is_up_on_screen() {
        let cam = Camera::looking_at_origin(Vec3::new(0.0, -3.0, 0.0), Vec3::Z);
        let above = cam.project(rect(), Vec3::new(0.0, 0.0, 0.5)).unwrap();
        let right = cam.project(rect(), Vec3::new(0.5, 0.0, 0.0)).unwrap();
        assert!(above.pos.y < 450.0);
        assert!((above.pos.x - 800.0).abs() < 1e-3);
        assert!(right.pos.x > 800.0);
    }

    #[test]
    fn nearer_points_have_smaller_depth() {
        let cam = camera();
        let near = cam.project(rect(), Vec3::new(0.0, 0.3, 0.3)).unwrap();
        let far = cam.project(rect(), Vec3::new(0.0, -0.3, -0.3)).unwrap();
        assert!(near.depth < far.depth);
    }

    #[test]
    fn points_behind_the_eye_are_dropped() {
        let cam = camera();
        assert!(cam.project(rect(), cam.eye * 2.0).is_none());
    }

    #[test]
    fn orbit_keeps_distance_and_stays_off_the_pole() {
        let mut cam = camera();
        let distance = cam.distance();
        cam.orbit(vec2(120.0, -35.0));
        assert!((cam.distance() - distance).abs() < 1e-4);

        // Drag far past the top.
        cam.orbit(vec2(0.0, 10_000.0));
        let polar = (cam.eye - cam.target).angle_between(cam.up);
        assert!(polar >= Camera::POLE_MARGIN - 1e-4);
        assert!((cam.distance() - distance).abs() < 1e-3);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = camera();
        cam.zoom(0.5);
        assert!((cam.distance() - 0.5 * camera().distance()).abs() < 1e-4);
        cam.zoom(1e-6);
        assert!((cam.distance() - Camera::MIN_DISTANCE).abs() < 1e-4);
        cam.zoom(1e9);
        assert!((cam.distance() - Camera::MAX_DISTANCE).abs() < 1e-3);
        cam.zoom(-1.0);
        assert!((cam.distance() - Camera::MAX_DISTANCE).abs() < 1e-3);
    }
}
