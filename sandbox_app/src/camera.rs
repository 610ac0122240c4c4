//! Free camera rig with zoom, pan, and rotate kinematics
//!
//! The external camera service the core observes only through the
//! `ViewpointRig` seam. Every movement method here changes the rig's
//! position, which the focus controller treats as a release trigger.

use scene_core::foundation::math::utils;
use scene_core::prelude::{Vec3, ViewpointRig};

/// Camera with free yaw/pitch orientation and direct position control
#[derive(Debug)]
pub struct FreeCameraRig {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    mouse_sensitivity: f32,
    pan_speed: f32,
}

impl FreeCameraRig {
    pub fn new(position: Vec3, mouse_sensitivity: f32, pan_speed: f32) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            mouse_sensitivity,
            pan_speed,
        }
    }

    fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            -self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
    }

    fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin())
    }

    fn up(&self) -> Vec3 {
        self.forward().cross(&self.right())
    }

    /// Move along the view direction by the scroll magnitude
    pub fn zoom(&mut self, scroll: f32) {
        self.position += self.forward() * scroll;
    }

    /// Slide along the camera's right and up axes
    ///
    /// Mouse deltas are negated so the scene appears to follow the pointer.
    pub fn pan(&mut self, mouse_x: f32, mouse_y: f32) {
        let pan = self.right() * (-mouse_x * self.pan_speed)
            + self.up() * (-mouse_y * self.pan_speed);
        self.position += pan;
    }

    /// Adjust yaw and pitch from mouse deltas, pitch clamped to straight up/down
    pub fn rotate(&mut self, mouse_x: f32, mouse_y: f32) {
        self.yaw += utils::deg_to_rad(mouse_x * self.mouse_sensitivity);
        self.pitch = utils::clamp(
            self.pitch - utils::deg_to_rad(mouse_y * self.mouse_sensitivity),
            utils::deg_to_rad(-90.0),
            utils::deg_to_rad(90.0),
        );
    }
}

impl ViewpointRig for FreeCameraRig {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn look_at(&mut self, target: Vec3) {
        let dir = target - self.position;
        let flat = (dir.x * dir.x + dir.z * dir.z).sqrt();
        self.yaw = dir.x.atan2(dir.z);
        self.pitch = (-dir.y).atan2(flat);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_moves_along_forward() {
        let mut rig = FreeCameraRig::new(Vec3::zeros(), 5.0, 0.5);
        rig.zoom(2.0);
        // Default orientation looks down +Z
        assert_eq!(rig.position(), Vec3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut rig = FreeCameraRig::new(Vec3::zeros(), 5.0, 0.5);
        rig.rotate(0.0, -10_000.0);
        assert!(rig.pitch <= utils::deg_to_rad(90.0) + 1.0e-6);
    }

    #[test]
    fn test_look_at_faces_target() {
        let mut rig = FreeCameraRig::new(Vec3::new(0.0, 0.0, -5.0), 5.0, 0.5);
        rig.look_at(Vec3::zeros());
        let forward = rig.forward();
        assert!((forward - Vec3::new(0.0, 0.0, 1.0)).norm() < 1.0e-5);
    }
}
