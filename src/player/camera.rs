use glam::{Vec2, Vec3};

use crate::constants::MAX_PITCH;

/// Look orientation. Movement only uses the yaw, flattened onto the XZ plane.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Camera {
    pub yaw: f32,
    pub pitch: f32,
}

impl Camera {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        let mut camera = Camera { yaw, pitch: 0.0 };
        camera.apply_look(Vec2::new(0.0, pitch));
        camera
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, self.yaw.sin())
    }

    pub fn right(&self) -> Vec3 {
        Vec3::new(-self.yaw.sin(), 0.0, self.yaw.cos())
    }

    pub fn look_direction(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Applies yaw/pitch deltas; pitch is clamped short of straight up or down.
    pub fn apply_look(&mut self, delta: Vec2) {
        if !delta.is_finite() {
            return;
        }
        self.yaw = (self.yaw + delta.x).rem_euclid(std::f32::consts::TAU);
        self.pitch = (self.pitch + delta.y).clamp(-MAX_PITCH, MAX_PITCH);
    }
}
