use serde::{Deserialize, Serialize};

use super::{SettingsError, invalid};
use crate::constants::*;

/// Physics constants for the player body.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlayerSettings {
    pub gravity: f32,
    pub speed: f32,
    pub air_speed_factor: f32,
    pub height: f32,
    pub radius: f32,
    pub jump_velocity: f32,
    pub collision_epsilon: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            speed: PLAYER_SPEED,
            air_speed_factor: AIR_SPEED_FACTOR,
            height: PLAYER_HEIGHT,
            radius: PLAYER_RADIUS,
            jump_velocity: JUMP_VELOCITY,
            collision_epsilon: COLLISION_EPSILON,
        }
    }
}

impl PlayerSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (name, value) in [
            ("gravity", self.gravity),
            ("speed", self.speed),
            ("air speed factor", self.air_speed_factor),
            ("height", self.height),
            ("radius", self.radius),
            ("jump velocity", self.jump_velocity),
            ("collision epsilon", self.collision_epsilon),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!(
                    "player {} {} must be finite and non-negative",
                    name, value
                )));
            }
        }
        if self.height <= 0.0 {
            return Err(invalid("player height must be positive".to_string()));
        }
        Ok(())
    }
}
