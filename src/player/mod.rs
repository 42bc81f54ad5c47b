//! Player-related modules
//! Contains camera orientation, input intents and movement physics.

pub mod camera;
pub mod input;
pub mod movement;

// Re-export commonly used types
pub use camera::Camera;
pub use input::InputState;
pub use movement::{MotionState, MovementController, PlayerState};
