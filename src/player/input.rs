use glam::Vec2;

/// Intents supplied by an input source for one tick.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    /// Edge-triggered: true only on the tick the jump was pressed.
    pub jump: bool,
    /// Yaw and pitch deltas in radians.
    pub look: Vec2,
}

impl InputState {
    pub fn is_moving(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}
