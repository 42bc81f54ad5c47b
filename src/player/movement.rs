//! Per-tick player physics against the terrain heightfield
//!
//! Vertical motion is integrated first and resolved against the column under
//! the player. Horizontal motion is then tried as a whole, and on contact
//! split into X-only and Z-only sub-moves so the player slides along walls.

use glam::Vec3;

use crate::player::camera::Camera;
use crate::player::input::InputState;
use crate::utils::settings::PlayerSettings;
use crate::world::height::SurfaceHeight;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerState {
    /// Feet position.
    pub position: Vec3,
    pub vertical_velocity: f32,
    pub on_ground: bool,
    pub can_jump: bool,
}

impl PlayerState {
    pub fn new(position: Vec3) -> Self {
        PlayerState {
            position,
            vertical_velocity: 0.0,
            on_ground: false,
            can_jump: false,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MotionState {
    Falling,
    Grounded,
}

pub struct MovementController {
    settings: PlayerSettings,
    state: PlayerState,
    over_void: bool,
}

impl MovementController {
    pub fn new(settings: PlayerSettings, spawn: Vec3) -> Self {
        MovementController {
            settings,
            state: PlayerState::new(spawn),
            over_void: false,
        }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn position(&self) -> Vec3 {
        self.state.position
    }

    pub fn eye_position(&self) -> Vec3 {
        self.state.position + Vec3::Y * self.settings.height
    }

    pub fn motion_state(&self) -> MotionState {
        if self.state.on_ground {
            MotionState::Grounded
        } else {
            MotionState::Falling
        }
    }

    /// Moves the player without physics and drops any vertical velocity.
    pub fn teleport(&mut self, position: Vec3) {
        self.state = PlayerState::new(position);
    }

    /// Edge-triggered jump. Only takes effect while grounded and allowed to jump.
    pub fn jump(&mut self) -> bool {
        if self.state.on_ground && self.state.can_jump {
            self.state.vertical_velocity = self.settings.jump_velocity;
            self.state.can_jump = false;
            true
        } else {
            false
        }
    }

    pub fn tick<T>(&mut self, dt: f32, input: &InputState, camera: &Camera, terrain: &T)
    where
        T: SurfaceHeight + ?Sized,
    {
        if !(dt.is_finite() && dt > 0.0) {
            return;
        }
        let eps = self.settings.collision_epsilon;

        // Gravity
        self.state.vertical_velocity -= self.settings.gravity * dt;
        self.state.position.y += self.state.vertical_velocity * dt;

        // Ground contact
        let pos = self.state.position;
        let ground = terrain.surface_height(pos.x, pos.z);
        let rising = self.state.vertical_velocity > 0.0;
        if pos.y < ground || (!rising && pos.y < ground + eps) {
            self.state.position.y = ground;
            self.state.vertical_velocity = 0.0;
            self.state.on_ground = true;
            self.state.can_jump = true;
        } else {
            self.state.on_ground = false;
        }
        self.note_void(ground);

        // Horizontal intent
        let mut intent = Vec3::ZERO;
        if input.forward {
            intent += camera.forward();
        }
        if input.backward {
            intent -= camera.forward();
        }
        if input.left {
            intent -= camera.right();
        }
        if input.right {
            intent += camera.right();
        }
        intent.y = 0.0;
        let intent = intent.normalize_or_zero();

        let speed = if self.state.on_ground {
            self.settings.speed
        } else {
            self.settings.speed * self.settings.air_speed_factor
        };
        let step = intent * speed * dt;

        if step.x != 0.0 || step.z != 0.0 {
            let start = self.state.position;
            let (dx, dz) = self.resolve_step(terrain, start, step.x, step.z);

            let target = Vec3::new(start.x + dx, start.y, start.z + dz);
            // Backstop: the body must not end up inside a column, e.g. after
            // skipping over a thin one at a chunk seam.
            if self.column_overlaps(terrain, start.y, target.x, target.z) {
                self.state.position = start;
            } else {
                self.state.position = target;
            }
        }

        if input.jump {
            self.jump();
        }

        tracing::trace!(
            "player at ({:.2}, {:.2}, {:.2}) vy={:.2} {:?}",
            self.state.position.x,
            self.state.position.y,
            self.state.position.z,
            self.state.vertical_velocity,
            self.motion_state()
        );
    }

    /// Axis-separated resolution of a horizontal step. Returns the accepted (dx, dz).
    fn resolve_step<T>(&self, terrain: &T, start: Vec3, dx: f32, dz: f32) -> (f32, f32)
    where
        T: SurfaceHeight + ?Sized,
    {
        if !self.path_blocked(terrain, start, dx, dz) {
            return (dx, dz);
        }

        let x_blocked = dx != 0.0 && self.path_blocked(terrain, start, dx, 0.0);
        let z_blocked = dz != 0.0 && self.path_blocked(terrain, start, 0.0, dz);
        match (x_blocked, z_blocked) {
            (false, true) => (dx, 0.0),
            (true, false) => (0.0, dz),
            (true, true) => (0.0, 0.0),
            // Only the diagonal corner is solid: keep the dominant axis.
            (false, false) => {
                if dx.abs() >= dz.abs() {
                    (dx, 0.0)
                } else {
                    (0.0, dz)
                }
            }
        }
    }

    /// Checks the column just ahead of the body's leading edge.
    fn path_blocked<T>(&self, terrain: &T, start: Vec3, dx: f32, dz: f32) -> bool
    where
        T: SurfaceHeight + ?Sized,
    {
        let r = self.settings.radius;
        let lead = |d: f32| if d == 0.0 { 0.0 } else { d + r * d.signum() };
        self.column_overlaps(terrain, start.y, start.x + lead(dx), start.z + lead(dz))
    }

    fn column_overlaps<T>(&self, terrain: &T, feet: f32, x: f32, z: f32) -> bool
    where
        T: SurfaceHeight + ?Sized,
    {
        terrain.surface_height(x, z) > feet + self.settings.collision_epsilon
    }

    fn note_void(&mut self, ground: f32) {
        let over_void = ground == f32::NEG_INFINITY;
        if over_void && !self.over_void {
            tracing::warn!(
                "No loaded terrain under player at ({:.1}, {:.1}), falling",
                self.state.position.x,
                self.state.position.z
            );
        }
        self.over_void = over_void;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 0.1;

    /// Flat ground with an optional raised region.
    struct Terrain {
        floor: f32,
        wall: Box<dyn Fn(f32, f32) -> bool>,
        wall_height: f32,
    }

    impl Terrain {
        fn flat(floor: f32) -> Self {
            Terrain {
                floor,
                wall: Box::new(|_, _| false),
                wall_height: floor,
            }
        }

        fn with_wall(floor: f32, wall: impl Fn(f32, f32) -> bool + 'static) -> Self {
            Terrain {
                floor,
                wall: Box::new(wall),
                wall_height: floor + 100.0,
            }
        }
    }

    impl SurfaceHeight for Terrain {
        fn surface_height(&self, x: f32, z: f32) -> f32 {
            if (self.wall)(x.floor(), z.floor()) {
                self.wall_height
            } else {
                self.floor
            }
        }
    }

    struct Void;

    impl SurfaceHeight for Void {
        fn surface_height(&self, _x: f32, _z: f32) -> f32 {
            f32::NEG_INFINITY
        }
    }

    fn controller(at: Vec3) -> MovementController {
        MovementController::new(PlayerSettings::default(), at)
    }

    fn grounded(at: Vec3, terrain: &Terrain) -> MovementController {
        let mut c = controller(at);
        c.tick(DT, &InputState::default(), &Camera::default(), terrain);
        assert_eq!(c.motion_state(), MotionState::Grounded);
        c
    }

    fn diagonal() -> InputState {
        InputState {
            forward: true,
            right: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_fast_fall_never_tunnels() {
        let terrain = Terrain::flat(10.0);
        let mut c = controller(Vec3::new(0.5, 10.5, 0.5));
        c.state.vertical_velocity = -30.0;
        c.tick(DT, &InputState::default(), &Camera::default(), &terrain);

        assert_eq!(c.position().y, 10.0);
        assert_eq!(c.state().vertical_velocity, 0.0);
        assert!(c.state().on_ground);
        assert!(c.state().can_jump);
    }

    #[test]
    fn test_falls_over_unloaded_terrain() {
        let mut c = controller(Vec3::new(0.0, 5.0, 0.0));
        for _ in 0..5 {
            c.tick(DT, &InputState::default(), &Camera::default(), &Void);
        }
        assert!(c.position().y < 5.0);
        assert_eq!(c.motion_state(), MotionState::Falling);
        assert!(!c.jump());
    }

    #[test]
    fn test_walks_forward_on_flat_ground() {
        let terrain = Terrain::flat(0.0);
        let mut c = grounded(Vec3::new(0.5, 0.0, 0.5), &terrain);
        let input = InputState {
            forward: true,
            ..Default::default()
        };
        c.tick(DT, &input, &Camera::default(), &terrain);

        let p = c.position();
        assert!((p.x - (0.5 + 6.0 * DT)).abs() < 1e-5);
        assert!((p.z - 0.5).abs() < 1e-6);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn test_diagonal_is_normalized() {
        let terrain = Terrain::flat(0.0);
        let mut c = grounded(Vec3::ZERO, &terrain);
        c.tick(DT, &diagonal(), &Camera::default(), &terrain);
        let travelled = Vec3::new(c.position().x, 0.0, c.position().z).length();
        assert!((travelled - 6.0 * DT).abs() < 1e-5);
    }

    #[test]
    fn test_airborne_speed_reduced() {
        let terrain = Terrain::flat(0.0);
        let mut c = controller(Vec3::new(0.0, 50.0, 0.0));
        let input = InputState {
            forward: true,
            ..Default::default()
        };
        c.tick(DT, &input, &Camera::default(), &terrain);
        assert_eq!(c.motion_state(), MotionState::Falling);
        assert!((c.position().x - 6.0 * 0.5 * DT).abs() < 1e-5);
    }

    #[test]
    fn test_slides_along_wall() {
        // Wall occupies x >= 5; moving +X+Z keeps only the Z component.
        let terrain = Terrain::with_wall(0.0, |x, _| x >= 5.0);
        let start = Vec3::new(4.5, 0.0, 2.0);
        let mut c = grounded(start, &terrain);
        c.tick(DT, &diagonal(), &Camera::default(), &terrain);

        let step = 6.0 * DT * std::f32::consts::FRAC_1_SQRT_2;
        let p = c.position();
        assert_eq!(p.x, start.x);
        assert!((p.z - (start.z + step)).abs() < 1e-5);
        assert!(p.y >= terrain.surface_height(p.x, p.z));
    }

    #[test]
    fn test_corner_with_one_free_axis() {
        // Solid along z >= 5 except an opening at x in [4, 5): X is blocked by
        // x >= 5, Z stays free through the opening.
        let terrain = Terrain::with_wall(0.0, |x, z| x >= 5.0 || (z >= 5.0 && x < 4.0));
        let start = Vec3::new(4.5, 0.0, 4.5);
        let mut c = grounded(start, &terrain);
        c.tick(DT, &diagonal(), &Camera::default(), &terrain);

        let p = c.position();
        assert_eq!(p.x, start.x);
        assert!(p.z > start.z);
    }

    #[test]
    fn test_full_stop_in_closed_corner() {
        let terrain = Terrain::with_wall(0.0, |x, z| x >= 5.0 || z >= 5.0);
        let start = Vec3::new(4.5, 0.0, 4.5);
        let mut c = grounded(start, &terrain);
        c.tick(DT, &diagonal(), &Camera::default(), &terrain);
        assert_eq!(c.position(), start);
    }

    #[test]
    fn test_thin_pillar_backstop() {
        // One-block pillar at x in [5, 6). A long step would land inside it while
        // the leading-edge check already reads the floor beyond.
        let terrain = Terrain::with_wall(0.0, |x, _| x == 5.0);
        let start = Vec3::new(4.2, 0.0, 0.5);
        let mut c = grounded(start, &terrain);
        let input = InputState {
            forward: true,
            ..Default::default()
        };
        c.tick(0.25, &input, &Camera::default(), &terrain);
        assert_eq!(c.position().x, start.x);
    }

    #[test]
    fn test_step_down_then_fall() {
        let terrain = Terrain::with_wall(0.0, |x, _| x < 1.0);
        // Standing on the raised region, walking off its edge.
        let mut c = grounded(Vec3::new(0.5, 100.0, 0.5), &terrain);
        let input = InputState {
            forward: true,
            ..Default::default()
        };
        c.tick(DT, &input, &Camera::default(), &terrain);
        assert!(c.position().x > 1.0);
        c.tick(DT, &InputState::default(), &Camera::default(), &terrain);
        assert_eq!(c.motion_state(), MotionState::Falling);
        assert!(c.position().y < 100.0);
    }

    #[test]
    fn test_jump_requires_ground() {
        let terrain = Terrain::flat(0.0);
        let mut c = grounded(Vec3::ZERO, &terrain);

        let jump = InputState {
            jump: true,
            ..Default::default()
        };
        c.tick(DT, &jump, &Camera::default(), &terrain);
        assert_eq!(c.state().vertical_velocity, PlayerSettings::default().jump_velocity);
        assert!(!c.jump(), "second jump before leaving the ground");

        c.tick(DT, &InputState::default(), &Camera::default(), &terrain);
        assert_eq!(c.motion_state(), MotionState::Falling);
        assert!(c.position().y > 0.0);
        assert!(!c.jump());

        for _ in 0..40 {
            c.tick(DT, &InputState::default(), &Camera::default(), &terrain);
        }
        assert_eq!(c.motion_state(), MotionState::Grounded);
        assert_eq!(c.position().y, 0.0);
        assert!(c.jump());
    }

    #[test]
    fn test_invalid_dt_ignored() {
        let terrain = Terrain::flat(0.0);
        let mut c = controller(Vec3::new(0.0, 3.0, 0.0));
        c.tick(f32::NAN, &InputState::default(), &Camera::default(), &terrain);
        c.tick(-1.0, &InputState::default(), &Camera::default(), &terrain);
        assert_eq!(c.position(), Vec3::new(0.0, 3.0, 0.0));
    }
}
