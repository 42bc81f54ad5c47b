use glam::Vec3;

use crate::core::chunk::{ChunkCoord, ChunkDims};
use crate::player::{Camera, InputState, MotionState, MovementController};
use crate::utils::settings::{EngineSettings, SettingsError};
use crate::world::{ChunkGenerator, ChunkRenderer, ChunkStore, HeightQuery, StreamDelta};

/// One running world: streamed terrain plus the player walking on it.
pub struct Session {
    settings: EngineSettings,
    dims: ChunkDims,
    store: ChunkStore,
    camera: Camera,
    movement: MovementController,
}

impl Session {
    /// Validates the settings and places the player at the world spawn point.
    pub fn new(settings: EngineSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let generator = ChunkGenerator::new(&settings);
        let spawn = generator.find_spawn_point();
        Self::with_spawn(settings, generator, spawn)
    }

    pub fn new_at(settings: EngineSettings, spawn: Vec3) -> Result<Self, SettingsError> {
        settings.validate()?;
        let generator = ChunkGenerator::new(&settings);
        Self::with_spawn(settings, generator, spawn)
    }

    fn with_spawn(
        settings: EngineSettings,
        generator: ChunkGenerator,
        spawn: Vec3,
    ) -> Result<Self, SettingsError> {
        let store = ChunkStore::new(generator, settings.world.view_radius)?;
        tracing::info!(
            "Session started: seed {}, view radius {}, spawn ({:.1}, {:.1}, {:.1})",
            settings.world.seed,
            settings.world.view_radius,
            spawn.x,
            spawn.y,
            spawn.z
        );
        Ok(Session {
            dims: settings.dims(),
            store,
            movement: MovementController::new(settings.player.clone(), spawn),
            camera: Camera::default(),
            settings,
        })
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn store(&self) -> &ChunkStore {
        &self.store
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn movement(&self) -> &MovementController {
        &self.movement
    }

    pub fn player_position(&self) -> Vec3 {
        self.movement.position()
    }

    pub fn player_chunk(&self) -> ChunkCoord {
        let p = self.movement.position();
        ChunkCoord::from_world(p.x, p.z, &self.dims)
    }

    pub fn motion_state(&self) -> MotionState {
        self.movement.motion_state()
    }

    /// Moves the player without physics; the next tick streams the new window.
    pub fn teleport(&mut self, position: Vec3) {
        self.movement.teleport(position);
    }

    /// Streams terrain around the player, then runs the movement step.
    pub fn tick(
        &mut self,
        dt: f32,
        input: &InputState,
        renderer: &mut dyn ChunkRenderer,
    ) -> StreamDelta {
        self.camera.apply_look(input.look);

        let delta = self.store.update(self.player_chunk(), renderer);

        let terrain = HeightQuery::new(&self.store);
        self.movement.tick(dt, input, &self.camera, &terrain);
        delta
    }
}
