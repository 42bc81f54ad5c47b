// Core module with fundamental types
pub mod core;

// Player module with camera, input and movement
pub mod player;

// World module with generation, streaming and height lookups
pub mod world;

// Per-tick session tying streaming and movement together
pub mod app;

// Settings and their persistence
pub mod utils;

pub mod constants;

// Re-exports
pub use app::Session;
pub use constants::*;
pub use crate::core::{BlockInstance, BlockKind, ChunkCoord, ChunkDims, ChunkRecord, DecorationKind, Transform};
pub use player::{Camera, InputState, MotionState, MovementController, PlayerState};
pub use utils::{EngineSettings, SettingsError};
pub use world::{
    ChunkGenerator, ChunkRenderer, ChunkStore, HeightQuery, InstanceTally, NoiseField,
    NullRenderer, StreamDelta, SurfaceHeight,
};
