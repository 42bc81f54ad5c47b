// World constants
pub const CHUNK_WIDTH: i32 = 16;
pub const CHUNK_DEPTH: i32 = 16;
pub const BLOCK_SIZE: f32 = 1.0;
pub const VIEW_RADIUS: i32 = 4;
pub const SEA_LEVEL: i32 = 20;
pub const MAX_HEIGHT: i32 = 64;
pub const DEFAULT_SEED: u32 = 2137;

// Terrain shaping
pub const BASE_HEIGHT: f32 = 24.0;
pub const CONTINENT_FREQUENCY: f32 = 0.012;
pub const CONTINENT_AMPLITUDE: f32 = 8.0;
pub const DETAIL_FREQUENCY: f32 = 0.05;
pub const DETAIL_AMPLITUDE: f32 = 2.5;
pub const MOUNTAIN_FREQUENCY: f32 = 0.008;
pub const MOUNTAIN_THRESHOLD: f32 = 0.35;
pub const MOUNTAIN_BOOST: f32 = 22.0;

// Surface layering
pub const SURFACE_LAYERS: i32 = 3;
pub const SHORE_BLEND_BAND: i32 = 2;

// Decoration
pub const PLANT_CHANCE: f64 = 0.04;
pub const PLANT_JITTER: f32 = 0.25;
pub const TREE_CHANCE: f64 = 0.012;
pub const TREE_SHORE_MARGIN: i32 = 2;
pub const TREE_SPACING: i32 = 4;
pub const TRUNK_MIN: i32 = 4;
pub const TRUNK_MAX: i32 = 6;

// Player constants
pub const GRAVITY: f32 = 25.0;
pub const PLAYER_SPEED: f32 = 6.0;
pub const AIR_SPEED_FACTOR: f32 = 0.5;
pub const PLAYER_HEIGHT: f32 = 1.8;
pub const PLAYER_RADIUS: f32 = 0.3;
pub const JUMP_VELOCITY: f32 = 8.0;
pub const COLLISION_EPSILON: f32 = 0.05;
pub const MAX_PITCH: f32 = 1.553_343; // 89 degrees
