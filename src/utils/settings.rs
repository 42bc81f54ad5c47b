use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::*;
use crate::core::chunk::ChunkDims;

pub mod player_settings;
pub mod save_settings;

pub use player_settings::PlayerSettings;
pub use save_settings::{default_settings_path, load_settings, save_settings};

#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Codec(bincode::Error),
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "settings i/o failed: {}", e),
            SettingsError::Codec(e) => write!(f, "settings encoding failed: {}", e),
            SettingsError::Invalid(reason) => write!(f, "invalid settings: {}", reason),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Codec(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<bincode::Error> for SettingsError {
    fn from(e: bincode::Error) -> Self {
        SettingsError::Codec(e)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct EngineSettings {
    pub world: WorldSettings,
    pub terrain: TerrainSettings,
    pub player: PlayerSettings,
}

impl EngineSettings {
    pub fn dims(&self) -> ChunkDims {
        ChunkDims::new(
            self.world.chunk_width,
            self.world.chunk_depth,
            self.world.block_size,
        )
    }

    /// Rejects configurations the engine cannot run with. Called before the first tick.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let w = &self.world;
        let t = &self.terrain;
        let p = &self.player;

        if w.view_radius < 0 {
            return Err(invalid(format!("view radius {} is negative", w.view_radius)));
        }
        if w.chunk_width <= 0 || w.chunk_depth <= 0 {
            return Err(invalid(format!(
                "chunk dimensions {}x{} must be positive",
                w.chunk_width, w.chunk_depth
            )));
        }
        if !(w.block_size.is_finite() && w.block_size > 0.0) {
            return Err(invalid(format!("block size {} must be positive", w.block_size)));
        }
        if t.max_height < 1 {
            return Err(invalid(format!("max height {} must be at least 1", t.max_height)));
        }
        if w.sea_level < 0 || w.sea_level >= t.max_height {
            return Err(invalid(format!(
                "sea level {} must lie in [0, {})",
                w.sea_level, t.max_height
            )));
        }
        for (name, freq) in [
            ("continent", t.continent_frequency),
            ("detail", t.detail_frequency),
            ("mountain", t.mountain_frequency),
        ] {
            if !(freq.is_finite() && freq > 0.0) {
                return Err(invalid(format!("{} frequency {} must be positive", name, freq)));
            }
        }
        if !(t.mountain_threshold > -1.0 && t.mountain_threshold < 1.0) {
            return Err(invalid(format!(
                "mountain threshold {} must lie in (-1, 1)",
                t.mountain_threshold
            )));
        }
        if t.surface_layers < 0 {
            return Err(invalid(format!("surface layers {} is negative", t.surface_layers)));
        }
        if t.shore_blend < 0 {
            return Err(invalid(format!("shore blend band {} is negative", t.shore_blend)));
        }
        p.validate()?;
        Ok(())
    }
}

pub(crate) fn invalid(reason: String) -> SettingsError {
    SettingsError::Invalid(reason)
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WorldSettings {
    pub seed: u32,
    pub chunk_width: i32,
    pub chunk_depth: i32,
    pub block_size: f32,
    pub view_radius: i32,
    pub sea_level: i32,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            chunk_width: CHUNK_WIDTH,
            chunk_depth: CHUNK_DEPTH,
            block_size: BLOCK_SIZE,
            view_radius: VIEW_RADIUS,
            sea_level: SEA_LEVEL,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TerrainSettings {
    pub max_height: i32,
    pub base_height: f32,
    pub continent_frequency: f32,
    pub continent_amplitude: f32,
    pub detail_frequency: f32,
    pub detail_amplitude: f32,
    pub mountain_frequency: f32,
    pub mountain_threshold: f32,
    pub mountain_boost: f32,
    pub surface_layers: i32,
    pub shore_blend: i32,
    pub plant_chance: f64,
    pub tree_chance: f64,
}

impl Default for TerrainSettings {
    fn default() -> Self {
        Self {
            max_height: MAX_HEIGHT,
            base_height: BASE_HEIGHT,
            continent_frequency: CONTINENT_FREQUENCY,
            continent_amplitude: CONTINENT_AMPLITUDE,
            detail_frequency: DETAIL_FREQUENCY,
            detail_amplitude: DETAIL_AMPLITUDE,
            mountain_frequency: MOUNTAIN_FREQUENCY,
            mountain_threshold: MOUNTAIN_THRESHOLD,
            mountain_boost: MOUNTAIN_BOOST,
            surface_layers: SURFACE_LAYERS,
            shore_blend: SHORE_BLEND_BAND,
            plant_chance: PLANT_CHANCE,
            tree_chance: TREE_CHANCE,
        }
    }
}
