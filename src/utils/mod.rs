//! Engine-wide utilities
//! Contains the build-time settings and their persistence.

pub mod settings;

pub use settings::{EngineSettings, SettingsError};
