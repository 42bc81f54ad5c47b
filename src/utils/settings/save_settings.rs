use directories::ProjectDirs;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::{EngineSettings, SettingsError};

const SETTINGS_FILE: &str = "settings.bin";

/// Per-user settings location, if the platform exposes one.
pub fn default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "terrastream").map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
}

pub fn save_settings(path: &Path, settings: &EngineSettings) -> Result<(), SettingsError> {
    settings.validate()?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    bincode::serialize_into(&mut writer, settings)?;
    writer.flush()?;
    tracing::debug!("Settings written to {}", path.display());
    Ok(())
}

pub fn load_settings(path: &Path) -> Result<EngineSettings, SettingsError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let settings: EngineSettings = bincode::deserialize_from(&mut reader)?;
    settings.validate()?;
    tracing::debug!("Settings loaded from {}", path.display());
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("terrastream-{}-{}", std::process::id(), name))
            .join(SETTINGS_FILE)
    }

    #[test]
    fn test_settings_persist() {
        let path = temp_path("persist");
        let mut settings = EngineSettings::default();
        settings.world.seed = 42;
        settings.world.view_radius = 2;
        settings.player.jump_velocity = 9.5;

        save_settings(&path, &settings).unwrap();
        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_invalid_settings_not_written() {
        let path = temp_path("invalid");
        let mut settings = EngineSettings::default();
        settings.world.view_radius = -3;

        assert!(matches!(
            save_settings(&path, &settings),
            Err(SettingsError::Invalid(_))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = temp_path("missing");
        assert!(matches!(load_settings(&path), Err(SettingsError::Io(_))));
    }
}
