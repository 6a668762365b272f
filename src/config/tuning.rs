use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// All tunable controller parameters, loaded from tuning.ron.
#[derive(Debug, Clone, Resource, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Fixed simulation step (seconds).
    pub dt: f32,
    pub pixels_per_unit: f32,
    /// Player move speed (world units per second).
    pub player_speed: f32,
    pub player_radius: f32,
    /// Stick magnitudes below this read as zero.
    pub stick_deadzone_min: f32,
    /// Stick magnitudes above this read as full deflection.
    pub stick_deadzone_max: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            pixels_per_unit: 40.0,
            player_speed: 5.0,
            player_radius: 0.5,
            stick_deadzone_min: 0.125,
            stick_deadzone_max: 0.925,
        }
    }
}

impl Tuning {
    /// `<data_dir>/player_controller/tuning.ron`, falling back to the working directory.
    pub fn file_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("player_controller")
            .join("tuning.ron")
    }

    pub fn load_or_default() -> Self {
        Self::load_from(&Self::file_path())
    }

    /// A missing file is created with defaults; an unreadable or malformed one is
    /// left on disk untouched and defaults are used.
    pub fn load_from(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let tuning = Self::default();
                if let Err(e) = tuning.save_to(path) {
                    warn!("Failed to write {}: {e}", path.display());
                }
                return tuning;
            }
            Err(e) => {
                warn!("Failed to read {}: {e}, using defaults", path.display());
                return Self::default();
            }
        };
        Self::parse(&contents).unwrap_or_else(|e| {
            warn!("Failed to parse {}: {e}, using defaults", path.display());
            Self::default()
        })
    }

    pub fn parse(contents: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(contents)
    }

    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let pretty = ron::ser::PrettyConfig::default();
        let text = ron::ser::to_string_pretty(self, pretty).map_err(std::io::Error::other)?;
        std::fs::write(path, text)
    }

    /// F5 handler.
    pub fn reload(&mut self) {
        self.reload_from(&Self::file_path());
    }

    pub fn reload_from(&mut self, path: &Path) {
        *self = Self::load_from(path);
        info!("Tuning reloaded from {}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_fills_missing_fields_with_defaults() {
        let tuning = Tuning::parse("(player_speed: 8.0)").unwrap();
        assert_eq!(tuning.player_speed, 8.0);
        assert_eq!(tuning.dt, Tuning::default().dt);
        assert_eq!(tuning.stick_deadzone_min, 0.125);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        assert!(Tuning::parse("(player_speed: \"fast\")").is_err());
    }

    #[test]
    fn test_default_speed_matches_controller_default() {
        assert_eq!(Tuning::default().player_speed, 5.0);
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("player_controller-{}-{name}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let dir = scratch_dir("missing");
        let path = dir.join("nested").join("tuning.ron");

        let tuning = Tuning::load_from(&path);
        assert_eq!(tuning.player_speed, Tuning::default().player_speed);

        let written = std::fs::read_to_string(&path).unwrap();
        let reparsed = Tuning::parse(&written).unwrap();
        assert_eq!(reparsed.dt, Tuning::default().dt);
        assert_eq!(reparsed.stick_deadzone_max, Tuning::default().stick_deadzone_max);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_malformed_file_falls_back_and_is_kept() {
        let dir = scratch_dir("malformed");
        let path = dir.join("tuning.ron");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "(player_speed: oops").unwrap();

        let tuning = Tuning::load_from(&path);
        assert_eq!(tuning.player_speed, 5.0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "(player_speed: oops");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_reload_picks_up_edited_file() {
        let dir = scratch_dir("reload");
        let path = dir.join("tuning.ron");

        let mut tuning = Tuning::load_from(&path);
        assert_eq!(tuning.player_speed, 5.0);

        let edited = Tuning {
            player_speed: 9.5,
            ..Tuning::default()
        };
        edited.save_to(&path).unwrap();
        tuning.reload_from(&path);
        assert_eq!(tuning.player_speed, 9.5);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
