//! Optional game configuration, read from `cave_escape.toml` next to the game.

use crate::game::model::GameRules;
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_PATH: &str = "cave_escape.toml";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Bundle manifest, relative to the asset directory.
    pub bundle: String,
    /// Fixed seed for the pole layout; a fresh one is drawn when absent.
    pub seed: Option<u64>,
    pub rules: GameRules,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            bundle: "cave_escape.ron".to_string(),
            seed: None,
            rules: GameRules::default(),
        }
    }
}

impl GameConfig {
    /// Reads a `.toml` or `.ron` file; the rules must pass validation.
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: GameConfig = match Path::new(path).extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?,
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_string())),
        };
        config.rules.validate()?;
        Ok(config)
    }

    /// A missing file means defaults; a broken or invalid one is reported and also falls back to defaults.
    pub fn load_or_default(path: &str) -> Self {
        if !Path::new(path).exists() {
            log::info!("No {} found, using default settings", path);
            return GameConfig::default();
        }
        match GameConfig::load_from_file(path) {
            Ok(config) => {
                log::info!("Loaded settings from {}", path);
                config
            }
            Err(error) => {
                log::warn!("Ignoring {}: {}", path, error);
                GameConfig::default()
            }
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed settings: {0}")]
    Parse(String),

    #[error("Settings file must be .toml or .ron: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid settings: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("cave_escape_{}_{}", std::process::id(), name))
    }

    #[test]
    fn partial_toml_keeps_defaults(){
        let config: GameConfig = toml::from_str(r#"
            seed = 42

            [rules]
            gravity = 0.1
        "#).unwrap();

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.bundle, "cave_escape.ron");
        assert_eq!(config.rules.gravity, 0.1);
        assert_eq!(config.rules.max_speed, 5.0);
        assert_eq!(config.rules.pole_spawn_range, 1200);
    }

    #[test]
    fn load_toml(){
        let path = temp_path("settings.toml");
        std::fs::write(&path, "seed = 7\n\n[rules]\npole_spawn_range = 600\n").unwrap();

        let loaded = GameConfig::load_from_file(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.seed, Some(7));
        assert_eq!(loaded.rules.pole_spawn_range, 600);
        assert_eq!(loaded.rules.max_speed, 5.0);
    }

    #[test]
    fn zero_spawn_range_is_rejected(){
        let path = temp_path("zero_range.toml");
        std::fs::write(&path, "[rules]\npole_spawn_range = 0\n").unwrap();

        let result = GameConfig::load_from_file(path.to_str().unwrap());
        let fallback = GameConfig::load_or_default(path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
        assert_eq!(fallback, GameConfig::default());
    }

    #[test]
    fn negative_max_speed_is_rejected(){
        let path = temp_path("negative_speed.ron");
        std::fs::write(&path, "(rules: (max_speed: -5.0))").unwrap();

        let result = GameConfig::load_from_file(path.to_str().unwrap());
        let fallback = GameConfig::load_or_default(path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
        assert_eq!(fallback.rules.max_speed, 5.0);
    }

    #[test]
    fn load_ron(){
        let path = temp_path("settings.ron");
        std::fs::write(&path, "(bundle: \"other.ron\", rules: (jump_boost: 3.0))").unwrap();

        let loaded = GameConfig::load_from_file(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.bundle, "other.ron");
        assert_eq!(loaded.seed, None);
        assert_eq!(loaded.rules.jump_boost, 3.0);
        assert_eq!(loaded.rules.gravity, 0.08);
    }

    #[test]
    fn unsupported_extension(){
        let path = temp_path("settings.json");
        std::fs::write(&path, "{}").unwrap();

        let result = GameConfig::load_from_file(path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn broken_file_falls_back_to_defaults(){
        let path = temp_path("broken.toml");
        std::fs::write(&path, "rules = 12").unwrap();

        let loaded = GameConfig::load_or_default(path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, GameConfig::default());
    }

    #[test]
    fn missing_file_uses_defaults(){
        let loaded = GameConfig::load_or_default("does/not/exist.toml");

        assert_eq!(loaded, GameConfig::default());
    }
}
