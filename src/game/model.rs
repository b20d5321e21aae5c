use crate::config::ConfigError;
use serde::Deserialize;

pub const NUM_POLES: usize = 4;

pub const PLAYER_BITMAP: &str = "Player";
pub const PLAYER_SCRIPT: &str = "PlayerAnimations";
pub const PLAYER_ANIMATION: &str = "Fly";

pub const UP_POLE_BITMAP: &str = "UpPole";
pub const DOWN_POLE_BITMAP: &str = "DownPole";

pub const BACKGROUND_BITMAP: &str = "Background";
pub const FOREGROUND_BITMAP: &str = "Foreground";
pub const FOREGROUND_SCRIPT: &str = "ForegroundAnimations";
pub const FOREGROUND_ANIMATION: &str = "Fire";
pub const FOREROOF_BITMAP: &str = "Foreroof";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameRules {
    pub gravity: f32,
    pub max_speed: f32,
    pub jump_boost: f32,
    pub foreground_scroll_speed: f32,
    pub background_scroll_speed: f32,
    pub pole_spawn_range: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        GameRules {
            gravity: 0.08,
            max_speed: 5.0,
            jump_boost: 2.0,
            foreground_scroll_speed: -2.0,
            background_scroll_speed: -1.0,
            pole_spawn_range: 1200,
        }
    }
}

impl GameRules {
    /// Rejects rules the game cannot run with: pole spawns need a non-empty
    /// range and the speed clamp needs `-max_speed < max_speed`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pole_spawn_range == 0 {
            return Err(ConfigError::Invalid("rules.pole_spawn_range must be at least 1".to_string()));
        }
        if !(self.max_speed > 0.0) {
            return Err(ConfigError::Invalid(format!("rules.max_speed must be positive, got {}", self.max_speed)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_are_valid(){
        assert!(GameRules::default().validate().is_ok());
    }

    #[test]
    fn empty_spawn_range_rejected(){
        let rules = GameRules { pole_spawn_range: 0, ..GameRules::default() };

        assert!(matches!(rules.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn non_positive_max_speed_rejected(){
        for max_speed in [0.0, -5.0, std::f32::NAN].iter() {
            let rules = GameRules { max_speed: *max_speed, ..GameRules::default() };

            assert!(matches!(rules.validate(), Err(ConfigError::Invalid(_))));
        }
    }
}
