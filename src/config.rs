// Game-wide settings with environment overrides

use crate::engine::physics::CollisionResponse;
use glam::Vec2;
use std::path::PathBuf;

pub const ENV_ASSET_DIR: &str = "LADYBUG_ASSET_DIR";
pub const ENV_TARGET_FPS: &str = "LADYBUG_TARGET_FPS";
pub const ENV_MOVE_SPEED: &str = "LADYBUG_MOVE_SPEED";
pub const ENV_COLLISION: &str = "LADYBUG_COLLISION";
pub const ENV_DEBUG: &str = "LADYBUG_DEBUG";
pub const ENV_ARROW_KEYS: &str = "LADYBUG_ARROW_KEYS";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key}={value:?} is not a valid number")]
    InvalidNumber { key: String, value: String },

    #[error("{key}={value:?} must be greater than zero")]
    NotPositive { key: String, value: String },

    #[error("{key}={value:?} is not a collision response (expected `revert` or `per-axis`)")]
    InvalidCollision { key: String, value: String },

    #[error("{key}={value:?} is not a boolean")]
    InvalidBool { key: String, value: String },
}

/// Settings for one run of the game
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub title: String,
    pub window_width: u32,
    pub window_height: u32,
    /// Edge length of a wall tile in pixels
    pub tile_size: f32,
    pub target_fps: f64,
    /// Ladybug speed in pixels per millisecond
    pub move_speed: f32,
    pub sprite_scale: f32,
    pub spawn: Vec2,
    pub asset_dir: PathBuf,
    pub collision: CollisionResponse,
    pub debug_overlay: bool,
    /// Arrow keys move the ladybug alongside WASD
    pub arrow_keys: bool,
    /// Inclusive range a die rolls in
    pub dice_min: i32,
    pub dice_max: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "LADYBUGTHESLAYER".to_string(),
            window_width: 1280,
            window_height: 720,
            tile_size: 32.0,
            target_fps: 240.0,
            move_speed: 1.0,
            sprite_scale: 3.0,
            spawn: Vec2::new(100.0, 100.0),
            asset_dir: PathBuf::from("assets"),
            collision: CollisionResponse::FullRevert,
            debug_overlay: cfg!(debug_assertions),
            arrow_keys: false,
            dice_min: 1,
            dice_max: 6,
        }
    }
}

impl GameConfig {
    /// Defaults overridden by `LADYBUG_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each known key
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(ENV_ASSET_DIR) {
            config.asset_dir = PathBuf::from(dir);
        }
        if let Some(value) = lookup(ENV_TARGET_FPS) {
            config.target_fps = parse_positive(ENV_TARGET_FPS, &value)?;
        }
        if let Some(value) = lookup(ENV_MOVE_SPEED) {
            config.move_speed = parse_positive(ENV_MOVE_SPEED, &value)? as f32;
        }
        if let Some(value) = lookup(ENV_COLLISION) {
            config.collision = parse_collision(&value)?;
        }
        if let Some(value) = lookup(ENV_DEBUG) {
            config.debug_overlay = parse_bool(ENV_DEBUG, &value)?;
        }
        if let Some(value) = lookup(ENV_ARROW_KEYS) {
            config.arrow_keys = parse_bool(ENV_ARROW_KEYS, &value)?;
        }

        Ok(config)
    }

    pub fn screen_size(&self) -> Vec2 {
        Vec2::new(self.window_width as f32, self.window_height as f32)
    }
}

fn parse_positive(key: &str, value: &str) -> Result<f64, ConfigError> {
    let number: f64 = value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key: key.to_string(),
        value: value.to_string(),
    })?;

    if !number.is_finite() || number <= 0.0 {
        return Err(ConfigError::NotPositive {
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    Ok(number)
}

fn parse_collision(value: &str) -> Result<CollisionResponse, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "revert" | "full" | "full-revert" => Ok(CollisionResponse::FullRevert),
        "per-axis" | "axis" | "slide" => Ok(CollisionResponse::PerAxis),
        _ => Err(ConfigError::InvalidCollision {
            key: ENV_COLLISION.to_string(),
            value: value.to_string(),
        }),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!((config.window_width, config.window_height), (1280, 720));
        assert_eq!(config.tile_size, 32.0);
        assert_eq!(config.target_fps, 240.0);
        assert_eq!(config.move_speed, 1.0);
        assert_eq!(config.sprite_scale, 3.0);
        assert_eq!(config.collision, CollisionResponse::FullRevert);
        assert_eq!((config.dice_min, config.dice_max), (1, 6));
    }

    #[test]
    fn test_no_overrides_is_default() {
        let config = GameConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = GameConfig::from_lookup(lookup_from(&[
            (ENV_ASSET_DIR, "/tmp/sprites"),
            (ENV_TARGET_FPS, "72"),
            (ENV_MOVE_SPEED, "0.5"),
            (ENV_COLLISION, "per-axis"),
            (ENV_DEBUG, "true"),
            (ENV_ARROW_KEYS, "yes"),
        ]))
        .unwrap();

        assert_eq!(config.asset_dir, PathBuf::from("/tmp/sprites"));
        assert_eq!(config.target_fps, 72.0);
        assert_eq!(config.move_speed, 0.5);
        assert_eq!(config.collision, CollisionResponse::PerAxis);
        assert!(config.debug_overlay);
        assert!(config.arrow_keys);
    }

    #[test]
    fn test_debug_off() {
        let config = GameConfig::from_lookup(lookup_from(&[(ENV_DEBUG, "0")])).unwrap();
        assert!(!config.debug_overlay);
    }

    #[test]
    fn test_invalid_number() {
        let err = GameConfig::from_lookup(lookup_from(&[(ENV_TARGET_FPS, "fast")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { .. }));
    }

    #[test]
    fn test_non_positive_rejected() {
        let err = GameConfig::from_lookup(lookup_from(&[(ENV_MOVE_SPEED, "-1")])).unwrap_err();
        assert!(matches!(err, ConfigError::NotPositive { .. }));

        let err = GameConfig::from_lookup(lookup_from(&[(ENV_TARGET_FPS, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::NotPositive { .. }));
    }

    #[test]
    fn test_invalid_collision() {
        let err = GameConfig::from_lookup(lookup_from(&[(ENV_COLLISION, "bounce")])).unwrap_err();
        let expected = format!(
            "{}=\"bounce\" is not a collision response (expected `revert` or `per-axis`)",
            ENV_COLLISION
        );
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_invalid_bool() {
        let err = GameConfig::from_lookup(lookup_from(&[(ENV_DEBUG, "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBool { .. }));
    }
}
