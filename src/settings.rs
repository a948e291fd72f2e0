//! Game settings
//!
//! Screen size, speeds, frame rate and RNG seed. Loaded from a JSON file on
//! native builds and from LocalStorage in the browser. Missing fields take
//! their defaults, so a file may set just the values it cares about.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::GameConfig;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    /// Canvas width in pixels
    pub width: i32,
    /// Canvas height in pixels
    pub height: i32,

    // === Pacing ===
    /// Frames per second while playing
    pub target_fps: u32,

    // === Speeds ===
    /// Paddle pixels per frame
    pub paddle_speed: i32,
    /// Ball speed multiplier per frame
    pub ball_speed: i32,

    // === Randomness ===
    /// Brick colour seed; `None` picks one from the clock at startup
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            target_fps: TARGET_FPS,
            paddle_speed: PADDLE_SPEED,
            ball_speed: BALL_SPEED,
            seed: None,
        }
    }
}

impl Settings {
    /// Smallest screen that still fits the paddle and the ball spawn
    const MIN_WIDTH: i32 = PADDLE_WIDTH * 2;
    const MIN_HEIGHT: i32 = PADDLE_BOTTOM_OFFSET * 2 + BALL_SIZE;
    /// Largest screen accepted
    pub const MAX_SCREEN: i32 = 4096;
    pub const MAX_FPS: u32 = 240;
    /// A faster ball could step clean over the paddle or a brick
    pub const MAX_BALL_SPEED: i32 = if BALL_SIZE < PADDLE_HEIGHT {
        BALL_SIZE
    } else {
        PADDLE_HEIGHT
    };
    pub const MAX_PADDLE_SPEED: i32 = PADDLE_WIDTH;

    /// Copy with every value clamped into a playable range
    pub fn validated(&self) -> Self {
        Self {
            width: self.width.clamp(Self::MIN_WIDTH, Self::MAX_SCREEN),
            height: self.height.clamp(Self::MIN_HEIGHT, Self::MAX_SCREEN),
            target_fps: self.target_fps.clamp(1, Self::MAX_FPS),
            paddle_speed: self.paddle_speed.clamp(1, Self::MAX_PADDLE_SPEED),
            ball_speed: self.ball_speed.clamp(1, Self::MAX_BALL_SPEED),
            seed: self.seed,
        }
    }

    /// Simulation configuration for `GameState::new`
    pub fn game_config(&self) -> GameConfig {
        let s = self.validated();
        GameConfig {
            width: s.width,
            height: s.height,
            paddle_speed: s.paddle_speed,
            ball_speed: s.ball_speed,
        }
    }

    /// Parse settings JSON, falling back to defaults on error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => settings.validated(),
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                Self::default()
            }
        }
    }

    /// Default settings file name, looked up in the working directory
    pub const FILE_NAME: &'static str = "breakout.json";
    /// Environment variable overriding the settings file path
    pub const PATH_ENV: &'static str = "BREAKOUT_SETTINGS";

    /// Load settings from `breakout.json` or `$BREAKOUT_SETTINGS` (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let path = std::env::var_os(Self::PATH_ENV)
            .map(std::path::PathBuf::from)
            .unwrap_or_else(|| std::path::PathBuf::from(Self::FILE_NAME));
        Self::load_from(&path)
    }

    /// Load settings from a specific file (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Loaded settings from {}", path.display());
                Self::from_json(&json)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not read {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "breakout_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, TickInput, tick};

    #[test]
    fn test_defaults_match_classic_layout() {
        let config = Settings::default().game_config();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "width": 1024, "seed": 9 }"#);
        assert_eq!(settings.width, 1024);
        assert_eq!(settings.height, SCREEN_HEIGHT);
        assert_eq!(settings.target_fps, 60);
        assert_eq!(settings.seed, Some(9));
    }

    #[test]
    fn test_malformed_json_falls_back() {
        assert_eq!(Settings::from_json("{ not json"), Settings::default());
        assert_eq!(
            Settings::from_json(r#"{ "width": "wide" }"#),
            Settings::default()
        );
    }

    #[test]
    fn test_validation_clamps() {
        let settings = Settings {
            width: 10,
            height: -5,
            target_fps: 0,
            paddle_speed: 0,
            ball_speed: -3,
            seed: None,
        }
        .validated();
        assert_eq!(settings.width, PADDLE_WIDTH * 2);
        assert!(settings.height > PADDLE_BOTTOM_OFFSET);
        assert_eq!(settings.target_fps, 1);
        assert_eq!(settings.paddle_speed, 1);
        assert_eq!(settings.ball_speed, 1);
    }

    #[test]
    fn test_validation_caps() {
        let settings = Settings {
            width: i32::MAX,
            height: 100_000,
            target_fps: u32::MAX,
            paddle_speed: 1_000_000,
            ball_speed: 1_500_000_000,
            seed: None,
        }
        .validated();
        assert_eq!(settings.width, Settings::MAX_SCREEN);
        assert_eq!(settings.height, Settings::MAX_SCREEN);
        assert_eq!(settings.target_fps, Settings::MAX_FPS);
        assert_eq!(settings.paddle_speed, PADDLE_WIDTH);
        assert_eq!(settings.ball_speed, BALL_SIZE.min(PADDLE_HEIGHT));
    }

    #[test]
    fn test_huge_ball_speed_plays_safely() {
        let settings = Settings::from_json(r#"{ "ball_speed": 1500000000 }"#);
        let mut state = GameState::new(settings.game_config(), 3);
        for _ in 0..1000 {
            tick(&mut state, &TickInput::default());
        }
        let ball = state.ball.rect;
        assert!(ball.left() > -Settings::MAX_SCREEN && ball.right() < 2 * Settings::MAX_SCREEN);
    }

    #[test]
    fn test_saved_settings_load_back() {
        let settings = Settings {
            seed: Some(42),
            ball_speed: 3,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&json), settings);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("breakout-settings-does-not-exist.json");
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "breakout-settings-test-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "paddle_speed": 4 }"#).unwrap();
        let settings = Settings::load_from(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(settings.paddle_speed, 4);
        assert_eq!(settings.width, SCREEN_WIDTH);
    }
}
