//! Breakout - paddle, ball and a wall of bricks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, frame state machine)
//! - `renderer`: Canvas abstraction, scene drawing and the wgpu pipeline
//! - `platform`: Native (winit) / browser shells, input tracking, frame pacing
//! - `settings`: Data-driven screen size, speeds and seed

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default canvas size in pixels
    pub const SCREEN_WIDTH: i32 = 800;
    pub const SCREEN_HEIGHT: i32 = 600;

    /// Frame rate the loop is throttled to while playing
    pub const TARGET_FPS: u32 = 60;
    /// Maximum frames simulated in one wake-up before dropping time
    pub const MAX_CATCH_UP_FRAMES: u32 = 4;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 80;
    pub const PADDLE_HEIGHT: i32 = 10;
    /// Distance from the bottom of the screen to the paddle's top edge
    pub const PADDLE_BOTTOM_OFFSET: i32 = 20;
    pub const PADDLE_SPEED: i32 = 2;

    /// Ball defaults
    pub const BALL_SIZE: i32 = 10;
    pub const BALL_SPEED: i32 = 2;

    /// Brick grid
    pub const BRICK_WIDTH: i32 = 60;
    pub const BRICK_HEIGHT: i32 = 20;
    pub const BRICK_ROWS: i32 = 5;
    pub const BRICK_COLUMNS: i32 = 12;
    pub const BRICK_ORIGIN_X: i32 = 50;
    pub const BRICK_ORIGIN_Y: i32 = 50;
    pub const BRICK_COUNT: usize = (BRICK_ROWS * BRICK_COLUMNS) as usize;

    /// Points awarded per destroyed brick
    pub const BRICK_SCORE: u32 = 5;
    pub const STARTING_LIVES: u8 = 3;

    /// HUD layout
    pub const SCORE_TEXT_Y: i32 = 20;
    pub const WIN_SUBTITLE_OFFSET: i32 = 50;
}
