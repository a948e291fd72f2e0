//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` is one frame
//! - Seeded RNG only
//! - Stable brick order (grid scan order, survivors keep their order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::Bounce;
pub use rect::Rect;
pub use state::{
    Ball, Brick, BrickField, GameConfig, GamePhase, GameState, HorizontalInput, Paddle, Rgb,
};
pub use tick::{GameEvent, TickInput, tick};
