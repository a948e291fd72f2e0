//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Window / canvas and GPU surface creation
//! - Input events (folded by `input::KeyTracker`)
//! - Frame pacing (`time::FrameClock`)

pub mod game;
pub mod input;
pub mod time;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use game::Game;
pub use input::{Key, KeyTracker};
pub use time::FrameClock;

use std::fmt;

use crate::renderer::pipeline::RenderError;
use crate::sim::{GameEvent, GameState};

/// Fatal platform faults; all of them end the process
#[derive(Debug)]
pub enum PlatformError {
    /// Window or canvas could not be created
    Window(String),
    /// The GPU surface could not be created for the window
    CreateSurface(wgpu::CreateSurfaceError),
    /// No GPU adapter compatible with the surface
    RequestAdapter(wgpu::RequestAdapterError),
    /// Renderer setup or presentation failed
    Render(RenderError),
    /// The native event loop failed
    #[cfg(not(target_arch = "wasm32"))]
    EventLoop(winit::error::EventLoopError),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Window(msg) => write!(f, "failed to create window: {msg}"),
            PlatformError::CreateSurface(e) => write!(f, "failed to create surface: {e}"),
            PlatformError::RequestAdapter(e) => write!(f, "no suitable GPU adapter: {e}"),
            PlatformError::Render(e) => write!(f, "renderer error: {e}"),
            #[cfg(not(target_arch = "wasm32"))]
            PlatformError::EventLoop(e) => write!(f, "event loop error: {e}"),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlatformError::Window(_) => None,
            PlatformError::CreateSurface(e) => Some(e),
            PlatformError::RequestAdapter(e) => Some(e),
            PlatformError::Render(e) => Some(e),
            #[cfg(not(target_arch = "wasm32"))]
            PlatformError::EventLoop(e) => Some(e),
        }
    }
}

impl From<wgpu::CreateSurfaceError> for PlatformError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        PlatformError::CreateSurface(e)
    }
}

impl From<wgpu::RequestAdapterError> for PlatformError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        PlatformError::RequestAdapter(e)
    }
}

impl From<RenderError> for PlatformError {
    fn from(e: RenderError) -> Self {
        PlatformError::Render(e)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<winit::error::EventLoopError> for PlatformError {
    fn from(e: winit::error::EventLoopError) -> Self {
        PlatformError::EventLoop(e)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<winit::error::OsError> for PlatformError {
    fn from(e: winit::error::OsError) -> Self {
        PlatformError::Window(e.to_string())
    }
}

/// Log what happened during a frame at the right level
pub fn log_events(state: &GameState, events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::Bounced(bounce) => log::trace!("Bounce: {:?}", bounce),
            GameEvent::BrickDestroyed { index, score } => {
                log::debug!(
                    "Brick {} destroyed, score {}, {} left",
                    index,
                    score,
                    state.bricks.len()
                );
            }
            GameEvent::LifeLost { lives_left } => {
                log::debug!("Ball lost, {} lives left", lives_left);
            }
            GameEvent::LivesExhausted => log::info!("Out of lives - starting over"),
            GameEvent::Won { score } => log::info!("Field cleared with score {}", score),
            GameEvent::Restarted => log::info!("New round started"),
            GameEvent::Quit => log::info!("Quit requested"),
        }
    }
}
