//! Frame driver shared by the native and web shells
//!
//! Owns the simulation, the input tracker and the frame clock. The shell
//! forwards events into `keys`, calls `update` with wall-clock time and
//! draws with `render` whenever `update` reports a change.

use crate::consts::MAX_CATCH_UP_FRAMES;
use crate::renderer::{Canvas, draw_frame};
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, tick};

use super::input::KeyTracker;
use super::log_events;
use super::time::FrameClock;

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    pub keys: KeyTracker,
    clock: FrameClock,
}

impl Game {
    /// `fallback_seed` is used when the settings do not pin one
    pub fn new(settings: &Settings, fallback_seed: u64) -> Self {
        let settings = settings.validated();
        let seed = settings.seed.unwrap_or(fallback_seed);
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state: GameState::new(settings.game_config(), seed),
            keys: KeyTracker::new(),
            clock: FrameClock::new(settings.target_fps, MAX_CATCH_UP_FRAMES),
        }
    }

    /// Run whatever frames are due after `elapsed` seconds.
    ///
    /// Returns true when the state changed and a redraw is needed.
    pub fn update(&mut self, elapsed: f64) -> bool {
        match self.state.phase {
            GamePhase::Quit => false,
            GamePhase::WinPause => {
                // Frozen until a key press or close request arrives
                if !self.keys.has_pending_event() {
                    return false;
                }
                self.step();
                if self.state.phase == GamePhase::Playing {
                    self.clock.reset();
                }
                true
            }
            GamePhase::Playing => {
                let frames = self.clock.advance(elapsed);
                for _ in 0..frames {
                    self.step();
                    if self.state.phase != GamePhase::Playing {
                        break;
                    }
                }
                frames > 0
            }
        }
    }

    fn step(&mut self) {
        let input = self.keys.take_input();
        let events = tick(&mut self.state, &input);
        log_events(&self.state, &events);
    }

    /// Draw the current state
    pub fn render(&self, canvas: &mut dyn Canvas) {
        draw_frame(&self.state, canvas);
    }

    pub fn is_finished(&self) -> bool {
        self.state.phase == GamePhase::Quit
    }

    pub fn is_paused(&self) -> bool {
        self.state.phase == GamePhase::WinPause
    }

    /// Seconds until the next frame is due while playing
    pub fn until_next_frame(&self) -> f64 {
        self.clock.until_next_frame()
    }
}
