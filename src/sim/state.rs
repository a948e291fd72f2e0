//! Game state and core simulation types
//!
//! Everything the frame loop mutates is owned by a single `GameState`.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;

/// Current phase of the frame state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay, stepped at the frame rate
    Playing,
    /// Every brick destroyed; waiting for any key press to start over
    WinPause,
    /// Window closed; the shell exits its loop
    Quit,
}

/// An opaque 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Uniformly random colour, each channel in 0..=255
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Rgb(rng.random(), rng.random(), rng.random())
    }
}

/// Horizontal steering read from the keyboard for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalInput {
    #[default]
    None,
    Left,
    Right,
}

impl HorizontalInput {
    /// Signed unit direction along x
    pub fn sign(self) -> i32 {
        match self {
            HorizontalInput::None => 0,
            HorizontalInput::Left => -1,
            HorizontalInput::Right => 1,
        }
    }
}

/// Screen size and speeds fixed when a game is constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    /// Pixels the paddle moves per frame while a direction is held
    pub paddle_speed: i32,
    /// Multiplier applied to the ball's unit velocity each frame
    pub ball_speed: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            ball_speed: BALL_SPEED,
        }
    }
}

impl GameConfig {
    /// Where the ball spawns and returns to on reset
    pub fn ball_spawn(&self) -> IVec2 {
        IVec2::new(self.width / 2, self.height / 2)
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            rect: Rect::new(x, y, PADDLE_WIDTH, PADDLE_HEIGHT),
        }
    }

    /// A fresh paddle at the spawn position for this screen
    pub fn spawn(config: &GameConfig) -> Self {
        Self::new(config.width / 2, config.height - PADDLE_BOTTOM_OFFSET)
    }

    /// Move by `speed` in the requested direction and report whether the
    /// paddle moved.
    ///
    /// The step is skipped entirely if it would take any part of the paddle
    /// outside `[0, screen_width]`.
    pub fn move_with(&mut self, input: HorizontalInput, speed: i32, screen_width: i32) -> bool {
        let dx = input.sign() * speed;
        if dx == 0 {
            return false;
        }
        let moved = self.rect.translated(IVec2::new(dx, 0));
        if moved.within_horizontal(screen_width) {
            self.rect = moved;
            return true;
        }
        false
    }

    /// Apply held arrows for one frame. Left is tried first; if it is not
    /// held or the step is blocked by the wall, right gets its turn.
    pub fn steer(&mut self, left: bool, right: bool, speed: i32, screen_width: i32) {
        if left && self.move_with(HorizontalInput::Left, speed, screen_width) {
            return;
        }
        if right {
            self.move_with(HorizontalInput::Right, speed, screen_width);
        }
    }
}

/// The ball. Velocity components are unit directions scaled by the speed
/// factor when the ball moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ball {
    pub rect: Rect,
    /// Direction per axis, each in {-1, 0, +1}
    pub vel: IVec2,
    /// Top-left corner restored by `reset`
    pub spawn: IVec2,
}

impl Ball {
    /// Initial direction: up and to the right
    pub const SERVE_VELOCITY: IVec2 = IVec2::new(1, -1);

    pub fn new(spawn: IVec2) -> Self {
        let mut ball = Self {
            rect: Rect::new(spawn.x, spawn.y, BALL_SIZE, BALL_SIZE),
            vel: Self::SERVE_VELOCITY,
            spawn,
        };
        ball.reset();
        ball
    }

    /// Return to the spawn point heading up and to the right
    pub fn reset(&mut self) {
        self.rect = Rect::new(self.spawn.x, self.spawn.y, BALL_SIZE, BALL_SIZE);
        self.vel = Self::SERVE_VELOCITY;
    }

    /// Advance by one frame of velocity. No bounds checks here; `bounce`
    /// handles walls.
    pub fn advance(&mut self, speed: i32) {
        self.rect.translate(self.vel * speed);
    }

    /// Stop dead (used when the field is cleared)
    pub fn freeze(&mut self) {
        self.vel = IVec2::ZERO;
    }
}

/// A destructible brick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brick {
    pub rect: Rect,
    pub color: Rgb,
}

impl Brick {
    pub fn new(x: i32, y: i32, color: Rgb) -> Self {
        Self {
            rect: Rect::new(x, y, BRICK_WIDTH, BRICK_HEIGHT),
            color,
        }
    }
}

/// All bricks still standing, in grid scan order (row-major)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrickField {
    bricks: Vec<Brick>,
}

impl BrickField {
    /// A full, freshly coloured grid
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut field = Self::default();
        field.regenerate(rng);
        field
    }

    /// Rebuild the whole 5×12 grid. Positions are fixed; only the colours
    /// depend on `rng`.
    pub fn regenerate<R: Rng>(&mut self, rng: &mut R) {
        self.bricks.clear();
        self.bricks.reserve(BRICK_COUNT);
        for row in 0..BRICK_ROWS {
            for col in 0..BRICK_COLUMNS {
                let x = col * BRICK_WIDTH + BRICK_ORIGIN_X;
                let y = row * BRICK_HEIGHT + BRICK_ORIGIN_Y;
                self.bricks.push(Brick::new(x, y, Rgb::random(rng)));
            }
        }
    }

    /// Delete the brick at `index`; survivors keep their relative order
    pub fn remove(&mut self, index: usize) -> Option<Brick> {
        (index < self.bricks.len()).then(|| self.bricks.remove(index))
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn get(&self, index: usize) -> Option<&Brick> {
        self.bricks.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Brick> {
        self.bricks.iter()
    }

    /// Drop every brick (the field is cleared)
    pub fn clear(&mut self) {
        self.bricks.clear();
    }
}

impl FromIterator<Brick> for BrickField {
    fn from_iter<I: IntoIterator<Item = Brick>>(iter: I) -> Self {
        Self {
            bricks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BrickField {
    type Item = &'a Brick;
    type IntoIter = std::slice::Iter<'a, Brick>;

    fn into_iter(self) -> Self::IntoIter {
        self.bricks.iter()
    }
}

/// Complete game state, owned by the frame loop
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Seed the brick colours were drawn from
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u8,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickField,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game with a full brick field
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let bricks = BrickField::generate(&mut rng);
        Self {
            config,
            seed,
            phase: GamePhase::Playing,
            score: 0,
            lives: STARTING_LIVES,
            paddle: Paddle::spawn(&config),
            ball: Ball::new(config.ball_spawn()),
            bricks,
            rng,
        }
    }

    /// Rebuild the brick grid with fresh colours
    pub fn regenerate_bricks(&mut self) {
        self.bricks.regenerate(&mut self.rng);
    }

    /// Ball back to its spawn, paddle replaced by a fresh one
    pub fn respawn(&mut self) {
        self.ball.reset();
        self.paddle = Paddle::spawn(&self.config);
    }

    /// Fresh bricks, zero score, respawned ball and paddle. Lives are left
    /// alone.
    pub fn restart_round(&mut self) {
        self.regenerate_bricks();
        self.score = 0;
        self.respawn();
    }
}
