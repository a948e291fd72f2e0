//! One frame of the game loop
//!
//! `tick` runs the frame state machine: quit handling, paddle steering, the
//! win check, ball movement and bounce resolution, then score and lives
//! bookkeeping. Rendering happens afterwards in the shell.

use super::collision::Bounce;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left arrow held
    pub left: bool,
    /// Right arrow held
    pub right: bool,
    /// A key went down since the previous frame
    pub any_key: bool,
    /// Window close requested
    pub quit: bool,
}

/// Something that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The ball bounced off a wall, the ceiling or the paddle
    Bounced(Bounce),
    /// Brick at `index` was destroyed; `score` is the new total
    BrickDestroyed { index: usize, score: u32 },
    /// Ball fell past the paddle; `lives_left` after the decrement
    LifeLost { lives_left: u8 },
    /// Last life lost; lives, bricks and score were reset
    LivesExhausted,
    /// Field cleared; the game now waits for a key press
    Won { score: u32 },
    /// A key press after a win started a new round
    Restarted,
    /// Window closed
    Quit,
}

/// Advance the game state by one frame and report what happened
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.quit && state.phase != GamePhase::Quit {
        state.phase = GamePhase::Quit;
        events.push(GameEvent::Quit);
        return events;
    }

    match state.phase {
        GamePhase::Quit => return events,
        GamePhase::WinPause => {
            // No stepping while paused; only a key press moves us on
            if input.any_key {
                state.restart_round();
                state.phase = GamePhase::Playing;
                events.push(GameEvent::Restarted);
            }
            return events;
        }
        GamePhase::Playing => {}
    }

    let config = state.config;
    state
        .paddle
        .steer(input.left, input.right, config.paddle_speed, config.width);

    if state.bricks.is_empty() {
        state.ball.freeze();
        state.phase = GamePhase::WinPause;
        events.push(GameEvent::Won { score: state.score });
        return events;
    }

    state.ball.advance(config.ball_speed);
    let bounce = state.ball.bounce(&state.paddle, &state.bricks, config.width);
    if let Some(index) = bounce.brick_index() {
        state.bricks.remove(index);
        state.score += BRICK_SCORE;
        events.push(GameEvent::BrickDestroyed {
            index,
            score: state.score,
        });
    } else if bounce != Bounce::None {
        events.push(GameEvent::Bounced(bounce));
    }

    // Ball fell past the paddle
    if state.ball.rect.bottom() > config.height {
        state.lives = state.lives.saturating_sub(1);
        events.push(GameEvent::LifeLost {
            lives_left: state.lives,
        });
        if state.lives == 0 {
            state.lives = STARTING_LIVES;
            state.regenerate_bricks();
            state.score = 0;
            events.push(GameEvent::LivesExhausted);
        }
        state.respawn();
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;
    use crate::sim::state::{Brick, BrickField, GameConfig, Paddle, Rgb};
    use glam::IVec2;

    fn new_state() -> GameState {
        GameState::new(GameConfig::default(), 12345)
    }

    fn press_any_key() -> TickInput {
        TickInput {
            any_key: true,
            ..Default::default()
        }
    }

    /// Place the ball just above the bottom edge, falling
    fn drop_ball(state: &mut GameState) {
        state.ball.rect.pos = IVec2::new(100, SCREEN_HEIGHT - BALL_SIZE);
        state.ball.vel = IVec2::new(1, 1);
    }

    #[test]
    fn test_free_flight_moves_ball() {
        let mut state = new_state();
        let events = tick(&mut state, &TickInput::default());
        assert!(events.is_empty());
        assert_eq!(state.ball.rect.pos, IVec2::new(402, 298));
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_paddle_follows_input() {
        let mut state = new_state();
        let input = TickInput {
            right: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.paddle.rect.left(), 402);

        // Left is tried first when both are held
        let input = TickInput {
            left: true,
            right: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.paddle.rect.left(), 400);
    }

    #[test]
    fn test_both_arrows_at_left_wall_move_right() {
        let mut state = new_state();
        state.paddle = Paddle::new(0, SCREEN_HEIGHT - PADDLE_BOTTOM_OFFSET);
        let input = TickInput {
            left: true,
            right: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.paddle.rect.left(), PADDLE_SPEED);
    }

    #[test]
    fn test_brick_hit_scores_and_removes() {
        let mut state = new_state();
        // Just below brick 0, moving up: one step puts it inside
        state.ball.rect.pos = IVec2::new(60, 151);
        state.ball.vel = IVec2::new(0, -1);
        state.bricks = [
            Brick::new(50, 140, Rgb::WHITE),
            Brick::new(200, 140, Rgb::BLACK),
        ]
        .into_iter()
        .collect();

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(
            events,
            vec![GameEvent::BrickDestroyed {
                index: 0,
                score: 5
            }]
        );
        assert_eq!(state.score, 5);
        assert_eq!(state.bricks.len(), 1);
        assert_eq!(state.bricks.get(0).map(|b| b.color), Some(Rgb::BLACK));
        assert_eq!(state.ball.vel, IVec2::new(0, 1));
    }

    #[test]
    fn test_empty_field_enters_win_pause() {
        let mut state = new_state();
        state.score = 300;
        state.bricks.clear();
        let ball_before = state.ball.rect;

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events, vec![GameEvent::Won { score: 300 }]);
        assert_eq!(state.phase, GamePhase::WinPause);
        assert_eq!(state.ball.vel, IVec2::ZERO);
        // Ball did not move on the winning frame; score kept until restart
        assert_eq!(state.ball.rect, ball_before);
        assert_eq!(state.score, 300);
    }

    #[test]
    fn test_destroying_last_brick_wins_next_frame() {
        let mut state = new_state();
        state.bricks = [Brick::new(50, 140, Rgb::WHITE)].into_iter().collect();
        state.ball.rect.pos = IVec2::new(60, 161);
        state.ball.vel = IVec2::new(0, -1);

        let events = tick(&mut state, &TickInput::default());
        assert!(matches!(events[..], [GameEvent::BrickDestroyed { index: 0, .. }]));
        assert!(state.bricks.is_empty());
        assert_eq!(state.phase, GamePhase::Playing);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::WinPause);
        assert_eq!(state.ball.vel, IVec2::ZERO);
    }

    #[test]
    fn test_win_pause_waits_for_key() {
        let mut state = new_state();
        state.score = 300;
        state.lives = 2;
        state.bricks.clear();
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::WinPause);

        // Held arrows are not a key press and nothing is simulated
        let paddle_before = state.paddle.clone();
        let held = TickInput {
            left: true,
            ..Default::default()
        };
        for _ in 0..10 {
            assert!(tick(&mut state, &held).is_empty());
        }
        assert_eq!(state.phase, GamePhase::WinPause);
        assert_eq!(state.paddle, paddle_before);
        assert_eq!(state.score, 300);

        let events = tick(&mut state, &press_any_key());
        assert_eq!(events, vec![GameEvent::Restarted]);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.bricks.len(), BRICK_COUNT);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 2);
        assert_eq!(state.ball.vel, IVec2::new(1, -1));
        assert_eq!(state.ball.rect.pos, IVec2::new(400, 300));
        assert_eq!(state.paddle, Paddle::spawn(&state.config));
    }

    #[test]
    fn test_ball_drop_costs_a_life() {
        let mut state = new_state();
        state.score = 40;
        state.paddle = Paddle::new(0, 580);
        drop_ball(&mut state);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events, vec![GameEvent::LifeLost { lives_left: 2 }]);
        assert_eq!(state.lives, 2);
        // Score and bricks survive a single lost life
        assert_eq!(state.score, 40);
        assert_eq!(state.bricks.len(), BRICK_COUNT);
        assert_eq!(state.ball.rect.pos, IVec2::new(400, 300));
        assert_eq!(state.ball.vel, IVec2::new(1, -1));
        assert_eq!(state.paddle, Paddle::spawn(&state.config));
    }

    #[test]
    fn test_last_life_resets_game() {
        let mut state = new_state();
        state.lives = 1;
        state.score = 125;
        for _ in 0..20 {
            state.bricks.remove(0);
        }
        state.paddle = Paddle::new(0, 580);
        drop_ball(&mut state);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(
            events,
            vec![
                GameEvent::LifeLost { lives_left: 0 },
                GameEvent::LivesExhausted
            ]
        );
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.bricks.len(), BRICK_COUNT);
        assert_eq!(
            state.bricks.get(0).map(|b| b.rect),
            Some(Rect::new(BRICK_ORIGIN_X, BRICK_ORIGIN_Y, BRICK_WIDTH, BRICK_HEIGHT))
        );
        assert_eq!(state.ball.rect.pos, IVec2::new(400, 300));
        assert_eq!(state.paddle, Paddle::spawn(&state.config));
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_quit_from_any_phase() {
        let quit = TickInput {
            quit: true,
            ..Default::default()
        };

        let mut state = new_state();
        assert_eq!(tick(&mut state, &quit), vec![GameEvent::Quit]);
        assert_eq!(state.phase, GamePhase::Quit);
        // Already quit: nothing more happens
        assert!(tick(&mut state, &quit).is_empty());
        assert!(tick(&mut state, &press_any_key()).is_empty());

        let mut state = new_state();
        state.bricks = BrickField::default();
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::WinPause);
        assert_eq!(tick(&mut state, &quit), vec![GameEvent::Quit]);
        assert_eq!(state.phase, GamePhase::Quit);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = new_state();
        let mut state2 = new_state();

        let inputs = [
            TickInput {
                left: true,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                right: true,
                ..Default::default()
            },
        ];

        for _ in 0..2000 {
            for input in &inputs {
                let e1 = tick(&mut state1, input);
                let e2 = tick(&mut state2, input);
                assert_eq!(e1, e2);
            }
        }

        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.lives, state2.lives);
        assert_eq!(state1.ball, state2.ball);
        assert_eq!(state1.bricks, state2.bricks);
    }
}
