//! Scene drawing: entities, HUD and the win banner

use glam::IVec2;

use super::Canvas;
use crate::consts::{SCORE_TEXT_Y, WIN_SUBTITLE_OFFSET};
use crate::sim::{Ball, Brick, BrickField, GamePhase, GameState, Paddle, Rgb};

pub const BACKGROUND: Rgb = Rgb::BLACK;
pub const PADDLE_COLOR: Rgb = Rgb::WHITE;
pub const BALL_COLOR: Rgb = Rgb::WHITE;
pub const TEXT_COLOR: Rgb = Rgb::WHITE;

pub const WIN_TITLE: &str = "Congratulations! You Win!";
pub const WIN_SUBTITLE: &str = "Press any key to start a new game";

/// Horizontal centre of the lives counter
const LIVES_TEXT_X: i32 = 80;

/// Something that knows how to put itself on a canvas
pub trait Draw {
    fn draw(&self, canvas: &mut dyn Canvas);
}

impl Draw for Paddle {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.rect, PADDLE_COLOR);
    }
}

impl Draw for Ball {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.rect, BALL_COLOR);
    }
}

impl Draw for Brick {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.rect, self.color);
    }
}

impl Draw for BrickField {
    fn draw(&self, canvas: &mut dyn Canvas) {
        for brick in self {
            brick.draw(canvas);
        }
    }
}

pub fn score_text(score: u32) -> String {
    format!("Score: {score}")
}

pub fn lives_text(lives: u8) -> String {
    format!("Lives: {lives}")
}

/// Draw one complete frame: background, paddle, ball, bricks, HUD, and the
/// win banner while waiting for a restart.
pub fn draw_frame(state: &GameState, canvas: &mut dyn Canvas) {
    let width = state.config.width;
    let height = state.config.height;

    canvas.clear(BACKGROUND);
    state.paddle.draw(canvas);
    state.ball.draw(canvas);
    state.bricks.draw(canvas);

    canvas.draw_text(
        &score_text(state.score),
        IVec2::new(width / 2, SCORE_TEXT_Y),
        TEXT_COLOR,
    );
    canvas.draw_text(
        &lives_text(state.lives),
        IVec2::new(LIVES_TEXT_X, SCORE_TEXT_Y),
        TEXT_COLOR,
    );

    if state.phase == GamePhase::WinPause {
        canvas.draw_text(WIN_TITLE, IVec2::new(width / 2, height / 2), TEXT_COLOR);
        canvas.draw_text(
            WIN_SUBTITLE,
            IVec2::new(width / 2, height / 2 + WIN_SUBTITLE_OFFSET),
            TEXT_COLOR,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameConfig, Rect, TickInput, tick};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear(Rgb),
        Rect(Rect, Rgb),
        Text(String, IVec2, Rgb),
    }

    #[derive(Default)]
    struct RecordingCanvas {
        calls: Vec<Call>,
    }

    impl Canvas for RecordingCanvas {
        fn clear(&mut self, color: Rgb) {
            self.calls.push(Call::Clear(color));
        }

        fn fill_rect(&mut self, rect: Rect, color: Rgb) {
            self.calls.push(Call::Rect(rect, color));
        }

        fn draw_text(&mut self, text: &str, center: IVec2, color: Rgb) {
            self.calls.push(Call::Text(text.to_string(), center, color));
        }
    }

    impl RecordingCanvas {
        fn texts(&self) -> Vec<&str> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Text(t, _, _) => Some(t.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    fn new_state() -> GameState {
        GameState::new(GameConfig::default(), 5)
    }

    #[test]
    fn test_frame_draw_order() {
        let state = new_state();
        let mut canvas = RecordingCanvas::default();
        draw_frame(&state, &mut canvas);

        assert_eq!(canvas.calls[0], Call::Clear(Rgb::BLACK));
        assert_eq!(canvas.calls[1], Call::Rect(state.paddle.rect, Rgb::WHITE));
        assert_eq!(canvas.calls[2], Call::Rect(state.ball.rect, Rgb::WHITE));

        let bricks: Vec<_> = state
            .bricks
            .iter()
            .map(|b| Call::Rect(b.rect, b.color))
            .collect();
        assert_eq!(&canvas.calls[3..3 + bricks.len()], &bricks[..]);

        assert_eq!(
            canvas.calls[3 + bricks.len()],
            Call::Text("Score: 0".to_string(), IVec2::new(400, 20), Rgb::WHITE)
        );
        assert_eq!(canvas.texts(), vec!["Score: 0", "Lives: 3"]);
    }

    #[test]
    fn test_destroyed_bricks_are_not_drawn() {
        let mut state = new_state();
        state.bricks.remove(0);
        state.bricks.remove(0);
        let mut canvas = RecordingCanvas::default();
        draw_frame(&state, &mut canvas);

        let rects = canvas
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Rect(..)))
            .count();
        // paddle + ball + surviving bricks
        assert_eq!(rects, 2 + 58);
    }

    #[test]
    fn test_win_banner() {
        let mut state = new_state();
        state.score = 300;
        state.bricks.clear();
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::WinPause);

        let mut canvas = RecordingCanvas::default();
        draw_frame(&state, &mut canvas);
        assert_eq!(
            canvas.texts(),
            vec!["Score: 300", "Lives: 3", WIN_TITLE, WIN_SUBTITLE]
        );
        assert!(canvas.calls.contains(&Call::Text(
            WIN_SUBTITLE.to_string(),
            IVec2::new(400, 350),
            Rgb::WHITE
        )));
    }

    #[test]
    fn test_no_banner_while_playing() {
        let state = new_state();
        let mut canvas = RecordingCanvas::default();
        draw_frame(&state, &mut canvas);
        assert!(!canvas.texts().contains(&WIN_TITLE));
    }
}
