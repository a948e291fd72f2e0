//! Collision detection and response for the ball
//!
//! Exactly one kind of bounce is applied per frame, checked in a fixed
//! order: side walls, then ceiling or paddle, then bricks. A ball that is
//! past a side wall and touching a brick in the same frame only bounces off
//! the wall.

use super::state::{Ball, BrickField, Paddle};

/// What the ball bounced off this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounce {
    /// Nothing touched; velocity unchanged
    None,
    /// Left or right screen edge crossed; dx inverted
    Wall,
    /// Top screen edge crossed; dy inverted
    Ceiling,
    /// Overlapping the paddle; dy inverted
    Paddle,
    /// Overlapping the brick at this field index; dy inverted, brick should
    /// be destroyed by the caller
    Brick(usize),
}

impl Bounce {
    /// Index of the brick to destroy, if any
    pub fn brick_index(self) -> Option<usize> {
        match self {
            Bounce::Brick(index) => Some(index),
            _ => None,
        }
    }
}

impl Ball {
    /// Resolve at most one collision and flip the matching velocity axis.
    pub fn bounce(&mut self, paddle: &Paddle, bricks: &BrickField, screen_width: i32) -> Bounce {
        if self.rect.left() < 0 || self.rect.right() > screen_width {
            self.vel.x = -self.vel.x;
            return Bounce::Wall;
        }

        if self.rect.top() < 0 {
            self.vel.y = -self.vel.y;
            return Bounce::Ceiling;
        }
        if self.rect.intersects(&paddle.rect) {
            self.vel.y = -self.vel.y;
            return Bounce::Paddle;
        }

        match self.rect.first_intersecting(bricks.iter().map(|b| &b.rect)) {
            Some(index) => {
                self.vel.y = -self.vel.y;
                Bounce::Brick(index)
            }
            None => Bounce::None,
        }
    }
}
