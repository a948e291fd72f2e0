//! Axis-aligned rectangle geometry for paddle, ball and bricks
//!
//! Rectangles live on the integer pixel grid:
//! - pos: top-left corner (y grows downward)
//! - size: width and height
//! - right = left + width, bottom = top + height (exclusive edges)

use glam::IVec2;

/// An axis-aligned rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Top-left corner
    pub pos: IVec2,
    /// Width and height
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.size.y
    }

    /// Copy of this rectangle shifted by `delta`
    pub fn translated(&self, delta: IVec2) -> Self {
        Self {
            pos: self.pos + delta,
            size: self.size,
        }
    }

    /// Shift this rectangle in place
    pub fn translate(&mut self, delta: IVec2) {
        self.pos += delta;
    }

    /// True if the two rectangles share interior area.
    ///
    /// Rectangles that only touch along an edge do not intersect, and an
    /// empty rectangle never intersects anything.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Index of the first rectangle in `others` that intersects this one
    pub fn first_intersecting<'a, I>(&self, others: I) -> Option<usize>
    where
        I: IntoIterator<Item = &'a Rect>,
    {
        others.into_iter().position(|r| self.intersects(r))
    }

    /// True if the rectangle has no area
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0 || self.size.y <= 0
    }

    /// True if the rectangle lies fully within `[0, width]` horizontally
    pub fn within_horizontal(&self, width: i32) -> bool {
        self.left() >= 0 && self.right() <= width
    }
}
