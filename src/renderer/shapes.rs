//! Shape generation for 2D primitives

use glam::{IVec2, Vec2};

use super::vertex::Vertex;
use crate::sim::Rect;

/// Maps game pixels (origin top-left, y down) to normalized device
/// coordinates (origin centre, y up), stretching the logical screen over the
/// whole surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTransform {
    /// Logical screen size in game pixels
    pub screen: Vec2,
}

impl ScreenTransform {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            screen: IVec2::new(width, height).as_vec2(),
        }
    }

    pub fn to_ndc(&self, point: IVec2) -> Vec2 {
        let p = point.as_vec2() / self.screen;
        Vec2::new(p.x * 2.0 - 1.0, 1.0 - p.y * 2.0)
    }
}

/// Two triangles covering `rect`
pub fn rect(transform: &ScreenTransform, rect: Rect, color: [f32; 4]) -> [Vertex; 6] {
    let tl = transform.to_ndc(IVec2::new(rect.left(), rect.top()));
    let br = transform.to_ndc(IVec2::new(rect.right(), rect.bottom()));

    [
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(tl.x, br.y, color),
        Vertex::new(br.x, tl.y, color),
        Vertex::new(br.x, tl.y, color),
        Vertex::new(tl.x, br.y, color),
        Vertex::new(br.x, br.y, color),
    ]
}
