//! Rendering module
//!
//! Game code draws through the `Canvas` trait (filled rectangles and centred
//! text in screen pixels). `RenderState` implements it on top of a wgpu
//! colored-triangle pipeline; tests use a recording canvas instead.

pub mod font;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{Draw, draw_frame};

use glam::IVec2;

use crate::sim::{Rect, Rgb};

/// A 2D drawing surface in screen pixels (origin top-left, y down)
pub trait Canvas {
    /// Fill the whole surface with one colour
    fn clear(&mut self, color: Rgb);
    /// Draw an opaque filled rectangle
    fn fill_rect(&mut self, rect: Rect, color: Rgb);
    /// Draw a line of text centred on `center`
    fn draw_text(&mut self, text: &str, center: IVec2, color: Rgb);
}
