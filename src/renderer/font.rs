//! Built-in 5×7 block font
//!
//! Text is laid out as solid rectangles so it goes through the same quad
//! pipeline as everything else. Lowercase letters render as uppercase and
//! unknown characters render as `?`.

use glam::IVec2;

use crate::sim::Rect;

pub const GLYPH_WIDTH: i32 = 5;
pub const GLYPH_HEIGHT: i32 = 7;
/// Horizontal distance between glyph origins (one column of spacing)
pub const GLYPH_ADVANCE: i32 = GLYPH_WIDTH + 1;
/// Screen pixels per font pixel for HUD text
pub const TEXT_SCALE: i32 = 3;

type Glyph = [u8; GLYPH_HEIGHT as usize];

const SPACE: Glyph = [0x00; 7];
const UNKNOWN: Glyph = [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04];

const LETTERS: [Glyph; 26] = [
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // A
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // B
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // C
    [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E], // D
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // E
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // F
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // G
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // H
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // I
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // J
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // L
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11], // M
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11], // N
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // O
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // P
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // Q
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // R
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // S
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // U
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // V
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A], // W
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // X
    [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04], // Y
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // Z
];

const DIGITS: [Glyph; 10] = [
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E], // 0
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E], // 1
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F], // 2
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E], // 3
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02], // 4
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E], // 5
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E], // 6
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // 7
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E], // 8
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C], // 9
];

/// Bitmap rows for `c`, top row first, bit 4 is the leftmost column
pub fn glyph(c: char) -> &'static Glyph {
    match c.to_ascii_uppercase() {
        c @ 'A'..='Z' => &LETTERS[(c as u8 - b'A') as usize],
        c @ '0'..='9' => &DIGITS[(c as u8 - b'0') as usize],
        ' ' => &SPACE,
        '!' => &[0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        ':' => &[0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '.' => &[0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        ',' => &[0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08],
        '-' => &[0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '\'' => &[0x04, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00],
        _ => &UNKNOWN,
    }
}

/// Pixel size of `text` at `scale`
pub fn text_size(text: &str, scale: i32) -> IVec2 {
    let chars = text.chars().count() as i32;
    if chars == 0 {
        return IVec2::ZERO;
    }
    IVec2::new(
        (chars * GLYPH_ADVANCE - 1) * scale,
        GLYPH_HEIGHT * scale,
    )
}

/// Rectangles covering every lit pixel of `text` centred on `center`.
///
/// Horizontal runs within a glyph row are merged into one rectangle.
pub fn layout_text(text: &str, center: IVec2, scale: i32) -> Vec<Rect> {
    let origin = center - text_size(text, scale) / 2;
    let mut rects = Vec::new();

    for (i, c) in text.chars().enumerate() {
        let glyph_x = origin.x + i as i32 * GLYPH_ADVANCE * scale;
        for (row, &bits) in glyph(c).iter().enumerate() {
            let y = origin.y + row as i32 * scale;
            let mut col = 0;
            while col < GLYPH_WIDTH {
                if bits & (0x10u8 >> col) == 0 {
                    col += 1;
                    continue;
                }
                let start = col;
                while col < GLYPH_WIDTH && bits & (0x10u8 >> col) != 0 {
                    col += 1;
                }
                rects.push(Rect::new(
                    glyph_x + start * scale,
                    y,
                    (col - start) * scale,
                    scale,
                ));
            }
        }
    }

    rects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hud_strings_have_glyphs() {
        for text in [
            "Score: 0123456789",
            "Lives: 3",
            "Congratulations! You Win!",
            "Press any key to start a new game",
        ] {
            for c in text.chars() {
                if c != '?' {
                    assert_ne!(glyph(c), &UNKNOWN, "missing glyph for {c:?}");
                }
            }
        }
    }

    #[test]
    fn test_lowercase_matches_uppercase() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('z'), glyph('Z'));
    }

    #[test]
    fn test_text_size() {
        assert_eq!(text_size("", 3), IVec2::ZERO);
        assert_eq!(text_size("A", 1), IVec2::new(5, 7));
        assert_eq!(text_size("AB", 2), IVec2::new(22, 14));
    }

    #[test]
    fn test_layout_is_centred() {
        let center = IVec2::new(400, 20);
        let rects = layout_text("HH", center, 2);
        let left = rects.iter().map(|r| r.left()).min();
        let right = rects.iter().map(|r| r.right()).max();
        let top = rects.iter().map(|r| r.top()).min();
        let bottom = rects.iter().map(|r| r.bottom()).max();
        // "HH" is 11 font pixels wide and lit on every outer edge
        assert_eq!(left, Some(400 - 11));
        assert_eq!(right, Some(400 + 11));
        assert_eq!(top, Some(20 - 7));
        assert_eq!(bottom, Some(20 + 7));
    }

    #[test]
    fn test_runs_are_merged() {
        // Top row of 'T' is one solid run of five pixels
        let rects = layout_text("T", IVec2::ZERO, 1);
        assert_eq!(rects[0].width(), 5);
        // Remaining six rows are the single-pixel stem
        assert_eq!(rects.len(), 7);
    }

    #[test]
    fn test_space_draws_nothing() {
        assert!(layout_text("   ", IVec2::new(10, 10), 3).is_empty());
    }
}
