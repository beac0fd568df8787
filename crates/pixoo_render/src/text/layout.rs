use super::font::{Glyph, GlyphSet};
use crate::raster::buffer::FrameBuffer;
use crate::raster::color::Color;
use crate::raster::shapes::Point;
use crate::PixooError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

/// Measures the rendered width of `text`: each character advances its glyph
/// width plus one pixel of spacing, unknown characters measuring as `?`.
/// Additive over concatenation since there is no kerning.
pub fn measure_text(text: &str, font: &GlyphSet) -> Result<i32, PixooError> {
    let mut width = 0;
    for ch in text.chars() {
        width += font.resolve(ch)?.width as i32 + 1;
    }
    Ok(width)
}

/// Lays out glyphs left-to-right from an explicit origin. The buffer edges
/// are ignored here; off-buffer bits are clipped pixel by pixel.
pub fn draw_text(
    canvas: &mut FrameBuffer,
    text: &str,
    origin: Point,
    color: Color,
    font: &GlyphSet,
) -> Result<(), PixooError> {
    let mut cursor = 0;
    for ch in text.chars() {
        let glyph = font.resolve(ch)?;
        draw_glyph(canvas, &glyph, Point::new(origin.x + cursor, origin.y), color);
        cursor += glyph.width as i32 + 1;
    }
    Ok(())
}

/// Lays out `text` on display row `row`, justified against the buffer.
/// Centering uses floor division, so odd leftover widths land one pixel
/// left of true center. `padding` applies to the left and right variants
/// only.
pub fn draw_text_aligned(
    canvas: &mut FrameBuffer,
    text: &str,
    row: i32,
    align: Align,
    padding: i32,
    color: Color,
    font: &GlyphSet,
) -> Result<(), PixooError> {
    let measured = measure_text(text, font)?;
    let size = canvas.size() as i32;
    let x = match align {
        Align::Left => padding,
        Align::Right => size - measured - padding,
        Align::Center => (size - measured).div_euclid(2),
    };
    draw_text(canvas, text, Point::new(x, row), color, font)
}

fn draw_glyph(canvas: &mut FrameBuffer, glyph: &Glyph, origin: Point, color: Color) {
    let width = glyph.width as i32;
    for (index, &bit) in glyph.bits.iter().enumerate() {
        if bit == 1 {
            let index = index as i32;
            canvas.set_pixel(origin.x + index % width, origin.y + index / width, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_is_additive_over_concatenation() {
        let pico = GlyphSet::pico();
        let ab = measure_text("AB", pico).unwrap();
        let a = measure_text("A", pico).unwrap();
        let b = measure_text("B", pico).unwrap();
        assert_eq!(ab, a + b);

        let numeric = GlyphSet::numeric();
        assert_eq!(
            measure_text("1:", numeric).unwrap(),
            measure_text("1", numeric).unwrap() + measure_text(":", numeric).unwrap()
        );
    }

    #[test]
    fn measure_counts_width_plus_spacing_per_char() {
        let pico = GlyphSet::pico();
        assert_eq!(measure_text("12", pico).unwrap(), 8);
        let numeric = GlyphSet::numeric();
        assert_eq!(measure_text("1:", numeric).unwrap(), 9);
    }

    #[test]
    fn unknown_characters_measure_as_the_fallback() {
        let pico = GlyphSet::pico();
        assert_eq!(measure_text("~", pico).unwrap(), measure_text("?", pico).unwrap());
    }

    #[test]
    fn glyph_bits_land_at_the_origin() {
        let mut canvas = FrameBuffer::new(16);
        // '1' in pico: top row is 110.
        draw_text(&mut canvas, "1", Point::new(4, 10), Color::WHITE, GlyphSet::pico()).unwrap();
        assert_eq!(canvas.pixel(4, 10), Some(Color::WHITE));
        assert_eq!(canvas.pixel(5, 10), Some(Color::WHITE));
        assert_eq!(canvas.pixel(6, 10), Some(Color::BLACK));
        // Bottom row is 111.
        assert_eq!(canvas.pixel(4, 14), Some(Color::WHITE));
        assert_eq!(canvas.pixel(6, 14), Some(Color::WHITE));
    }

    #[test]
    fn left_alignment_starts_at_the_padding() {
        let mut canvas = FrameBuffer::new(16);
        draw_text_aligned(
            &mut canvas,
            "8",
            0,
            Align::Left,
            2,
            Color::WHITE,
            GlyphSet::pico(),
        )
        .unwrap();
        assert_eq!(canvas.pixel(1, 0), Some(Color::BLACK));
        assert_eq!(canvas.pixel(2, 0), Some(Color::WHITE));
    }

    #[test]
    fn right_alignment_justifies_against_the_edge() {
        let mut canvas = FrameBuffer::new(16);
        // "8" measures 4, so the glyph starts at 16 - 4 - 1 = 11.
        draw_text_aligned(
            &mut canvas,
            "8",
            0,
            Align::Right,
            1,
            Color::WHITE,
            GlyphSet::pico(),
        )
        .unwrap();
        assert_eq!(canvas.pixel(11, 0), Some(Color::WHITE));
        assert_eq!(canvas.pixel(10, 0), Some(Color::BLACK));
    }

    #[test]
    fn text_measuring_the_full_size_centers_at_zero() {
        let mut canvas = FrameBuffer::new(16);
        // Four pico characters measure exactly 16.
        draw_text_aligned(
            &mut canvas,
            "8888",
            0,
            Align::Center,
            0,
            Color::WHITE,
            GlyphSet::pico(),
        )
        .unwrap();
        assert_eq!(canvas.pixel(0, 0), Some(Color::WHITE));
    }

    #[test]
    fn centering_keeps_the_floor_bias() {
        // Size 15, measured 4: the true center is x = 5.5, floor places 5.
        let mut canvas = FrameBuffer::new(15);
        draw_text_aligned(
            &mut canvas,
            "8",
            0,
            Align::Center,
            0,
            Color::WHITE,
            GlyphSet::pico(),
        )
        .unwrap();
        assert_eq!(canvas.pixel(5, 0), Some(Color::WHITE));
        assert_eq!(canvas.pixel(4, 0), Some(Color::BLACK));
    }

    #[test]
    fn oversized_text_clips_instead_of_failing() {
        let mut canvas = FrameBuffer::new(8);
        draw_text_aligned(
            &mut canvas,
            "888888",
            2,
            Align::Center,
            0,
            Color::WHITE,
            GlyphSet::pico(),
        )
        .unwrap();
        // Something landed on the buffer even though most of the string did
        // not fit.
        assert!(canvas.pixels().iter().any(|&px| px == Color::WHITE));
    }
}
