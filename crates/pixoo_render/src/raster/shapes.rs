use super::buffer::FrameBuffer;
use super::color::Color;

/// An integer coordinate. Negative or off-buffer values are legal; only the
/// resulting pixel writes are clipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Draws the half-open rectangle `[start, end)`, either filled or as a
/// one-pixel outline. Degenerate one-wide or one-tall rectangles make the
/// boundary test match every pixel, so outline equals fill there.
pub fn draw_rect(canvas: &mut FrameBuffer, start: Point, end: Point, color: Color, filled: bool) {
    for x in start.x..end.x {
        for y in start.y..end.y {
            if filled || x == start.x || y == start.y || x == end.x - 1 || y == end.y - 1 {
                canvas.set_pixel(x, y, color);
            }
        }
    }
}

/// Integer Bresenham line from `start` to `end`, endpoints inclusive.
pub fn draw_line(canvas: &mut FrameBuffer, start: Point, end: Point, color: Color) {
    let dx = (end.x - start.x).abs();
    let dy = (end.y - start.y).abs();
    let sx = if start.x < end.x { 1 } else { -1 };
    let sy = if start.y < end.y { 1 } else { -1 };
    let mut err = dx - dy;
    let (mut x, mut y) = (start.x, start.y);

    loop {
        canvas.set_pixel(x, y, color);
        if x == end.x && y == end.y {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(canvas: &FrameBuffer) -> Vec<(i32, i32)> {
        let size = canvas.size() as i32;
        let mut out = Vec::new();
        for y in 0..size {
            for x in 0..size {
                if canvas.pixel(x, y) != Some(Color::BLACK) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn diagonal_line_hits_exact_pixels() {
        let mut canvas = FrameBuffer::new(8);
        draw_line(&mut canvas, Point::new(0, 0), Point::new(3, 3), Color::WHITE);
        assert_eq!(lit(&canvas), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn zero_length_line_is_one_pixel() {
        let mut canvas = FrameBuffer::new(8);
        draw_line(&mut canvas, Point::new(2, 2), Point::new(2, 2), Color::WHITE);
        assert_eq!(lit(&canvas), vec![(2, 2)]);
    }

    #[test]
    fn reversed_deltas_cover_the_anti_diagonal() {
        let mut canvas = FrameBuffer::new(8);
        draw_line(&mut canvas, Point::new(3, 0), Point::new(0, 3), Color::WHITE);
        assert_eq!(lit(&canvas), vec![(3, 0), (2, 1), (1, 2), (0, 3)]);
    }

    #[test]
    fn line_past_the_edge_is_clipped_not_an_error() {
        let mut canvas = FrameBuffer::new(4);
        draw_line(&mut canvas, Point::new(2, 2), Point::new(6, 2), Color::WHITE);
        assert_eq!(lit(&canvas), vec![(2, 2), (3, 2)]);
    }

    #[test]
    fn rect_outline_draws_only_the_boundary() {
        let mut canvas = FrameBuffer::new(8);
        draw_rect(&mut canvas, Point::new(0, 0), Point::new(4, 4), Color::WHITE, false);
        let pixels = lit(&canvas);
        assert_eq!(pixels.len(), 12);
        assert!(!pixels.contains(&(1, 1)));
        assert!(!pixels.contains(&(2, 2)));
    }

    #[test]
    fn rect_filled_draws_the_whole_region() {
        let mut canvas = FrameBuffer::new(8);
        draw_rect(&mut canvas, Point::new(0, 0), Point::new(4, 4), Color::WHITE, true);
        assert_eq!(lit(&canvas).len(), 16);
    }

    #[test]
    fn degenerate_rect_outline_equals_fill() {
        let mut outlined = FrameBuffer::new(8);
        let mut filled = FrameBuffer::new(8);
        draw_rect(&mut outlined, Point::new(2, 2), Point::new(3, 5), Color::WHITE, false);
        draw_rect(&mut filled, Point::new(2, 2), Point::new(3, 5), Color::WHITE, true);
        assert_eq!(lit(&outlined), lit(&filled));
        assert_eq!(lit(&outlined).len(), 3);
    }
}
