use super::color::Color;

/// The square pixel grid all drawing operations write into, row-major
/// (`index = x + y * size`). The size is fixed at construction.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    size: usize,
    pixels: Vec<Color>,
}

impl FrameBuffer {
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "frame buffer size must be non-zero");
        Self { size, pixels: vec![Color::BLACK; size * size] }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Writes one pixel. Out-of-bounds coordinates are silently dropped so
    /// that shapes may legitimately extend past the edges.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.size || y >= self.size {
            return;
        }
        self.pixels[x + y * self.size] = color;
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.pixels[x + y * self.size])
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    pub fn clear(&mut self) {
        self.fill(Color::BLACK);
    }
}
