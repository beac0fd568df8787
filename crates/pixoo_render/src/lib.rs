mod image_pipeline;
mod raster;
mod text;
mod transmit;

use std::path::Path;

use image::DynamicImage;

pub use raster::{
    buffer::FrameBuffer,
    color::Color,
    shapes::{draw_line, draw_rect, Point},
};
pub use text::{
    font::{Glyph, GlyphSet},
    layout::{draw_text, draw_text_aligned, measure_text, Align},
};

pub use image_pipeline::sampler::{draw_image, draw_image_data};
pub use transmit::{
    encoder::encode_frame,
    pusher::{FrameTransmitter, PushStats, FRAME_ID_LIMIT, FRAME_SPEED_MS},
    transport::{FramePayload, Transport, TransportError},
};

#[derive(Debug, thiserror::Error)]
pub enum PixooError {
    #[error("invalid color: {0}")]
    InvalidColor(String),
    #[error("glyph set '{0}' is missing the '?' fallback glyph")]
    GlyphSetIncomplete(&'static str),
    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("frame counter not armed, call reset_counter first")]
    CounterNotArmed,
    #[error("frame transmission failed: {0}")]
    Transmission(#[from] TransportError),
}

/// A drawing session against one remote display: a frame buffer paired with
/// the transmitter that pushes it over the given transport.
pub struct Pixoo<T: Transport> {
    canvas: FrameBuffer,
    transmitter: FrameTransmitter<T>,
}

impl<T: Transport> Pixoo<T> {
    pub fn new(transport: T, size: usize) -> Self {
        Self { canvas: FrameBuffer::new(size), transmitter: FrameTransmitter::new(transport) }
    }

    /// Aligns the device-side id sequence with a fresh local counter and
    /// pushes the (initially black) buffer once.
    pub fn initialize(&mut self) -> Result<(), PixooError> {
        self.transmitter.reset_counter()?;
        self.push()?;
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.canvas.size()
    }

    pub fn canvas(&self) -> &FrameBuffer {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut FrameBuffer {
        &mut self.canvas
    }

    pub fn transport(&self) -> &T {
        self.transmitter.transport()
    }

    pub fn transport_mut(&mut self) -> &mut T {
        self.transmitter.transport_mut()
    }

    pub fn clear(&mut self) {
        self.canvas.clear();
    }

    pub fn fill(&mut self, color: Color) {
        self.canvas.fill(color);
    }

    pub fn draw_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.canvas.set_pixel(x, y, color);
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.canvas.pixel(x, y)
    }

    pub fn draw_line(&mut self, start: Point, end: Point, color: Color) {
        draw_line(&mut self.canvas, start, end, color);
    }

    pub fn draw_rect(&mut self, start: Point, end: Point, color: Color, filled: bool) {
        draw_rect(&mut self.canvas, start, end, color, filled);
    }

    pub fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        color: Color,
        font: &GlyphSet,
    ) -> Result<(), PixooError> {
        draw_text(&mut self.canvas, text, origin, color, font)
    }

    pub fn draw_text_aligned(
        &mut self,
        text: &str,
        row: i32,
        align: Align,
        padding: i32,
        color: Color,
        font: &GlyphSet,
    ) -> Result<(), PixooError> {
        draw_text_aligned(&mut self.canvas, text, row, align, padding, color, font)
    }

    pub fn draw_image<P: AsRef<Path>>(
        &mut self,
        path: P,
        origin: Point,
        target: (u32, u32),
    ) -> Result<(), PixooError> {
        draw_image(&mut self.canvas, path, origin, target)
    }

    pub fn draw_image_data(&mut self, image: &DynamicImage, origin: Point, target: (u32, u32)) {
        draw_image_data(&mut self.canvas, image, origin, target);
    }

    /// Pushes the current buffer as one frame. Returns the frame id used.
    pub fn push(&mut self) -> Result<u32, PixooError> {
        self.transmitter.push(&self.canvas)
    }

    pub fn reset_counter(&mut self) -> Result<(), PixooError> {
        self.transmitter.reset_counter()
    }

    pub fn counter(&self) -> Option<u32> {
        self.transmitter.counter()
    }

    pub fn stats(&self) -> &PushStats {
        self.transmitter.stats()
    }
}
