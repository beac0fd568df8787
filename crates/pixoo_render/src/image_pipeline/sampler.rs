use std::path::Path;

use image::imageops::FilterType;
use image::DynamicImage;

use crate::raster::buffer::FrameBuffer;
use crate::raster::color::Color;
use crate::raster::shapes::Point;
use crate::PixooError;

/// Opens an image file and blits it, resized to `target`, with its top-left
/// corner at `origin`. Decode failures propagate unchanged.
pub fn draw_image<P: AsRef<Path>>(
    canvas: &mut FrameBuffer,
    path: P,
    origin: Point,
    target: (u32, u32),
) -> Result<(), PixooError> {
    let image = image::open(path)?;
    draw_image_data(canvas, &image, origin, target);
    Ok(())
}

/// Resamples an already-decoded image into the `target`-sized region at
/// `origin`. Alpha, when the source carries it, is dropped; off-buffer
/// pixels are clipped through the ordinary pixel path.
pub fn draw_image_data(
    canvas: &mut FrameBuffer,
    image: &DynamicImage,
    origin: Point,
    target: (u32, u32),
) {
    let (width, height) = target;
    let resized = image.resize_exact(width, height, FilterType::CatmullRom).to_rgb8();

    for y in 0..height {
        for x in 0..width {
            let [r, g, b] = resized.get_pixel(x, y).0;
            canvas.set_pixel(origin.x + x as i32, origin.y + y as i32, Color::new(r, g, b));
        }
    }
}
