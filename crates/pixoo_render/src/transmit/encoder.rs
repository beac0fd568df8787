use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::raster::buffer::FrameBuffer;

/// Flattens the buffer row-major into RGB bytes (left to right, top to
/// bottom, the order the device expects) and base64-encodes the result.
pub fn encode_frame(canvas: &FrameBuffer) -> String {
    let mut bytes = Vec::with_capacity(canvas.pixels().len() * 3);
    for pixel in canvas.pixels() {
        bytes.extend_from_slice(&[pixel.r, pixel.g, pixel.b]);
    }
    STANDARD.encode(bytes)
}
