use std::time::Instant;

use super::encoder::encode_frame;
use super::transport::{FramePayload, Transport};
use crate::raster::buffer::FrameBuffer;
use crate::PixooError;

/// The device protocol requires unique increasing frame ids; ids are kept
/// below this bound and the sequence is reset once the bound is reached.
pub const FRAME_ID_LIMIT: u32 = 1000;

/// Per-frame animation speed sent with every single-picture push.
pub const FRAME_SPEED_MS: u32 = 1000;

/// Rolling push telemetry: a running count and the incremental mean of the
/// elapsed transmission time, in milliseconds.
#[derive(Clone, Copy, Debug, Default)]
pub struct PushStats {
    count: u64,
    avg_elapsed_ms: f64,
}

impl PushStats {
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn avg_elapsed_ms(&self) -> f64 {
        self.avg_elapsed_ms
    }

    fn record(&mut self, elapsed_ms: f64) {
        self.avg_elapsed_ms =
            (self.avg_elapsed_ms * self.count as f64 + elapsed_ms) / (self.count as f64 + 1.0);
        self.count += 1;
    }
}

/// Turns a frame buffer into wire payloads with the frame-id discipline the
/// device demands. `None` means the counter was never armed; `Some(c)`
/// holds the id the next push will use.
pub struct FrameTransmitter<T: Transport> {
    transport: T,
    counter: Option<u32>,
    stats: PushStats,
}

impl<T: Transport> FrameTransmitter<T> {
    pub fn new(transport: T) -> Self {
        Self { transport, counter: None, stats: PushStats::default() }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn counter(&self) -> Option<u32> {
        self.counter
    }

    pub fn stats(&self) -> &PushStats {
        &self.stats
    }

    /// Resets the local counter and the device-side id sequence together.
    /// The local counter only changes once the device has confirmed its own
    /// reset, keeping the two sequences aligned.
    pub fn reset_counter(&mut self) -> Result<(), PixooError> {
        self.transport.reset_frame_sequence()?;
        self.counter = Some(0);
        Ok(())
    }

    /// Snapshots and transmits `canvas` as one frame, returning the frame
    /// id used. The counter advances by exactly one on success and is left
    /// untouched on failure. Reaching the id bound resets both sequences
    /// before the push, so that frame goes out with id 0.
    pub fn push(&mut self, canvas: &FrameBuffer) -> Result<u32, PixooError> {
        let mut counter = self.counter.ok_or(PixooError::CounterNotArmed)?;
        if counter >= FRAME_ID_LIMIT {
            self.reset_counter()?;
            counter = 0;
        }

        let payload = FramePayload {
            pic_num: 1,
            pic_width: canvas.size() as u32,
            pic_offset: 0,
            pic_id: counter,
            pic_speed_ms: FRAME_SPEED_MS,
            pic_data: encode_frame(canvas),
        };

        let start = Instant::now();
        self.transport.send_frame(&payload)?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        self.stats.record(elapsed_ms);
        self.counter = Some(counter + 1);
        log::debug!("pushed frame id {} in {:.1}ms", counter, elapsed_ms);
        Ok(counter)
    }
}
