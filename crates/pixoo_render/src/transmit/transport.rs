/// One encoded frame plus the numeric parameters the device protocol
/// attaches to it.
#[derive(Clone, Debug)]
pub struct FramePayload {
    pub pic_num: u32,
    pub pic_width: u32,
    pub pic_offset: u32,
    pub pic_id: u32,
    pub pic_speed_ms: u32,
    pub pic_data: String,
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// The delivery boundary. Implementations carry the payload to the remote
/// display and expose the device-side id sequence reset that must accompany
/// every local counter reset.
pub trait Transport {
    fn send_frame(&mut self, frame: &FramePayload) -> Result<(), TransportError>;

    fn reset_frame_sequence(&mut self) -> Result<(), TransportError>;
}
