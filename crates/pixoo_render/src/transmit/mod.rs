pub mod encoder;
pub mod pusher;
pub mod transport;
