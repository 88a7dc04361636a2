/// Errors raised when marker geometry handed to the tracker is malformed.
///
/// These indicate a broken detector contract rather than an everyday
/// condition like occlusion, so callers should surface them loudly.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("invalid marker geometry: expected {expected} corners, got {got}")]
    InvalidGeometry { expected: usize, got: usize },
}

/// Errors produced when wrapping a raw pixel buffer as a frame.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    #[error("invalid frame buffer length (expected {expected} bytes, got {got})")]
    InvalidBuffer { expected: usize, got: usize },

    #[error("invalid frame dimensions (width={width}, height={height}, channels={channels})")]
    InvalidDimensions {
        width: usize,
        height: usize,
        channels: usize,
    },
}
