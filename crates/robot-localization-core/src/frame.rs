use serde::{Deserialize, Serialize};

use crate::FrameError;

/// Expected frame dimensions in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: usize,
    pub height: usize,
}

impl FrameSize {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

/// Borrowed, row-major, interleaved 8-bit image (grayscale or color).
#[derive(Clone, Copy, Debug)]
pub struct FrameView<'a> {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    pub data: &'a [u8], // len = w*h*channels
}

impl<'a> FrameView<'a> {
    /// Wrap a raw buffer, checking that its length matches the dimensions.
    pub fn new(
        width: usize,
        height: usize,
        channels: usize,
        data: &'a [u8],
    ) -> Result<Self, FrameError> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(channels))
            .filter(|_| channels > 0)
            .ok_or(FrameError::InvalidDimensions {
                width,
                height,
                channels,
            })?;
        if data.len() != expected {
            return Err(FrameError::InvalidBuffer {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Single-channel view.
    pub fn gray(width: usize, height: usize, data: &'a [u8]) -> Result<Self, FrameError> {
        Self::new(width, height, 1, data)
    }

    #[inline]
    pub fn size(&self) -> FrameSize {
        FrameSize::new(self.width, self.height)
    }

    #[inline]
    pub fn is_gray(&self) -> bool {
        self.channels == 1
    }

    /// Channel value at `(x, y)`, or `None` outside the frame.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize, channel: usize) -> Option<u8> {
        if x >= self.width || y >= self.height || channel >= self.channels {
            return None;
        }
        self.data
            .get((y * self.width + x) * self.channels + channel)
            .copied()
    }

    pub fn to_owned_frame(&self) -> Frame {
        Frame {
            width: self.width,
            height: self.height,
            channels: self.channels,
            data: self.data.to_vec(),
        }
    }
}

/// Owned counterpart of [`FrameView`], e.g. an annotated output frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    pub data: Vec<u8>,
}

impl Frame {
    pub fn view(&self) -> FrameView<'_> {
        FrameView {
            width: self.width,
            height: self.height,
            channels: self.channels,
            data: &self.data,
        }
    }

    #[inline]
    pub fn size(&self) -> FrameSize {
        FrameSize::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_buffer() {
        let data = vec![0u8; 11];
        let err = FrameView::gray(4, 3, &data).unwrap_err();
        assert_eq!(
            err,
            FrameError::InvalidBuffer {
                expected: 12,
                got: 11
            }
        );
    }

    #[test]
    fn rejects_zero_channels() {
        let err = FrameView::new(4, 3, 0, &[]).unwrap_err();
        assert!(matches!(err, FrameError::InvalidDimensions { .. }));
    }

    #[test]
    fn reads_interleaved_pixels() {
        let data: Vec<u8> = (0..2 * 2 * 3).map(|v| v as u8).collect();
        let view = FrameView::new(2, 2, 3, &data).expect("rgb view");
        assert_eq!(view.pixel(1, 1, 2), Some(11));
        assert_eq!(view.pixel(2, 0, 0), None);
        assert_eq!(view.to_owned_frame().view().size(), FrameSize::new(2, 2));
    }
}
