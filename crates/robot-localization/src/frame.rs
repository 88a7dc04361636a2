//! Adapters from `image` buffers to [`FrameView`].

use crate::core::FrameView;

/// Borrow an `image::GrayImage` as a single-channel frame.
pub fn gray_view(img: &::image::GrayImage) -> FrameView<'_> {
    FrameView {
        width: img.width() as usize,
        height: img.height() as usize,
        channels: 1,
        data: img.as_raw(),
    }
}

/// Borrow an `image::RgbImage` as a three-channel frame.
pub fn rgb_view(img: &::image::RgbImage) -> FrameView<'_> {
    FrameView {
        width: img.width() as usize,
        height: img.height() as usize,
        channels: 3,
        data: img.as_raw(),
    }
}

/// Convert any decoded image to 8-bit grayscale, ready for [`gray_view`].
pub fn to_gray(img: &::image::DynamicImage) -> ::image::GrayImage {
    img.to_luma8()
}
