//! Collaborator seams: marker detection and annotation.

use robot_localization_core::{Frame, FrameView};

use crate::{DetectionResult, DetectorConfig};

/// Locates markers in a frame.
///
/// Implementations wrap a real fiducial detector. They are expected to report
/// four corners per accepted marker, clockwise from top-left, with
/// `ids[i]` matching `corners[i]`. Any closure with the same signature is a
/// detector, which keeps tests free of image processing.
pub trait MarkerDetector {
    fn detect(&mut self, frame: &FrameView<'_>, config: &DetectorConfig) -> DetectionResult;
}

impl<F> MarkerDetector for F
where
    F: FnMut(&FrameView<'_>, &DetectorConfig) -> DetectionResult,
{
    fn detect(&mut self, frame: &FrameView<'_>, config: &DetectorConfig) -> DetectionResult {
        self(frame, config)
    }
}

/// Renders detection results on top of a frame for display.
///
/// `marker` is the session index of the single marker to draw, or `None` to
/// draw every accepted marker. Purely cosmetic: nothing in the estimation path
/// reads the returned frame.
pub trait MarkerPainter {
    fn draw(
        &mut self,
        frame: &FrameView<'_>,
        detection: &DetectionResult,
        marker: Option<usize>,
    ) -> Frame;
}
