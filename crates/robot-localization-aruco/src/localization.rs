//! Marker selection and pose estimation from the last detection session.

use log::{debug, error};
use nalgebra::Point2;
use robot_localization_core::{Frame, FrameSize, FrameView, TransferData};

use crate::{
    DetectStatus, DetectionResult, DetectorConfig, DetectorParams, LocalizeError, MarkerDetector,
    MarkerIndex, MarkerPainter, PredefinedDictionary, ANY_MARKER,
};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Last detection result plus the configuration it was produced with.
#[derive(Clone, Debug, Default)]
pub struct DetectionSession {
    config: DetectorConfig,
    result: DetectionResult,
}

impl DetectionSession {
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            config,
            result: DetectionResult::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    #[inline]
    pub fn result(&self) -> &DetectionResult {
        &self.result
    }

    #[inline]
    pub fn ids(&self) -> &[i32] {
        &self.result.ids
    }

    #[inline]
    pub fn corners(&self) -> &[Vec<Point2<f32>>] {
        &self.result.corners
    }

    #[inline]
    pub fn rejected(&self) -> &[Vec<Point2<f32>>] {
        &self.result.rejected
    }

    /// First position of `marker_id` in detection order.
    ///
    /// Only ids paired with a corner quad are searched.
    pub fn find(&self, marker_id: i32) -> MarkerIndex {
        self.result.ids[..self.result.len()]
            .iter()
            .position(|&id| id == marker_id)
            .into()
    }

    /// Corners of the marker at session index `index`.
    pub fn quad(&self, index: usize) -> Option<&[Point2<f32>]> {
        self.result.corners.get(index).map(Vec::as_slice)
    }

    fn replace(&mut self, result: DetectionResult) {
        self.result = result;
    }
}

/// Single-marker localization controller.
///
/// Per frame, call [`detect_markers`](Self::detect_markers) once and then
/// [`estimate_position`](Self::estimate_position) once. The detection session
/// is replaced on every detection call; nothing accumulates across frames.
///
/// The configured frame size is informational: frames passed to
/// `detect_markers` must already match it, and no check is made.
pub struct ArucoLocalization<D> {
    detector: D,
    session: DetectionSession,
    frame_size: Option<FrameSize>,
}

impl<D: MarkerDetector> ArucoLocalization<D> {
    /// Controller using `DICT_4X4_50` and default detector parameters.
    pub fn new(detector: D) -> Self {
        Self::with_config(detector, DetectorConfig::default())
    }

    pub fn with_dictionary(detector: D, dictionary: PredefinedDictionary) -> Self {
        Self::with_config(detector, DetectorConfig::new(dictionary))
    }

    pub fn with_config(detector: D, config: DetectorConfig) -> Self {
        Self {
            detector,
            session: DetectionSession::new(config),
            frame_size: None,
        }
    }

    /// Run the detector on `frame` and replace the session with its output.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "debug", skip(self, frame), fields(width = frame.width, height = frame.height))
    )]
    pub fn detect_markers(&mut self, frame: &FrameView<'_>) -> DetectStatus {
        let result = self.detector.detect(frame, &self.session.config);
        debug!(
            "{}: {} markers, {} rejected candidates",
            self.session.config.dictionary,
            result.len(),
            result.rejected.len()
        );
        let status = DetectStatus::from_count(result.len());
        self.session.replace(result);
        status
    }
}

impl<D> ArucoLocalization<D> {
    /// Session index of the first detected marker with id `marker_id`.
    pub fn filter_markers(&self, marker_id: i32) -> MarkerIndex {
        self.session.find(marker_id)
    }

    /// Resolve which session entry to use for `marker_id`
    /// ([`ANY_MARKER`] picks the first detected one).
    pub fn select_marker(&self, marker_id: i32) -> Result<usize, LocalizeError> {
        if self.session.result.is_empty() {
            return Err(LocalizeError::NoMarkerDetected);
        }
        if marker_id == ANY_MARKER {
            return Ok(0);
        }
        self.filter_markers(marker_id)
            .index()
            .ok_or(LocalizeError::TargetMarkerAbsent { id: marker_id })
    }

    /// Update `data` from the selected marker.
    ///
    /// Runs heading, delta-heading and delta-position updates in that order.
    /// On error `data` is left exactly as it was. Returns the session index of
    /// the marker that was used.
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip(self, data)))]
    pub fn try_estimate_position(
        &self,
        data: &mut TransferData,
        marker_id: i32,
    ) -> Result<usize, LocalizeError> {
        let index = self.select_marker(marker_id)?;
        let quad = self
            .session
            .quad(index)
            .ok_or(LocalizeError::TargetMarkerAbsent { id: marker_id })?;
        data.angle(quad)?;
        data.delta_angle();
        data.delta_eigen();
        Ok(index)
    }

    /// Same as [`try_estimate_position`](Self::try_estimate_position),
    /// reporting only whether the tracker was updated.
    pub fn estimate_position(&self, data: &mut TransferData, marker_id: i32) -> bool {
        match self.try_estimate_position(data, marker_id) {
            Ok(_) => true,
            Err(err @ LocalizeError::Geometry(_)) => {
                error!("marker {marker_id}: {err}");
                false
            }
            Err(err) => {
                debug!("{err}");
                false
            }
        }
    }

    /// Annotate `frame` with the session markers via `painter`.
    ///
    /// [`ANY_MARKER`] draws every marker. Any other id draws only that marker,
    /// and an absent id returns an unannotated copy of the frame.
    pub fn draw_marker<P: MarkerPainter>(
        &self,
        painter: &mut P,
        frame: &FrameView<'_>,
        marker_id: i32,
    ) -> Frame {
        let target = if marker_id == ANY_MARKER {
            None
        } else {
            match self.filter_markers(marker_id) {
                MarkerIndex::Found(i) => Some(i),
                MarkerIndex::NotFound => return frame.to_owned_frame(),
            }
        };
        painter.draw(frame, &self.session.result, target)
    }

    /// Copy of the accepted marker corners from the last detection.
    pub fn markers_corners(&self) -> Vec<Vec<Point2<f32>>> {
        self.session.corners().to_vec()
    }

    /// Copy of the marker ids from the last detection.
    pub fn markers_indexes(&self) -> Vec<i32> {
        self.session.ids().to_vec()
    }

    /// Copy of the rejected candidate quads from the last detection.
    pub fn rejected_candidates(&self) -> Vec<Vec<Point2<f32>>> {
        self.session.rejected().to_vec()
    }

    #[inline]
    pub fn session(&self) -> &DetectionSession {
        &self.session
    }

    #[inline]
    pub fn dictionary(&self) -> PredefinedDictionary {
        self.session.config.dictionary
    }

    /// Takes effect from the next detection call.
    pub fn set_marker_dictionary(&mut self, dictionary: PredefinedDictionary) {
        self.session.config.dictionary = dictionary;
    }

    pub fn set_detector_params(&mut self, params: DetectorParams) {
        self.session.config.params = params;
    }

    /// Record the expected input frame size (precondition, not validated).
    pub fn set_frame_size(&mut self, width: usize, height: usize) {
        self.frame_size = Some(FrameSize::new(width, height));
    }

    #[inline]
    pub fn frame_size(&self) -> Option<FrameSize> {
        self.frame_size
    }

    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }
}
