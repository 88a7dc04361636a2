//! Per-frame localization loop.

use log::{debug, error, warn};
use robot_localization_aruco::{ArucoLocalization, LocalizeError, MarkerDetector, Status};
use robot_localization_core::{FrameView, TransferData};

use crate::LocalizationConfig;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// What happened to the pose for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The tracker was updated from the marker at this session index.
    Updated { index: usize },
    /// The marker was not visible; the pose was frozen.
    Held(LocalizeError),
    /// The detector returned malformed geometry; the tracker was not touched.
    Failed(LocalizeError),
    /// The frame source is exhausted.
    EndOfVideo,
}

impl FrameOutcome {
    /// Legacy status code for this outcome. Malformed geometry reports
    /// `MarkerNotDetected`, since no usable marker was seen.
    pub fn status(&self) -> Status {
        match self {
            Self::Updated { .. } => Status::Ok,
            Self::Held(LocalizeError::TargetMarkerAbsent { .. }) => Status::NotMarkerIndex,
            Self::Held(_) | Self::Failed(_) => Status::MarkerNotDetected,
            Self::EndOfVideo => Status::EndOfVideoFile,
        }
    }

    #[inline]
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }
}

/// One controller plus one tracker following one marker id.
pub struct LocalizationPipeline<D> {
    localization: ArucoLocalization<D>,
    tracker: TransferData,
    marker_id: i32,
    frames: u64,
}

impl<D: MarkerDetector> LocalizationPipeline<D> {
    pub fn new(localization: ArucoLocalization<D>, tracker: TransferData, marker_id: i32) -> Self {
        Self {
            localization,
            tracker,
            marker_id,
            frames: 0,
        }
    }

    pub fn from_config(cfg: &LocalizationConfig, detector: D) -> Self {
        Self::new(
            cfg.build_controller(detector),
            cfg.build_tracker(),
            cfg.marker_id,
        )
    }

    /// Detect and estimate on one frame; `None` marks the end of the stream.
    ///
    /// When the target marker is missing the pose is frozen with
    /// [`TransferData::hold`], so downstream control sees zero deltas rather
    /// than stale ones.
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip(self, frame)))]
    pub fn process_frame(&mut self, frame: Option<&FrameView<'_>>) -> FrameOutcome {
        let Some(frame) = frame else {
            debug!("end of video after {} frames", self.frames);
            return FrameOutcome::EndOfVideo;
        };
        self.frames += 1;

        self.localization.detect_markers(frame);
        match self
            .localization
            .try_estimate_position(&mut self.tracker, self.marker_id)
        {
            Ok(index) => {
                debug!(
                    "frame {}: heading {:.4} rad, delta ({:.4}, {:.4}) m, {:.4} rad",
                    self.frames,
                    self.tracker.current_heading(),
                    self.tracker.delta_position().x,
                    self.tracker.delta_position().y,
                    self.tracker.delta_heading()
                );
                FrameOutcome::Updated { index }
            }
            Err(err) if err.is_recoverable() => {
                if matches!(err, LocalizeError::TargetMarkerAbsent { .. }) {
                    warn!("frame {}: {err}", self.frames);
                } else {
                    debug!("frame {}: {err}", self.frames);
                }
                self.tracker.hold();
                FrameOutcome::Held(err)
            }
            Err(err) => {
                error!("frame {}: {err}", self.frames);
                FrameOutcome::Failed(err)
            }
        }
    }
}

impl<D> LocalizationPipeline<D> {
    #[inline]
    pub fn tracker(&self) -> &TransferData {
        &self.tracker
    }

    #[inline]
    pub fn localization(&self) -> &ArucoLocalization<D> {
        &self.localization
    }

    #[inline]
    pub fn localization_mut(&mut self) -> &mut ArucoLocalization<D> {
        &mut self.localization
    }

    #[inline]
    pub fn marker_id(&self) -> i32 {
        self.marker_id
    }

    pub fn set_marker_id(&mut self, marker_id: i32) {
        self.marker_id = marker_id;
    }

    /// Frames handed to [`process_frame`](Self::process_frame) so far.
    #[inline]
    pub fn frames_processed(&self) -> u64 {
        self.frames
    }
}
