//! ArUco-based localization on top of `robot-localization-core`.
//!
//! This crate focuses on:
//! - naming the predefined marker dictionaries a detector can be asked for,
//! - holding the last detection session (ids, accepted quads, rejected
//!   candidates) and selecting the target marker from it,
//! - feeding the selected quad into a [`TransferData`] tracker.
//!
//! It does **not** locate markers in images. A [`MarkerDetector`]
//! implementation does that and returns a [`DetectionResult`]; drawing is
//! likewise delegated to a [`MarkerPainter`].
//!
//! [`TransferData`]: robot_localization_core::TransferData

mod detector;
mod dictionary;
mod error;
mod localization;
mod params;
mod result;
mod status;

pub use detector::{MarkerDetector, MarkerPainter};
pub use dictionary::{PredefinedDictionary, UnknownDictionary};
pub use error::LocalizeError;
pub use localization::{ArucoLocalization, DetectionSession};
pub use params::{CornerRefinement, DetectorConfig, DetectorParams};
pub use result::{DetectionResult, MarkerObservation};
pub use status::{DetectStatus, MarkerIndex, Status, ANY_MARKER, NOT_MARKER_INDEX};
