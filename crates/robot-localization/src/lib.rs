//! High-level facade crate for the `robot-localization-*` workspace.
//!
//! This crate provides:
//! - stable re-exports of the geometry/tracking core and the ArUco controller,
//! - JSON configuration ([`LocalizationConfig`]) that builds a controller and
//!   a tracker,
//! - [`LocalizationPipeline`], the per-frame loop: detect, estimate, and
//!   freeze the pose while the marker is out of sight,
//! - (feature `image`) adapters from `image` buffers to [`core::FrameView`].
//!
//! ## Quickstart
//!
//! ```no_run
//! use robot_localization::aruco::{DetectionResult, DetectorConfig};
//! use robot_localization::core::FrameView;
//! use robot_localization::{LocalizationConfig, LocalizationPipeline};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = LocalizationConfig::load_json("localization.json")?;
//! // Plug in a real detector here; it only has to return ids + corner quads.
//! let detector = |_: &FrameView<'_>, _: &DetectorConfig| DetectionResult::default();
//! let mut pipeline = LocalizationPipeline::from_config(&cfg, detector);
//!
//! let pixels = vec![0u8; cfg.frame_width * cfg.frame_height];
//! let frame = FrameView::gray(cfg.frame_width, cfg.frame_height, &pixels)?;
//! let outcome = pipeline.process_frame(Some(&frame));
//! println!("{outcome:?}: {:?}", pipeline.tracker().delta_position());
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `robot_localization::core`: angle helpers, `TransferData`, frames, logger.
//! - `robot_localization::aruco`: dictionaries, detector seams, `ArucoLocalization`.
//! - `robot_localization::frame` (feature `image`): `image` buffer adapters.

pub use robot_localization_aruco as aruco;
pub use robot_localization_core as core;

pub use robot_localization_aruco::{ArucoLocalization, PredefinedDictionary, Status};
pub use robot_localization_core::TransferData;

mod config;
mod pipeline;

#[cfg(feature = "image")]
pub mod frame;

pub use config::{ConfigError, LocalizationConfig};
pub use pipeline::{FrameOutcome, LocalizationPipeline};

/// Install tracing output and route `log` records into it.
#[cfg(feature = "tracing")]
pub fn init_tracing(json: bool) {
    let _ = tracing_log::LogTracer::init();
    robot_localization_core::init_tracing(json);
}
