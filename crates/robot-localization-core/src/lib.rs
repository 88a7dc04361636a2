//! Core types and utilities for planar marker-based robot localization.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! depend on any concrete marker detector or image library:
//! - [`angle`] holds the stateless angle helpers (edge angles, normalization,
//!   degree/radian conversion),
//! - [`TransferData`] turns an ordered marker quad into a global pose and
//!   frame-to-frame deltas expressed in the robot frame,
//! - [`FrameView`] / [`Frame`] are the lightweight image buffers handed to
//!   detector implementations.

pub mod angle;
mod error;
mod frame;
mod logger;
mod pose;

pub use angle::{
    calc_angle_parallel_side, calc_angle_perpendicular_side, deg2rad, norm_angle_2pi,
    norm_angle_pi, rad2deg,
};
pub use error::{FrameError, GeometryError};
pub use frame::{Frame, FrameSize, FrameView};
pub use pose::{quad_center, TransferData, CORNER_COUNT};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::{init_with_level, level_from_env, LOG_LEVEL_ENV};
