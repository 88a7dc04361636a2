//! Frame-to-frame pose tracking from a single marker quad.
//!
//! Conventions:
//! - corners arrive clockwise in image coordinates: `[TL, TR, BR, BL]`,
//! - the `TL -> TR` edge is parallel to the robot's forward axis,
//! - the quad is scaled into metric space first; heading and global position
//!   (the centroid) are both taken from the scaled quad,
//! - position deltas are expressed in the robot frame of the *current*
//!   heading (x forward, y lateral).

use nalgebra::{Point2, Rotation2, Vector2};
use serde::{Deserialize, Serialize};

use crate::angle::{calc_angle_parallel_side, norm_angle_2pi, norm_angle_pi};
use crate::GeometryError;

/// Number of corners in a marker quad.
pub const CORNER_COUNT: usize = 4;

/// Robot global pose plus the change since the previous observation.
///
/// Updates are split into three steps the caller runs in order for every frame
/// in which the marker is visible: [`angle`](Self::angle),
/// [`delta_angle`](Self::delta_angle), [`delta_eigen`](Self::delta_eigen).
/// When the marker is lost, either leave the state alone or call
/// [`hold`](Self::hold) to freeze it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransferData {
    current_position: Point2<f32>,
    previous_position: Point2<f32>,
    /// Radians, `[0, 2π)`.
    current_heading: f32,
    previous_heading: f32,
    /// Position change in the robot frame.
    delta_position: Vector2<f32>,
    /// Radians, `[-π, π)`.
    delta_heading: f32,
    /// Metric units per pixel along x and y.
    pixel_resolution: Vector2<f32>,
}

/// Zeroed state measuring positions in pixels (unit resolution).
impl Default for TransferData {
    fn default() -> Self {
        Self::new(Vector2::new(1.0, 1.0))
    }
}

impl TransferData {
    /// Zeroed state with a fixed pixel-to-metric resolution.
    pub fn new(pixel_resolution: Vector2<f32>) -> Self {
        Self {
            current_position: Point2::origin(),
            previous_position: Point2::origin(),
            current_heading: 0.0,
            previous_heading: 0.0,
            delta_position: Vector2::zeros(),
            delta_heading: 0.0,
            pixel_resolution,
        }
    }

    /// Update heading and global position from the observed marker corners.
    ///
    /// The previous values are shifted out before the new ones are computed.
    /// Fails without touching the state when `corners` does not hold exactly
    /// [`CORNER_COUNT`] points.
    pub fn angle(&mut self, corners: &[Point2<f32>]) -> Result<(), GeometryError> {
        let quad = (*as_quad(corners)?).map(|p| self.to_metric(&p));

        self.previous_heading = self.current_heading;
        self.current_heading = norm_angle_2pi(calc_angle_parallel_side(&quad[0], &quad[1]), true);

        self.previous_position = self.current_position;
        self.current_position = quad_center(&quad);
        Ok(())
    }

    /// Signed shortest rotation from the previous to the current heading.
    pub fn delta_angle(&mut self) {
        self.delta_heading = norm_angle_pi(self.current_heading - self.previous_heading, true);
    }

    /// Global displacement rotated into the robot frame of the current heading.
    pub fn delta_eigen(&mut self) {
        let global = self.current_position - self.previous_position;
        self.delta_position = Rotation2::new(-self.current_heading) * global;
    }

    /// Run [`angle`](Self::angle), [`delta_angle`](Self::delta_angle) and
    /// [`delta_eigen`](Self::delta_eigen) in order.
    pub fn update(&mut self, corners: &[Point2<f32>]) -> Result<(), GeometryError> {
        self.angle(corners)?;
        self.delta_angle();
        self.delta_eigen();
        Ok(())
    }

    /// Freeze the pose: previous becomes current and both deltas are zero.
    pub fn hold(&mut self) {
        self.previous_position = self.current_position;
        self.previous_heading = self.current_heading;
        self.delta_position = Vector2::zeros();
        self.delta_heading = 0.0;
    }

    /// Convert a pixel-space point into metric coordinates.
    #[inline]
    pub fn to_metric(&self, p: &Point2<f32>) -> Point2<f32> {
        Point2::from(p.coords.component_mul(&self.pixel_resolution))
    }

    #[inline]
    pub fn current_position(&self) -> Point2<f32> {
        self.current_position
    }

    #[inline]
    pub fn previous_position(&self) -> Point2<f32> {
        self.previous_position
    }

    #[inline]
    pub fn current_heading(&self) -> f32 {
        self.current_heading
    }

    #[inline]
    pub fn previous_heading(&self) -> f32 {
        self.previous_heading
    }

    /// Position change in the robot frame (x forward, y lateral).
    #[inline]
    pub fn delta_position(&self) -> Vector2<f32> {
        self.delta_position
    }

    #[inline]
    pub fn delta_heading(&self) -> f32 {
        self.delta_heading
    }

    #[inline]
    pub fn pixel_resolution(&self) -> Vector2<f32> {
        self.pixel_resolution
    }
}

/// Centroid of a marker quad.
pub fn quad_center(quad: &[Point2<f32>; CORNER_COUNT]) -> Point2<f32> {
    let sum = quad.iter().fold(Vector2::zeros(), |acc, p| acc + p.coords);
    Point2::from(sum / CORNER_COUNT as f32)
}

fn as_quad(corners: &[Point2<f32>]) -> Result<&[Point2<f32>; CORNER_COUNT], GeometryError> {
    corners
        .try_into()
        .map_err(|_| GeometryError::InvalidGeometry {
            expected: CORNER_COUNT,
            got: corners.len(),
        })
}
