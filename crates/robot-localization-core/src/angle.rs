//! Angle helpers.
//!
//! Angles derived from image points follow the image convention: the x axis
//! points right, the y axis points down, so a positive angle turns clockwise
//! on screen. Every function here is total and has no shared state.

use std::f32::consts::PI;

use nalgebra::Point2;

/// One full turn in radians.
pub const FULL_TURN_RAD: f32 = 2.0 * PI;

/// One full turn in degrees.
pub const FULL_TURN_DEG: f32 = 360.0;

#[inline]
fn full_turn(is_radian: bool) -> f32 {
    if is_radian {
        FULL_TURN_RAD
    } else {
        FULL_TURN_DEG
    }
}

/// Angle of `p2 - p1` relative to the image x axis, in radians.
///
/// Use this when `p1 -> p2` is a marker edge parallel to the robot's forward
/// axis: the returned value is the heading itself.
#[inline]
pub fn calc_angle_parallel_side(p1: &Point2<f32>, p2: &Point2<f32>) -> f32 {
    let d = p2 - p1;
    d.y.atan2(d.x)
}

/// Angle of `p2 - p1` for an edge perpendicular to the robot's forward axis.
///
/// The vector angle is the same as [`calc_angle_parallel_side`]; the caller
/// must add `±π/2` (depending on which corner pair was passed) before using
/// the result as a heading.
#[inline]
pub fn calc_angle_perpendicular_side(p1: &Point2<f32>, p2: &Point2<f32>) -> f32 {
    let d = p2 - p1;
    d.y.atan2(d.x)
}

/// Normalize an angle into `[0, 2π)`, or `[0, 360)` when `is_radian` is false.
///
/// Negative inputs of any magnitude are handled: `-3640°` maps to `320°`.
#[inline]
pub fn norm_angle_2pi(angle: f32, is_radian: bool) -> f32 {
    let period = full_turn(is_radian);
    ((angle % period) + period) % period
}

/// Normalize an angle into `[-π, π)`, or `[-180, 180)` when `is_radian` is false.
#[inline]
pub fn norm_angle_pi(angle: f32, is_radian: bool) -> f32 {
    let half = 0.5 * full_turn(is_radian);
    norm_angle_2pi(angle + half, is_radian) - half
}

#[inline]
pub fn deg2rad(deg: f32) -> f32 {
    deg * PI / 180.0
}

#[inline]
pub fn rad2deg(rad: f32) -> f32 {
    rad * 180.0 / PI
}
