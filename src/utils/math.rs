//! # Vector Mathematics
//!
//! Helpers for stepping positions through continuous space.

use macroquad::math::Vec3;

/// Returns the unit direction and the distance from `from` to `to`.
///
/// Returns `None` when the two points coincide, since there is no direction to take.
///
/// # Examples
///
/// ```
/// use gridwalk::{heading, Vec3};
///
/// let (dir, dist) = heading(Vec3::ZERO, Vec3::new(3.0, 0.0, 4.0)).unwrap();
/// assert_eq!(dist, 5.0);
/// assert!((dir.length() - 1.0).abs() < 1e-6);
/// ```
pub fn heading(from: Vec3, to: Vec3) -> Option<(Vec3, f32)> {
    let delta = to - from;
    let distance = delta.length();
    if distance > f32::EPSILON && distance.is_finite() {
        Some((delta / distance, distance))
    } else {
        None
    }
}

/// Moves `from` toward `to` by at most `step`, never passing `to`.
pub fn advance_towards(from: Vec3, to: Vec3, step: f32) -> Vec3 {
    match heading(from, to) {
        Some((dir, distance)) => from + dir * step.min(distance),
        None => from,
    }
}
