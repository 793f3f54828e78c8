//! # Waypoint Paths
//!
//! The ordered waypoint sequence produced by the search and consumed by the follower.

use macroquad::math::Vec3;
use std::collections::VecDeque;

/// An ordered sequence of continuous-space waypoints.
///
/// The first waypoint is the start cell's representative position and the last is the
/// goal cell's. Waypoints are consumed strictly front to back and never re-inserted.
///
/// # Examples
///
/// ```
/// use gridwalk::{Path, Vec3};
///
/// let mut path = Path::from_waypoints(vec![Vec3::ZERO, Vec3::X, Vec3::new(1.0, 0.0, 1.0)]);
/// assert_eq!(path.length(), 2.0);
/// assert_eq!(path.pop_front(), Some(Vec3::ZERO));
/// assert_eq!(path.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    waypoints: VecDeque<Vec3>,
}

impl Path {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a path from waypoints in travel order.
    pub fn from_waypoints(waypoints: impl IntoIterator<Item = Vec3>) -> Self {
        Self {
            waypoints: waypoints.into_iter().collect(),
        }
    }

    /// Adds a waypoint before all others.
    pub(crate) fn push_front(&mut self, waypoint: Vec3) {
        self.waypoints.push_front(waypoint);
    }

    /// Returns true when no waypoints remain.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Number of remaining waypoints.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// The next waypoint to reach.
    pub fn front(&self) -> Option<Vec3> {
        self.waypoints.front().copied()
    }

    /// The final waypoint.
    pub fn back(&self) -> Option<Vec3> {
        self.waypoints.back().copied()
    }

    /// The waypoint at `index`, counting from the front.
    pub fn get(&self, index: usize) -> Option<Vec3> {
        self.waypoints.get(index).copied()
    }

    /// Removes and returns the front waypoint.
    pub fn pop_front(&mut self) -> Option<Vec3> {
        self.waypoints.pop_front()
    }

    /// Iterates over the remaining waypoints in travel order.
    pub fn waypoints(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.waypoints.iter().copied()
    }

    /// Consecutive waypoint pairs, suitable for drawing the path as line segments.
    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.waypoints
            .iter()
            .zip(self.waypoints.iter().skip(1))
            .map(|(a, b)| (*a, *b))
    }

    /// Summed Euclidean length of all segments.
    pub fn length(&self) -> f32 {
        self.segments().map(|(a, b)| a.distance(b)).sum()
    }
}

impl FromIterator<Vec3> for Path {
    fn from_iter<T: IntoIterator<Item = Vec3>>(iter: T) -> Self {
        Self::from_waypoints(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path() {
        let path = Path::new();
        assert!(path.is_empty());
        assert_eq!(path.front(), None);
        assert_eq!(path.segments().count(), 0);
        assert_eq!(path.length(), 0.0);
    }

    #[test]
    fn test_segments_pair_consecutive_waypoints() {
        let a = Vec3::new(2.0, 0.0, 2.0);
        let b = Vec3::new(1.0, 0.0, 1.0);
        let c = Vec3::ZERO;
        let path: Path = vec![a, b, c].into_iter().collect();
        let segments: Vec<_> = path.segments().collect();
        assert_eq!(segments, vec![(a, b), (b, c)]);
    }

    #[test]
    fn test_push_front_prepends() {
        let mut path = Path::from_waypoints(vec![Vec3::X]);
        path.push_front(Vec3::ZERO);
        assert_eq!(path.front(), Some(Vec3::ZERO));
        assert_eq!(path.back(), Some(Vec3::X));
        assert_eq!(path.get(1), Some(Vec3::X));
    }

    #[test]
    fn test_pop_front_consumes_in_order() {
        let mut path = Path::from_waypoints(vec![Vec3::X, Vec3::Y, Vec3::Z]);
        assert_eq!(path.pop_front(), Some(Vec3::X));
        assert_eq!(path.pop_front(), Some(Vec3::Y));
        assert_eq!(path.pop_front(), Some(Vec3::Z));
        assert_eq!(path.pop_front(), None);
    }
}
