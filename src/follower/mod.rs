//! # Follower Module
//!
//! Per-tick steering of the agent along a waypoint [`Path`].
//!
//! The follower moves a fixed step distance each tick, independent of frame time.
//! With corner smoothing enabled it also leans toward the waypoint after the current
//! one, so the agent blends into the next segment instead of stopping at each corner.

use crate::config::DEFAULT_STEP_DISTANCE;
use crate::path::Path;
use crate::utils::{advance_towards, heading};
use log::trace;
use macroquad::math::Vec3;
use serde::{Deserialize, Serialize};

/// Whether the follower has a route to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FollowerMode {
    /// No waypoints remain
    Idle,
    /// Moving toward the front waypoint
    Following,
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Agent position after the tick
    pub position: Vec3,
    /// Distance moved during the tick
    pub displacement: f32,
    /// Waypoints removed during the tick
    pub dropped: usize,
    /// Mode after the tick
    pub mode: FollowerMode,
    /// True if the last waypoint was removed during this tick
    pub arrived: bool,
}

/// Steering state owned by one agent.
///
/// # Examples
///
/// ```
/// use gridwalk::{FollowerMode, FollowerState, Path, Vec3};
///
/// let mut follower = FollowerState::new(Vec3::ZERO, 0.5);
/// follower.install_path(Path::from_waypoints(vec![Vec3::new(1.0, 0.0, 0.0)]));
///
/// let mut ticks = 0;
/// while follower.mode() == FollowerMode::Following {
///     follower.tick();
///     ticks += 1;
/// }
/// assert_eq!(ticks, 2);
/// assert_eq!(follower.position(), Vec3::new(0.5, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FollowerState {
    position: Vec3,
    path: Path,
    step_distance: f32,
    corner_smoothing: bool,
}

impl FollowerState {
    /// Creates an idle follower at `position` moving `step_distance` per tick.
    pub fn new(position: Vec3, step_distance: f32) -> Self {
        Self {
            position,
            path: Path::new(),
            step_distance,
            corner_smoothing: true,
        }
    }

    /// Enables or disables blending toward the next waypoint.
    pub fn with_corner_smoothing(mut self, enabled: bool) -> Self {
        self.corner_smoothing = enabled;
        self
    }

    /// Current agent position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Moves the agent, e.g. when an outside system repositions the model.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Remaining waypoints.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Distance moved per tick.
    pub fn step_distance(&self) -> f32 {
        self.step_distance
    }

    /// Whether corner smoothing is enabled.
    pub fn corner_smoothing(&self) -> bool {
        self.corner_smoothing
    }

    /// Current mode, derived from the remaining path.
    pub fn mode(&self) -> FollowerMode {
        if self.path.is_empty() {
            FollowerMode::Idle
        } else {
            FollowerMode::Following
        }
    }

    /// Replaces the current path. The old path is discarded, not merged.
    pub fn install_path(&mut self, path: Path) {
        trace!(
            "[follower] installing {} waypoints at {:?}",
            path.len(),
            self.position
        );
        self.path = path;
    }

    /// Drops all remaining waypoints.
    pub fn clear_path(&mut self) {
        self.path = Path::new();
    }

    /// Advances the agent by one tick.
    pub fn tick(&mut self) -> TickReport {
        let before = self.position;
        let had_path = !self.path.is_empty();
        let mut dropped = 0;

        if let Some(target) = self.path.front() {
            let step = self.step_distance;
            match heading(self.position, target) {
                Some((direction, distance)) if distance > step => {
                    self.position += direction * step;

                    if self.corner_smoothing {
                        if let Some(next) = self.path.get(1) {
                            self.position = advance_towards(self.position, next, step);
                            let remaining = self.position.distance(next);
                            // Past the corner once nearer the next waypoint than
                            // the corner itself is.
                            if remaining < step || remaining < target.distance(next) {
                                self.path.pop_front();
                                dropped += 1;
                            }
                        }
                    }
                }
                _ => {
                    self.path.pop_front();
                    dropped += 1;
                }
            }
        }

        let mode = self.mode();
        let report = TickReport {
            position: self.position,
            displacement: before.distance(self.position),
            dropped,
            mode,
            arrived: had_path && mode == FollowerMode::Idle,
        };
        trace!("[follower] tick: {:?}", report);
        report
    }
}

impl Default for FollowerState {
    fn default() -> Self {
        Self::new(Vec3::ZERO, DEFAULT_STEP_DISTANCE)
    }
}
