//! # Navigator Module
//!
//! The per-agent object that ties target acquisition, route search and path
//! following together.
//!
//! The embedding game loop owns one [`Navigator`] per agent and calls into it by
//! `&mut` reference: [`Navigator::handle_pointer`] on a pick event and
//! [`Navigator::update`] once per frame. A new target always replaces the route being
//! followed; there is no blending between the old and new routes.

pub mod overlay;
pub mod settings;

pub use overlay::*;
pub use settings::*;

use crate::follower::{FollowerMode, FollowerState, TickReport};
use crate::path::Path;
use crate::picking::{acquire_target, Ray, TargetSurface};
use crate::search::{PathSearch, SearchResult};
use crate::GridwalkResult;
use log::{debug, trace};
use macroquad::math::Vec3;

/// Route planning and following for one agent.
///
/// # Examples
///
/// ```
/// use gridwalk::{FollowerMode, Navigator, NavigatorConfig, Ray, TargetSurface, Vec3};
///
/// let mut navigator = Navigator::new(NavigatorConfig::default(), Vec3::new(2.5, 0.0, 2.5))?;
///
/// let click = Ray::new(Vec3::new(0.0, 4.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
/// navigator.handle_pointer(&click, &TargetSurface::ground());
/// assert_eq!(navigator.mode(), FollowerMode::Following);
///
/// while navigator.mode() == FollowerMode::Following {
///     navigator.update();
/// }
/// assert!(navigator.position().length() <= 0.1 + 1e-5);
/// # Ok::<(), gridwalk::GridwalkError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Navigator {
    config: NavigatorConfig,
    search: PathSearch,
    follower: FollowerState,
    target: Option<Vec3>,
    last_search: Option<SearchResult>,
}

impl Navigator {
    /// Creates an idle navigator for an agent at `position`.
    pub fn new(config: NavigatorConfig, position: Vec3) -> GridwalkResult<Self> {
        config.validate()?;
        let follower = FollowerState::new(position, config.step_distance)
            .with_corner_smoothing(config.corner_smoothing);
        Ok(Self {
            search: PathSearch::new(config.search.clone()),
            follower,
            config,
            target: None,
            last_search: None,
        })
    }

    /// The configuration in use.
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Current agent position.
    pub fn position(&self) -> Vec3 {
        self.follower.position()
    }

    /// Teleports the agent. The current route is kept.
    pub fn set_position(&mut self, position: Vec3) {
        self.follower.set_position(position);
    }

    /// Remaining waypoints, for debug drawing.
    pub fn path(&self) -> &Path {
        self.follower.path()
    }

    /// Last target that was acquired.
    pub fn target(&self) -> Option<Vec3> {
        self.target
    }

    /// Whether the agent is following a route.
    pub fn mode(&self) -> FollowerMode {
        self.follower.mode()
    }

    /// Steering state.
    pub fn follower(&self) -> &FollowerState {
        &self.follower
    }

    /// Result of the most recent search.
    pub fn last_search(&self) -> Option<&SearchResult> {
        self.last_search.as_ref()
    }

    /// Handles a pick event: intersects `ray` with `surface` and retargets on a hit.
    ///
    /// Returns `None` and leaves the current route untouched when the ray misses.
    pub fn handle_pointer(&mut self, ray: &Ray, surface: &TargetSurface) -> Option<&SearchResult> {
        match acquire_target(ray, surface) {
            Some(goal) => Some(self.retarget(goal)),
            None => {
                trace!("[navigator] pointer ray {:?} missed the target surface", ray);
                None
            }
        }
    }

    /// Searches a route from the agent to `goal` and installs it.
    ///
    /// The previous route is discarded even if the new search finds nothing, in
    /// which case the agent goes idle.
    pub fn retarget(&mut self, goal: Vec3) -> &SearchResult {
        let result = self.search.search(self.follower.position(), goal);
        debug!(
            "[navigator] retarget {:?} -> {:?}: {:?}, {} waypoints, {} nodes expanded",
            self.follower.position(),
            goal,
            result.status,
            result.path.len(),
            result.nodes_expanded
        );

        self.follower.install_path(result.path.clone());
        self.target = Some(goal);
        self.last_search.insert(result)
    }

    /// Advances the agent by one tick.
    pub fn update(&mut self) -> TickReport {
        let report = self.follower.tick();
        if report.arrived {
            debug!("[navigator] arrived at {:?}", report.position);
        }
        report
    }

    /// Captures the current state for a debug view.
    pub fn debug_overlay(&self) -> DebugOverlay {
        DebugOverlay::capture(
            self.position(),
            self.target,
            self.path(),
            self.config.chunk_size,
        )
    }
}
