//! # Gridwalk
//!
//! Route planning and path following for an agent moving through continuous 3D space.
//!
//! ## Architecture Overview
//!
//! A destination flows through the crate in three stages:
//!
//! - **Picking**: a pointer ray from the camera collaborator is intersected with a ground
//!   plane or quad to produce a target position
//! - **Search**: the agent and target positions are quantized onto a uniform grid and an
//!   A* search over the 26-connected grid produces a waypoint [`Path`]
//! - **Following**: every tick the [`FollowerState`] steps the agent toward the front
//!   waypoint, blending around corners, until the path is exhausted
//!
//! The [`Navigator`] owns all per-agent state and ties the stages together. Everything
//! runs synchronously inside the caller's frame update; nothing here renders or polls
//! input devices.

pub mod follower;
pub mod grid;
pub mod navigator;
pub mod path;
pub mod picking;
pub mod search;
pub mod utils;

pub use follower::*;
pub use grid::*;
pub use navigator::*;
pub use path::*;
pub use picking::*;
pub use search::*;
pub use utils::*;

/// Vector types shared with the rendering collaborator.
pub use macroquad::math::{Mat4, Vec2, Vec3};

/// Core error type for the Gridwalk crate.
#[derive(thiserror::Error, Debug)]
pub enum GridwalkError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration values are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A caller-supplied argument could not be used
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type used throughout the Gridwalk codebase.
pub type GridwalkResult<T> = Result<T, GridwalkError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tuning constants.
pub mod config {
    /// Distance the agent covers in one tick
    pub const DEFAULT_STEP_DISTANCE: f32 = 0.1;

    /// Closed nodes a single search may produce before giving up.
    ///
    /// With the default region a search never expands more cells than its margin
    /// box holds, so any route whose box has at most this many cells is found.
    pub const DEFAULT_MAX_EXPANSIONS: usize = 1_000_000;

    /// Cells of slack around the start/goal bounding box
    pub const DEFAULT_REGION_MARGIN: i32 = 2;

    /// Edge length of a debug chunk, in cells
    pub const DEFAULT_CHUNK_SIZE: i32 = 50;

    /// Smallest ray/plane denominator treated as non-parallel
    pub const PLANE_EPSILON: f32 = 1e-6;
}
