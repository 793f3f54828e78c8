//! # Utilities Module
//!
//! Small vector helpers shared by the follower and picking code.

pub mod math;

pub use math::*;
