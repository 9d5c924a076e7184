//! Shared test fixtures and utilities for Flexion crates.
//!
//! Provides reusable helpers for building Bevy test apps, spawning bodies
//! and joints, driving tick sources, and deterministic RNG setup.

pub mod app;
pub mod rng;
pub mod spawn;
pub mod ticks;

// ---------------------------------------------------------------------------
// Re-exports for convenience
// ---------------------------------------------------------------------------

pub use app::{bending_test_app, minimal_test_app};
pub use rng::{random_angles, random_rotation, seeded_rng};
pub use spawn::{
    BendingPair, set_rotation, set_target, spawn_anchor, spawn_bending_pair, spawn_body,
    spawn_child_body, spawn_joint, spawn_joint_with_axes, target_of,
};
pub use ticks::{limiter_passes, physics_ticks, propagate_transforms, visual_ticks};
