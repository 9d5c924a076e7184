//! Framework-agnostic joint bending math.
//!
//! Pure Rust library with no game engine dependencies beyond the math types.
//! Converts joint orientations into the joint's own axis frame, clamps the
//! joint's target rotation per axis, and decides how often that work runs.
//!
//! # Pipeline
//!
//! ```text
//! own, connected ──► JointRegistry (rest pose, captured once)
//!                         │
//! tick ──► UpdateScheduler ──► joint_local_orientation ──► clamp ──► target
//! ```
//!
//! # Quick Start
//!
//! ```
//! use bevy_math::{Quat, Vec3};
//! use flexion_bend_core::prelude::*;
//!
//! let own = Quat::from_rotation_x(12f32.to_radians());
//! let connected = Quat::IDENTITY;
//!
//! let mut registry = JointRegistry::new();
//! registry.initialize([(0_u32, Quat::IDENTITY, connected)]);
//!
//! let mut scheduler = UpdateScheduler::new();
//! if scheduler.tick(0).is_due() {
//!     registry.for_each_joint(|_, rest| {
//!         let bend = joint_local_orientation(own, connected, rest, Vec3::X, Vec3::Y);
//!         let target = compute_clamped_target(bend, Quat::IDENTITY, 5.0);
//!         let step = to_signed_euler_angles(target).x - to_signed_euler_angles(bend).x;
//!         assert!((step.abs() - 5.0).abs() < 1e-2);
//!     });
//! }
//! ```

pub mod limiter;
pub mod registry;
pub mod rotation;
pub mod scheduler;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::limiter::{
        ClampedAngles, MAX_BENDING_ANGLE, clamp_angles, clamp_orientations,
        compute_clamped_target,
    };
    pub use crate::registry::JointRegistry;
    pub use crate::rotation::{
        axis_frame, change_coordinate_frame, from_signed_euler_angles,
        inverse_relative_orientation, joint_local_orientation, look_rotation,
        to_signed_euler_angles, wrap_signed_degrees,
    };
    pub use crate::scheduler::{SchedulerState, UpdateScheduler};
}
