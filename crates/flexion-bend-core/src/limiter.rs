//! Per-axis bending limiter.
//!
//! Decides where a joint's target rotation may sit relative to its current
//! bend. Each axis is handled on its own: when the current angle has drifted
//! more than the bending limit away from the target angle, the target angle
//! is replaced by `current ± limit`. Axes within the limit keep the target
//! untouched.
//!
//! ```text
//! current, desired ──► signed angles ──► per-axis clamp ──► reassembled target
//! ```
//!
//! The clamp is per axis, not on the magnitude of the combined rotation. When
//! several axes deviate at once the combined step may exceed the limit.

use bevy_math::{Quat, Vec3};

use crate::rotation::{from_signed_euler_angles, to_signed_euler_angles};

/// Largest meaningful bending limit in degrees.
pub const MAX_BENDING_ANGLE: f32 = 180.0;

// ---------------------------------------------------------------------------
// ClampedAngles
// ---------------------------------------------------------------------------

/// Result of clamping one joint's per-axis angles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClampedAngles {
    /// New target angles in degrees (X, Y, Z).
    pub angles: Vec3,
    /// Which axes had their target replaced by `current ± limit`.
    pub overridden: [bool; 3],
}

impl ClampedAngles {
    /// Number of axes whose target was replaced.
    pub fn overridden_count(&self) -> u32 {
        self.overridden.iter().map(|&hit| u32::from(hit)).sum()
    }

    /// Whether any axis was replaced.
    pub fn any_overridden(&self) -> bool {
        self.overridden.iter().any(|&hit| hit)
    }

    /// Reassemble the angles into an orientation.
    pub fn to_orientation(&self) -> Quat {
        from_signed_euler_angles(self.angles)
    }
}

// ---------------------------------------------------------------------------
// Clamp
// ---------------------------------------------------------------------------

fn clamp_axis(current: f32, target: f32, limit: f32) -> (f32, bool) {
    let delta = current - target;
    if delta > limit {
        (current + limit, true)
    } else if delta < -limit {
        (current - limit, true)
    } else {
        (target, false)
    }
}

/// Clamp signed per-axis `target` angles against `current` angles.
///
/// All values in degrees. `limit` is expected in `[0, 180]`.
pub fn clamp_angles(current: Vec3, target: Vec3, limit: f32) -> ClampedAngles {
    let (x, hit_x) = clamp_axis(current.x, target.x, limit);
    let (y, hit_y) = clamp_axis(current.y, target.y, limit);
    let (z, hit_z) = clamp_axis(current.z, target.z, limit);
    ClampedAngles {
        angles: Vec3::new(x, y, z),
        overridden: [hit_x, hit_y, hit_z],
    }
}

/// Clamp the per-axis angles of two orientations, see [`clamp_angles`].
pub fn clamp_orientations(current: Quat, desired: Quat, limit: f32) -> ClampedAngles {
    clamp_angles(
        to_signed_euler_angles(current),
        to_signed_euler_angles(desired),
        limit,
    )
}

/// New target orientation whose per-axis angles lie within
/// `bend_limit_degrees` of `current`.
///
/// With a limit of 0 the result collapses onto `current`; with 180 the
/// desired target passes through for any per-axis delta within ±180.
pub fn compute_clamped_target(current: Quat, desired: Quat, bend_limit_degrees: f32) -> Quat {
    clamp_orientations(current, desired, bend_limit_degrees).to_orientation()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
