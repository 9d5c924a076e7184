//! ECS components for joint bending.
//!
//! A body entity carries one [`JointBending`]; each joint it hosts is a
//! separate entity with a [`BendingJoint`] pointing back at the body.
//! Orientations are the bodies' world rotations from [`GlobalTransform`].

use bevy::prelude::*;
use flexion_bend_core::prelude::*;
use flexion_core::config::{BendingSettings, TickSource};

// ---------------------------------------------------------------------------
// BendingJoint
// ---------------------------------------------------------------------------

/// A rotational joint between `body` and `connected_body`.
///
/// `target_rotation` is set by external logic (animation, input) before the
/// bending systems run and is overwritten with the limited target, which the
/// constraint solver then consumes.
#[derive(Component, Clone, Debug)]
pub struct BendingJoint {
    /// Entity hosting the joint (carries [`JointBending`]).
    pub body: Entity,
    /// Entity the joint connects to.
    pub connected_body: Entity,
    /// Primary joint axis in the body's local space.
    pub axis: Vec3,
    /// Secondary joint axis. Must not be parallel to `axis`.
    pub secondary_axis: Vec3,
    /// Target rotation in the joint's axis frame.
    pub target_rotation: Quat,
}

impl BendingJoint {
    /// Joint with primary axis +X, secondary axis +Y and identity target.
    pub const fn new(body: Entity, connected_body: Entity) -> Self {
        Self {
            body,
            connected_body,
            axis: Vec3::X,
            secondary_axis: Vec3::Y,
            target_rotation: Quat::IDENTITY,
        }
    }

    /// Builder: set primary and secondary axes.
    #[must_use]
    pub const fn with_axes(mut self, axis: Vec3, secondary_axis: Vec3) -> Self {
        self.axis = axis;
        self.secondary_axis = secondary_axis;
        self
    }

    /// Builder: set the desired target rotation.
    #[must_use]
    pub const fn with_target_rotation(mut self, target_rotation: Quat) -> Self {
        self.target_rotation = target_rotation;
        self
    }

    /// Current bend of this joint in its own axis frame.
    pub fn bend(&self, own: Quat, connected: Quat, rest: Quat) -> Quat {
        joint_local_orientation(own, connected, rest, self.axis, self.secondary_axis)
    }
}

// ---------------------------------------------------------------------------
// BendingStats
// ---------------------------------------------------------------------------

/// Counters of limiter work done for one body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BendingStats {
    /// Ticks on which the limiter ran.
    pub passes: u64,
    /// Joint targets rewritten across all passes.
    pub joint_updates: u64,
    /// Axes whose target was pulled to `current ± limit`.
    pub clamped_axes: u64,
}

impl BendingStats {
    /// Clear all counters.
    pub const fn reset(&mut self) {
        *self = Self {
            passes: 0,
            joint_updates: 0,
            clamped_axes: 0,
        };
    }
}

// ---------------------------------------------------------------------------
// JointBending
// ---------------------------------------------------------------------------

/// Soft bending limits for every joint hosted by a body.
///
/// Holds the configuration, the decimation counter and the rest orientation
/// of each joint, captured once by
/// [`initialize_joint_bending`](crate::systems::initialize_joint_bending).
#[derive(Component, Clone, Debug, Default)]
pub struct JointBending {
    /// Bending angle, iteration delay and tick source.
    pub settings: BendingSettings,
    scheduler: UpdateScheduler,
    registry: JointRegistry<Entity>,
    stats: BendingStats,
    missing_transform: bool,
}

impl JointBending {
    /// Create with explicit settings.
    pub fn new(settings: BendingSettings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    /// Set the bending angle in degrees, clamped into `[0, 180]`.
    pub fn set_bending_angle(&mut self, angle: f32) {
        self.settings.set_bending_angle(angle);
    }

    /// Select the tick source and iteration delay.
    ///
    /// Takes effect on the next tick of the newly selected source.
    pub const fn set_physics_settings(&mut self, tick_source: TickSource, iteration_delay: u32) {
        self.settings.set_physics_settings(tick_source, iteration_delay);
    }

    /// Capture rest orientations as `(joint, own_rotation, connected_rotation)`.
    ///
    /// Returns `false` if the body was already initialized.
    pub fn initialize<I>(&mut self, joints: I) -> bool
    where
        I: IntoIterator<Item = (Entity, Quat, Quat)>,
    {
        self.registry.initialize(joints)
    }

    /// Whether rest orientations have been captured.
    pub const fn is_initialized(&self) -> bool {
        self.registry.is_initialized()
    }

    /// Registered joints and their rest orientations.
    pub const fn registry(&self) -> &JointRegistry<Entity> {
        &self.registry
    }

    /// Decimation counter.
    pub const fn scheduler(&self) -> &UpdateScheduler {
        &self.scheduler
    }

    /// Limiter counters.
    pub const fn stats(&self) -> &BendingStats {
        &self.stats
    }

    /// Clear limiter counters.
    pub const fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Handle one tick from `source`.
    ///
    /// Ticks from the unselected source are ignored and leave the counter
    /// untouched. Returns whether the limiter should run now.
    pub fn on_tick(&mut self, source: TickSource) -> bool {
        if !self.settings.accepts(source) {
            return false;
        }
        self.scheduler.tick(self.settings.iteration_delay).is_due()
    }

    /// Mark the body's transform as unreadable. Returns `true` only on the
    /// first call since the transform was last seen.
    pub(crate) const fn flag_missing_transform(&mut self) -> bool {
        !std::mem::replace(&mut self.missing_transform, true)
    }

    pub(crate) const fn clear_missing_transform(&mut self) {
        self.missing_transform = false;
    }

    pub(crate) const fn record_pass(&mut self, joint_updates: u64, clamped_axes: u64) {
        self.stats.passes += 1;
        self.stats.joint_updates += joint_updates;
        self.stats.clamped_axes += clamped_axes;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
