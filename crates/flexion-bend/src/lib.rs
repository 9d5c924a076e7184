//! Bevy plugin wrapping [`flexion_bend_core`] for ECS integration.
//!
//! Add [`FlexionBendPlugin`] to your Bevy app, then give a body entity a
//! [`JointBending`](components::JointBending) component and spawn one
//! [`BendingJoint`](components::BendingJoint) entity per joint it hosts. Each
//! tick of the selected source rewrites the joints' target rotations so that
//! they never sit more than the bending angle away from the current bend.
//!
//! # Example
//!
//! ```
//! use bevy::prelude::*;
//! use flexion_bend::prelude::*;
//! use flexion_core::prelude::*;
//!
//! let mut app = App::new();
//! app.add_plugins(FlexionCorePlugin);
//! app.add_plugins(FlexionBendPlugin);
//!
//! let anchor = app.world_mut().spawn(Transform::default()).id();
//! let body = app
//!     .world_mut()
//!     .spawn((
//!         Transform::default(),
//!         JointBending::new(BendingSettings::new(5.0, 0, TickSource::Physics)),
//!     ))
//!     .id();
//! app.world_mut().spawn(BendingJoint::new(body, anchor));
//!
//! app.world_mut().run_schedule(FixedUpdate);
//! assert!(app.world().get::<JointBending>(body).unwrap().is_initialized());
//! ```

pub mod components;
pub mod systems;

/// Re-export the core crate for downstream convenience.
pub use flexion_bend_core;

use bevy::prelude::*;
use flexion_core::FlexionSet;

// ---------------------------------------------------------------------------
// FlexionBendPlugin
// ---------------------------------------------------------------------------

/// Bevy plugin that limits joint targets in both tick schedules.
///
/// Requires [`FlexionCorePlugin`](flexion_core::FlexionCorePlugin) to be
/// added first (it provides the [`FlexionSet`] ordering). Body orientations
/// come from `GlobalTransform`, so the app also needs transform propagation
/// (`TransformPlugin`, included in `DefaultPlugins`). Each body's
/// [`TickSource`](flexion_core::config::TickSource) decides which of the two
/// systems acts on it.
pub struct FlexionBendPlugin;

impl Plugin for FlexionBendPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                systems::initialize_joint_bending.in_set(FlexionSet::Initialize),
                systems::visual_tick_system.in_set(FlexionSet::Limit),
            ),
        )
        .add_systems(
            FixedUpdate,
            (
                systems::initialize_joint_bending.in_set(FlexionSet::Initialize),
                systems::physics_tick_system.in_set(FlexionSet::Limit),
            ),
        );
    }
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        FlexionBendPlugin,
        components::{BendingJoint, BendingStats, JointBending},
    };
    // Re-export core types so users don't need a separate import.
    pub use flexion_bend_core::prelude::*;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use flexion_core::FlexionCorePlugin;

    #[test]
    fn plugin_builds_without_panic() {
        let mut app = App::new();
        app.add_plugins(FlexionCorePlugin);
        app.add_plugins(FlexionBendPlugin);
        app.finish();
        app.cleanup();
        app.update();
        app.world_mut().run_schedule(FixedUpdate);
    }
}
