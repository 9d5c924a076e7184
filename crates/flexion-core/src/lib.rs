// flexion-core: Configuration, errors and system ordering for Flexion.

pub mod config;
pub mod error;

use bevy::prelude::*;

// ---------------------------------------------------------------------------
// FlexionSet
// ---------------------------------------------------------------------------

/// Ordering of the bending pipeline within a tick.
///
/// Configured identically in `Update` and `FixedUpdate`, since either may be
/// the selected tick source.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlexionSet {
    /// Capture rest orientations of newly managed bodies.
    Initialize,
    /// Recompute joint target rotations.
    Limit,
}

// ---------------------------------------------------------------------------
// FlexionCorePlugin
// ---------------------------------------------------------------------------

/// Registers [`FlexionSet`] ordering in both tick schedules.
pub struct FlexionCorePlugin;

impl Plugin for FlexionCorePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (FlexionSet::Initialize, FlexionSet::Limit).chain(),
        )
        .configure_sets(
            FixedUpdate,
            (FlexionSet::Initialize, FlexionSet::Limit).chain(),
        );
    }
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        FlexionCorePlugin, FlexionSet,
        config::{BendingSettings, TickSource},
        error::{ConfigError, FlexionError},
    };
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
