//! Bevy test app builders with various plugin combinations.

use bevy::prelude::*;
use bevy::transform::TransformPlugin;

/// Create a minimal test app with transform propagation and the core plugin.
///
/// Provides `FlexionSet` ordering in both tick schedules but no bending
/// systems.
pub fn minimal_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(TransformPlugin);
    app.add_plugins(flexion_core::FlexionCorePlugin);
    app.finish();
    app.cleanup();
    app
}

/// Create a test app with transform propagation, the core and bending
/// plugins.
///
/// No time plugin is added: `app.update()` never runs `FixedUpdate`, so
/// physics ticks are driven explicitly with
/// [`physics_ticks`](crate::ticks::physics_ticks).
pub fn bending_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(TransformPlugin);
    app.add_plugins(flexion_core::FlexionCorePlugin);
    app.add_plugins(flexion_bend::FlexionBendPlugin);
    app.finish();
    app.cleanup();
    app
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
