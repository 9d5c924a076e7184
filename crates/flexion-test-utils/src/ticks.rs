//! Tick drivers for tests.
//!
//! Thin wrappers that advance one of the two tick sources without a time
//! plugin, so tick counts are exact. Every tick first propagates transforms,
//! so rotations set since the last tick are visible to the bending systems.

use bevy::prelude::*;
use flexion_bend::components::JointBending;

/// Bring every `GlobalTransform` up to date with its `Transform` and
/// parents.
pub fn propagate_transforms(app: &mut App) {
    app.world_mut().run_schedule(PostUpdate);
}

/// Run `n` physics ticks (`FixedUpdate`).
pub fn physics_ticks(app: &mut App, n: usize) {
    for _ in 0..n {
        propagate_transforms(app);
        app.world_mut().run_schedule(FixedUpdate);
    }
}

/// Run `n` visual ticks (full `app.update()` frames).
pub fn visual_ticks(app: &mut App, n: usize) {
    for _ in 0..n {
        propagate_transforms(app);
        app.update();
    }
}

/// Number of limiter passes recorded on `body`.
pub fn limiter_passes(app: &App, body: Entity) -> u64 {
    app.world()
        .get::<JointBending>(body)
        .map_or(0, |bending| bending.stats().passes)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
