//! Deterministic RNG utilities for reproducible tests.

use bevy::math::{Quat, Vec3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Create a deterministic `ChaCha8Rng` from a seed.
///
/// All test randomization should go through this to ensure reproducibility.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Per-axis angles in degrees, each uniform in `[-max_degrees, max_degrees]`.
pub fn random_angles(rng: &mut impl Rng, max_degrees: f32) -> Vec3 {
    Vec3::new(
        rng.gen_range(-max_degrees..=max_degrees),
        rng.gen_range(-max_degrees..=max_degrees),
        rng.gen_range(-max_degrees..=max_degrees),
    )
}

/// Rotation built from [`random_angles`] in `Ry * Rx * Rz` order.
pub fn random_rotation(rng: &mut impl Rng, max_degrees: f32) -> Quat {
    let angles = random_angles(rng, max_degrees);
    Quat::from_rotation_y(angles.y.to_radians())
        * Quat::from_rotation_x(angles.x.to_radians())
        * Quat::from_rotation_z(angles.z.to_radians())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
