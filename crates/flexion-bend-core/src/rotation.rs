//! Rotation utilities: relative orientations, axis frames and signed angle
//! decomposition.
//!
//! All functions are pure and operate on unit quaternions. Per-axis angles
//! are in degrees and follow the `Ry * Rx * Rz` composition order (Y outermost,
//! Z innermost), so `from_signed_euler_angles(Vec3::new(x, y, z))` rotates
//! about Z first, then X, then Y.

use bevy_math::{EulerRot, Mat3, Quat, Vec3};

/// Euler order used for every per-axis decomposition in this crate.
///
/// `to_euler` / `from_euler` take the angles as `(y, x, z)` in this order.
const DECOMPOSITION_ORDER: EulerRot = EulerRot::YXZ;

// ---------------------------------------------------------------------------
// Relative orientation
// ---------------------------------------------------------------------------

/// Orientation of `own` expressed in the frame of `connected`.
#[must_use]
pub fn inverse_relative_orientation(own: Quat, connected: Quat) -> Quat {
    connected.inverse() * own
}

// ---------------------------------------------------------------------------
// Signed angles
// ---------------------------------------------------------------------------

/// Bring an angle in degrees into `[0, 360)` and then into `[-180, 180)`.
///
/// A value of exactly 180 maps to -180.
#[must_use]
pub fn wrap_signed_degrees(angle: f32) -> f32 {
    let unsigned = angle.rem_euclid(360.0);
    if unsigned >= 180.0 {
        unsigned - 360.0
    } else {
        unsigned
    }
}

/// Decompose `orientation` into per-axis signed angles in degrees.
///
/// Each component is wrapped independently with [`wrap_signed_degrees`].
/// The X component always lies within `[-90, 90]`.
#[must_use]
pub fn to_signed_euler_angles(orientation: Quat) -> Vec3 {
    let (y, x, z) = orientation.to_euler(DECOMPOSITION_ORDER);
    Vec3::new(
        wrap_signed_degrees(x.to_degrees()),
        wrap_signed_degrees(y.to_degrees()),
        wrap_signed_degrees(z.to_degrees()),
    )
}

/// Rebuild an orientation from per-axis angles in degrees.
///
/// Inverse of [`to_signed_euler_angles`] up to quaternion sign.
#[must_use]
pub fn from_signed_euler_angles(angles: Vec3) -> Quat {
    Quat::from_euler(
        DECOMPOSITION_ORDER,
        angles.y.to_radians(),
        angles.x.to_radians(),
        angles.z.to_radians(),
    )
}

// ---------------------------------------------------------------------------
// Coordinate frames
// ---------------------------------------------------------------------------

/// Re-express `orientation` in the frame defined by `frame`.
///
/// Similarity transform `frame * orientation * frame⁻¹`. Every change of
/// basis in this crate goes through this function.
#[must_use]
pub fn change_coordinate_frame(orientation: Quat, frame: Quat) -> Quat {
    frame * orientation * frame.inverse()
}

/// Rotation that maps +Z onto `forward` and +Y onto `up` (orthogonalized
/// against `forward`).
///
/// `forward` and `up` must be non-zero and non-parallel.
#[must_use]
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let forward = forward.normalize();
    let right = up.cross(forward).normalize();
    let up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, forward))
}

/// Orthonormal frame of a joint built from its primary and secondary axes.
///
/// The frame looks along `axis × secondary_axis` with `secondary_axis` as up,
/// so the primary axis maps onto the frame's local X.
///
/// # Preconditions
///
/// `axis` and `secondary_axis` must be non-zero and not parallel. A
/// degenerate pair is a configuration error of the joint and is only
/// checked in debug builds.
#[must_use]
pub fn axis_frame(axis: Vec3, secondary_axis: Vec3) -> Quat {
    let forward = axis.cross(secondary_axis);
    debug_assert!(
        forward.length_squared() > f32::EPSILON,
        "joint axis {axis} and secondary axis {secondary_axis} are parallel or zero"
    );
    look_rotation(forward, secondary_axis)
}

/// The joint's bend: how far `own` has rotated away from the captured rest
/// pose relative to `connected`, expressed in the joint's own axis frame.
///
/// `rest` is the value returned by [`inverse_relative_orientation`] when the
/// joint was registered.
#[must_use]
pub fn joint_local_orientation(
    own: Quat,
    connected: Quat,
    rest: Quat,
    axis: Vec3,
    secondary_axis: Vec3,
) -> Quat {
    let frame = axis_frame(axis, secondary_axis);
    let relative = (rest.inverse() * connected.inverse() * own).inverse();
    change_coordinate_frame(relative, frame.inverse())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOLERANCE: f32 = 1e-3;

    fn same_rotation(a: Quat, b: Quat) -> bool {
        a.dot(b).abs() > 1.0 - 1e-5
    }

    /// Angular difference in degrees, wrapped so that 359.9 and -0.1 agree.
    fn wrapped_difference(a: f32, b: f32) -> f32 {
        wrap_signed_degrees(a - b)
    }

    #[test]
    fn inverse_relative_of_identical_orientations_is_identity() {
        let q = Quat::from_rotation_y(0.7) * Quat::from_rotation_x(-0.3);
        assert!(same_rotation(inverse_relative_orientation(q, q), Quat::IDENTITY));
    }

    #[test]
    fn inverse_relative_orientation_composes_back() {
        let own = Quat::from_rotation_z(0.4) * Quat::from_rotation_x(1.1);
        let connected = Quat::from_rotation_y(-0.9);
        let relative = inverse_relative_orientation(own, connected);
        assert!(same_rotation(connected * relative, own));
    }

    #[test]
    fn wrap_maps_into_signed_range() {
        assert_relative_eq!(wrap_signed_degrees(0.0), 0.0);
        assert_relative_eq!(wrap_signed_degrees(179.0), 179.0);
        assert_relative_eq!(wrap_signed_degrees(180.0), -180.0);
        assert_relative_eq!(wrap_signed_degrees(270.0), -90.0);
        assert_relative_eq!(wrap_signed_degrees(-30.0), -30.0);
        assert_relative_eq!(wrap_signed_degrees(725.0), 5.0, epsilon = 1e-4);
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn wrap_is_congruent_for_full_turn() {
        for step in 0..720 {
            let theta = step as f32 * 0.5;
            let signed = wrap_signed_degrees(theta);
            assert!((-180.0..180.0).contains(&signed), "{theta} -> {signed}");
            let remainder = (theta - signed).rem_euclid(360.0);
            assert!(
                remainder < TOLERANCE || 360.0 - remainder < TOLERANCE,
                "{theta} -> {signed}"
            );
        }
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn single_axis_decomposition_round_trips_mod_360() {
        for step in 0..36 {
            let theta = step as f32 * 10.0 + 3.0;
            let angles = to_signed_euler_angles(Quat::from_rotation_z(theta.to_radians()));
            assert!(wrapped_difference(angles.z, theta).abs() < TOLERANCE);
            assert!(angles.x.abs() < TOLERANCE);
            assert!(angles.y.abs() < TOLERANCE);

            let angles = to_signed_euler_angles(Quat::from_rotation_y(theta.to_radians()));
            assert!(wrapped_difference(angles.y, theta).abs() < TOLERANCE);
        }
    }

    #[test]
    fn decomposition_order_is_z_then_x_then_y() {
        let angles = Vec3::new(20.0, -35.0, 50.0);
        let expected = Quat::from_rotation_y(angles.y.to_radians())
            * Quat::from_rotation_x(angles.x.to_radians())
            * Quat::from_rotation_z(angles.z.to_radians());
        assert!(same_rotation(from_signed_euler_angles(angles), expected));

        let decomposed = to_signed_euler_angles(expected);
        assert_relative_eq!(decomposed.x, 20.0, epsilon = TOLERANCE);
        assert_relative_eq!(decomposed.y, -35.0, epsilon = TOLERANCE);
        assert_relative_eq!(decomposed.z, 50.0, epsilon = TOLERANCE);
    }

    #[test]
    fn change_frame_with_identity_is_noop() {
        let q = Quat::from_rotation_x(0.25);
        assert!(same_rotation(change_coordinate_frame(q, Quat::IDENTITY), q));
    }

    #[test]
    fn change_frame_moves_rotation_axis() {
        // A rotation about Y viewed through a frame that maps Y onto X
        // becomes a rotation about X.
        let frame = Quat::from_rotation_z(-std::f32::consts::FRAC_PI_2);
        assert!((frame * Vec3::Y).abs_diff_eq(Vec3::X, 1e-6));

        let about_y = Quat::from_rotation_y(0.5);
        let changed = change_coordinate_frame(about_y, frame);
        assert!(same_rotation(changed, Quat::from_rotation_x(0.5)));
    }

    #[test]
    fn look_rotation_along_z_is_identity() {
        assert!(same_rotation(look_rotation(Vec3::Z, Vec3::Y), Quat::IDENTITY));
    }

    #[test]
    fn look_rotation_maps_forward_and_up() {
        let forward = Vec3::new(1.0, 0.0, 1.0);
        let up = Vec3::Y;
        let q = look_rotation(forward, up);
        assert!((q * Vec3::Z).abs_diff_eq(forward.normalize(), 1e-5));
        assert!((q * Vec3::Y).abs_diff_eq(Vec3::Y, 1e-5));
    }

    #[test]
    fn default_axes_give_identity_frame() {
        assert!(same_rotation(axis_frame(Vec3::X, Vec3::Y), Quat::IDENTITY));
    }

    #[test]
    fn axis_frame_maps_local_x_onto_primary_axis() {
        let frame = axis_frame(Vec3::Y, Vec3::Z);
        assert!((frame * Vec3::X).abs_diff_eq(Vec3::Y, 1e-5));
        assert!((frame * Vec3::Y).abs_diff_eq(Vec3::Z, 1e-5));
        assert!((frame * Vec3::Z).abs_diff_eq(Vec3::X, 1e-5));
    }

    #[test]
    fn joint_at_rest_has_no_bend() {
        let own = Quat::from_rotation_y(0.8) * Quat::from_rotation_z(0.2);
        let connected = Quat::from_rotation_x(-0.4);
        let rest = inverse_relative_orientation(own, connected);
        let bend = joint_local_orientation(own, connected, rest, Vec3::X, Vec3::Y);
        assert!(same_rotation(bend, Quat::IDENTITY));
    }

    #[test]
    fn bend_is_inverse_of_relative_rotation_for_default_axes() {
        let own = Quat::from_rotation_x(10f32.to_radians());
        let bend = joint_local_orientation(own, Quat::IDENTITY, Quat::IDENTITY, Vec3::X, Vec3::Y);
        let angles = to_signed_euler_angles(bend);
        assert_relative_eq!(angles.x, -10.0, epsilon = TOLERANCE);
        assert_relative_eq!(angles.y, 0.0, epsilon = TOLERANCE);
        assert_relative_eq!(angles.z, 0.0, epsilon = TOLERANCE);
    }

    #[test]
    fn bend_about_primary_axis_shows_up_on_local_x() {
        // Primary axis along world Y: rotating the body about Y is a bend
        // about the joint's own X axis.
        let own = Quat::from_rotation_y(15f32.to_radians());
        let bend = joint_local_orientation(own, Quat::IDENTITY, Quat::IDENTITY, Vec3::Y, Vec3::Z);
        let angles = to_signed_euler_angles(bend);
        assert_relative_eq!(angles.x, -15.0, epsilon = TOLERANCE);
        assert_relative_eq!(angles.y, 0.0, epsilon = TOLERANCE);
        assert_relative_eq!(angles.z, 0.0, epsilon = TOLERANCE);
    }

    #[test]
    fn bend_ignores_common_rotation_of_both_bodies() {
        let rest_own = Quat::from_rotation_z(0.3);
        let rest_connected = Quat::from_rotation_y(0.1);
        let rest = inverse_relative_orientation(rest_own, rest_connected);

        let carry = Quat::from_rotation_x(1.2) * Quat::from_rotation_y(-0.6);
        let bend = joint_local_orientation(
            carry * rest_own,
            carry * rest_connected,
            rest,
            Vec3::X,
            Vec3::Y,
        );
        assert!(same_rotation(bend, Quat::IDENTITY));
    }
}
