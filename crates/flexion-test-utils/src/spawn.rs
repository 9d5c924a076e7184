//! Entity spawn helpers for tests.

use bevy::prelude::*;
use flexion_bend::components::{BendingJoint, JointBending};
use flexion_core::config::BendingSettings;

/// Entities created by [`spawn_bending_pair`].
#[derive(Clone, Copy, Debug)]
pub struct BendingPair {
    /// Body carrying [`JointBending`].
    pub body: Entity,
    /// Body the joint connects to.
    pub connected: Entity,
    /// Joint entity with default axes.
    pub joint: Entity,
}

/// Spawn a body at `rotation` carrying [`JointBending`] with `settings`.
pub fn spawn_body(world: &mut World, rotation: Quat, settings: BendingSettings) -> Entity {
    world
        .spawn((
            Transform::from_rotation(rotation),
            JointBending::new(settings),
        ))
        .id()
}

/// Spawn a bending body parented under `parent`, with local `rotation`.
pub fn spawn_child_body(
    world: &mut World,
    parent: Entity,
    rotation: Quat,
    settings: BendingSettings,
) -> Entity {
    world
        .spawn((
            Transform::from_rotation(rotation),
            JointBending::new(settings),
            ChildOf(parent),
        ))
        .id()
}

/// Spawn a plain body (no bending) at `rotation`.
pub fn spawn_anchor(world: &mut World, rotation: Quat) -> Entity {
    world.spawn(Transform::from_rotation(rotation)).id()
}

/// Spawn a joint on `body` connected to `connected` with default axes.
pub fn spawn_joint(world: &mut World, body: Entity, connected: Entity) -> Entity {
    world.spawn(BendingJoint::new(body, connected)).id()
}

/// Spawn a joint on `body` with explicit axes.
pub fn spawn_joint_with_axes(
    world: &mut World,
    body: Entity,
    connected: Entity,
    axis: Vec3,
    secondary_axis: Vec3,
) -> Entity {
    world
        .spawn(BendingJoint::new(body, connected).with_axes(axis, secondary_axis))
        .id()
}

/// Spawn an anchor, a bending body and one joint between them, all at
/// identity rotation.
pub fn spawn_bending_pair(world: &mut World, settings: BendingSettings) -> BendingPair {
    let connected = spawn_anchor(world, Quat::IDENTITY);
    let body = spawn_body(world, Quat::IDENTITY, settings);
    let joint = spawn_joint(world, body, connected);
    BendingPair {
        body,
        connected,
        joint,
    }
}

/// Set the rotation of `entity`'s [`Transform`].
pub fn set_rotation(world: &mut World, entity: Entity, rotation: Quat) {
    if let Some(mut transform) = world.get_mut::<Transform>(entity) {
        transform.rotation = rotation;
    }
}

/// Set the desired target rotation of a joint.
pub fn set_target(world: &mut World, joint: Entity, target: Quat) {
    if let Some(mut joint) = world.get_mut::<BendingJoint>(joint) {
        joint.target_rotation = target;
    }
}

/// Current target rotation of a joint.
pub fn target_of(world: &World, joint: Entity) -> Option<Quat> {
    world
        .get::<BendingJoint>(joint)
        .map(|joint| joint.target_rotation)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::bending_test_app;

    #[test]
    fn spawn_pair_creates_linked_entities() {
        let mut app = bending_test_app();
        let pair = spawn_bending_pair(app.world_mut(), BendingSettings::default());

        let joint = app.world().get::<BendingJoint>(pair.joint).unwrap();
        assert_eq!(joint.body, pair.body);
        assert_eq!(joint.connected_body, pair.connected);
        assert!(app.world().get::<JointBending>(pair.body).is_some());
        assert!(app.world().get::<Transform>(pair.connected).is_some());
    }

    #[test]
    fn spawn_joint_with_axes_sets_axes() {
        let mut app = bending_test_app();
        let world = app.world_mut();
        let anchor = spawn_anchor(world, Quat::IDENTITY);
        let body = spawn_body(world, Quat::IDENTITY, BendingSettings::default());
        let joint = spawn_joint_with_axes(world, body, anchor, Vec3::Y, Vec3::Z);

        let joint = app.world().get::<BendingJoint>(joint).unwrap();
        assert_eq!(joint.axis, Vec3::Y);
        assert_eq!(joint.secondary_axis, Vec3::Z);
    }

    #[test]
    fn set_rotation_and_target() {
        let mut app = bending_test_app();
        let pair = spawn_bending_pair(app.world_mut(), BendingSettings::default());
        let rotation = Quat::from_rotation_x(0.2);

        set_rotation(app.world_mut(), pair.body, rotation);
        set_target(app.world_mut(), pair.joint, rotation);

        assert_eq!(
            app.world().get::<Transform>(pair.body).unwrap().rotation,
            rotation
        );
        assert_eq!(target_of(app.world(), pair.joint), Some(rotation));
    }
}
