//! Bevy systems for joint bending.
//!
//! Orientations are world rotations read from [`GlobalTransform`], so a body
//! parented under another entity bends with its parent. They reflect the
//! most recent transform propagation.

use bevy::log::{debug, warn};
use bevy::prelude::*;
use flexion_bend_core::prelude::*;
use flexion_core::config::TickSource;

use crate::components::{BendingJoint, JointBending};

/// Captures rest orientations for bodies that have not been initialized.
///
/// Runs in [`FlexionSet::Initialize`](flexion_core::FlexionSet::Initialize)
/// of both tick schedules, so whichever runs first captures the pose before
/// any limiter pass. Joints are registered in entity index order, which is
/// spawn order for freshly spawned entities. A joint whose connected body
/// has no transform is skipped. A body without a transform stays
/// uninitialized and is retried every tick.
#[allow(clippy::needless_pass_by_value)] // Bevy system parameters are extracted by value
pub fn initialize_joint_bending(
    mut bodies: Query<(Entity, &mut JointBending)>,
    joints: Query<(Entity, &BendingJoint)>,
    added_joints: Query<(Entity, &BendingJoint), Added<BendingJoint>>,
    transforms: Query<&GlobalTransform>,
) {
    for (body, mut bending) in &mut bodies {
        if bending.is_initialized() {
            continue;
        }

        let Ok(own) = transforms.get(body) else {
            if bending.flag_missing_transform() {
                warn!("flexion-bend: body {body} has no GlobalTransform, rest pose not captured yet");
            }
            continue;
        };
        bending.clear_missing_transform();
        let own = own.rotation();

        let mut captured: Vec<(Entity, Quat, Quat)> = joints
            .iter()
            .filter(|(_, joint)| joint.body == body)
            .filter_map(|(entity, joint)| {
                let Ok(connected) = transforms.get(joint.connected_body) else {
                    warn!(
                        "flexion-bend: joint {entity} connected body {} has no GlobalTransform, skipped",
                        joint.connected_body
                    );
                    return None;
                };
                Some((entity, own, connected.rotation()))
            })
            .collect();
        captured.sort_by_key(|(entity, _, _)| entity.index());

        let count = captured.len();
        bending.initialize(captured);
        debug!("flexion-bend: body {body} captured rest pose of {count} joint(s)");
    }

    for (entity, joint) in &added_joints {
        if let Ok((_, bending)) = bodies.get(joint.body)
            && bending.is_initialized()
            && !bending.registry().contains(entity)
        {
            debug!(
                "flexion-bend: joint {entity} added after body {} was initialized, not managed",
                joint.body
            );
        }
    }
}

/// Visual-tick entry point, registered in `Update`.
#[allow(clippy::needless_pass_by_value)]
pub fn visual_tick_system(
    mut bodies: Query<(Entity, &mut JointBending)>,
    mut joints: Query<&mut BendingJoint>,
    transforms: Query<&GlobalTransform>,
) {
    bend_joints(TickSource::Visual, &mut bodies, &mut joints, &transforms);
}

/// Physics-tick entry point, registered in `FixedUpdate`.
#[allow(clippy::needless_pass_by_value)]
pub fn physics_tick_system(
    mut bodies: Query<(Entity, &mut JointBending)>,
    mut joints: Query<&mut BendingJoint>,
    transforms: Query<&GlobalTransform>,
) {
    bend_joints(TickSource::Physics, &mut bodies, &mut joints, &transforms);
}

/// One tick from `source` for every managed body.
///
/// Bodies that did not select `source`, are not initialized, or currently
/// have no transform are left untouched and their scheduler does not
/// advance. For bodies whose scheduler is due, every registered joint gets
/// its target rotation rewritten so that each axis lies within the bending
/// angle of the joint's current bend.
pub fn bend_joints(
    source: TickSource,
    bodies: &mut Query<(Entity, &mut JointBending)>,
    joints: &mut Query<&mut BendingJoint>,
    transforms: &Query<&GlobalTransform>,
) {
    for (body, mut bending) in bodies.iter_mut() {
        if !bending.is_initialized() || !bending.settings.accepts(source) {
            continue;
        }

        let Ok(own) = transforms.get(body) else {
            if bending.flag_missing_transform() {
                warn!("flexion-bend: body {body} lost its GlobalTransform, bending paused");
            }
            continue;
        };
        bending.clear_missing_transform();

        if !bending.on_tick(source) {
            continue;
        }
        let own = own.rotation();
        let limit = bending.settings.bending_angle();

        let mut joint_updates = 0_u64;
        let mut clamped_axes = 0_u64;
        for (entity, rest) in bending.registry().iter() {
            let Ok(mut joint) = joints.get_mut(entity) else {
                continue;
            };
            let Ok(connected) = transforms.get(joint.connected_body) else {
                warn!(
                    "flexion-bend: joint {entity} connected body {} has no GlobalTransform, skipped",
                    joint.connected_body
                );
                continue;
            };

            let bend = joint.bend(own, connected.rotation(), rest);
            let clamped = clamp_orientations(bend, joint.target_rotation, limit);
            joint.target_rotation = clamped.to_orientation();

            joint_updates += 1;
            clamped_axes += u64::from(clamped.overridden_count());
        }

        bending.record_pass(joint_updates, clamped_axes);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
