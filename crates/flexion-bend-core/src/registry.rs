//! Rest orientations of managed joints.
//!
//! A [`JointRegistry`] maps joint identifiers to the orientation each joint
//! had relative to its connected body when the registry was initialized.
//! Bending is measured from that rest pose. Entries are captured exactly
//! once and iterate in insertion order.

use std::collections::HashMap;
use std::hash::Hash;

use bevy_math::Quat;

use crate::rotation::inverse_relative_orientation;

/// Keyed table of joint rest orientations.
#[derive(Clone, Debug)]
pub struct JointRegistry<K> {
    entries: Vec<(K, Quat)>,
    index: HashMap<K, usize>,
    initialized: bool,
}

impl<K> Default for JointRegistry<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            initialized: false,
        }
    }
}

impl<K: Copy + Eq + Hash> JointRegistry<K> {
    /// Empty, uninitialized registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture rest orientations for `joints`, given as
    /// `(id, own_orientation, connected_orientation)`.
    ///
    /// Only the first call has an effect; later calls return `false` and
    /// leave the registry untouched. Duplicate ids keep their first entry.
    pub fn initialize<I>(&mut self, joints: I) -> bool
    where
        I: IntoIterator<Item = (K, Quat, Quat)>,
    {
        if self.initialized {
            return false;
        }
        for (id, own, connected) in joints {
            if self.index.contains_key(&id) {
                continue;
            }
            self.index.insert(id, self.entries.len());
            self.entries
                .push((id, inverse_relative_orientation(own, connected)));
        }
        self.initialized = true;
        true
    }

    /// Whether [`initialize`](Self::initialize) has run.
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Number of registered joints.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no joint is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `id` has a captured rest orientation.
    pub fn contains(&self, id: K) -> bool {
        self.index.contains_key(&id)
    }

    /// Rest orientation of `id`, if registered.
    pub fn rest_orientation(&self, id: K) -> Option<Quat> {
        self.index.get(&id).map(|&i| self.entries[i].1)
    }

    /// Rest orientation of a joint that must have been registered.
    ///
    /// Limiting a joint without a rest orientation is a programming error:
    /// debug builds panic, release builds fall back to identity.
    pub fn expect_rest_orientation(&self, id: K) -> Quat {
        let rest = self.rest_orientation(id);
        debug_assert!(rest.is_some(), "joint has no captured rest orientation");
        rest.unwrap_or(Quat::IDENTITY)
    }

    /// `(id, rest_orientation)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (K, Quat)> + '_ {
        self.entries.iter().copied()
    }

    /// Call `f` for every registered joint in insertion order.
    pub fn for_each_joint(&self, mut f: impl FnMut(K, Quat)) {
        for &(id, rest) in &self.entries {
            f(id, rest);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
