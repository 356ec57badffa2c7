//! Host-agnostic scene data: skeletons, bones, shape-key sets.
//!
//! These mirror the slice of a host document the core reads and writes.
//! The host owns linking them into its persistent scene; the core treats
//! them as call-scoped, exclusively owned values.

use serde::{Deserialize, Serialize};

use crate::driver::Driver;
use crate::ids::ContainerId;

/// Euler rotation order for a bone's rotation channels.
/// Brekel BVH armatures use ZXY.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum RotationOrder {
    #[default]
    Xyz,
    Zxy,
}

/// A named rotation carrier. Head/tail offsets exist only for
/// non-overlapping visual layout; there is no geometry.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Bone {
    pub name: String,
    pub head: [f32; 3],
    pub tail: [f32; 3],
    #[serde(default)]
    pub rotation_order: RotationOrder,
}

/// An ordered set of uniquely named bones.
///
/// Iteration order is insertion order. Callers that need deterministic
/// matching output across runs must construct the skeleton in a stable
/// order; the core guarantees determinism per run only.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Skeleton {
    pub name: String,
    bones: Vec<Bone>,
}

impl Skeleton {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bones: Vec::new(),
        }
    }

    /// Append a bone, enforcing name uniqueness within the skeleton.
    pub fn add_bone(&mut self, bone: Bone) -> Result<(), crate::error::RetargetError> {
        if self.bones.iter().any(|b| b.name == bone.name) {
            return Err(crate::error::RetargetError::DuplicateBone { name: bone.name });
        }
        self.bones.push(bone);
        Ok(())
    }

    pub fn bone(&self, name: &str) -> Option<&Bone> {
        self.bones.iter().find(|b| b.name == name)
    }

    pub fn bones(&self) -> impl Iterator<Item = &Bone> {
        self.bones.iter()
    }

    pub fn bone_count(&self) -> usize {
        self.bones.len()
    }
}

/// One named blend-weight channel (value in [0, 1] by convention).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ShapeKey {
    pub name: String,
    #[serde(default)]
    pub value: f32,
}

/// A container's shape-key set plus the drivers attached to it.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ShapeKeySet {
    pub keys: Vec<ShapeKey>,
    #[serde(default)]
    pub drivers: Vec<Driver>,
}

impl ShapeKeySet {
    pub fn contains(&self, name: &str) -> bool {
        self.keys.iter().any(|k| k.name == name)
    }

    pub fn key_names(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|k| k.name.as_str())
    }
}

/// A destination object: may or may not carry shape keys.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MeshObject {
    pub id: ContainerId,
    pub name: String,
    pub shape_keys: Option<ShapeKeySet>,
}

impl MeshObject {
    pub fn new(id: ContainerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            shape_keys: None,
        }
    }
}

/// Typed capability check for "can be a driver destination".
/// Hosts with heterogeneous object types implement this at the seam
/// instead of probing attributes at runtime.
pub trait HasWeightChannels {
    fn weight_channels(&self) -> Option<&ShapeKeySet>;
    fn weight_channels_mut(&mut self) -> Option<&mut ShapeKeySet>;
}

impl HasWeightChannels for MeshObject {
    fn weight_channels(&self) -> Option<&ShapeKeySet> {
        self.shape_keys.as_ref()
    }

    fn weight_channels_mut(&mut self) -> Option<&mut ShapeKeySet> {
        self.shape_keys.as_mut()
    }
}
