//! Explicit, caller-constructed selection.
//!
//! The host converts its ordered pick list into a `Selection` before any
//! core operation runs. All precondition checks happen here, so a failed
//! construction leaves the document untouched and linking itself has no
//! error paths.

use crate::error::RetargetError;
use crate::scene::{HasWeightChannels, MeshObject, Skeleton};

/// One entry of the host's ordered selection.
pub enum SelectedObject<'a> {
    Mesh(&'a mut MeshObject),
    Armature(&'a Skeleton),
}

/// A validated selection: one or more shape-key destinations plus the
/// source skeleton (picked last by host convention).
#[derive(Debug)]
pub struct Selection<'a> {
    destinations: Vec<&'a mut MeshObject>,
    source: &'a Skeleton,
}

impl<'a> Selection<'a> {
    /// Validate an ordered pick list.
    ///
    /// Requires at least two entries, the armature last and only last, and
    /// every destination passing the weight-channel capability check.
    /// Checks run before any mutation anywhere, keeping batch runs atomic.
    pub fn from_ordered(objects: Vec<SelectedObject<'a>>) -> Result<Self, RetargetError> {
        if objects.len() < 2 {
            return Err(RetargetError::TooFewSelected);
        }

        let mut objects = objects;
        let source = match objects.pop() {
            Some(SelectedObject::Armature(skeleton)) => skeleton,
            _ => return Err(RetargetError::ArmatureNotActive),
        };

        let mut destinations = Vec::with_capacity(objects.len());
        for object in objects {
            match object {
                SelectedObject::Mesh(mesh) => destinations.push(mesh),
                SelectedObject::Armature(_) => {
                    return Err(RetargetError::ArmatureNotActive);
                }
            }
        }

        for mesh in &destinations {
            if mesh.weight_channels().is_none() {
                return Err(RetargetError::MissingShapeKeys {
                    object: mesh.name.clone(),
                });
            }
        }

        Ok(Self {
            destinations,
            source,
        })
    }

    pub fn source(&self) -> &Skeleton {
        self.source
    }

    pub fn destination_count(&self) -> usize {
        self.destinations.len()
    }

    pub(crate) fn destinations_mut(&mut self) -> impl Iterator<Item = &mut MeshObject> + use<'_, 'a> {
        self.destinations.iter_mut().map(|m| &mut **m)
    }
}
