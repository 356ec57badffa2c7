//! Action reconstruction: the inverse transform.
//!
//! Given a baked weight-channel action, synthesize a skeleton with one
//! bone per channel plus a rotation action whose mapped-axis samples are
//! the unit-mapped inverse of the weight samples. Frame times are
//! preserved exactly; the source action is never mutated.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::curve::{Action, Channel, ChannelTarget, KeyframePoint, RotationAxis};
use crate::error::RetargetError;
use crate::mapping::weight_to_angle;
use crate::matching::ExclusionList;
use crate::scene::{Bone, RotationOrder, Skeleton};

/// Composite action name produced by the upstream FBX import.
pub const BAKED_ACTION_NAME: &str = "Key|Take 001|Base Layer";

/// X-axis spacing between synthesized bones (layout only).
pub const BONE_SPACING: f32 = 0.25;

/// Options for one reconstruction run.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ReconstructOptions {
    /// Name of the baked source action to read.
    pub source_action: String,
    /// Name given to the synthesized skeleton and action.
    pub output_name: String,
    /// Rotation axis that carries the mapped samples.
    pub axis: RotationAxis,
    /// Channel-name families to skip.
    pub excluded: ExclusionList,
}

impl Default for ReconstructOptions {
    fn default() -> Self {
        Self {
            source_action: BAKED_ACTION_NAME.to_string(),
            output_name: "Recording".to_string(),
            axis: RotationAxis::X,
            excluded: ExclusionList::new(["Facejoint"]),
        }
    }
}

/// A freshly built skeleton plus its rotation action, handed back to the
/// caller for linking into its own scene.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Reconstruction {
    pub skeleton: Skeleton,
    pub action: Action,
}

impl Reconstruction {
    pub fn report(&self) -> ReconstructReport {
        ReconstructReport {
            output_name: self.skeleton.name.clone(),
            bones_created: self.skeleton.bone_count(),
            channels_created: self.action.channels.len(),
        }
    }
}

/// Summary of one reconstruction run.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ReconstructReport {
    pub output_name: String,
    pub bones_created: usize,
    pub channels_created: usize,
}

impl fmt::Display for ReconstructReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Created armature '{}' with {} bones and {} rotation channels",
            self.output_name, self.bones_created, self.channels_created
        )
    }
}

/// Reconstruct a skeleton and rotation action from a baked weight action.
///
/// Fails before any construction if the baked action is absent or a source
/// channel violates the strictly-increasing-frames invariant; a failed run
/// builds nothing. Bone and channel order follow the source channel order,
/// so layout offsets are deterministic for a given input order.
pub fn reconstruct_action(
    actions: &[Action],
    options: &ReconstructOptions,
) -> Result<Reconstruction, RetargetError> {
    let source = actions
        .iter()
        .find(|a| a.name == options.source_action)
        .ok_or_else(|| RetargetError::MissingSourceAction {
            name: options.source_action.clone(),
        })?;

    for channel in &source.channels {
        channel
            .validate()
            .map_err(|reason| RetargetError::InvalidChannel {
                channel: channel.target.name().to_string(),
                reason,
            })?;
    }

    let mut skeleton = Skeleton::new(options.output_name.clone());
    let mut action = Action::new(options.output_name.clone());

    for channel in &source.channels {
        let Some(key_name) = channel.shape_key_name() else {
            continue;
        };
        if options.excluded.matches(key_name) {
            log::debug!("skipping excluded channel '{key_name}'");
            continue;
        }

        // Displace each bone on X so it doesn't overlap its neighbor.
        let index = skeleton.bone_count();
        let offset = index as f32 * BONE_SPACING;
        skeleton.add_bone(Bone {
            name: key_name.to_string(),
            head: [offset, 0.0, 0.0],
            tail: [offset, 0.0, 1.0],
            rotation_order: RotationOrder::Zxy,
        })?;

        let mut rotation_channels = [RotationAxis::X, RotationAxis::Y, RotationAxis::Z].map(|axis| {
            Channel::new(ChannelTarget::BoneRotation {
                bone: key_name.to_string(),
                axis,
            })
        });

        for point in &channel.points {
            for (i, rotation) in rotation_channels.iter_mut().enumerate() {
                let value = if i == options.axis.index() {
                    weight_to_angle(point.value)
                } else {
                    0.0
                };
                rotation.points.push(KeyframePoint::auto(point.frame, value));
            }
        }

        action.channels.extend(rotation_channels);
    }

    log::info!(
        "reconstructed '{}': {} bones, {} channels",
        options.output_name,
        skeleton.bone_count(),
        action.channels.len()
    );

    Ok(Reconstruction { skeleton, action })
}
