//! Error types for retargeting operations.
//!
//! Every variant is a precondition failure surfaced before any mutation
//! begins; a failed run leaves the caller's document untouched.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum RetargetError {
    /// Fewer than two objects selected.
    #[error("select at least one mesh object and the source armature last")]
    TooFewSelected,

    /// The last selected object is not the source armature.
    #[error("the source armature must be the last selected object")]
    ArmatureNotActive,

    /// A destination object does not expose a shape-key set.
    #[error("selected mesh object does not contain shape keys: {object}")]
    MissingShapeKeys { object: String },

    /// The baked action required for reconstruction is absent.
    #[error("baked action not found: {name}")]
    MissingSourceAction { name: String },

    /// Bone names must be unique within a skeleton.
    #[error("duplicate bone name: {name}")]
    DuplicateBone { name: String },

    /// Keyframe frames must be strictly increasing within a channel.
    #[error("invalid channel '{channel}': {reason}")]
    InvalidChannel { channel: String, reason: String },
}
