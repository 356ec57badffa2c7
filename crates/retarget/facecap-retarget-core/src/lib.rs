//! Face-capture retargeting core (host-agnostic).
//!
//! Two batch operations over motion-capture facial animation data:
//! - driver linking: bind destination shape-key weights to source bone
//!   rotations through a unit mapping (`driver`, `matching`, `mapping`);
//! - action reconstruction: synthesize a skeleton plus rotation action
//!   from an existing baked weight action (`reconstruct`).
//!
//! The host scene graph, operator/UI surface, and mocap file import stay
//! outside this crate; hosts hand in validated selections and link the
//! returned data into their own documents.

pub mod curve;
pub mod driver;
pub mod error;
pub mod ids;
pub mod mapping;
pub mod matching;
pub mod reconstruct;
pub mod scene;
pub mod selection;
pub mod stored_action;

// Re-exports for consumers (host adapters)
pub use curve::{
    Action, Channel, ChannelTarget, Extrapolation, HandleStyle, Interpolation, KeyframePoint,
    RotationAxis, Vec2,
};
pub use driver::{link_drivers, Driver, DriverSource, LinkOptions, LinkReport, TransformSpace};
pub use error::RetargetError;
pub use ids::{ContainerId, IdAllocator, TargetKey};
pub use mapping::{
    angle_to_weight, approximation_curve, weight_to_angle, CurveDensity, MappingSpec,
    ANGLE_MAX_RADIANS, DEGREES_TO_RADIANS, RADIANS_TO_WEIGHT,
};
pub use matching::{match_channels, ExclusionList};
pub use reconstruct::{
    reconstruct_action, ReconstructOptions, ReconstructReport, Reconstruction, BAKED_ACTION_NAME,
    BONE_SPACING,
};
pub use scene::{
    Bone, HasWeightChannels, MeshObject, RotationOrder, ShapeKey, ShapeKeySet, Skeleton,
};
pub use selection::{SelectedObject, Selection};
pub use stored_action::parse_action_json;
