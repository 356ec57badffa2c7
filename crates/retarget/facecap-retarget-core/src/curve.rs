//! Keyframe curve data model: points, tangent handles, channels, actions.
//!
//! A `Channel` is the host-agnostic equivalent of an f-curve: an ordered
//! sequence of `KeyframePoint`s bound to a typed `ChannelTarget`. Channels
//! are owned exclusively by their container (a skeleton bone's action or a
//! shape-key set) and are never shared.

use serde::{Deserialize, Serialize};

/// 2D vector used for tangent handles (frame/value deltas around a key).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Segment interpolation leaving a keyframe.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum Interpolation {
    Constant,
    Linear,
    #[default]
    Bezier,
}

/// How a handle pair is maintained when a key is later edited by a host.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum HandleStyle {
    #[default]
    Free,
    /// Handles point along the segment; the curve stays piecewise linear.
    Vector,
    /// Symmetric auto handles, clamped to avoid overshoot.
    AutoClamped,
}

/// Behavior outside the keyed frame range.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum Extrapolation {
    #[default]
    Constant,
    Linear,
}

/// A single timed sample with tangent handles.
/// Handles are stored as deltas relative to `(frame, value)`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct KeyframePoint {
    pub frame: f32,
    pub value: f32,
    pub handle_left: Vec2,
    pub handle_right: Vec2,
    #[serde(default)]
    pub handle_style: HandleStyle,
    #[serde(default)]
    pub interpolation: Interpolation,
}

impl KeyframePoint {
    /// A linear-interpolation key with symmetric auto handles, as produced
    /// by baking (reconstruction inserts keys in this form).
    pub fn auto(frame: f32, value: f32) -> Self {
        Self {
            frame,
            value,
            handle_left: Vec2::new(-0.333, 0.0),
            handle_right: Vec2::new(0.333, 0.0),
            handle_style: HandleStyle::AutoClamped,
            interpolation: Interpolation::Linear,
        }
    }
}

/// Local-space euler rotation axis.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum RotationAxis {
    #[default]
    X,
    Y,
    Z,
}

impl RotationAxis {
    /// Component index within an euler rotation (host array-index convention).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            RotationAxis::X => 0,
            RotationAxis::Y => 1,
            RotationAxis::Z => 2,
        }
    }
}

/// Typed channel binding: what property of what object a channel animates.
/// This replaces stringified data paths as the channel identity.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ChannelTarget {
    /// A named blend-weight channel in a shape-key set.
    ShapeKeyValue { key: String },
    /// One euler-rotation component of a named bone.
    BoneRotation { bone: String, axis: RotationAxis },
}

impl ChannelTarget {
    /// The identifier used for name-based matching.
    pub fn name(&self) -> &str {
        match self {
            ChannelTarget::ShapeKeyValue { key } => key,
            ChannelTarget::BoneRotation { bone, .. } => bone,
        }
    }
}

/// An ordered keyframe sequence bound to one target.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Channel {
    pub target: ChannelTarget,
    pub points: Vec<KeyframePoint>,
    #[serde(default)]
    pub extrapolation: Extrapolation,
}

impl Channel {
    pub fn new(target: ChannelTarget) -> Self {
        Self {
            target,
            points: Vec::new(),
            extrapolation: Extrapolation::Constant,
        }
    }

    /// The shape-key name if this channel animates a shape-key value.
    pub fn shape_key_name(&self) -> Option<&str> {
        match &self.target {
            ChannelTarget::ShapeKeyValue { key } => Some(key),
            _ => None,
        }
    }

    /// Validate basic invariants (strictly increasing frames).
    pub fn validate(&self) -> Result<(), String> {
        let mut last = f32::NEG_INFINITY;
        for p in &self.points {
            if !p.frame.is_finite() {
                return Err(format!(
                    "keyframe frame must be finite for '{}'",
                    self.target.name()
                ));
            }
            if p.frame <= last {
                return Err(format!(
                    "keyframe frames must be strictly increasing for '{}'",
                    self.target.name()
                ));
            }
            last = p.frame;
        }
        Ok(())
    }
}

/// A named channel collection (the host-agnostic form of a baked action).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Action {
    pub name: String,
    pub channels: Vec<Channel>,
}

impl Action {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            channels: Vec::new(),
        }
    }

    /// Look up a channel by its typed target.
    pub fn channel(&self, target: &ChannelTarget) -> Option<&Channel> {
        self.channels.iter().find(|c| &c.target == target)
    }
}
