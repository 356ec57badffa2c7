//! Driver creation: computed links from bone rotations to shape-key
//! weights.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::curve::{Extrapolation, RotationAxis};
use crate::ids::TargetKey;
use crate::mapping::MappingSpec;
use crate::matching::{match_channels, ExclusionList};
use crate::scene::HasWeightChannels;
use crate::selection::Selection;

/// Reference frame for reading the source bone rotation.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum TransformSpace {
    #[default]
    Local,
    World,
}

/// What a driver reads: one euler-rotation component of a named bone on a
/// named skeleton.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DriverSource {
    pub skeleton: String,
    pub bone: String,
    pub axis: RotationAxis,
    #[serde(default)]
    pub space: TransformSpace,
}

/// A computed channel: destination weight evaluated from a source rotation
/// through a unit mapping. Created once; re-running link creation against
/// a target that already has one is a no-op (the matcher skips it).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Driver {
    pub target: TargetKey,
    pub source: DriverSource,
    pub mapping: MappingSpec,
    pub extrapolation: Extrapolation,
}

impl Driver {
    /// Evaluate the driven weight for a source angle (radians). Hosts with
    /// their own driver engine ignore this; tests and headless callers use
    /// it to sample the link.
    #[inline]
    pub fn evaluate(&self, angle_radians: f32) -> f32 {
        self.mapping.evaluate(angle_radians)
    }
}

/// Options for one linking run.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LinkOptions {
    /// Rotation axis the capture encodes weights on.
    pub axis: RotationAxis,
    /// Mapping attached to each created driver.
    pub mapping: MappingSpec,
    /// Channel-name families to skip.
    pub excluded: ExclusionList,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            axis: RotationAxis::X,
            mapping: MappingSpec::linear(),
            excluded: ExclusionList::default(),
        }
    }
}

/// Per-destination created-driver counts for one run.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct LinkReport {
    pub per_container: Vec<(String, usize)>,
}

impl LinkReport {
    pub fn total(&self) -> usize {
        self.per_container.iter().map(|(_, n)| n).sum()
    }
}

impl fmt::Display for LinkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total() == 0 {
            return write!(f, "No drivers added to any objects");
        }
        for (name, count) in &self.per_container {
            write!(f, "{count} drivers added to {name}. ")?;
        }
        Ok(())
    }
}

/// Create drivers for every matched channel of every destination in the
/// selection.
///
/// Exactly one driver per matched name, with linear extrapolation and the
/// configured mapping. Idempotent across runs: targets that already carry
/// a driver are excluded by the matcher, so a second identical run creates
/// nothing. Preconditions were validated by `Selection`; there are no
/// failure paths here.
pub fn link_drivers(selection: &mut Selection<'_>, options: &LinkOptions) -> LinkReport {
    let source = selection.source().clone();
    let mut report = LinkReport::default();

    for mesh in selection.destinations_mut() {
        let container = mesh.id;
        let name = mesh.name.clone();
        // Selection validated the capability up front.
        let Some(keys) = mesh.weight_channels_mut() else {
            continue;
        };

        let matched = match_channels(&source, container, keys, &options.excluded);
        for channel in &matched {
            log::debug!("linking '{channel}' on '{name}'");
            keys.drivers.push(Driver {
                target: TargetKey::new(container, channel.clone()),
                source: DriverSource {
                    skeleton: source.name.clone(),
                    bone: channel.clone(),
                    axis: options.axis,
                    space: TransformSpace::Local,
                },
                mapping: options.mapping.clone(),
                extrapolation: Extrapolation::Linear,
            });
        }

        log::info!("{} drivers added to {name}", matched.len());
        report.per_container.push((name, matched.len()));
    }

    report
}
