//! Name-based channel matching between a source skeleton and a
//! destination shape-key set.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::ids::{ContainerId, TargetKey};
use crate::scene::{ShapeKeySet, Skeleton};

/// Substring patterns excluding whole families of channel names.
///
/// Matching is deliberately substring, not exact: a single pattern such as
/// `"Facejoint"` skips every joint in that family.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ExclusionList {
    patterns: Vec<String>,
}

impl ExclusionList {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| name.contains(p.as_str()))
    }
}

/// Compute the ordered set of channel names to link: bone names present in
/// the destination key set, minus excluded names, minus names whose target
/// already carries a driver.
///
/// Order follows the skeleton's bone order. Pure; no side effects.
pub fn match_channels(
    source: &Skeleton,
    container: ContainerId,
    keys: &ShapeKeySet,
    excluded: &ExclusionList,
) -> Vec<String> {
    let existing: HashSet<&TargetKey> = keys.drivers.iter().map(|d| &d.target).collect();

    source
        .bones()
        .filter(|bone| keys.contains(&bone.name))
        .filter(|bone| !excluded.matches(&bone.name))
        .filter(|bone| {
            let key = TargetKey::new(container, bone.name.clone());
            !existing.contains(&key)
        })
        .map(|bone| bone.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclusion_is_substring_matching() {
        let excluded = ExclusionList::new(["Facejoint"]);
        assert!(excluded.matches("Facejoint_12"));
        assert!(excluded.matches("Left_Facejoint"));
        assert!(!excluded.matches("Smile_L"));
        assert!(ExclusionList::default().is_empty());
    }
}
