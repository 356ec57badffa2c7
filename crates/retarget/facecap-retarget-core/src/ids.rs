//! Identifiers and keys for core entities.

use serde::{Deserialize, Serialize};

/// Opaque id for a destination container (mesh-level shape-key owner).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ContainerId(pub u32);

/// Monotonic allocator for ContainerId.
/// Ids are opaque externally; density is only a convenience for hosts.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_container: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_container(&mut self) -> ContainerId {
        let id = ContainerId(self.next_container);
        self.next_container = self.next_container.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Structured key identifying a driver's target channel: one weight channel
/// within one container. Replaces stringified data-path comparison.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TargetKey {
    pub container: ContainerId,
    pub channel: String,
}

impl TargetKey {
    pub fn new(container: ContainerId, channel: impl Into<String>) -> Self {
        Self {
            container,
            channel: channel.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.alloc_container(), ContainerId(0));
        assert_eq!(alloc.alloc_container(), ContainerId(1));
        alloc.reset();
        assert_eq!(alloc.alloc_container(), ContainerId(0));
    }

    #[test]
    fn target_key_equality_is_structural() {
        let a = TargetKey::new(ContainerId(3), "Smile_L");
        let b = TargetKey::new(ContainerId(3), "Smile_L".to_string());
        let c = TargetKey::new(ContainerId(4), "Smile_L");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
