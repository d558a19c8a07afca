//! Mount generations: make completions from a torn-down component no-ops.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Generation counter shared between a component and its pending loads.
///
/// Each mount holds the current generation; teardown advances it. A load
/// that started under an older generation is stale when it completes.
#[derive(Debug, Clone, Default)]
pub struct MountGeneration {
    current: Arc<AtomicU64>,
}

/// Taken when a load starts; checked when it completes.
#[derive(Debug, Clone)]
pub struct LoadTicket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl MountGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> u64 {
        self.current.load(Ordering::Acquire)
    }

    pub fn ticket(&self) -> LoadTicket {
        LoadTicket {
            generation: self.current(),
            current: Arc::clone(&self.current),
        }
    }

    /// Invalidate every outstanding ticket.
    pub fn teardown(&self) {
        let previous = self.current.fetch_add(1, Ordering::AcqRel);
        tracing::debug!(generation = previous, "storefront torn down");
    }
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::Acquire) == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_is_current_until_teardown() {
        let mount = MountGeneration::new();
        let ticket = mount.ticket();
        assert!(ticket.is_current());

        mount.teardown();
        assert!(!ticket.is_current());
        assert_eq!(mount.current(), ticket.generation() + 1);
    }

    #[test]
    fn tickets_after_teardown_are_current() {
        let mount = MountGeneration::new();
        mount.teardown();
        let ticket = mount.ticket();
        assert!(ticket.is_current());
    }

    #[test]
    fn clones_share_the_counter() {
        let mount = MountGeneration::new();
        let ticket = mount.ticket();
        mount.clone().teardown();
        assert!(!ticket.is_current());
    }
}
