//! Caller-side cancellation for an in-flight snapshot.
//!
//! The fetch phase polls the handle from its progress callback; tripping it
//! stops the transfer and surfaces as `SnapshotError::Aborted`. Cheap to
//! clone; one handle per invocation, never shared across calls.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared abort flag for one snapshot invocation.
#[derive(Debug, Clone, Default)]
pub struct AbortHandle {
    flag: Arc<AtomicBool>,
}

impl AbortHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. The transfer stops at its next progress tick;
    /// entry processing checks between entries.
    pub fn abort(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_aborted(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
