//! Process-wide upload lock
//!
//! When engaged, every chat drops into "simple upload" mode: media is saved
//! without metadata and text is refused. The flag is not persisted and starts
//! released on every process start.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable handle to the shared lock flag.
#[derive(Clone, Default, Debug)]
pub struct GlobalLock {
    locked: Arc<AtomicBool>,
}

impl GlobalLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engages the lock. Returns the new state.
    pub fn lock(&self) -> bool {
        self.locked.store(true, Ordering::SeqCst);
        true
    }

    /// Releases the lock. Returns the new state.
    pub fn unlock(&self) -> bool {
        self.locked.store(false, Ordering::SeqCst);
        false
    }

    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::SeqCst)
    }
}
