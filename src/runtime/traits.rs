//! Trait abstractions for runtime I/O
//!
//! These traits let the runtime persist progress without knowing where it
//! ends up, and let tests swap in memory-backed stores.

use std::io;

/// Storage for a single dialog's snapshot bytes
pub trait SnapshotStore {
    /// The last saved snapshot, or `None` if nothing was ever saved
    fn load(&self) -> io::Result<Option<Vec<u8>>>;

    fn save(&mut self, bytes: &[u8]) -> io::Result<()>;
}

// ============================================================================
// Box implementation for trait objects
// ============================================================================

impl<T: SnapshotStore + ?Sized> SnapshotStore for Box<T> {
    fn load(&self) -> io::Result<Option<Vec<u8>>> {
        (**self).load()
    }

    fn save(&mut self, bytes: &[u8]) -> io::Result<()> {
        (**self).save(bytes)
    }
}
