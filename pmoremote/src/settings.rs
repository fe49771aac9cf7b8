use std::sync::atomic::{AtomicBool, Ordering};

/// Per-device permission flags, queried synchronously at decision time.
///
/// Never cache the answers: the user can flip a flag between two
/// requests and the next request must see the new value.
pub trait Settings: Send + Sync {
    /// Whether a remote peer may make this device announce itself.
    fn location_sharing_allowed(&self) -> bool;
}

/// Simple in-memory settings, enough for embedders that keep their
/// flags elsewhere and for tests.
#[derive(Debug, Default)]
pub struct InMemorySettings {
    location_sharing: AtomicBool,
}

impl InMemorySettings {
    pub fn new(location_sharing: bool) -> Self {
        Self {
            location_sharing: AtomicBool::new(location_sharing),
        }
    }

    pub fn set_location_sharing(&self, allowed: bool) {
        self.location_sharing.store(allowed, Ordering::SeqCst);
    }
}

impl Settings for InMemorySettings {
    fn location_sharing_allowed(&self) -> bool {
        self.location_sharing.load(Ordering::SeqCst)
    }
}
