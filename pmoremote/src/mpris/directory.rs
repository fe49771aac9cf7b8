use std::collections::HashMap;
use std::sync::Arc;

use pmoplayers::{MediaBackend, PlayerRegistry};

/// The plugin's view of the available players.
///
/// Rebuilt from the registry whenever the player set changes; between
/// two list-change events its keys equal the registry's identity set
/// (eventual, not transactional, consistency). Never populated from a
/// remote request: an identity the peer names that is not here is
/// treated as stale client state, not inserted.
#[derive(Default)]
pub struct PlayerDirectory {
    entries: HashMap<String, Arc<dyn MediaBackend>>,
}

impl PlayerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole mapping with the registry's current set.
    pub fn sync_from(&mut self, registry: &PlayerRegistry) {
        self.entries = registry
            .identities()
            .into_iter()
            .filter_map(|identity| {
                registry
                    .get(&identity)
                    .map(|backend| (identity, backend))
            })
            .collect();
    }

    pub fn get(&self, identity: &str) -> Option<Arc<dyn MediaBackend>> {
        self.entries.get(identity).cloned()
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.entries.contains_key(identity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pmoplayers::VirtualPlayer;

    #[test]
    fn test_sync_tracks_registry_set() {
        let registry = PlayerRegistry::new();
        let mut directory = PlayerDirectory::new();

        registry.register(VirtualPlayer::new("Rhythmbox"));
        directory.sync_from(&registry);
        assert!(directory.contains("Rhythmbox"));
        assert_eq!(directory.len(), 1);

        registry.unregister("Rhythmbox");
        directory.sync_from(&registry);
        assert!(directory.is_empty());
    }

    #[test]
    fn test_lookup_never_creates_entries() {
        let directory = PlayerDirectory::new();

        assert!(directory.get("Ghost").is_none());
        assert!(!directory.contains("Ghost"));
    }
}
