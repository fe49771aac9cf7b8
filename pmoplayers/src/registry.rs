use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crossbeam_channel::Receiver;
use tracing::debug;

use crate::backend::MediaBackend;
use crate::events::{PlayerEvent, PlayerEventBus};

/// Identity-keyed registry of the local media backends.
///
/// Explicitly constructed and handed to every consumer; there is no
/// process-wide instance. The registry owns the backend handles and
/// broadcasts a [`PlayerEvent`] whenever the player set changes or a
/// backend reports a targeted state change.
#[derive(Clone, Default)]
pub struct PlayerRegistry {
    players: Arc<Mutex<HashMap<String, Arc<dyn MediaBackend>>>>,
    bus: PlayerEventBus,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self {
            players: Arc::new(Mutex::new(HashMap::new())),
            bus: PlayerEventBus::new(),
        }
    }

    /// Add a backend, keyed by its identity.
    ///
    /// Re-registering an identity replaces the previous handle; both
    /// cases announce a list change.
    pub fn register(&self, backend: Arc<dyn MediaBackend>) {
        let identity = backend.identity();
        debug!("Registering player '{}'", identity);
        {
            let mut players = self.players.lock().unwrap();
            players.insert(identity, backend);
        }
        self.bus.broadcast(PlayerEvent::ListChanged);
    }

    /// Remove a backend. Returns false when the identity was unknown.
    pub fn unregister(&self, identity: &str) -> bool {
        let removed = {
            let mut players = self.players.lock().unwrap();
            players.remove(identity).is_some()
        };
        if removed {
            debug!("Unregistering player '{}'", identity);
            self.bus.broadcast(PlayerEvent::ListChanged);
        }
        removed
    }

    /// Current identities, sorted for a stable wire order.
    pub fn identities(&self) -> Vec<String> {
        let players = self.players.lock().unwrap();
        let mut identities: Vec<String> = players.keys().cloned().collect();
        identities.sort();
        identities
    }

    pub fn get(&self, identity: &str) -> Option<Arc<dyn MediaBackend>> {
        let players = self.players.lock().unwrap();
        players.get(identity).cloned()
    }

    /// Announce a targeted state change for one player.
    ///
    /// Called by backends (or their watchers) when track, volume or
    /// playback status changed without the player set changing.
    pub fn notify_player_changed(&self, identity: &str) {
        self.bus
            .broadcast(PlayerEvent::PlayerChanged(identity.to_string()));
    }

    pub fn subscribe(&self) -> Receiver<PlayerEvent> {
        self.bus.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VirtualPlayer;

    #[test]
    fn test_register_broadcasts_list_change() {
        let registry = PlayerRegistry::new();
        let rx = registry.subscribe();

        registry.register(VirtualPlayer::new("Rhythmbox"));

        assert_eq!(rx.try_recv().unwrap(), PlayerEvent::ListChanged);
    }

    #[test]
    fn test_identities_are_sorted() {
        let registry = PlayerRegistry::new();
        registry.register(VirtualPlayer::new("Spotify"));
        registry.register(VirtualPlayer::new("Amberol"));
        registry.register(VirtualPlayer::new("Rhythmbox"));

        assert_eq!(registry.identities(), vec!["Amberol", "Rhythmbox", "Spotify"]);
    }

    #[test]
    fn test_unregister_unknown_is_silent() {
        let registry = PlayerRegistry::new();
        let rx = registry.subscribe();

        assert!(!registry.unregister("Nothing"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_reregister_replaces_handle() {
        let registry = PlayerRegistry::new();
        let first = VirtualPlayer::new("Rhythmbox");
        first.set_state(|state| state.volume = 0.2);
        registry.register(first);

        let second = VirtualPlayer::new("Rhythmbox");
        second.set_state(|state| state.volume = 0.8);
        registry.register(second);

        assert_eq!(registry.identities(), vec!["Rhythmbox"]);
        let handle = registry.get("Rhythmbox").unwrap();
        assert_eq!(handle.volume().unwrap(), 0.8);
    }

    #[test]
    fn test_notify_player_changed_names_the_player() {
        let registry = PlayerRegistry::new();
        registry.register(VirtualPlayer::new("Rhythmbox"));
        let rx = registry.subscribe();

        registry.notify_player_changed("Rhythmbox");

        assert_eq!(
            rx.try_recv().unwrap(),
            PlayerEvent::PlayerChanged("Rhythmbox".to_string())
        );
    }
}
