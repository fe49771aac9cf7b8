use std::sync::{Arc, Mutex};

use crossbeam_channel::{Receiver, Sender, unbounded};

/// Change notifications emitted by the [`PlayerRegistry`](crate::PlayerRegistry).
///
/// `ListChanged` means the *set* of players changed; `PlayerChanged`
/// names a player whose own state (track, volume, status) changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerEvent {
    ListChanged,
    PlayerChanged(String),
}

#[derive(Clone, Default)]
pub(crate) struct PlayerEventBus {
    subscribers: Arc<Mutex<Vec<Sender<PlayerEvent>>>>,
}

impl PlayerEventBus {
    pub(crate) fn new() -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn subscribe(&self) -> Receiver<PlayerEvent> {
        let (tx, rx) = unbounded::<PlayerEvent>();
        {
            let mut subscribers = self.subscribers.lock().unwrap();
            subscribers.push(tx);
        }
        rx
    }

    pub(crate) fn broadcast(&self, event: PlayerEvent) {
        let mut subscribers = self.subscribers.lock().unwrap();
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
