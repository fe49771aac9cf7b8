use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::backend::MediaBackend;
use crate::errors::PlayersError;
use crate::model::{PlaybackStatus, PlayerCapabilities, TrackMetadata};

/// Mutable state of a [`VirtualPlayer`].
#[derive(Clone, Debug)]
pub struct VirtualPlayerState {
    pub status: PlaybackStatus,
    pub volume: f64,
    pub position_us: i64,
    pub metadata: TrackMetadata,
    pub capabilities: PlayerCapabilities,
}

impl Default for VirtualPlayerState {
    fn default() -> Self {
        Self {
            status: PlaybackStatus::Stopped,
            volume: 1.0,
            position_us: 0,
            metadata: TrackMetadata::default(),
            capabilities: PlayerCapabilities {
                can_play: true,
                can_pause: true,
                can_go_next: true,
                can_go_previous: true,
                can_seek: true,
            },
        }
    }
}

/// In-process media backend.
///
/// Holds its whole state behind a mutex and applies transport commands
/// to it. Used by demos and by plugin tests; it is also the reference
/// for what a real backend adapter must implement.
pub struct VirtualPlayer {
    identity: String,
    state: Mutex<VirtualPlayerState>,
}

impl VirtualPlayer {
    pub fn new(identity: &str) -> Arc<Self> {
        Arc::new(Self {
            identity: identity.to_string(),
            state: Mutex::new(VirtualPlayerState::default()),
        })
    }

    /// Mutate the player state directly (track change, external volume, …).
    ///
    /// This only touches the state; announcing the change is the
    /// owner's job via `PlayerRegistry::notify_player_changed`.
    pub fn set_state<F>(&self, mutate: F)
    where
        F: FnOnce(&mut VirtualPlayerState),
    {
        let mut state = self.state.lock().unwrap();
        mutate(&mut state);
    }
}

impl MediaBackend for VirtualPlayer {
    fn identity(&self) -> String {
        self.identity.clone()
    }

    fn playback_status(&self) -> Result<PlaybackStatus, PlayersError> {
        Ok(self.state.lock().unwrap().status.clone())
    }

    fn capabilities(&self) -> Result<PlayerCapabilities, PlayersError> {
        Ok(self.state.lock().unwrap().capabilities)
    }

    fn volume(&self) -> Result<f64, PlayersError> {
        Ok(self.state.lock().unwrap().volume)
    }

    fn set_volume(&self, volume: f64) -> Result<(), PlayersError> {
        debug!("VirtualPlayer '{}': set_volume({})", self.identity, volume);
        self.state.lock().unwrap().volume = volume.clamp(0.0, 1.0);
        Ok(())
    }

    fn position_us(&self) -> Result<i64, PlayersError> {
        Ok(self.state.lock().unwrap().position_us)
    }

    fn seek_relative(&self, offset_us: i64) -> Result<(), PlayersError> {
        let mut state = self.state.lock().unwrap();
        state.position_us = state.position_us.saturating_add(offset_us).max(0);
        Ok(())
    }

    fn metadata(&self) -> Result<TrackMetadata, PlayersError> {
        Ok(self.state.lock().unwrap().metadata.clone())
    }

    fn play(&self) -> Result<(), PlayersError> {
        self.state.lock().unwrap().status = PlaybackStatus::Playing;
        Ok(())
    }

    fn pause(&self) -> Result<(), PlayersError> {
        self.state.lock().unwrap().status = PlaybackStatus::Paused;
        Ok(())
    }

    fn play_pause(&self) -> Result<(), PlayersError> {
        let mut state = self.state.lock().unwrap();
        state.status = match state.status {
            PlaybackStatus::Playing => PlaybackStatus::Paused,
            _ => PlaybackStatus::Playing,
        };
        Ok(())
    }

    fn stop(&self) -> Result<(), PlayersError> {
        let mut state = self.state.lock().unwrap();
        state.status = PlaybackStatus::Stopped;
        state.position_us = 0;
        Ok(())
    }

    fn next(&self) -> Result<(), PlayersError> {
        self.state.lock().unwrap().position_us = 0;
        Ok(())
    }

    fn previous(&self) -> Result<(), PlayersError> {
        self.state.lock().unwrap().position_us = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_pause_toggles() {
        let player = VirtualPlayer::new("Rhythmbox");

        player.play_pause().unwrap();
        assert!(player.playback_status().unwrap().is_playing());

        player.play_pause().unwrap();
        assert_eq!(player.playback_status().unwrap(), PlaybackStatus::Paused);
    }

    #[test]
    fn test_seek_relative_clamps_at_zero() {
        let player = VirtualPlayer::new("Rhythmbox");
        player.set_state(|state| state.position_us = 400_000);

        player.seek_relative(-1_000_000).unwrap();

        assert_eq!(player.position_us().unwrap(), 0);
    }

    #[test]
    fn test_set_volume_clamps_range() {
        let player = VirtualPlayer::new("Rhythmbox");

        player.set_volume(1.7).unwrap();

        assert_eq!(player.volume().unwrap(), 1.0);
    }

    #[test]
    fn test_stop_rewinds_position() {
        let player = VirtualPlayer::new("Rhythmbox");
        player.play().unwrap();
        player.seek_relative(2_000_000).unwrap();

        player.stop().unwrap();

        assert_eq!(player.playback_status().unwrap(), PlaybackStatus::Stopped);
        assert_eq!(player.position_us().unwrap(), 0);
    }
}
