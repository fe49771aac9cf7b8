use serde::{Deserialize, Serialize};

/// High-level playback state across backends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaybackStatus {
    Playing,
    Paused,
    Stopped,
    /// Backend-specific or unknown state string.
    Unknown(String),
}

impl PlaybackStatus {
    /// Map a raw MPRIS `PlaybackStatus` property string to a logical state.
    pub fn from_mpris_status(raw: &str) -> Self {
        match raw.trim() {
            "Playing" => PlaybackStatus::Playing,
            "Paused" => PlaybackStatus::Paused,
            "Stopped" => PlaybackStatus::Stopped,
            _ => PlaybackStatus::Unknown(raw.to_string()),
        }
    }

    /// Returns a human-readable label for the playback state.
    pub fn as_str(&self) -> &str {
        match self {
            PlaybackStatus::Playing => "Playing",
            PlaybackStatus::Paused => "Paused",
            PlaybackStatus::Stopped => "Stopped",
            PlaybackStatus::Unknown(s) => s.as_str(),
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, PlaybackStatus::Playing)
    }
}

/// Transport capabilities a backend exposes, queried live per cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCapabilities {
    pub can_play: bool,
    pub can_pause: bool,
    pub can_go_next: bool,
    pub can_go_previous: bool,
    pub can_seek: bool,
}

/// Current track metadata, reduced to the fields the wire needs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackMetadata {
    pub title: String,
    pub artist: Option<String>,
}

impl TrackMetadata {
    /// "Artist - Title" when the artist is known, the title alone otherwise.
    pub fn display_line(&self) -> String {
        match &self.artist {
            Some(artist) => format!("{} - {}", artist, self.title),
            None => self.title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mpris_status_known_states() {
        assert_eq!(
            PlaybackStatus::from_mpris_status("Playing"),
            PlaybackStatus::Playing
        );
        assert_eq!(
            PlaybackStatus::from_mpris_status(" Paused "),
            PlaybackStatus::Paused
        );
        assert_eq!(
            PlaybackStatus::from_mpris_status("Stopped"),
            PlaybackStatus::Stopped
        );
    }

    #[test]
    fn test_from_mpris_status_unknown_keeps_raw() {
        let status = PlaybackStatus::from_mpris_status("Buffering");

        assert_eq!(status, PlaybackStatus::Unknown("Buffering".to_string()));
        assert_eq!(status.as_str(), "Buffering");
        assert!(!status.is_playing());
    }

    #[test]
    fn test_display_line_with_artist() {
        let meta = TrackMetadata {
            title: "Song".to_string(),
            artist: Some("Band".to_string()),
        };

        assert_eq!(meta.display_line(), "Band - Song");
    }

    #[test]
    fn test_display_line_without_artist() {
        let meta = TrackMetadata {
            title: "Song".to_string(),
            artist: None,
        };

        assert_eq!(meta.display_line(), "Song");
    }
}
