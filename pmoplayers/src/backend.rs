use crate::errors::PlayersError;
use crate::model::{PlaybackStatus, PlayerCapabilities, TrackMetadata};

/// Control surface of one local media-playback backend.
///
/// One implementation per supported backend kind, selected when the
/// backend is enumerated into the [`PlayerRegistry`](crate::PlayerRegistry).
/// Every accessor reads the backend's state at call time; callers must
/// not cache the returned values beyond one handling cycle, the state
/// changes concurrently with them.
pub trait MediaBackend: Send + Sync {
    /// Stable human-readable name distinguishing this backend instance.
    fn identity(&self) -> String;

    fn playback_status(&self) -> Result<PlaybackStatus, PlayersError>;

    fn capabilities(&self) -> Result<PlayerCapabilities, PlayersError>;

    /// Logical volume in 0.0–1.0.
    fn volume(&self) -> Result<f64, PlayersError>;

    fn set_volume(&self, volume: f64) -> Result<(), PlayersError>;

    /// Current playback position in microseconds.
    fn position_us(&self) -> Result<i64, PlayersError>;

    /// Move the playback position by a signed microsecond offset.
    ///
    /// The only seek primitive; absolute positioning is expressed as a
    /// delta against the current position by the caller.
    fn seek_relative(&self, offset_us: i64) -> Result<(), PlayersError>;

    fn metadata(&self) -> Result<TrackMetadata, PlayersError>;

    fn play(&self) -> Result<(), PlayersError>;

    fn pause(&self) -> Result<(), PlayersError>;

    fn play_pause(&self) -> Result<(), PlayersError>;

    fn stop(&self) -> Result<(), PlayersError>;

    fn next(&self) -> Result<(), PlayersError>;

    fn previous(&self) -> Result<(), PlayersError>;
}
