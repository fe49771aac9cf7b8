use serde::{Deserialize, Serialize};

/// Body of an inbound `kdeconnect.mpris.request` packet.
///
/// Field names are the wire names; they are decoded once here and
/// never re-inspected as raw JSON further down.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct MprisRequest {
    /// Identity of the player the request targets.
    pub player: Option<String>,
    /// Ask for the full player list; takes priority over everything else.
    #[serde(rename = "requestPlayerList")]
    pub request_player_list: Option<bool>,
    /// Transport action token: PlayPause, Play, Pause, Next, Previous, Stop.
    pub action: Option<String>,
    /// Volume to apply, 0–100.
    #[serde(rename = "setVolume")]
    pub set_volume: Option<i64>,
    /// Relative seek offset in microseconds.
    #[serde(rename = "Seek")]
    pub seek: Option<i64>,
    /// Absolute position in milliseconds.
    #[serde(rename = "SetPosition")]
    pub set_position: Option<i64>,
    #[serde(rename = "requestNowPlaying")]
    pub request_now_playing: Option<bool>,
    #[serde(rename = "requestVolume")]
    pub request_volume: Option<bool>,
}

impl MprisRequest {
    /// Synthetic request used to push a state refresh for one player.
    pub fn refresh(player: &str) -> Self {
        MprisRequest {
            player: Some(player.to_string()),
            request_now_playing: Some(true),
            request_volume: Some(true),
            ..MprisRequest::default()
        }
    }

    pub fn wants_player_list(&self) -> bool {
        self.request_player_list.unwrap_or(false)
    }

    /// The info flags answer on presence, not truthiness: a body that
    /// carries `"requestNowPlaying": false` still gets a state response.
    /// Only `requestPlayerList` is evaluated as a boolean.
    pub fn wants_now_playing(&self) -> bool {
        self.request_now_playing.is_some()
    }

    pub fn wants_volume(&self) -> bool {
        self.request_volume.is_some()
    }
}

/// Body of an outbound `kdeconnect.mpris` packet.
///
/// Only the fields that were actually requested are serialized.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MprisResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
    #[serde(rename = "playerList", skip_serializing_if = "Option::is_none")]
    pub player_list: Option<Vec<String>>,
    #[serde(rename = "nowPlaying", skip_serializing_if = "Option::is_none")]
    pub now_playing: Option<String>,
    /// Position in milliseconds, rounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos: Option<i64>,
    #[serde(rename = "isPlaying", skip_serializing_if = "Option::is_none")]
    pub is_playing: Option<bool>,
    #[serde(rename = "canPause", skip_serializing_if = "Option::is_none")]
    pub can_pause: Option<bool>,
    #[serde(rename = "canPlay", skip_serializing_if = "Option::is_none")]
    pub can_play: Option<bool>,
    #[serde(rename = "canGoNext", skip_serializing_if = "Option::is_none")]
    pub can_go_next: Option<bool>,
    #[serde(rename = "canGoPrevious", skip_serializing_if = "Option::is_none")]
    pub can_go_previous: Option<bool>,
    #[serde(rename = "canSeek", skip_serializing_if = "Option::is_none")]
    pub can_seek: Option<bool>,
    /// Volume in 0–100, rounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<i64>,
}

impl MprisResponse {
    pub fn player_list(identities: Vec<String>) -> Self {
        MprisResponse {
            player_list: Some(identities),
            ..MprisResponse::default()
        }
    }
}
