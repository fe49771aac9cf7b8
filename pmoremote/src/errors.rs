use thiserror::Error;

use pmopacket::PacketError;
use pmoplayers::PlayersError;

#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error(transparent)]
    Backend(#[from] PlayersError),
    #[error(transparent)]
    Transport(#[from] PacketError),
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    #[error("Alert failed: {0}")]
    Alert(String),
    #[error("Plugin construction failed: {0}")]
    Construction(String),
}

impl RemoteError {
    pub fn permission_denied(reason: &str) -> Self {
        RemoteError::PermissionDenied(reason.to_string())
    }

    pub fn alert(reason: &str) -> Self {
        RemoteError::Alert(reason.to_string())
    }

    pub fn construction(reason: &str) -> Self {
        RemoteError::Construction(reason.to_string())
    }
}
