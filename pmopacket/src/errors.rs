use thiserror::Error;

#[derive(Error, Debug)]
pub enum PacketError {
    #[error("Packet serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Transport closed: {0}")]
    TransportClosed(String),
}

impl PacketError {
    pub fn transport_closed(reason: &str) -> Self {
        PacketError::TransportClosed(reason.to_string())
    }
}
