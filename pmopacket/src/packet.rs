use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::PacketError;

/// A typed message exchanged with the remote peer.
///
/// The body is a sparse map: absent fields carry meaning (a request
/// that sets none of its optional fields is a no-op), so modules must
/// only serialize the fields they actually set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Packet {
    /// Millisecond timestamp stamped at construction time.
    pub id: i64,
    #[serde(rename = "type")]
    pub packet_type: String,
    #[serde(default)]
    pub body: Value,
}

impl Packet {
    /// Build a packet of the given wire type, stamping the id.
    pub fn new(packet_type: &str, body: Value) -> Self {
        Packet {
            id: Utc::now().timestamp_millis(),
            packet_type: packet_type.to_string(),
            body,
        }
    }

    /// Build a packet with an empty body (e.g. a locate request).
    pub fn empty(packet_type: &str) -> Self {
        Self::new(packet_type, Value::Object(serde_json::Map::new()))
    }

    pub fn is_type(&self, packet_type: &str) -> bool {
        self.packet_type == packet_type
    }

    pub fn to_json(&self) -> Result<String, PacketError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, PacketError> {
        Ok(serde_json::from_str(raw)?)
    }
}
