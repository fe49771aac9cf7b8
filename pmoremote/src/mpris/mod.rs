//! Remote media-control plugin.
//!
//! Presents every backend of the local [`PlayerRegistry`](pmoplayers::PlayerRegistry)
//! to the paired peer as a named player, applies the peer's transport
//! commands, and keeps the peer's view fresh when local state changes.
//!
//! ## Protocol
//!
//! **Packet types**:
//! - `kdeconnect.mpris.request` — command/query from the peer (incoming)
//! - `kdeconnect.mpris` — player list or player state (outgoing)
//!
//! The request body is a sparse map; every field is optional and each
//! present field is processed independently (see [`MprisRequest`]).

mod controller;
mod directory;
mod plugin;
mod wire;

pub use controller::MprisController;
pub use directory::PlayerDirectory;
pub use plugin::MprisPlugin;
pub use wire::{MprisRequest, MprisResponse};

use crate::plugin::PluginMetadata;

pub const PACKET_TYPE_MPRIS: &str = "kdeconnect.mpris";
pub const PACKET_TYPE_MPRIS_REQUEST: &str = "kdeconnect.mpris.request";

pub const MPRIS_METADATA: PluginMetadata = PluginMetadata {
    id: "pmoconnect.plugin.mpris",
    incoming_capabilities: &[PACKET_TYPE_MPRIS_REQUEST],
    outgoing_capabilities: &[PACKET_TYPE_MPRIS],
};
