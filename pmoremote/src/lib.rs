//! Capability plugins for PMOConnect.
//!
//! Each plugin is bound to one paired remote device and speaks one
//! family of wire packet types. The framework constructs a plugin with
//! its collaborators injected (registry, settings, transport sink),
//! routes inbound packets to it via [`CapabilityPlugin::handle_packet`],
//! and drops it on unpairing; dropping releases everything the plugin
//! holds.
//!
//! - [`MprisPlugin`] — remote control of the local media players.
//! - [`FindMyDevicePlugin`] — locate-device alert cycle.

mod errors;
mod findmyphone;
mod mpris;
mod plugin;
mod settings;

pub use errors::RemoteError;
pub use findmyphone::{
    AlertGuard, Alerter, FindMyDevicePlugin, FIND_METADATA, PACKET_TYPE_FIND_REQUEST,
};
pub use mpris::{
    MprisController, MprisPlugin, MprisRequest, MprisResponse, PlayerDirectory, MPRIS_METADATA,
    PACKET_TYPE_MPRIS, PACKET_TYPE_MPRIS_REQUEST,
};
pub use plugin::{CapabilityPlugin, PluginMetadata};
pub use settings::{InMemorySettings, Settings};
