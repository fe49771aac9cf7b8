//! Locate-device plugin.
//!
//! One-shot alert cycle: an inbound locate request starts a looping
//! audible alert plus an always-on-top dialog; a second request or a
//! local acknowledgement ends it. The same packet type is used in both
//! directions — sending it asks the peer to announce itself.

use std::sync::{Arc, Mutex};

use tracing::{debug, error, warn};

use pmopacket::{Packet, PacketSink};

use crate::errors::RemoteError;
use crate::plugin::{CapabilityPlugin, PluginMetadata};
use crate::settings::Settings;

pub const PACKET_TYPE_FIND_REQUEST: &str = "kdeconnect.findmyphone.request";

pub const FIND_METADATA: PluginMetadata = PluginMetadata {
    id: "pmoconnect.plugin.findmyphone",
    incoming_capabilities: &[PACKET_TYPE_FIND_REQUEST],
    outgoing_capabilities: &[PACKET_TYPE_FIND_REQUEST],
};

/// Live alert resources (looping sound + dialog).
///
/// Dropping the guard releases both, whatever the exit path: remote
/// re-request, local acknowledgement, or plugin teardown.
pub trait AlertGuard: Send {}

/// Boundary to the platform alert machinery.
pub trait Alerter: Send + Sync {
    /// Start the looping sound and the dialog; `requester` is the name
    /// of the device asking, for display.
    fn begin(&self, requester: &str) -> Result<Box<dyn AlertGuard>, RemoteError>;
}

/// Find-my-device plugin instance bound to one paired device.
///
/// States: Idle (no guard held) and Announcing (guard held). Handling
/// is inline with interior mutability; the cycle is too short to need
/// a worker.
pub struct FindMyDevicePlugin {
    device_name: String,
    settings: Arc<dyn Settings>,
    alerter: Arc<dyn Alerter>,
    sink: Arc<dyn PacketSink>,
    active: Mutex<Option<Box<dyn AlertGuard>>>,
}

impl FindMyDevicePlugin {
    pub fn new(
        device_name: &str,
        settings: Arc<dyn Settings>,
        alerter: Arc<dyn Alerter>,
        sink: Arc<dyn PacketSink>,
    ) -> Self {
        Self {
            device_name: device_name.to_string(),
            settings,
            alerter,
            sink,
            active: Mutex::new(None),
        }
    }

    pub fn is_announcing(&self) -> bool {
        self.active.lock().unwrap().is_some()
    }

    /// Local acknowledgement: dialog accepted, closed, or Escape.
    pub fn acknowledge(&self) {
        if self.active.lock().unwrap().take().is_some() {
            debug!("Locate alert acknowledged for '{}'", self.device_name);
        }
    }

    /// Ask the remote peer to announce itself.
    pub fn locate(&self) -> Result<(), RemoteError> {
        self.sink.send_packet(Packet::empty(PACKET_TYPE_FIND_REQUEST))?;
        Ok(())
    }

    fn handle_locate_request(&self) {
        let mut active = self.active.lock().unwrap();

        // A second request while announcing cancels the alert.
        if active.take().is_some() {
            debug!("'{}' cancelled the locate alert", self.device_name);
            return;
        }

        if !self.settings.location_sharing_allowed() {
            warn!(
                "Locate request from '{}' denied: location sharing is disabled",
                self.device_name
            );
            return;
        }

        match self.alerter.begin(&self.device_name) {
            Ok(guard) => *active = Some(guard),
            Err(err) => {
                // Stay Idle; nothing was acquired that the guard would release.
                error!("Locate alert failed for '{}': {}", self.device_name, err);
            }
        }
    }
}

impl CapabilityPlugin for FindMyDevicePlugin {
    fn metadata(&self) -> &PluginMetadata {
        &FIND_METADATA
    }

    fn handle_packet(&self, packet: &Packet) {
        if packet.is_type(PACKET_TYPE_FIND_REQUEST) {
            self.handle_locate_request();
        }
    }
}

impl Drop for FindMyDevicePlugin {
    fn drop(&mut self) {
        // Teardown forces Announcing -> Idle.
        self.acknowledge();
    }
}
