use pmopacket::Packet;

/// Capability-negotiation surface of one plugin.
///
/// The framework advertises the incoming/outgoing wire types to the
/// peer during pairing and routes inbound packets by type.
#[derive(Clone, Copy, Debug)]
pub struct PluginMetadata {
    pub id: &'static str,
    pub incoming_capabilities: &'static [&'static str],
    pub outgoing_capabilities: &'static [&'static str],
}

impl PluginMetadata {
    pub fn accepts(&self, packet_type: &str) -> bool {
        self.incoming_capabilities.contains(&packet_type)
    }
}

/// A capability module attached to one paired device.
///
/// `handle_packet` must not block: plugins either handle the packet
/// inline with interior mutability or enqueue it for their own worker.
pub trait CapabilityPlugin: Send + Sync {
    fn metadata(&self) -> &PluginMetadata;

    fn handle_packet(&self, packet: &Packet);
}

#[cfg(test)]
mod tests {
    use super::*;

    const METADATA: PluginMetadata = PluginMetadata {
        id: "pmoconnect.plugin.test",
        incoming_capabilities: &["kdeconnect.test.request"],
        outgoing_capabilities: &["kdeconnect.test"],
    };

    #[test]
    fn test_accepts_only_incoming_types() {
        assert!(METADATA.accepts("kdeconnect.test.request"));
        assert!(!METADATA.accepts("kdeconnect.test"));
        assert!(!METADATA.accepts("kdeconnect.ping"));
    }
}
