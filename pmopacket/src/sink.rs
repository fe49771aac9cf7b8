use crate::{Packet, PacketError};

/// Outbound half of the transport boundary.
///
/// Fire-and-forget: the transport layer owns delivery, retries and
/// encryption. An `Err` means the packet never left this process.
pub trait PacketSink: Send + Sync {
    fn send_packet(&self, packet: Packet) -> Result<(), PacketError>;
}
