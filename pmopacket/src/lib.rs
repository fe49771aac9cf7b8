//! Wire model shared by every PMOConnect capability module.
//!
//! A `Packet` is the unit exchanged with a paired remote device: a type
//! identifier plus a sparse JSON body where every field is optional.
//! Capability modules build packets and hand them to a [`PacketSink`],
//! the outbound half of the transport boundary; the transport layer
//! (framing, pairing, encryption) lives outside this workspace.

mod errors;
mod packet;
mod sink;

pub use errors::PacketError;
pub use packet::Packet;
pub use sink::PacketSink;
