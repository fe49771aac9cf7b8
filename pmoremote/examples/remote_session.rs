//! Simulated session with a remote peer, without any transport:
//! a virtual player on one side, a stdout "transport" on the other.
//!
//! Run with: cargo run -p pmoremote --example remote_session

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use serde_json::json;

use pmopacket::{Packet, PacketError, PacketSink};
use pmoplayers::{PlayerRegistry, TrackMetadata, VirtualPlayer};
use pmoremote::{MprisPlugin, PACKET_TYPE_MPRIS_REQUEST};

struct StdoutSink;

impl PacketSink for StdoutSink {
    fn send_packet(&self, packet: Packet) -> Result<(), PacketError> {
        println!(">>> {}", packet.to_json()?);
        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let registry = PlayerRegistry::new();
    let player = VirtualPlayer::new("Rhythmbox");
    player.set_state(|state| {
        state.metadata = TrackMetadata {
            title: "Harvest Moon".to_string(),
            artist: Some("Neil Young".to_string()),
        };
    });
    registry.register(player.clone());

    let plugin = MprisPlugin::new("demo-phone", registry.clone(), Arc::new(StdoutSink))?;

    // The peer asks what is playing and starts playback.
    plugin.handle_packet(Packet::new(
        PACKET_TYPE_MPRIS_REQUEST,
        json!({ "player": "Rhythmbox", "action": "Play", "requestNowPlaying": true }),
    ));

    // A local track change is pushed without the peer polling.
    thread::sleep(Duration::from_millis(100));
    player.set_state(|state| {
        state.metadata = TrackMetadata {
            title: "Heart of Gold".to_string(),
            artist: Some("Neil Young".to_string()),
        };
        state.position_us = 0;
    });
    registry.notify_player_changed("Rhythmbox");

    thread::sleep(Duration::from_millis(100));
    Ok(())
}
