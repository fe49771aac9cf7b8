//! End-to-end tests of the MPRIS plugin with its worker running:
//! registry changes on one side, a capturing transport sink on the
//! other, assertions on what reaches the peer.

use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, unbounded};
use serde_json::json;

use pmopacket::{Packet, PacketError, PacketSink};
use pmoplayers::{PlayerRegistry, TrackMetadata, VirtualPlayer};
use pmoremote::{MprisPlugin, PACKET_TYPE_MPRIS, PACKET_TYPE_MPRIS_REQUEST};

const WAIT: Duration = Duration::from_secs(5);

/// Sink that hands every outbound packet to the test over a channel.
struct ChannelSink {
    tx: Sender<Packet>,
}

impl ChannelSink {
    fn new() -> (Arc<Self>, Receiver<Packet>) {
        let (tx, rx) = unbounded();
        (Arc::new(Self { tx }), rx)
    }
}

impl PacketSink for ChannelSink {
    fn send_packet(&self, packet: Packet) -> Result<(), PacketError> {
        self.tx
            .send(packet)
            .map_err(|_| PacketError::transport_closed("test receiver dropped"))
    }
}

fn recv(rx: &Receiver<Packet>) -> Packet {
    rx.recv_timeout(WAIT).expect("no packet within the timeout")
}

#[test]
fn test_construction_announces_initial_list() {
    let registry = PlayerRegistry::new();
    registry.register(VirtualPlayer::new("Rhythmbox"));
    let (sink, rx) = ChannelSink::new();

    let _plugin = MprisPlugin::new("phone", registry, sink).unwrap();

    let packet = recv(&rx);
    assert!(packet.is_type(PACKET_TYPE_MPRIS));
    assert_eq!(packet.body, json!({ "playerList": ["Rhythmbox"] }));
}

#[test]
fn test_registering_a_player_pushes_the_new_list() {
    let registry = PlayerRegistry::new();
    let (sink, rx) = ChannelSink::new();
    let _plugin = MprisPlugin::new("phone", registry.clone(), sink).unwrap();
    assert_eq!(recv(&rx).body, json!({ "playerList": [] }));

    registry.register(VirtualPlayer::new("Amberol"));

    assert_eq!(recv(&rx).body, json!({ "playerList": ["Amberol"] }));
}

#[test]
fn test_player_change_pushes_state_refresh() {
    let registry = PlayerRegistry::new();
    let player = VirtualPlayer::new("Rhythmbox");
    player.set_state(|state| {
        state.metadata = TrackMetadata {
            title: "Song".to_string(),
            artist: Some("Band".to_string()),
        };
        state.volume = 0.4;
    });
    registry.register(player.clone());
    let (sink, rx) = ChannelSink::new();
    let _plugin = MprisPlugin::new("phone", registry.clone(), sink).unwrap();
    recv(&rx); // initial list

    player.set_state(|state| state.volume = 0.7);
    registry.notify_player_changed("Rhythmbox");

    let body = recv(&rx).body;
    assert_eq!(body["player"], "Rhythmbox");
    assert_eq!(body["nowPlaying"], "Band - Song");
    assert_eq!(body["volume"], 70);
}

#[test]
fn test_inbound_request_is_answered_from_the_worker() {
    let registry = PlayerRegistry::new();
    registry.register(VirtualPlayer::new("Rhythmbox"));
    let (sink, rx) = ChannelSink::new();
    let plugin = MprisPlugin::new("phone", registry, sink).unwrap();
    recv(&rx); // initial list

    plugin.handle_packet(Packet::new(
        PACKET_TYPE_MPRIS_REQUEST,
        json!({ "player": "Rhythmbox", "requestVolume": true }),
    ));

    let body = recv(&rx).body;
    assert_eq!(body["player"], "Rhythmbox");
    assert_eq!(body["volume"], 100);
}

#[test]
fn test_unknown_player_falls_back_to_list_under_load() {
    let registry = PlayerRegistry::new();
    registry.register(VirtualPlayer::new("Rhythmbox"));
    let (sink, rx) = ChannelSink::new();
    let plugin = MprisPlugin::new("phone", registry, sink).unwrap();
    recv(&rx); // initial list

    // The peer still believes in a player that disappeared.
    plugin.handle_packet(Packet::new(
        PACKET_TYPE_MPRIS_REQUEST,
        json!({ "player": "Clementine", "action": "Play" }),
    ));

    assert_eq!(recv(&rx).body, json!({ "playerList": ["Rhythmbox"] }));
}

#[test]
fn test_construction_failure_is_fatal() {
    struct ClosedSink;

    impl PacketSink for ClosedSink {
        fn send_packet(&self, _packet: Packet) -> Result<(), PacketError> {
            Err(PacketError::transport_closed("not connected"))
        }
    }

    let registry = PlayerRegistry::new();

    let result = MprisPlugin::new("phone", registry, Arc::new(ClosedSink));

    // No degraded instance: the constructor refuses.
    assert!(result.is_err());
}

#[test]
fn test_drop_stops_the_worker() {
    let registry = PlayerRegistry::new();
    let (sink, rx) = ChannelSink::new();
    let plugin = MprisPlugin::new("phone", registry.clone(), sink).unwrap();
    recv(&rx); // initial list

    drop(plugin);

    // Registry events after teardown must not produce packets.
    registry.register(VirtualPlayer::new("Rhythmbox"));
    assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
}
