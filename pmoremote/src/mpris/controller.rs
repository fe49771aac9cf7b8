use std::sync::Arc;

use tracing::debug;

use pmopacket::{Packet, PacketSink};
use pmoplayers::{MediaBackend, PlayerEvent, PlayerRegistry};

use crate::errors::RemoteError;
use crate::mpris::directory::PlayerDirectory;
use crate::mpris::wire::{MprisRequest, MprisResponse};
use crate::mpris::PACKET_TYPE_MPRIS;

/// Synchronous core of the MPRIS plugin.
///
/// Owns the player directory and all wire-format knowledge. One
/// handling cycle = one call into `handle_packet` or
/// `handle_player_event`; the caller guarantees cycles never overlap,
/// so nothing here needs a lock. Backend state is read live inside the
/// cycle and never kept across cycles.
pub struct MprisController {
    /// Name of the paired device, used as log context only.
    device_name: String,
    registry: PlayerRegistry,
    directory: PlayerDirectory,
    sink: Arc<dyn PacketSink>,
}

impl MprisController {
    pub fn new(device_name: &str, registry: PlayerRegistry, sink: Arc<dyn PacketSink>) -> Self {
        let mut directory = PlayerDirectory::new();
        directory.sync_from(&registry);
        Self {
            device_name: device_name.to_string(),
            registry,
            directory,
            sink,
        }
    }

    /// One inbound handling cycle.
    pub fn handle_packet(&mut self, packet: &Packet) -> Result<(), RemoteError> {
        let request: MprisRequest = serde_json::from_value(packet.body.clone())?;
        self.handle_request(&request)
    }

    /// One registry-event handling cycle.
    pub fn handle_player_event(&mut self, event: PlayerEvent) -> Result<(), RemoteError> {
        match event {
            PlayerEvent::ListChanged => {
                self.directory.sync_from(&self.registry);
                self.send_player_list()
            }
            PlayerEvent::PlayerChanged(identity) => {
                // Push a refresh so the peer does not have to poll.
                self.handle_request(&MprisRequest::refresh(&identity))
            }
        }
    }

    pub fn handle_request(&mut self, request: &MprisRequest) -> Result<(), RemoteError> {
        // Full-list request wins over everything else in the packet.
        if request.wants_player_list() {
            return self.send_player_list();
        }

        let Some(identity) = request.player.as_deref() else {
            // Neither a list request nor a player: nothing to do.
            return Ok(());
        };

        let Some(backend) = self.directory.get(identity) else {
            // Stale client state, not a fault: refresh the peer's list.
            debug!(
                "'{}' named unknown player '{}', sending the list instead",
                self.device_name, identity
            );
            return self.send_player_list();
        };

        self.apply_commands(backend.as_ref(), request)?;

        if let Some(mut response) = self.build_response(backend.as_ref(), request)? {
            response.player = Some(identity.to_string());
            self.send(response)?;
        }
        Ok(())
    }

    /// Announce the full identity list to the peer.
    pub fn send_player_list(&self) -> Result<(), RemoteError> {
        self.send(MprisResponse::player_list(self.registry.identities()))
    }

    /// Apply the command fields in their fixed order. Each field is
    /// independent and skipped when absent.
    fn apply_commands(
        &self,
        backend: &dyn MediaBackend,
        request: &MprisRequest,
    ) -> Result<(), RemoteError> {
        if let Some(action) = request.action.as_deref() {
            match action {
                "PlayPause" => backend.play_pause()?,
                "Play" => backend.play()?,
                "Pause" => backend.pause()?,
                "Next" => backend.next()?,
                "Previous" => backend.previous()?,
                "Stop" => backend.stop()?,
                unknown => {
                    debug!("'{}' sent unknown action '{}'", self.device_name, unknown);
                }
            }
        }

        if let Some(volume) = request.set_volume {
            backend.set_volume(volume as f64 / 100.0)?;
        }

        if let Some(offset_us) = request.seek {
            backend.seek_relative(offset_us)?;
        }

        if let Some(position_ms) = request.set_position {
            // The backend only seeks relatively: turn the absolute
            // target into a delta against the position read right now.
            // Best-effort against concurrent position changes.
            // Saturate: the peer controls this value, and an absurd
            // target must not take down the handling cycle.
            let target_us = position_ms.saturating_mul(1000);
            let current_us = backend.position_us()?;
            backend.seek_relative(target_us.saturating_sub(current_us))?;
        }

        Ok(())
    }

    /// Accumulate the requested information fields, reading current
    /// backend state. Returns None when nothing was requested.
    fn build_response(
        &self,
        backend: &dyn MediaBackend,
        request: &MprisRequest,
    ) -> Result<Option<MprisResponse>, RemoteError> {
        let mut response = MprisResponse::default();
        let mut has_response = false;

        if request.wants_now_playing() {
            has_response = true;
            let metadata = backend.metadata()?;
            let capabilities = backend.capabilities()?;
            response.now_playing = Some(metadata.display_line());
            response.pos = Some(us_to_ms(backend.position_us()?));
            response.is_playing = Some(backend.playback_status()?.is_playing());
            response.can_pause = Some(capabilities.can_pause);
            response.can_play = Some(capabilities.can_play);
            response.can_go_next = Some(capabilities.can_go_next);
            response.can_go_previous = Some(capabilities.can_go_previous);
            response.can_seek = Some(capabilities.can_seek);
        }

        if request.wants_volume() {
            has_response = true;
            response.volume = Some((backend.volume()? * 100.0).round() as i64);
        }

        Ok(has_response.then_some(response))
    }

    fn send(&self, response: MprisResponse) -> Result<(), RemoteError> {
        let body = serde_json::to_value(&response)?;
        self.sink.send_packet(Packet::new(PACKET_TYPE_MPRIS, body))?;
        Ok(())
    }
}

/// Round a microsecond position to the nearest millisecond.
fn us_to_ms(position_us: i64) -> i64 {
    (position_us as f64 / 1000.0).round() as i64
}
