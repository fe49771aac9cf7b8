use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, select, unbounded};
use tracing::{debug, warn};

use pmopacket::Packet;
use pmopacket::PacketSink;
use pmoplayers::{PlayerEvent, PlayerRegistry};
use std::sync::Arc;

use crate::errors::RemoteError;
use crate::mpris::controller::MprisController;
use crate::mpris::{MPRIS_METADATA, PACKET_TYPE_MPRIS_REQUEST};
use crate::plugin::{CapabilityPlugin, PluginMetadata};

enum Cycle {
    Inbound(Packet),
    Shutdown,
}

/// MPRIS plugin instance bound to one paired device.
///
/// Wraps [`MprisController`] with a dedicated worker thread: registry
/// change events and inbound packets are funneled onto that one thread,
/// so no two handling cycles ever run concurrently and the controller
/// needs no locks.
pub struct MprisPlugin {
    device_name: String,
    tx: Sender<Cycle>,
    worker: Option<JoinHandle<()>>,
}

impl MprisPlugin {
    /// Announces the initial player list, then starts the worker.
    ///
    /// A failure before the worker starts is fatal to the instance:
    /// the constructor returns the error and nothing is left running.
    pub fn new(
        device_name: &str,
        registry: PlayerRegistry,
        sink: Arc<dyn PacketSink>,
    ) -> Result<Self, RemoteError> {
        let events = registry.subscribe();
        let mut controller = MprisController::new(device_name, registry, sink);
        controller.send_player_list()?;

        let (tx, rx) = unbounded::<Cycle>();
        let device = device_name.to_string();
        let worker = thread::Builder::new()
            .name(format!("mpris-{device_name}"))
            .spawn(move || run_worker(&device, &mut controller, events, rx))
            .map_err(|e| RemoteError::construction(&format!("worker spawn failed: {e}")))?;

        Ok(Self {
            device_name: device_name.to_string(),
            tx,
            worker: Some(worker),
        })
    }

    /// Enqueue an inbound packet; handling happens on the worker.
    pub fn handle_packet(&self, packet: Packet) {
        if self.tx.send(Cycle::Inbound(packet)).is_err() {
            warn!("MPRIS worker for '{}' is gone", self.device_name);
        }
    }
}

impl CapabilityPlugin for MprisPlugin {
    fn metadata(&self) -> &PluginMetadata {
        &MPRIS_METADATA
    }

    fn handle_packet(&self, packet: &Packet) {
        if packet.is_type(PACKET_TYPE_MPRIS_REQUEST) {
            MprisPlugin::handle_packet(self, packet.clone());
        }
    }
}

impl Drop for MprisPlugin {
    fn drop(&mut self) {
        let _ = self.tx.send(Cycle::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// The single execution context of the plugin instance.
///
/// Inbound packets are handled in arrival order; registry events in
/// event order. No cross-source priority: whichever channel is ready
/// is served. Per-cycle failures are logged with the device name and
/// absorbed, never propagated.
fn run_worker(
    device: &str,
    controller: &mut MprisController,
    events: Receiver<PlayerEvent>,
    inbound: Receiver<Cycle>,
) {
    let mut events_open = true;
    loop {
        if events_open {
            select! {
                recv(inbound) -> msg => match msg {
                    Ok(Cycle::Inbound(packet)) => {
                        log_cycle(device, controller.handle_packet(&packet));
                    }
                    Ok(Cycle::Shutdown) | Err(_) => break,
                },
                recv(events) -> event => match event {
                    Ok(event) => {
                        log_cycle(device, controller.handle_player_event(event));
                    }
                    // Registry dropped: only inbound packets remain.
                    Err(_) => events_open = false,
                },
            }
        } else {
            match inbound.recv() {
                Ok(Cycle::Inbound(packet)) => {
                    log_cycle(device, controller.handle_packet(&packet));
                }
                Ok(Cycle::Shutdown) | Err(_) => break,
            }
        }
    }
    debug!("MPRIS worker for '{}' stopped", device);
}

fn log_cycle(device: &str, outcome: Result<(), RemoteError>) {
    if let Err(err) = outcome {
        warn!("MPRIS cycle failed for '{}': {}", device, err);
    }
}
