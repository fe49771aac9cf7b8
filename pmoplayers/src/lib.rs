//! Backend registry for local media players.
//!
//! Enumerates the media-playback backends available on this machine
//! behind a single control surface. Every backend (MPRIS proxy,
//! in-process player, …) implements [`MediaBackend`], and
//! higher layers must only interact with players through that trait so
//! transport, volume, and state queries stay backend-neutral.
//!
//! The [`PlayerRegistry`] keys backends by identity and broadcasts
//! [`PlayerEvent`]s when the player set or a single player's state
//! changes. Consumers subscribe once and read live state per event;
//! values older than the current handling cycle must not be trusted.

mod backend;
mod errors;
mod events;
mod model;
mod registry;
mod virtual_player;

pub use backend::MediaBackend;
pub use errors::PlayersError;
pub use events::PlayerEvent;
pub use model::{PlaybackStatus, PlayerCapabilities, TrackMetadata};
pub use registry::PlayerRegistry;
pub use virtual_player::{VirtualPlayer, VirtualPlayerState};
