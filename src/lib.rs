//! Per-guild audio playback for a Discord bot.
//!
//! [`playback`] holds the coordinator that serializes playback per guild and
//! the traits it talks to; [`voice`] implements those traits on top of
//! songbird (requires the `music` feature).

pub mod config;
pub mod playback;

#[cfg(feature = "music")]
pub mod voice;

pub use config::{Config, ConfigError};
pub use playback::{
    CoordinatorOptions, MusicError, MusicResult, Notice, Notifier, PlayOutcome,
    PlaybackCoordinator,
};

/// The coordinator wired to songbird.
#[cfg(feature = "music")]
pub type SongbirdCoordinator = PlaybackCoordinator<voice::SourceResolver, voice::SongbirdConnector>;
