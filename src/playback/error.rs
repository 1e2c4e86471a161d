use thiserror::Error;

/// Errors that can occur during music operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MusicError {
    #[error("Not in a guild")]
    NotInGuild,

    #[error("You need to be in a voice channel")]
    NotInVoiceChannel,

    #[error("Not connected to a voice channel")]
    NoActiveSession,

    #[error("Nothing is playing")]
    NothingPlaying,

    #[error("Already paused")]
    AlreadyPaused,

    #[error("Already playing")]
    AlreadyPlaying,

    #[error("Could not map identifier to a playable source: {0}")]
    UnresolvableSource(String),

    #[error("Playback error: {0}")]
    Transport(String),

    #[error("Failed to join voice channel: {0}")]
    JoinError(String),

    #[error("Failed to get voice manager")]
    NoVoiceManager,
}

/// Result type for music operations
pub type MusicResult<T> = Result<T, MusicError>;
