//! Seams to the voice transport: the per-guild output sink and the connector
//! that hands sessions out.

use std::sync::Arc;

use serenity::all::{ChannelId, GuildId};
use serenity::async_trait;

use super::{MusicError, MusicResult};

/// Observable state of a [`PlaybackSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Playing,
    Paused,
}

impl SessionState {
    /// Playing or paused: the drive loop still owns the output.
    pub fn is_active(self) -> bool {
        matches!(self, SessionState::Playing | SessionState::Paused)
    }
}

/// One guild's live audio output.
///
/// Connecting and disconnecting are not part of this contract; the session is
/// already attached to a voice channel when the coordinator gets it.
#[async_trait]
pub trait PlaybackSession: Send + Sync + 'static {
    /// Playable source accepted by [`start`](Self::start).
    type Handle: Send + 'static;

    async fn start(&self, handle: Self::Handle) -> MusicResult<()>;

    async fn stop(&self) -> MusicResult<()>;

    async fn pause(&self) -> MusicResult<()>;

    async fn resume(&self) -> MusicResult<()>;

    async fn state(&self) -> SessionState;

    /// The transport error that ended the last track, if it broke off instead
    /// of finishing. Reading the error clears it.
    async fn take_error(&self) -> Option<MusicError> {
        None
    }

    async fn is_playing(&self) -> bool {
        self.state().await == SessionState::Playing
    }

    async fn is_paused(&self) -> bool {
        self.state().await == SessionState::Paused
    }
}

/// Hands out the session for a guild, joining a voice channel when asked.
#[async_trait]
pub trait VoiceConnector: Send + Sync + 'static {
    type Session: PlaybackSession;

    /// The session for `guild_id`, if the bot is currently connected there.
    async fn session(&self, guild_id: GuildId) -> Option<Arc<Self::Session>>;

    /// Join `channel_id` and return the resulting session.
    async fn connect(
        &self,
        guild_id: GuildId,
        channel_id: ChannelId,
    ) -> MusicResult<Arc<Self::Session>>;
}
