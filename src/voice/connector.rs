use std::sync::Arc;

use dashmap::DashMap;
use serenity::all::{ChannelId, GuildId};
use serenity::async_trait;
use songbird::Songbird;
use tracing::{error, info};

use super::SongbirdSession;
use crate::playback::{MusicError, MusicResult, VoiceConnector};

/// Hands out [`SongbirdSession`]s for the calls held by a songbird manager.
pub struct SongbirdConnector {
    manager: Arc<Songbird>,
    sessions: DashMap<GuildId, Arc<SongbirdSession>>,
}

impl SongbirdConnector {
    pub fn new(manager: Arc<Songbird>) -> Self {
        Self {
            manager,
            sessions: DashMap::new(),
        }
    }
}

#[async_trait]
impl VoiceConnector for SongbirdConnector {
    type Session = SongbirdSession;

    async fn session(&self, guild_id: GuildId) -> Option<Arc<SongbirdSession>> {
        let Some(call) = self.manager.get(guild_id) else {
            self.sessions.remove(&guild_id);
            return None;
        };

        if let Some(session) = self.sessions.get(&guild_id) {
            if session.is_for(&call) {
                return Some(Arc::clone(&session));
            }
        }

        // The call was replaced behind our back (e.g. a reconnect).
        let session = Arc::new(SongbirdSession::new(call));
        self.sessions.insert(guild_id, Arc::clone(&session));
        Some(session)
    }

    async fn connect(
        &self,
        guild_id: GuildId,
        channel_id: ChannelId,
    ) -> MusicResult<Arc<SongbirdSession>> {
        let call = self.manager.join(guild_id, channel_id).await.map_err(|err| {
            error!(
                "Failed to join voice channel {} for guild {}: {}",
                channel_id, guild_id, err
            );
            MusicError::JoinError(err.to_string())
        })?;

        info!("Joined voice channel {} in guild {}", channel_id, guild_id);
        let session = Arc::new(SongbirdSession::new(call));
        self.sessions.insert(guild_id, Arc::clone(&session));
        Ok(session)
    }
}
