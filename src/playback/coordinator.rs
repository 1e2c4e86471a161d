//! Owns every guild's playback state and serializes playback per guild.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use serenity::all::{ChannelId, GuildId};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::drive::DriveLoop;
use super::{
    AudioResolver, GuildSlot, MusicError, MusicResult, Notice, Notifier, PlaybackSession,
    QueueSnapshot, SessionState, Signal, VoiceConnector,
};

/// Default time between two checks of a playing session.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

type HandleOf<V> = <<V as VoiceConnector>::Session as PlaybackSession>::Handle;

/// Tunables for [`PlaybackCoordinator`].
#[derive(Debug, Clone)]
pub struct CoordinatorOptions {
    /// Upper bound on how long a skip/stop or the end of a track can go
    /// unnoticed by the drive loop.
    pub poll_interval: Duration,
}

impl Default for CoordinatorOptions {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// What a successful play request did.
#[derive(Debug)]
pub enum PlayOutcome {
    /// No loop was running; a new drive loop now owns the guild.
    Started(JoinHandle<()>),
    /// A loop was already running; the item was appended at `position`.
    Queued { position: usize },
}

/// Drives one playback session per guild through its queue.
pub struct PlaybackCoordinator<R, V>
where
    V: VoiceConnector,
{
    resolver: R,
    connector: V,
    guilds: DashMap<GuildId, Arc<GuildSlot<HandleOf<V>>>>,
    options: CoordinatorOptions,
}

/// Report `err` to the user and hand it back to the caller.
fn fail<T>(notifier: &dyn Notifier, err: MusicError) -> MusicResult<T> {
    debug!("Reporting error: {}", err);
    notifier.report(Notice::Failed(err.clone()));
    Err(err)
}

impl<R, V> PlaybackCoordinator<R, V>
where
    V: VoiceConnector,
    R: AudioResolver<Handle = HandleOf<V>>,
{
    pub fn new(resolver: R, connector: V, options: CoordinatorOptions) -> Self {
        Self {
            resolver,
            connector,
            guilds: DashMap::new(),
            options,
        }
    }

    pub fn connector(&self) -> &V {
        &self.connector
    }

    fn slot(&self, guild_id: GuildId) -> Arc<GuildSlot<HandleOf<V>>> {
        Arc::clone(&self.guilds.entry(guild_id).or_default())
    }

    /// Play `identifier` in `guild_id`, or queue it behind the running loop.
    ///
    /// `requester_channel` is the voice channel the requesting user is in, if
    /// any. A new drive loop is spawned onto the runtime and reports through
    /// `notifier` for as long as it runs.
    pub async fn handle_play(
        self: &Arc<Self>,
        guild_id: GuildId,
        requester_channel: Option<ChannelId>,
        identifier: &str,
        notifier: Arc<dyn Notifier>,
    ) -> MusicResult<PlayOutcome> {
        info!("Play request for '{}' in guild {}", identifier, guild_id);

        let item = match self.resolver.resolve(identifier).await {
            Ok(item) => item,
            Err(err) => return fail(&*notifier, err),
        };

        let Some(channel_id) = requester_channel else {
            return fail(&*notifier, MusicError::NotInVoiceChannel);
        };

        let slot = self.slot(guild_id);
        let session = match self.session_or_connect(&slot, guild_id, channel_id).await {
            Ok(session) => session,
            Err(err) => return fail(&*notifier, err),
        };

        let mut state = slot.state.lock().await;

        if state.active {
            let title = item.title.clone();
            let position = state.queue.enqueue(item);
            drop(state);

            info!(
                "Queued '{}' at position {} in guild {}",
                title, position, guild_id
            );
            notifier.report(Notice::Queued { title, position });
            return Ok(PlayOutcome::Queued { position });
        }

        state.activate(&item.title);
        slot.signals.reset();
        drop(state);

        let drive = DriveLoop {
            guild_id,
            slot: Arc::clone(&slot),
            session,
            notifier,
            poll_interval: self.options.poll_interval,
        };

        Ok(PlayOutcome::Started(tokio::spawn(drive.run(item))))
    }

    /// Ask the drive loop to move on to the next queued item.
    pub async fn handle_skip(
        &self,
        guild_id: GuildId,
        requester_channel: Option<ChannelId>,
        notifier: &dyn Notifier,
    ) -> MusicResult<()> {
        self.raise(guild_id, requester_channel, Signal::Skip, notifier)
            .await
    }

    /// Ask the drive loop to stop playback and drop the whole queue.
    pub async fn handle_stop(
        &self,
        guild_id: GuildId,
        requester_channel: Option<ChannelId>,
        notifier: &dyn Notifier,
    ) -> MusicResult<()> {
        self.raise(guild_id, requester_channel, Signal::Stop, notifier)
            .await
    }

    pub async fn handle_pause(
        &self,
        guild_id: GuildId,
        requester_channel: Option<ChannelId>,
        notifier: &dyn Notifier,
    ) -> MusicResult<()> {
        let session = self.gate(guild_id, requester_channel, notifier).await?;

        match session.state().await {
            SessionState::Playing => {
                if let Err(err) = session.pause().await {
                    return fail(notifier, err);
                }
                info!("Paused playback in guild {}", guild_id);
                notifier.report(Notice::Paused {
                    title: self.current_title(guild_id).await,
                });
                Ok(())
            }
            SessionState::Paused => fail(notifier, MusicError::AlreadyPaused),
            SessionState::Idle => fail(notifier, MusicError::NothingPlaying),
        }
    }

    pub async fn handle_resume(
        &self,
        guild_id: GuildId,
        requester_channel: Option<ChannelId>,
        notifier: &dyn Notifier,
    ) -> MusicResult<()> {
        let session = self.gate(guild_id, requester_channel, notifier).await?;

        match session.state().await {
            SessionState::Paused => {
                if let Err(err) = session.resume().await {
                    return fail(notifier, err);
                }
                info!("Resumed playback in guild {}", guild_id);
                notifier.report(Notice::Resumed {
                    title: self.current_title(guild_id).await,
                });
                Ok(())
            }
            SessionState::Playing => fail(notifier, MusicError::AlreadyPlaying),
            SessionState::Idle => fail(notifier, MusicError::NothingPlaying),
        }
    }

    /// Current and pending titles for a guild. Guilds that never played
    /// anything get an empty snapshot.
    pub async fn snapshot(&self, guild_id: GuildId) -> QueueSnapshot {
        let Some(slot) = self.guilds.get(&guild_id).map(|slot| Arc::clone(&slot)) else {
            return QueueSnapshot::default();
        };
        let state = slot.state.lock().await;
        state.snapshot()
    }

    async fn current_title(&self, guild_id: GuildId) -> Option<String> {
        self.snapshot(guild_id).await.current
    }

    /// The guild's session, joining `channel_id` first if there is none.
    /// Concurrent first plays in one guild join only once.
    async fn session_or_connect(
        &self,
        slot: &GuildSlot<HandleOf<V>>,
        guild_id: GuildId,
        channel_id: ChannelId,
    ) -> MusicResult<Arc<V::Session>> {
        let _joining = slot.joining.lock().await;

        if let Some(session) = self.connector.session(guild_id).await {
            return Ok(session);
        }

        info!("Joining channel {} in guild {}", channel_id, guild_id);
        self.connector.connect(guild_id, channel_id).await
    }

    /// Preconditions shared by every signal handler.
    async fn gate(
        &self,
        guild_id: GuildId,
        requester_channel: Option<ChannelId>,
        notifier: &dyn Notifier,
    ) -> MusicResult<Arc<V::Session>> {
        if requester_channel.is_none() {
            return fail(notifier, MusicError::NotInVoiceChannel);
        }

        match self.connector.session(guild_id).await {
            Some(session) => Ok(session),
            None => fail(notifier, MusicError::NoActiveSession),
        }
    }

    async fn raise(
        &self,
        guild_id: GuildId,
        requester_channel: Option<ChannelId>,
        signal: Signal,
        notifier: &dyn Notifier,
    ) -> MusicResult<()> {
        let session = self.gate(guild_id, requester_channel, notifier).await?;

        if !session.state().await.is_active() {
            return fail(notifier, MusicError::NothingPlaying);
        }

        debug!("Raising {:?} for guild {}", signal, guild_id);
        self.slot(guild_id).signals.raise(signal);
        Ok(())
    }
}
