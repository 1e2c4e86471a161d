use std::sync::Arc;

use serenity::async_trait;
use serenity::prelude::Mutex;
use songbird::Call;
use songbird::input::Input;
use songbird::tracks::{PlayMode, TrackHandle};
use tracing::{debug, warn};

use crate::playback::{MusicError, MusicResult, PlaybackSession, SessionState};

/// A guild's songbird call plus the track it is currently playing.
pub struct SongbirdSession {
    call: Arc<Mutex<Call>>,
    track: Mutex<Option<TrackHandle>>,
    failure: Mutex<Option<MusicError>>,
}

impl SongbirdSession {
    pub fn new(call: Arc<Mutex<Call>>) -> Self {
        Self {
            call,
            track: Mutex::new(None),
            failure: Mutex::new(None),
        }
    }

    /// Whether this session wraps `call`.
    pub fn is_for(&self, call: &Arc<Mutex<Call>>) -> bool {
        Arc::ptr_eq(&self.call, call)
    }

    async fn current_track(&self) -> MusicResult<TrackHandle> {
        self.track
            .lock()
            .await
            .clone()
            .ok_or(MusicError::NothingPlaying)
    }
}

#[async_trait]
impl PlaybackSession for SongbirdSession {
    type Handle = Input;

    async fn start(&self, handle: Input) -> MusicResult<()> {
        let track = self.call.lock().await.play_input(handle);
        *self.failure.lock().await = None;

        // Inputs are lazy; opening the stream is where a bad source fails.
        if let Err(err) = track.make_playable_async().await {
            warn!("Track {} could not be opened: {}", track.uuid(), err);
            if let Err(stop_err) = track.stop() {
                debug!("Track {} already gone: {}", track.uuid(), stop_err);
            }
            return Err(MusicError::Transport(err.to_string()));
        }

        debug!("Started track {}", track.uuid());
        *self.track.lock().await = Some(track);
        Ok(())
    }

    async fn stop(&self) -> MusicResult<()> {
        let Some(track) = self.track.lock().await.take() else {
            return Ok(());
        };
        track
            .stop()
            .map_err(|e| MusicError::Transport(e.to_string()))
    }

    async fn pause(&self) -> MusicResult<()> {
        self.current_track()
            .await?
            .pause()
            .map_err(|e| MusicError::Transport(e.to_string()))
    }

    async fn resume(&self) -> MusicResult<()> {
        self.current_track()
            .await?
            .play()
            .map_err(|e| MusicError::Transport(e.to_string()))
    }

    async fn state(&self) -> SessionState {
        let Ok(track) = self.current_track().await else {
            return SessionState::Idle;
        };

        // An ended or dropped track refuses control messages.
        match track.get_info().await {
            Ok(info) => match info.playing {
                PlayMode::Play => SessionState::Playing,
                PlayMode::Pause => SessionState::Paused,
                PlayMode::Errored(err) => {
                    warn!("Track {} errored: {}", track.uuid(), err);
                    self.track.lock().await.take();
                    *self.failure.lock().await = Some(MusicError::Transport(err.to_string()));
                    SessionState::Idle
                }
                _ => SessionState::Idle,
            },
            Err(_) => SessionState::Idle,
        }
    }

    async fn take_error(&self) -> Option<MusicError> {
        self.failure.lock().await.take()
    }
}
