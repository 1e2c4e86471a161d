//! The per-guild loop that plays queued items until the queue runs dry.

use std::sync::Arc;
use std::time::Duration;

use serenity::all::GuildId;
use tracing::{debug, error, info, warn};

use super::{AudioItem, GuildSlot, MusicError, Notice, Notifier, PlaybackSession, Signal};

/// How the inner poll loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayEnd {
    Finished,
    Skipped,
    Stopped,
}

/// Sole driver of one guild's session while `active` is set.
pub(crate) struct DriveLoop<S: PlaybackSession> {
    pub(crate) guild_id: GuildId,
    pub(crate) slot: Arc<GuildSlot<S::Handle>>,
    pub(crate) session: Arc<S>,
    pub(crate) notifier: Arc<dyn Notifier>,
    pub(crate) poll_interval: Duration,
}

impl<S: PlaybackSession> DriveLoop<S> {
    /// Play `first`, then everything that gets queued behind it.
    ///
    /// The caller must already have marked the guild active.
    pub(crate) async fn run(self, first: AudioItem<S::Handle>) {
        info!("Drive loop started for guild {}", self.guild_id);
        let mut item = first;

        loop {
            let (handle, title) = item.into_parts();

            if let Err(err) = self.session.start(handle).await {
                error!(
                    "Failed to start '{}' in guild {}: {}",
                    title, self.guild_id, err
                );
                self.abort(err).await;
                return;
            }

            info!("Playing '{}' in guild {}", title, self.guild_id);
            self.notifier.report(Notice::Playing {
                title: title.clone(),
            });

            let end = self.poll(&title).await;
            debug!("'{}' ended in guild {}: {:?}", title, self.guild_id, end);

            // Requests aimed at a track that already ended must not carry over.
            self.slot.signals.reset();

            if end == PlayEnd::Finished {
                if let Some(err) = self.session.take_error().await {
                    error!(
                        "'{}' broke off in guild {}: {}",
                        title, self.guild_id, err
                    );
                    self.abort(err).await;
                    return;
                }
            }

            let next = {
                let mut state = self.slot.state.lock().await;
                match state.queue.dequeue_next() {
                    Some(next) => {
                        state.current = Some(next.title.clone());
                        next
                    }
                    None => {
                        state.deactivate();
                        info!(
                            "Queue empty, drive loop finished for guild {}",
                            self.guild_id
                        );
                        return;
                    }
                }
            };

            item = next;
        }
    }

    /// Wait for the current item to end, reacting to skip/stop on the way.
    async fn poll(&self, title: &str) -> PlayEnd {
        while self.session.state().await.is_active() {
            match self.slot.signals.take() {
                Some(Signal::Stop) => {
                    self.notifier.report(Notice::Stopping {
                        title: title.to_owned(),
                    });
                    let cleared = self.slot.state.lock().await.queue.clear();
                    info!(
                        "Stopping '{}' in guild {}, dropped {} queued items",
                        title, self.guild_id, cleared
                    );
                    self.stop_session().await;
                    return PlayEnd::Stopped;
                }
                Some(Signal::Skip) => {
                    self.notifier.report(Notice::Skipping {
                        title: title.to_owned(),
                    });
                    info!("Skipping '{}' in guild {}", title, self.guild_id);
                    self.stop_session().await;
                    return PlayEnd::Skipped;
                }
                None => self.slot.signals.wait(self.poll_interval).await,
            }
        }

        PlayEnd::Finished
    }

    /// Report a transport failure and release the guild. Pending items stay
    /// queued for the next play.
    async fn abort(&self, err: MusicError) {
        self.notifier.report(Notice::Failed(err));
        self.slot.state.lock().await.deactivate();
    }

    async fn stop_session(&self) {
        if let Err(err) = self.session.stop().await {
            warn!(
                "Failed to stop session for guild {}: {}",
                self.guild_id, err
            );
        }
    }
}
