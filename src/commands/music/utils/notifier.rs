use std::future::Future;
use std::sync::Arc;

use poise::serenity_prelude::{ChannelId, CreateMessage, Http};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use jukebox::{Notice, Notifier};

use super::embedded_messages;
use crate::Context;

/// Posts playback notices into the text channel a command came from.
///
/// Notices go through a channel drained by a single task, so they reach
/// Discord in the order they were reported.
#[derive(Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notice>,
}

impl ChannelNotifier {
    pub fn new(http: Arc<Http>, channel_id: ChannelId) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        spawn_forwarder(rx, move |notice| {
            let http = Arc::clone(&http);
            async move {
                let message = CreateMessage::new().embed(embedded_messages::notice(&notice));
                if let Err(e) = channel_id.send_message(&http, message).await {
                    warn!(
                        "Failed to post '{}' to channel {}: {}",
                        notice, channel_id, e
                    );
                }
            }
        });

        Self { tx }
    }

    pub fn for_context(ctx: Context<'_>) -> Self {
        Self::new(ctx.serenity_context().http.clone(), ctx.channel_id())
    }
}

/// Deliver notices one at a time until every sender is gone.
fn spawn_forwarder<F, Fut>(mut rx: UnboundedReceiver<Notice>, mut deliver: F) -> JoinHandle<()>
where
    F: FnMut(Notice) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send,
{
    tokio::spawn(async move {
        while let Some(notice) = rx.recv().await {
            deliver(notice).await;
        }
        debug!("Notice channel closed");
    })
}

impl Notifier for ChannelNotifier {
    fn report(&self, notice: Notice) {
        if let Err(err) = self.tx.send(notice) {
            warn!("Dropped notice '{}': forwarder is gone", err.0);
        }
    }
}
