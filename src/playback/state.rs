//! Per-guild playback bookkeeping.

use tokio::sync::Mutex;

use super::{ControlSignals, GuildQueue};

/// Mutable playback state for one guild. Always accessed through the
/// [`GuildSlot`] mutex.
pub struct GuildPlaybackState<H> {
    pub queue: GuildQueue<H>,
    /// Title of the item that is playing or paused. Its handle has already been
    /// given to the session.
    pub current: Option<String>,
    /// True while a drive loop owns this guild.
    pub active: bool,
}

impl<H> Default for GuildPlaybackState<H> {
    fn default() -> Self {
        Self {
            queue: GuildQueue::new(),
            current: None,
            active: false,
        }
    }
}

impl<H> GuildPlaybackState<H> {
    /// Claim the guild for a new drive loop.
    pub(crate) fn activate(&mut self, title: &str) {
        self.active = true;
        self.current = Some(title.to_owned());
    }

    /// Release the guild; it stays dormant until the next play.
    pub(crate) fn deactivate(&mut self) {
        self.active = false;
        self.current = None;
    }

    pub fn snapshot(&self) -> QueueSnapshot {
        QueueSnapshot {
            current: self.current.clone(),
            pending: self.queue.titles(),
            active: self.active,
        }
    }
}

/// Everything the coordinator keeps for one guild.
pub struct GuildSlot<H> {
    pub state: Mutex<GuildPlaybackState<H>>,
    pub signals: ControlSignals,
    /// Held while looking up or joining the guild's voice session.
    pub(crate) joining: Mutex<()>,
}

impl<H> Default for GuildSlot<H> {
    fn default() -> Self {
        Self {
            state: Mutex::new(GuildPlaybackState::default()),
            signals: ControlSignals::new(),
            joining: Mutex::new(()),
        }
    }
}

/// Read-only view of a guild's playback state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueSnapshot {
    pub current: Option<String>,
    pub pending: Vec<String>,
    pub active: bool,
}
