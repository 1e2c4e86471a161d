//! FIFO list of items waiting for a guild's drive loop.

use std::collections::VecDeque;

use super::AudioItem;

/// Pending items for one guild, in play order.
///
/// The queue itself does no locking; it lives inside the guild's
/// [`GuildPlaybackState`](super::state::GuildPlaybackState) and shares its mutex.
pub struct GuildQueue<H> {
    items: VecDeque<AudioItem<H>>,
}

impl<H> Default for GuildQueue<H> {
    fn default() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<H> GuildQueue<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item to the tail, returning its 1-based position.
    pub fn enqueue(&mut self, item: AudioItem<H>) -> usize {
        self.items.push_back(item);
        self.items.len()
    }

    /// Remove and return the head of the queue.
    pub fn dequeue_next(&mut self) -> Option<AudioItem<H>> {
        self.items.pop_front()
    }

    /// Drop every pending item, returning how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        removed
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Titles of the pending items in play order
    pub fn titles(&self) -> Vec<String> {
        self.items.iter().map(|item| item.title.clone()).collect()
    }
}
