use std::fmt;

/// A resolved, playable piece of audio together with the title shown to users.
///
/// The handle is opaque to the coordinator; it is only ever handed to
/// [`PlaybackSession::start`](super::PlaybackSession::start).
pub struct AudioItem<H> {
    pub handle: H,
    pub title: String,
}

impl<H> AudioItem<H> {
    pub fn new(handle: H, title: impl Into<String>) -> Self {
        Self {
            handle,
            title: title.into(),
        }
    }

    /// Split the item into its handle and title, transferring ownership of both.
    pub fn into_parts(self) -> (H, String) {
        (self.handle, self.title)
    }
}

impl<H> fmt::Debug for AudioItem<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioItem")
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}
