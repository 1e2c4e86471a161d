//! Mapping user-supplied identifiers to playable audio.

use serenity::async_trait;
use url::Url;

use super::{AudioItem, MusicResult};

/// Identifier that selects the bundled test sound.
pub const TEST_IDENTIFIER: &str = "test";

/// Title reported for the bundled test sound.
pub const TEST_SOUND_TITLE: &str = "Test Sound";

/// Resolves an identifier into something a session can play.
#[async_trait]
pub trait AudioResolver: Send + Sync + 'static {
    type Handle: Send + 'static;

    async fn resolve(&self, identifier: &str) -> MusicResult<AudioItem<Self::Handle>>;
}

/// The kinds of identifier the bot knows how to play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    /// The local test sound
    TestSound,
    /// A YouTube video page
    YouTube(Url),
}

impl SourceKind {
    /// Work out which kind of source `identifier` refers to, if any.
    pub fn classify(identifier: &str) -> Option<SourceKind> {
        let identifier = identifier.trim();
        if identifier == TEST_IDENTIFIER {
            return Some(SourceKind::TestSound);
        }

        let url = Url::parse(identifier).ok()?;
        if url.scheme() != "https" && url.scheme() != "http" {
            return None;
        }

        let is_video = match url.host_str()? {
            "www.youtube.com" | "youtube.com" | "m.youtube.com" => {
                url.path() == "/watch" && url.query_pairs().any(|(key, _)| key == "v")
            }
            "youtu.be" => url.path().len() > 1,
            _ => false,
        };

        is_video.then_some(SourceKind::YouTube(url))
    }
}
