use std::path::PathBuf;

use serenity::async_trait;
use songbird::input::{Compose, File, Input, YoutubeDl};
use tracing::{debug, error};

use crate::playback::resolver::TEST_SOUND_TITLE;
use crate::playback::{AudioItem, AudioResolver, MusicError, MusicResult, SourceKind};

const UNKNOWN_TITLE: &str = "Unknown Track";

/// Turns play identifiers into songbird inputs.
pub struct SourceResolver {
    http: reqwest::Client,
    test_sound_path: PathBuf,
}

impl SourceResolver {
    pub fn new(http: reqwest::Client, test_sound_path: impl Into<PathBuf>) -> Self {
        Self {
            http,
            test_sound_path: test_sound_path.into(),
        }
    }
}

#[async_trait]
impl AudioResolver for SourceResolver {
    type Handle = Input;

    async fn resolve(&self, identifier: &str) -> MusicResult<AudioItem<Input>> {
        match SourceKind::classify(identifier) {
            Some(SourceKind::TestSound) => {
                debug!("Using test sound at {:?}", self.test_sound_path);
                let input: Input = File::new(self.test_sound_path.clone()).into();
                Ok(AudioItem::new(input, TEST_SOUND_TITLE))
            }
            Some(SourceKind::YouTube(url)) => {
                let mut source = YoutubeDl::new(self.http.clone(), url.to_string());

                // Fetching metadata up front surfaces broken links before queueing.
                let metadata = source.aux_metadata().await.map_err(|err| {
                    error!("Failed to fetch metadata for {}: {}", url, err);
                    MusicError::Transport(err.to_string())
                })?;

                let title = metadata.title.unwrap_or_else(|| UNKNOWN_TITLE.to_string());
                Ok(AudioItem::new(source.into(), title))
            }
            None => Err(MusicError::UnresolvableSource(
                "URL could not be mapped to audio player".to_string(),
            )),
        }
    }
}
