//! Songbird-backed implementations of the playback seams.

pub mod connector;
pub mod resolver;
pub mod session;

pub use connector::SongbirdConnector;
pub use resolver::SourceResolver;
pub use session::SongbirdSession;
