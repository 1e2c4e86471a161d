//! Per-guild playback coordination.
//!
//! A [`PlaybackCoordinator`] keeps one [`GuildSlot`] per guild. The first play
//! request for an idle guild spawns a drive loop that owns the guild's
//! [`PlaybackSession`] until the [`GuildQueue`] is empty; later requests only
//! append to the queue. Skip and stop reach the loop through the guild's
//! [`ControlSignals`], pause and resume go straight to the session.

/// The coordinator and its command-facing operations.
pub mod coordinator;
mod drive;
/// Error taxonomy shared by the whole crate.
pub mod error;
pub mod item;
/// User-visible status transitions and the sink they are reported to.
pub mod notice;
pub mod queue;
/// Identifier classification and the resolver seam.
pub mod resolver;
pub mod session;
pub mod signals;
pub mod state;

pub use coordinator::{CoordinatorOptions, PlayOutcome, PlaybackCoordinator};
pub use error::{MusicError, MusicResult};
pub use item::AudioItem;
pub use notice::{Notice, Notifier};
pub use queue::GuildQueue;
pub use resolver::{AudioResolver, SourceKind};
pub use session::{PlaybackSession, SessionState, VoiceConnector};
pub use signals::{ControlSignals, Signal};
pub use state::{GuildPlaybackState, GuildSlot, QueueSnapshot};
