//! This module aggregates all the command modules for the bot.

/// General purpose commands (e.g., hello).
pub(crate) mod general;

/// Commands related to music playback (requires the `music` feature).
#[cfg(feature = "music")]
pub(crate) mod music;
