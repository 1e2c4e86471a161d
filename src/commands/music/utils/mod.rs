use poise::serenity_prelude::{ChannelId, GuildId};
use tracing::debug;

use jukebox::{MusicError, MusicResult};

use crate::{CommandResult, Context, Error};

// Export music utilities
pub mod embedded_messages;
pub mod notifier;

/// The guild the command was used in
pub fn guild_id(ctx: Context<'_>) -> Result<GuildId, Error> {
    ctx.guild_id()
        .ok_or_else(|| Box::new(MusicError::NotInGuild) as Error)
}

/// Get the voice channel ID that the command author is currently in
pub fn requester_voice_channel(ctx: Context<'_>, guild_id: GuildId) -> Option<ChannelId> {
    let guild = ctx.serenity_context().cache.guild(guild_id)?;
    guild
        .voice_states
        .get(&ctx.author().id)
        .and_then(|voice_state| voice_state.channel_id)
}

/// Slash commands must be answered; prefix commands already got their
/// feedback through the channel notifier.
pub async fn acknowledge<T>(ctx: Context<'_>, result: &MusicResult<T>) -> CommandResult {
    if let Err(err) = result {
        debug!("Music command '{}' failed: {}", ctx.command().name, err);
    }

    if let poise::Context::Application(_) = ctx {
        ctx.send(embedded_messages::acknowledgement(result.as_ref().map(|_| ())))
            .await?;
    }

    Ok(())
}

/// Defer slash commands so slow source lookups don't time out the interaction.
pub async fn defer(ctx: Context<'_>) -> CommandResult {
    if let poise::Context::Application(_) = ctx {
        ctx.defer_ephemeral().await?;
    }
    Ok(())
}
