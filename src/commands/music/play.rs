use std::sync::Arc;

use tracing::info;

use super::*;
use crate::commands::music::utils::{
    acknowledge, defer, guild_id, notifier::ChannelNotifier, requester_voice_channel,
};

/// Play a YouTube video's audio, or `test` for the test sound
#[poise::command(slash_command, prefix_command, guild_only, category = "Music")]
pub async fn play(
    ctx: Context<'_>,
    #[description = "YouTube URL, or `test`"]
    #[rest]
    identifier: String,
) -> CommandResult {
    info!("Received play command with identifier: {}", identifier);
    let guild_id = guild_id(ctx)?;
    let requester_channel = requester_voice_channel(ctx, guild_id);

    defer(ctx).await?;

    let result = ctx
        .data()
        .coordinator
        .handle_play(
            guild_id,
            requester_channel,
            &identifier,
            Arc::new(ChannelNotifier::for_context(ctx)),
        )
        .await;

    acknowledge(ctx, &result).await
}
