use tracing::info;

use super::*;
use crate::commands::music::utils::{
    acknowledge, guild_id, notifier::ChannelNotifier, requester_voice_channel,
};

/// Resume the paused track
#[poise::command(slash_command, prefix_command, guild_only, category = "Music")]
pub async fn resume(ctx: Context<'_>) -> CommandResult {
    let guild_id = guild_id(ctx)?;
    info!("Received resume command for guild {}", guild_id);

    let notifier = ChannelNotifier::for_context(ctx);
    let result = ctx
        .data()
        .coordinator
        .handle_resume(guild_id, requester_voice_channel(ctx, guild_id), &notifier)
        .await;

    acknowledge(ctx, &result).await
}
