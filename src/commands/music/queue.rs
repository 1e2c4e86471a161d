use super::*;
use crate::commands::music::utils::{embedded_messages, guild_id};

/// View the current music queue
#[poise::command(slash_command, prefix_command, guild_only, category = "Music")]
pub async fn queue(ctx: Context<'_>) -> CommandResult {
    let guild_id = guild_id(ctx)?;
    let snapshot = ctx.data().coordinator.snapshot(guild_id).await;

    ctx.send(
        CreateReply::default()
            .embed(embedded_messages::music_queue(&snapshot))
            .ephemeral(false),
    )
    .await?;

    Ok(())
}
