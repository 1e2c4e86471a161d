use tracing::info;

use crate::{CommandResult, Context};

/// Say hello to the bot
#[poise::command(slash_command, prefix_command, category = "General")]
pub async fn hello(
    ctx: Context<'_>,
    #[description = "Anything you like"] arg: String,
) -> CommandResult {
    info!("Received hello command with arg {}", arg);
    ctx.say("Hi lol").await?;
    Ok(())
}
