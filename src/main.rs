use ::serenity::all::ClientBuilder;
use dotenv::dotenv;
use poise::serenity_prelude as serenity;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use jukebox::Config;

mod commands;

use commands::general::hello::*;

type Error = Box<dyn std::error::Error + Send + Sync>;
type Context<'a> = poise::Context<'a, Data, Error>;
type CommandResult = Result<(), Error>;

/// User data, which is stored and accessible in all command invocations
struct Data {
    #[cfg(feature = "music")]
    coordinator: std::sync::Arc<jukebox::SongbirdCoordinator>,
}

#[poise::command(slash_command, prefix_command, category = "General")]
async fn help(
    ctx: Context<'_>,
    #[description = "Specific command to show help about"]
    #[autocomplete = "poise::builtins::autocomplete_command"]
    command: Option<String>,
) -> CommandResult {
    poise::builtins::help(
        ctx,
        command.as_deref(),
        poise::builtins::HelpConfiguration {
            show_context_menu_commands: true,
            ..Default::default()
        },
    )
    .await
    .map_err(|e| e.into())
}

#[poise::command(prefix_command, hide_in_help)]
async fn register(ctx: Context<'_>) -> Result<(), Error> {
    poise::builtins::register_application_commands_buttons(ctx)
        .await
        .map_err(|e| e.into())
}

async fn event_handler(
    _ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    _data: &Data,
) -> Result<(), Error> {
    if let serenity::FullEvent::Ready { data_about_bot } = event {
        info!("Ready: {}", data_about_bot.user.name);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize logging with debug level for our crate
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("jukebox=debug,warn")),
        )
        .with_thread_ids(true)
        .with_line_number(true)
        .with_file(true)
        .with_target(true)
        .with_ansi(true)
        .pretty()
        .init();

    dotenv().ok();

    let config = Config::from_env()?;
    info!(
        "Loaded configuration: prefix '{}', poll interval {:?}",
        config.command_prefix, config.poll_interval
    );

    let intents = serenity::GatewayIntents::non_privileged()
        | serenity::GatewayIntents::MESSAGE_CONTENT
        | serenity::GatewayIntents::GUILD_VOICE_STATES;

    let mut commands = vec![
        // Default commands
        register(),
        help(),
        // General commands
        hello(),
    ];

    // Handle Music feature
    #[cfg(feature = "music")]
    {
        use commands::music::{pause::*, play::*, queue::*, resume::*, skip::*, stop::*};

        commands.extend(vec![play(), skip(), stop(), pause(), resume(), queue()]);
    }

    #[cfg(feature = "music")]
    let songbird = songbird::Songbird::serenity();

    #[cfg(feature = "music")]
    let coordinator = {
        use jukebox::voice::{SongbirdConnector, SourceResolver};

        std::sync::Arc::new(jukebox::PlaybackCoordinator::new(
            SourceResolver::new(reqwest::Client::new(), config.test_sound_path.clone()),
            SongbirdConnector::new(songbird.clone()),
            config.coordinator_options(),
        ))
    };

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands,
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(config.command_prefix.clone()),
                ..Default::default()
            },
            event_handler: |ctx, event, framework, data| {
                Box::pin(event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(Data {
                    #[cfg(feature = "music")]
                    coordinator,
                })
            })
        });

    let client_builder =
        ClientBuilder::new(&config.discord_token, intents).framework(framework.build());

    #[cfg(feature = "music")]
    let client_builder = {
        use songbird::SerenityInit;

        client_builder.register_songbird_with(songbird)
    };

    let mut client = client_builder.await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received Ctrl-C, shutting down.");
                shard_manager.shutdown_all().await;
            }
            Err(e) => error!("Failed to listen for Ctrl-C: {}", e),
        }
    });

    client.start().await.map_err(Into::into)
}
