use poise::{CreateReply, serenity_prelude as serenity};
use serenity::all::CreateEmbed;

use jukebox::playback::QueueSnapshot;
use jukebox::{MusicError, Notice};

const GREEN: u32 = 0x00ff00;
const RED: u32 = 0xff0000;

/// Heading shown above a notice
fn notice_heading(notice: &Notice) -> &'static str {
    match notice {
        Notice::Playing { .. } => "🎵 Now Playing",
        Notice::Queued { .. } => "🎵 Added to Queue",
        Notice::Skipping { .. } => "⏭️ Skipping",
        Notice::Stopping { .. } => "⏹️ Stopped",
        Notice::Paused { .. } => "⏸️ Paused",
        Notice::Resumed { .. } => "▶️ Resumed",
        Notice::Failed(_) => "❌ Error",
    }
}

/// Create an embed for a playback notice
pub fn notice(notice: &Notice) -> CreateEmbed {
    let color = if notice.is_error() { RED } else { GREEN };
    let mut embed = CreateEmbed::new()
        .title(notice_heading(notice))
        .description(notice.to_string())
        .color(color);

    if let Notice::Queued { position, .. } = notice {
        embed = embed.field("Position", format!("`#{}`", position), true);
    }

    embed
}

/// Ephemeral reply that closes a slash command interaction
pub fn acknowledgement(result: Result<(), &MusicError>) -> CreateReply {
    let embed = match result {
        Ok(()) => CreateEmbed::new().title("✅ Done").color(GREEN),
        Err(err) => CreateEmbed::new()
            .title("❌ Error")
            .description(err.to_string())
            .color(RED),
    };

    CreateReply::default().embed(embed).ephemeral(true)
}

/// Body text of the queue embed
fn queue_description(snapshot: &QueueSnapshot) -> String {
    let mut description = String::new();

    match &snapshot.current {
        Some(title) => {
            description.push_str("**🎵 Now Playing**\n");
            description.push_str(&format!("**{}**\n\n", title));
        }
        None => description.push_str("**🔇 Nothing playing**\n\n"),
    }

    if snapshot.pending.is_empty() {
        description.push_str("**📭 Queue is empty**");
    } else {
        description.push_str(&format!(
            "**📋 Queue - {} tracks**\n",
            snapshot.pending.len()
        ));
        for (index, title) in snapshot.pending.iter().enumerate() {
            // Keycap emoji for the first ten entries
            let number = if index < 9 {
                format!("{}\u{FE0F}\u{20E3}", index + 1)
            } else {
                "•".to_string()
            };
            description.push_str(&format!("{} {}\n", number, title));
        }
    }

    description
}

/// Create an embed for the music queue
pub fn music_queue(snapshot: &QueueSnapshot) -> CreateEmbed {
    CreateEmbed::new()
        .title("🎵 Music Queue")
        .description(queue_description(snapshot))
        .color(GREEN)
}
