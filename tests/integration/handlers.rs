//! Preconditions and outcomes of skip, stop, pause and resume.

use std::sync::Arc;

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use test_case::test_case;

use jukebox::playback::{MusicError, Notice, SessionState};

use crate::common::fixtures::{TEST_IDENTIFIER, TEST_TITLE, guild, other_guild, voice_channel};
use crate::common::mocks::{FakeConnector, RecordingNotifier, scenario_resolver};
use crate::common::{TestCoordinator, coordinator, eventually, join_loop, started};

#[derive(Debug, Clone, Copy)]
enum Handler {
    Skip,
    Stop,
    Pause,
    Resume,
}

async fn invoke(
    coordinator: &TestCoordinator,
    handler: Handler,
    in_voice: bool,
    notifier: &RecordingNotifier,
) -> Result<(), MusicError> {
    let channel = if in_voice { voice_channel() } else { None };
    match handler {
        Handler::Skip => coordinator.handle_skip(guild(), channel, notifier).await,
        Handler::Stop => coordinator.handle_stop(guild(), channel, notifier).await,
        Handler::Pause => coordinator.handle_pause(guild(), channel, notifier).await,
        Handler::Resume => coordinator.handle_resume(guild(), channel, notifier).await,
    }
}

#[test_case(Handler::Skip ; "skip")]
#[test_case(Handler::Stop ; "stop")]
#[test_case(Handler::Pause ; "pause")]
#[test_case(Handler::Resume ; "resume")]
#[tokio::test]
async fn test_requester_outside_voice_is_rejected(handler: Handler) {
    let coordinator = coordinator(scenario_resolver(), FakeConnector::connected_to(guild()));
    let notifier = RecordingNotifier::default();

    let result = invoke(&coordinator, handler, false, &notifier).await;

    assert_eq!(result, Err(MusicError::NotInVoiceChannel));
    assert_eq!(
        notifier.notices(),
        vec![Notice::Failed(MusicError::NotInVoiceChannel)]
    );
}

#[test_case(Handler::Skip ; "skip")]
#[test_case(Handler::Stop ; "stop")]
#[test_case(Handler::Pause ; "pause")]
#[test_case(Handler::Resume ; "resume")]
#[tokio::test]
async fn test_guild_without_session_is_rejected(handler: Handler) {
    let coordinator = coordinator(scenario_resolver(), FakeConnector::connected_to(other_guild()));
    let notifier = RecordingNotifier::default();

    let result = invoke(&coordinator, handler, true, &notifier).await;

    assert_eq!(result, Err(MusicError::NoActiveSession));
    assert_eq!(notifier.messages(), vec!["Not connected to a voice channel"]);
}

#[test_case(Handler::Skip ; "skip")]
#[test_case(Handler::Stop ; "stop")]
#[test_case(Handler::Pause ; "pause")]
#[test_case(Handler::Resume ; "resume")]
#[tokio::test]
async fn test_idle_session_has_nothing_playing(handler: Handler) {
    let coordinator = coordinator(scenario_resolver(), FakeConnector::connected_to(guild()));
    let notifier = RecordingNotifier::default();

    let result = invoke(&coordinator, handler, true, &notifier).await;

    assert_eq!(result, Err(MusicError::NothingPlaying));
    assert_eq!(notifier.messages(), vec!["Nothing is playing"]);
    assert_eq!(coordinator.connector().session_for(guild()).stops(), 0);
}

#[tokio::test]
async fn test_pause_and_resume_toggle_the_session() {
    let coordinator = coordinator(scenario_resolver(), FakeConnector::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let handle = started(
        coordinator
            .handle_play(guild(), voice_channel(), TEST_IDENTIFIER, notifier.clone())
            .await
            .unwrap(),
    );
    let session = coordinator.connector().session_for(guild());
    eventually("track to start", || session.started().len() == 1).await;

    coordinator
        .handle_pause(guild(), voice_channel(), &*notifier)
        .await
        .unwrap();
    assert_eq!(session.pauses(), 1);
    assert_eq!(session.current_state(), SessionState::Paused);
    assert_eq!(
        notifier.notices().last(),
        Some(&Notice::Paused {
            title: Some(TEST_TITLE.to_string())
        })
    );

    let again = coordinator
        .handle_pause(guild(), voice_channel(), &*notifier)
        .await;
    assert_matches!(again, Err(MusicError::AlreadyPaused));
    assert_eq!(session.pauses(), 1);

    // A paused track still counts as in progress for the drive loop.
    tokio::time::sleep(crate::common::fixtures::POLL_INTERVAL * 3).await;
    assert!(coordinator.snapshot(guild()).await.active);
    assert!(!handle.is_finished());

    coordinator
        .handle_resume(guild(), voice_channel(), &*notifier)
        .await
        .unwrap();
    assert_eq!(session.resumes(), 1);
    assert_eq!(
        notifier.messages().last().map(String::as_str),
        Some("Resumed Test Sound")
    );

    let again = coordinator
        .handle_resume(guild(), voice_channel(), &*notifier)
        .await;
    assert_matches!(again, Err(MusicError::AlreadyPlaying));
    assert_eq!(session.resumes(), 1);

    session.finish();
    join_loop(handle).await;
}

#[tokio::test]
async fn test_stop_while_paused_ends_the_loop() {
    let coordinator = coordinator(scenario_resolver(), FakeConnector::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let handle = started(
        coordinator
            .handle_play(guild(), voice_channel(), TEST_IDENTIFIER, notifier.clone())
            .await
            .unwrap(),
    );
    coordinator
        .handle_play(guild(), voice_channel(), TEST_IDENTIFIER, notifier.clone())
        .await
        .unwrap();
    let session = coordinator.connector().session_for(guild());
    eventually("track to start", || session.started().len() == 1).await;

    coordinator
        .handle_pause(guild(), voice_channel(), &*notifier)
        .await
        .unwrap();
    coordinator
        .handle_stop(guild(), voice_channel(), &*notifier)
        .await
        .unwrap();
    join_loop(handle).await;

    assert_eq!(session.stops(), 1);
    assert_eq!(session.started().len(), 1);
    assert_eq!(coordinator.snapshot(guild()).await, Default::default());
}

#[tokio::test]
async fn test_skip_after_natural_end_is_rejected() {
    let coordinator = coordinator(scenario_resolver(), FakeConnector::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let handle = started(
        coordinator
            .handle_play(guild(), voice_channel(), TEST_IDENTIFIER, notifier.clone())
            .await
            .unwrap(),
    );
    let session = coordinator.connector().session_for(guild());
    eventually("track to start", || session.started().len() == 1).await;
    session.finish();
    join_loop(handle).await;

    let result = coordinator
        .handle_skip(guild(), voice_channel(), &*notifier)
        .await;

    assert_eq!(result, Err(MusicError::NothingPlaying));
    assert_eq!(session.stops(), 0);
}
