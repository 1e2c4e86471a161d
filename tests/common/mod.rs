//! Common test utilities, fixtures, and mocks
//! This module contains shared functionality used across different test categories


use std::future::Future;
use std::sync::Arc;

use jukebox::playback::{CoordinatorOptions, PlayOutcome, PlaybackCoordinator};
use tokio::task::JoinHandle;

use fixtures::{POLL_INTERVAL, WAIT_TIMEOUT};
use mocks::{FakeConnector, MockResolver};

pub type TestCoordinator = PlaybackCoordinator<MockResolver, FakeConnector>;

/// Build a coordinator with the short test poll interval
pub fn coordinator(resolver: MockResolver, connector: FakeConnector) -> Arc<TestCoordinator> {
    crate::test_utils::init();
    Arc::new(PlaybackCoordinator::new(
        resolver,
        connector,
        CoordinatorOptions {
            poll_interval: POLL_INTERVAL,
        },
    ))
}

/// Poll `condition` until it holds, panicking after [`WAIT_TIMEOUT`]
pub async fn eventually<F>(what: &str, mut condition: F)
where
    F: FnMut() -> bool,
{
    let deadline = tokio::time::Instant::now() + WAIT_TIMEOUT;
    while !condition() {
        if tokio::time::Instant::now() >= deadline {
            panic!("timed out waiting for {}", what);
        }
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
}

/// Like [`eventually`] for conditions that need to await
pub async fn eventually_async<F, Fut>(what: &str, mut condition: F)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    let deadline = tokio::time::Instant::now() + WAIT_TIMEOUT;
    while !condition().await {
        if tokio::time::Instant::now() >= deadline {
            panic!("timed out waiting for {}", what);
        }
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
}

/// Wait for a drive loop to finish
pub async fn join_loop(handle: JoinHandle<()>) {
    tokio::time::timeout(WAIT_TIMEOUT, handle)
        .await
        .expect("drive loop did not finish in time")
        .expect("drive loop panicked");
}

/// Unwrap the join handle of a play request that should have started a loop
pub fn started(outcome: PlayOutcome) -> JoinHandle<()> {
    match outcome {
        PlayOutcome::Started(handle) => handle,
        other => panic!("expected a new drive loop, got {:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_eventually_returns_once_condition_holds() {
        let mut calls = 0;
        eventually("third call", || {
            calls += 1;
            calls >= 3
        })
        .await;
        assert_eq!(calls, 3);
    }
}
