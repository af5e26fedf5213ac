//! Integration tests for the `Jokebox` fetch-and-render cycle.
//!
//! These tests drive the display state with a scripted fetcher to verify
//! the cycle without a network:
//! - a fetched joke is written into the display
//! - a failed fetch switches the display to the fallback message
//! - overlapping requests resolve last-write-wins
//! - a missing endpoint is a deterministic configuration error

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use jokebox_core::{
    ApiConfig, Error, FALLBACK_TEXT, HttpJokeFetcher, Joke, JokeDisplay, JokeFetcher, Result,
};

// =============================================================================
// Test Fixtures and Utilities
// =============================================================================

/// Fetcher that replays a scripted sequence of outcomes in order.
struct ScriptedFetcher {
    outcomes: RefCell<VecDeque<Result<Joke>>>,
}

impl ScriptedFetcher {
    fn new(outcomes: Vec<Result<Joke>>) -> Self {
        Self {
            outcomes: RefCell::new(outcomes.into_iter().collect()),
        }
    }
}

#[async_trait(?Send)]
impl JokeFetcher for ScriptedFetcher {
    async fn fetch_joke(&self) -> Result<Joke> {
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(Error::network("script exhausted")))
    }
}

/// Run one fetch-and-apply cycle against the display, as the page
/// controller does on load and on every button click.
async fn run_cycle(fetcher: &impl JokeFetcher, display: &mut JokeDisplay) -> Option<Error> {
    display.apply(fetcher.fetch_joke().await)
}

/// Install a test subscriber so `RUST_LOG=debug cargo test` shows the
/// cycle's tracing output.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

// =============================================================================
// Fetch-and-Render Cycle
// =============================================================================

#[tokio::test]
async fn fetched_joke_is_written_to_the_display() {
    init_tracing();
    let fetcher = ScriptedFetcher::new(vec![Ok(Joke::new("why did..."))]);
    let mut display = JokeDisplay::new();

    let err = run_cycle(&fetcher, &mut display).await;

    assert!(err.is_none());
    assert_eq!(display.text(), "why did...");
}

#[tokio::test]
async fn failed_fetch_shows_the_fallback_message() {
    init_tracing();
    let fetcher = ScriptedFetcher::new(vec![
        Ok(Joke::new("a joke that loaded fine")),
        Err(Error::network("HTTP 500")),
    ]);
    let mut display = JokeDisplay::new();

    run_cycle(&fetcher, &mut display).await;
    assert_eq!(display.text(), "a joke that loaded fine");

    let err = run_cycle(&fetcher, &mut display).await;
    assert!(matches!(err, Some(Error::Network(_))));
    assert_eq!(display.text(), FALLBACK_TEXT);
}

#[tokio::test]
async fn parse_failure_also_falls_back() {
    init_tracing();
    let fetcher = ScriptedFetcher::new(vec![Err(Error::parse("missing field `joke`"))]);
    let mut display = JokeDisplay::new();

    let err = run_cycle(&fetcher, &mut display).await;

    assert!(matches!(err, Some(Error::Parse(_))));
    assert_eq!(display.text(), FALLBACK_TEXT);
}

#[tokio::test]
async fn last_resolved_outcome_wins_regardless_of_click_order() {
    init_tracing();
    // Three clicks fire three requests; the responses resolve in a
    // different order than the clicks. The scripted sequence below is the
    // RESOLUTION order, and the display must show whatever resolved last.
    let fetcher = ScriptedFetcher::new(vec![
        Ok(Joke::new("response to click 3")),
        Ok(Joke::new("response to click 1")),
        Ok(Joke::new("response to click 2")),
    ]);
    let mut display = JokeDisplay::new();

    for _ in 0..3 {
        run_cycle(&fetcher, &mut display).await;
    }

    assert_eq!(display.text(), "response to click 2");
}

#[tokio::test]
async fn late_failure_overwrites_an_earlier_success() {
    init_tracing();
    // A slow failing request resolving after a fast successful one still
    // wins the display; no ordering guarantee is provided.
    let fetcher = ScriptedFetcher::new(vec![
        Ok(Joke::new("fast response")),
        Err(Error::network("slow request timed out")),
    ]);
    let mut display = JokeDisplay::new();

    run_cycle(&fetcher, &mut display).await;
    run_cycle(&fetcher, &mut display).await;

    assert_eq!(display.text(), FALLBACK_TEXT);
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn missing_endpoint_is_a_configuration_error() {
    let err = ApiConfig::new("").unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}

#[test]
fn configured_fetcher_targets_the_given_endpoint() {
    let config = ApiConfig::new("http://localhost:5001/api/joke").unwrap();
    let fetcher = HttpJokeFetcher::new(config);
    assert_eq!(fetcher.config().base_url(), "http://localhost:5001/api/joke");
}
