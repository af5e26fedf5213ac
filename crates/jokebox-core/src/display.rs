//! Display state for the fetch-and-render cycle.
//!
//! The controller applies every fetch outcome here, so the success and
//! failure policy lives in one observable place instead of inside an
//! unhandled rejection. The display always shows the value of the outcome
//! applied last, regardless of the order requests were started in.

use tracing::debug;

use crate::error::{Error, Result};
use crate::joke::Joke;

/// Message shown when a fetch fails.
pub const FALLBACK_TEXT: &str = "Could not fetch a joke. Try again!";

/// Holds the joke text currently shown on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokeDisplay {
    text: String,
}

impl JokeDisplay {
    /// Create an empty display, as rendered before the first fetch resolves.
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Current display text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Apply a fetch outcome to the display.
    ///
    /// On success the text becomes the joke. On failure the text becomes
    /// [`FALLBACK_TEXT`] and the error is handed back so the caller can
    /// log it or raise a notification.
    pub fn apply(&mut self, outcome: Result<Joke>) -> Option<Error> {
        match outcome {
            Ok(joke) => {
                self.text = joke.into();
                None
            }
            Err(e) => {
                debug!("Fetch failed, showing fallback: {}", e);
                self.text = FALLBACK_TEXT.to_string();
                Some(e)
            }
        }
    }
}

impl Default for JokeDisplay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_starts_empty() {
        let display = JokeDisplay::new();
        assert_eq!(display.text(), "");
    }

    #[test]
    fn test_success_overwrites_the_text() {
        let mut display = JokeDisplay::new();
        let err = display.apply(Ok(Joke::new("why did...")));
        assert!(err.is_none());
        assert_eq!(display.text(), "why did...");
    }

    #[test]
    fn test_failure_shows_fallback_and_returns_the_error() {
        let mut display = JokeDisplay::new();
        display.apply(Ok(Joke::new("an earlier joke")));

        let err = display.apply(Err(Error::network("timed out")));
        assert!(matches!(err, Some(Error::Network(_))));
        assert_eq!(display.text(), FALLBACK_TEXT);
    }

    #[test]
    fn test_last_applied_outcome_wins() {
        let mut display = JokeDisplay::new();
        display.apply(Ok(Joke::new("first")));
        display.apply(Ok(Joke::new("second")));
        display.apply(Ok(Joke::new("third")));
        assert_eq!(display.text(), "third");
    }
}
