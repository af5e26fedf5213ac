//! The joke payload and response parsing.
//!
//! The endpoint answers `GET` requests carrying `Accept: application/json`
//! with a body of the form `{"joke": "<string>"}`. Extra fields are
//! ignored; a missing or non-string `joke` field is a parse failure.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The text payload returned by the remote endpoint for display.
///
/// Held only as the most recently fetched value; overwritten on every
/// applied fetch outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Joke(String);

impl Joke {
    /// Create a joke from its text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The joke text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Joke {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Joke> for String {
    fn from(joke: Joke) -> Self {
        joke.0
    }
}

/// Wire shape of the endpoint response body.
#[derive(Debug, Deserialize)]
struct JokeResponse {
    joke: String,
}

/// Parse a response body into a [`Joke`].
///
/// # Errors
///
/// Returns [`Error::Parse`] if the body is not JSON or lacks a string
/// `joke` field.
pub fn parse_joke_response(body: &str) -> Result<Joke> {
    let response: JokeResponse = serde_json::from_str(body).map_err(|e| {
        Error::parse(format!(
            "response body does not match {{\"joke\": \"...\"}}: {e}"
        ))
    })?;
    Ok(Joke::new(response.joke))
}
