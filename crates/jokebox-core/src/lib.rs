//! `Jokebox` Core Library
//!
//! This crate provides the core functionality for the `Jokebox` application:
//! - Endpoint configuration resolved once at startup
//! - Joke fetching over HTTP with typed failures
//! - Response parsing for the joke payload
//! - Display state driven by the fetch-and-render cycle
//!
//! # Error Handling
//!
//! Operations return [`Result`] with a typed [`Error`]; the UI decides what
//! to surface. See the [`error`] module for details.
//!
//! ```rust,ignore
//! use jokebox_core::{ApiConfig, HttpJokeFetcher, JokeFetcher, Result};
//!
//! async fn one_joke() -> Result<String> {
//!     let fetcher = HttpJokeFetcher::new(ApiConfig::from_build_env()?);
//!     Ok(fetcher.fetch_joke().await?.into())
//! }
//! ```

pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod joke;

pub use client::{HttpJokeFetcher, JokeFetcher};
pub use config::ApiConfig;
pub use display::{FALLBACK_TEXT, JokeDisplay};
pub use error::{Error, Result};
pub use joke::{Joke, parse_joke_response};
