//! `Jokebox` UI - Leptos-based user interface.
//!
//! This crate provides the frontend for the `Jokebox` application: a single
//! page that shows the current joke and a button to fetch another one.

// Component files tend to be large by nature - they contain view logic
#![allow(clippy::too_many_lines)]
// expect_used is restricted to documented cases
#![allow(clippy::expect_used)]

pub mod app;
pub mod components;
pub mod theme;
pub mod types;

pub use app::App;
