//! ask-tui - a terminal client that sends one question to an answering
//! service and shows the answer.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod models;
pub mod query;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod widgets;
