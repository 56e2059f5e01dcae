//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - the HTTP POST used by the query client

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
