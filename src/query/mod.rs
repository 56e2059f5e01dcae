//! Query client: the single HTTP exchange with the answering service.

mod client;
mod error;

pub use client::{QueryClient, DEFAULT_ENDPOINT};
pub use error::{FailureCause, QueryFailed};
