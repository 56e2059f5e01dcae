//! AppMessage enum for async communication within the application.

use super::RequestSeq;
use crate::models::Answer;
use crate::query::QueryFailed;

/// Messages sent from spawned tasks back to the event loop
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A query finished, successfully or not
    QueryCompleted {
        seq: RequestSeq,
        result: Result<Answer, QueryFailed>,
    },
}
