//! Wire and domain types shared by the query client and the controller.

mod answer;
mod request;

pub use answer::Answer;
pub use request::{AskRequest, AskResponse};
