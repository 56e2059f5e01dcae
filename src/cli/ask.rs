//! One-shot `--ask` mode: one query, answer on stdout.

use std::io::Write;

use tracing::{info, warn};

use crate::query::QueryClient;

/// Ask `question` and write the outcome. Returns the process exit code.
///
/// The answer goes to `out` verbatim followed by a newline; a failure goes to
/// `err` and yields 1.
pub async fn run_ask_command<O, E>(
    client: &QueryClient,
    question: &str,
    out: &mut O,
    err: &mut E,
) -> i32
where
    O: Write,
    E: Write,
{
    match client.ask(question).await {
        Ok(answer) => {
            info!(answer_len = answer.as_str().len(), "one-shot query succeeded");
            if writeln!(out, "{}", answer).is_err() {
                return 1;
            }
            0
        }
        Err(e) => {
            warn!(cause = %e.cause(), "one-shot query failed");
            let _ = writeln!(err, "Error: {}", e);
            1
        }
    }
}
