//! Actions runner protocol: step outputs and failure reporting
//!
//! Outputs are `name=value` lines appended to the file named by
//! `GITHUB_OUTPUT`; failures are surfaced with the `::error::` workflow
//! command on stdout, which the runner turns into a job annotation.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::warn;

use crate::error::Result;

/// Publishes a step output.
/// When `GITHUB_OUTPUT` is unset (local runs) the output is only logged.
pub fn set_output(name: &str, value: &str) -> Result<()> {
    match std::env::var("GITHUB_OUTPUT") {
        Ok(path) => append_output(Path::new(&path), name, value),
        Err(_) => {
            warn!("GITHUB_OUTPUT is not set; output {}={}", name, value);
            Ok(())
        }
    }
}

/// Appends one `name=value` output line to the given file.
pub fn append_output(path: &Path, name: &str, value: &str) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}={}", name, value)?;
    Ok(())
}

/// Emits the `::error::` workflow command with the failure message.
pub fn set_failed(message: &str) {
    println!("::error::{}", escape_data(message));
}

// Workflow command data must have '%', '\r' and '\n' percent-encoded.
fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_handles_workflow_command_characters() {
        assert_eq!(escape_data("plain message"), "plain message");
        assert_eq!(escape_data("50% done\nnext"), "50%25 done%0Anext");
        assert_eq!(escape_data("a\r\nb"), "a%0D%0Ab");
    }
}
