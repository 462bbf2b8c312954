//! Deploy hook: runs the configured shell command after regeneration.

use anyhow::{bail, Result};
use tracing::info;

/// Substitutes the summary message for `%s` and runs the command through the
/// shell. Exit status is the only feedback channel.
pub async fn run(template: &str, message: &str) -> Result<()> {
    let command = template.replacen("%s", message, 1);
    info!(command = %command, "Running deploy hook");

    let status = tokio::process::Command::new("sh")
        .arg("-c")
        .arg(&command)
        .status()
        .await?;

    if !status.success() {
        bail!("deploy hook exited with {status}");
    }
    Ok(())
}
