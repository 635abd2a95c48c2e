use anyhow::Result;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. Skipped entirely when `suppress_logs` is set
/// (the TUI owns the terminal).
pub fn init_logging(verbose: bool, suppress_logs: bool) -> Result<()> {
    if suppress_logs {
        return Ok(());
    }

    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}
