//! Runhook Job
//!
//! Process launched by a triggered job run. Reports what it was started
//! with: every inherited environment variable, then every argument.
//!
//! Only the report goes to stdout. Diagnostics go to stderr through tracing.

mod report;

use std::io::Write;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "runhook_job=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let vars = report::environment();
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    tracing::debug!(
        "Reporting {} variables and {} arguments",
        vars.len(),
        args.len()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    report::write_report(&mut out, &vars, &args).context("Failed to write report")?;
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}
