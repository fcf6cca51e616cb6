use std::io::Write;

use anyhow::Context;

use fitness_tracker::parse_packages;
use fitness_tracker_cli::config::Config;
use fitness_tracker_cli::{run_batch, sample_packages};

fn main() -> anyhow::Result<()> {
    // Configure logging from env var `FITNESS_TRACKER_LOG_LEVEL` (or fallback to `RUST_LOG`, default `info`).
    let log_env = std::env::var("FITNESS_TRACKER_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();

    let cfg = Config::from_env()?;
    let packages = match &cfg.packages_file {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading packages file {}", path.display()))?;
            parse_packages(&json)?
        }
        None => sample_packages(),
    };
    tracing::info!(
        count = packages.len(),
        on_error = ?cfg.on_error,
        "evaluating sensor packages"
    );

    let mut stdout = std::io::stdout().lock();
    let report = run_batch(&packages, cfg.on_error, &mut stdout)?;
    stdout.flush()?;

    if report.failed > 0 {
        anyhow::bail!("{} of {} packages failed", report.failed, packages.len());
    }
    Ok(())
}
