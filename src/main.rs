use clap::Parser;
use tracing_subscriber::EnvFilter;

mod app;
mod cli;
mod clipboard;
mod config;
mod extract;
mod format;
mod metadata;
#[cfg(test)]
mod tests;

use config::Config;

fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env("YTX_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    init_logging()?;

    let result = Config::load().and_then(|config| cli::handle_run(args, &config));

    if let Err(err) = result {
        log::debug!("exiting: {err:?}");
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }

    Ok(())
}
