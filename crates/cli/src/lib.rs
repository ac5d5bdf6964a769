pub mod args;
mod decode;
mod encode;

use anyhow::Context;
use args::{Cli, Commands};
use tracing_subscriber::EnvFilter;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    init_tracing(&cli.log_level)?;

    match &cli.command {
        Commands::Encode { asset_class, feed_type, variant, pair, format } => {
            encode::render(asset_class, feed_type, variant, pair, *format)?
        },
        Commands::Decode { feed_ids, skip_invalid } => decode::render(feed_ids, *skip_invalid)?,
    }

    Ok(())
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level)
            .with_context(|| format!("parsing log level {log_level:?}"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("installing log subscriber")
}
