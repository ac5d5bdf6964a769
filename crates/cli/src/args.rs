use clap::{Parser, Subcommand, ValueEnum};
use pragma_feeds::types::FeedId;

pub(crate) const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Parser, Debug)]
#[command(name = "pragma-feeds", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log filter directive, overridden by `RUST_LOG` when set
    #[arg(long, global = true, default_value_t = DEFAULT_LOG_LEVEL.to_string())]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the feed ID to register a new feed with
    Encode {
        /// Asset class (e.g. Crypto)
        #[arg(long)]
        asset_class: String,

        /// Feed type (e.g. Unique, Twap, RealizedVolatility)
        #[arg(long)]
        feed_type: String,

        /// Feed type variant (e.g. SpotMedian)
        #[arg(long)]
        variant: String,

        /// Pair symbol (e.g. ETH/USD)
        #[arg(long)]
        pair: String,

        /// Output format of the generated feed ID
        #[arg(long, value_enum, default_value_t = Format::Hex)]
        format: Format,
    },
    /// Decode feed IDs read back from a feeds registry
    Decode {
        /// Feed IDs, `0x` hex or decimal
        #[arg(required = true)]
        feed_ids: Vec<FeedId>,

        /// Skip feed IDs that fail to decode instead of aborting [default:
        /// abort on first failure]
        #[arg(long, default_value_t = false)]
        skip_invalid: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Hex,
    Decimal,
}
