use anyhow::Context;
use pragma_feeds::{
    codec,
    types::{AssetClass, FeedType},
};
use tracing::info;

use crate::args::Format;

pub(crate) fn render(
    asset_class: &str,
    feed_type: &str,
    variant: &str,
    pair: &str,
    format: Format,
) -> anyhow::Result<()> {
    println!("{}", feed_id_text(asset_class, feed_type, variant, pair, format)?);
    Ok(())
}

fn feed_id_text(
    asset_class: &str,
    feed_type: &str,
    variant: &str,
    pair: &str,
    format: Format,
) -> anyhow::Result<String> {
    let asset_class: AssetClass = asset_class.parse()?;
    let feed_type = FeedType::from_parts(feed_type, variant)?;

    let feed_id = codec::encode(asset_class, feed_type, pair)
        .with_context(|| format!("encoding {asset_class} {feed_type} feed for {pair}"))?;
    info!(%asset_class, %feed_type, pair, %feed_id, "generated feed ID");

    Ok(match format {
        Format::Hex => feed_id.to_string(),
        Format::Decimal => feed_id.as_u256().to_string(),
    })
}
