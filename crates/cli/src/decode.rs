use colored::Colorize;
use itertools::Itertools;
use pragma_feeds::{
    codec::{self, FeedWithId},
    types::FeedId,
};
use tabled::{Table, settings::Style};
use tracing::warn;

pub(crate) fn render(feed_ids: &[FeedId], skip_invalid: bool) -> anyhow::Result<()> {
    let feeds = decode_feeds(feed_ids, skip_invalid)?;

    println!(
        "{}\n",
        format!("{} feed(s) out of {}", feeds.len(), feed_ids.len())
            .bold()
            .purple()
    );

    let mut table = Table::new(&feeds);
    table.with(Style::sharp());
    println!("{}", table);

    Ok(())
}

/// Decodes in input order, either failing fast or logging and dropping
/// undecodable ids.
fn decode_feeds(feed_ids: &[FeedId], skip_invalid: bool) -> anyhow::Result<Vec<FeedWithId>> {
    if !skip_invalid {
        return Ok(codec::decode_batch(feed_ids.iter().copied())?);
    }

    let (feeds, failures): (Vec<_>, Vec<_>) = feed_ids
        .iter()
        .map(|&feed_id| FeedWithId::decode(feed_id).map_err(|err| (feed_id, err)))
        .partition_result();
    for (feed_id, err) in &failures {
        warn!(%feed_id, error = %err, "skipping feed");
    }
    Ok(feeds)
}

#[cfg(test)]
mod tests {
    use pragma_feeds::error::{BatchDecodeError, DecodingError};

    use super::*;

    fn ids() -> Vec<FeedId> {
        vec![
            "0x4254432f555344".parse().unwrap(),
            // feed type 0x0300, main type 3 is unknown
            format!("0x3{}", "0".repeat(56)).parse().unwrap(),
            "19514442401534788".parse().unwrap(),
        ]
    }

    #[test]
    fn test_skip_invalid_keeps_order() {
        let feeds = decode_feeds(&ids(), true).unwrap();
        let symbols: Vec<_> = feeds.iter().map(|f| f.pair_symbol().unwrap()).collect();
        assert_eq!(symbols, vec!["BTC/USD", "ETH/USD"]);
    }

    #[test]
    fn test_fail_fast_reports_first_bad_id() {
        let err = decode_feeds(&ids(), false).unwrap_err();
        let err = err.downcast::<BatchDecodeError>().unwrap();
        assert_eq!(err.index, 1);
        assert_eq!(err.source, DecodingError::UnknownFeedType(3));
    }

    #[test]
    fn test_all_valid() {
        let ids = [ids()[0], ids()[2]];
        assert_eq!(decode_feeds(&ids, false).unwrap(), decode_feeds(&ids, true).unwrap());
    }
}
