//! [`Pragma`] feed identifiers.
//!
//! # Overview
//!
//! Every Pragma data feed is registered on-chain under a single packed
//! integer, the [`types::FeedId`], combining the asset class, the
//! aggregation method and the pair symbol.
//!
//! Use [`codec::encode`] to compute the identifier of a new feed before
//! registering it, and [`codec::decode`]/[`codec::decode_batch`] to turn
//! identifiers read back from the registry into [`codec::Feed`]s.
//!
//! ```
//! use pragma_feeds::{codec, types::{AssetClass, FeedType, UniqueVariant}};
//!
//! let feed_id = codec::encode(
//!     AssetClass::Crypto,
//!     FeedType::Unique(UniqueVariant::SpotMedian),
//!     "ETH/USD",
//! )
//! .unwrap();
//! assert_eq!(feed_id.to_string(), "0x4554482f555344");
//!
//! let feed = codec::decode(feed_id).unwrap();
//! assert_eq!(feed.pair_symbol().unwrap(), "ETH/USD");
//! ```
//!
//! # Limitations/follow-ups
//!
//! * Only the current layout (asset class at bit 232, feed type at bit 216)
//!   is supported. Identifiers produced by the older ASCII-tagged layout
//!   (`0x01534d...`) do not decode.
//!
//! # Features
//!
//! | Feature | Default | Description |
//! | --- | --- | --- |
//! | `display` | yes | Enables `tabled` table rendering of decoded feeds. |
//!
//!
//! [`Pragma`]: https://pragma.build

pub mod codec;
pub mod error;
pub mod short_string;
pub mod types;

pub use codec::{Feed, FeedWithId, decode, decode_batch, encode, encode_pair_id};
pub use types::{AssetClass, FeedId, FeedType, PairId};
