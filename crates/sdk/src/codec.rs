//! Feed identifier encoding.
//!
//! A [`FeedId`] packs three fields into a single 256-bit integer, high to
//! low:
//!
//! ```text
//! | asset class (bits 255..232) | feed type (231..216) | pair ID (215..0) |
//! ```
//!
//! * asset class: [`AssetClass`] discriminant.
//! * feed type: [`FeedType`] as `(main_type << 8) | variant`.
//! * pair ID: pair symbol as a Starknet short string, at most 27 bytes.
//!
//! The layout is shared with the on-chain feeds registry.

use std::{fmt::Display, ops::Deref};

use alloy::primitives::U256;
use tracing::{debug, trace};

use crate::{
    error::{BatchDecodeError, DecodingError, EncodingError, ShortStringError},
    types::{AssetClass, FeedId, FeedType, PairId},
};

/// Bit offset of the asset class field (29 bytes).
pub const ASSET_CLASS_OFFSET: usize = 29 * 8;

/// Bit offset of the feed type field (27 bytes).
pub const FEED_TYPE_OFFSET: usize = 27 * 8;

/// `2^232`, multiplier of the asset class field.
pub const ASSET_CLASS_SHIFT: U256 = U256::from_limbs([0, 0, 0, 1 << (ASSET_CLASS_OFFSET - 192)]);

/// `2^216`, multiplier of the feed type field.
pub const FEED_TYPE_SHIFT: U256 = U256::from_limbs([0, 0, 0, 1 << (FEED_TYPE_OFFSET - 192)]);

/// Width mask of the feed type field once shifted down.
pub const FEED_TYPE_MASK: U256 = U256::from_limbs([0xFFFF, 0, 0, 0]);

/// `2^216 - 1`, the largest pair ID that fits under the feed type field.
pub const MAX_PAIR_ID: U256 =
    U256::from_limbs([u64::MAX, u64::MAX, u64::MAX, (1 << (FEED_TYPE_OFFSET - 192)) - 1]);

/// Decoded feed identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Feed {
    asset_class: AssetClass,
    feed_type: FeedType,
    pair_id: PairId,
}

impl Feed {
    /// Describes a feed on `pair_symbol`, e.g. `"ETH/USD"`.
    pub fn new(
        asset_class: AssetClass,
        feed_type: FeedType,
        pair_symbol: &str,
    ) -> Result<Self, EncodingError> {
        if pair_symbol.is_empty() {
            return Err(EncodingError::EmptyPairSymbol);
        }
        let pair_id = PairId::from_symbol(pair_symbol).map_err(|source| match source {
            ShortStringError::TooLong(_) | ShortStringError::Overflow => {
                EncodingError::PairIdTooLong(pair_symbol.to_string())
            },
            ShortStringError::NonAscii { .. } => {
                EncodingError::InvalidPairSymbol { symbol: pair_symbol.to_string(), source }
            },
        })?;
        // 28..=31 byte symbols are valid short strings but overflow the pair field.
        if pair_id.as_u256() > MAX_PAIR_ID {
            return Err(EncodingError::PairIdTooLong(pair_symbol.to_string()));
        }
        Ok(Self { asset_class, feed_type, pair_id })
    }

    /// Same as [`Feed::new`] for an already packed pair ID.
    pub fn with_pair_id(
        asset_class: AssetClass,
        feed_type: FeedType,
        pair_id: PairId,
    ) -> Result<Self, EncodingError> {
        if pair_id.as_u256() > MAX_PAIR_ID {
            return Err(EncodingError::PairIdTooLong(format!("{:#x}", pair_id.as_u256())));
        }
        Ok(Self { asset_class, feed_type, pair_id })
    }

    pub fn asset_class(&self) -> AssetClass { self.asset_class }

    pub fn feed_type(&self) -> FeedType { self.feed_type }

    pub fn pair_id(&self) -> PairId { self.pair_id }

    /// ASCII pair symbol, e.g. `"BTC/USD"`.
    pub fn pair_symbol(&self) -> Result<String, DecodingError> { self.pair_id.symbol() }

    /// Packed identifier of this feed.
    pub fn id(&self) -> FeedId {
        let asset_class = U256::from(self.asset_class.value()) << ASSET_CLASS_OFFSET;
        let feed_type = U256::from(self.feed_type.to_numeric()) << FEED_TYPE_OFFSET;
        FeedId::from_raw(asset_class | feed_type | self.pair_id.as_u256())
    }
}

impl From<Feed> for FeedId {
    fn from(feed: Feed) -> Self { feed.id() }
}

impl TryFrom<FeedId> for Feed {
    type Error = DecodingError;

    fn try_from(feed_id: FeedId) -> Result<Self, Self::Error> { decode(feed_id) }
}

impl Display for Feed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Feed {{ asset_class: {}, feed_type: {}, pair_id: {} }}",
            self.asset_class, self.feed_type, self.pair_id
        )
    }
}

/// Decoded feed along with the identifier it was decoded from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FeedWithId {
    feed_id: FeedId,
    feed: Feed,
}

impl FeedWithId {
    pub fn decode(feed_id: FeedId) -> Result<Self, DecodingError> {
        decode(feed_id).map(|feed| Self { feed_id, feed })
    }

    pub fn feed_id(&self) -> FeedId { self.feed_id }

    pub fn feed(&self) -> &Feed { &self.feed }
}

impl Deref for FeedWithId {
    type Target = Feed;

    fn deref(&self) -> &Self::Target { &self.feed }
}

impl Display for FeedWithId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FeedWithId {{ feed_id: {}, asset_class: {}, feed_type: {}, pair_id: {} }}",
            self.feed_id, self.feed.asset_class, self.feed.feed_type, self.feed.pair_id
        )
    }
}

#[cfg(feature = "display")]
impl tabled::Tabled for FeedWithId {
    const LENGTH: usize = 4;

    fn fields(&self) -> Vec<std::borrow::Cow<'_, str>> {
        use colored::Colorize;

        vec![
            self.feed_id.to_string().bright_blue().to_string().into(),
            self.feed.asset_class.to_string().into(),
            self.feed.feed_type.to_string().into(),
            match self.feed.pair_symbol() {
                Ok(symbol) => symbol.green().to_string().into(),
                Err(_) => format!("{:#x}", self.feed.pair_id.as_u256())
                    .red()
                    .to_string()
                    .into(),
            },
        ]
    }

    fn headers() -> Vec<std::borrow::Cow<'static, str>> {
        vec!["Feed ID".into(), "Asset Class".into(), "Feed Type".into(), "Pair".into()]
    }
}

/// Packs a feed description into its identifier.
pub fn encode(
    asset_class: AssetClass,
    feed_type: FeedType,
    pair_symbol: &str,
) -> Result<FeedId, EncodingError> {
    let feed_id = Feed::new(asset_class, feed_type, pair_symbol)?.id();
    trace!(%asset_class, %feed_type, pair_symbol, %feed_id, "encoded feed");
    Ok(feed_id)
}

/// Packs a feed description with an already packed pair ID.
pub fn encode_pair_id(
    asset_class: AssetClass,
    feed_type: FeedType,
    pair_id: PairId,
) -> Result<FeedId, EncodingError> {
    Ok(Feed::with_pair_id(asset_class, feed_type, pair_id)?.id())
}

/// Splits an identifier back into its feed description.
pub fn decode(feed_id: FeedId) -> Result<Feed, DecodingError> {
    let raw = feed_id.as_u256();

    // Both fields are bounded by their shifts and masks, so the narrowing
    // conversions below cannot overflow.
    let asset_class_value = raw >> ASSET_CLASS_OFFSET;
    let feed_type_value = (raw >> FEED_TYPE_OFFSET) & FEED_TYPE_MASK;
    let pair_id = PairId::from_raw(raw & MAX_PAIR_ID);

    let feed_type = FeedType::from_numeric(feed_type_value.to::<u16>())?;
    let asset_class = AssetClass::try_from(asset_class_value.to::<u32>())?;

    trace!(%feed_id, %asset_class, %feed_type, "decoded feed");
    Ok(Feed { asset_class, feed_type, pair_id })
}

/// Decodes identifiers in order, stopping at the first one that fails.
pub fn decode_batch<I>(feed_ids: I) -> Result<Vec<FeedWithId>, BatchDecodeError>
where
    I: IntoIterator<Item = FeedId>,
{
    let feeds = feed_ids
        .into_iter()
        .enumerate()
        .map(|(index, feed_id)| {
            FeedWithId::decode(feed_id)
                .map_err(|source| BatchDecodeError { index, feed_id, source })
        })
        .collect::<Result<Vec<_>, _>>()?;
    debug!(count = feeds.len(), "decoded feed batch");
    Ok(feeds)
}
