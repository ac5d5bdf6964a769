use alloy::primitives::U256;
use thiserror::Error;

use crate::types::FeedId;

/// Failure to build a [`FeedId`] from its components.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    #[error("pair ID too long: {0}")]
    PairIdTooLong(String),

    #[error("invalid feed type: {0}")]
    InvalidFeedType(String),

    #[error("invalid variant {variant} for feed type {feed_type}")]
    InvalidVariant { feed_type: String, variant: String },

    #[error("invalid asset class: {0}")]
    InvalidAssetClass(String),

    #[error("empty pair symbol")]
    EmptyPairSymbol,

    #[error("invalid pair symbol {symbol:?}: {source}")]
    InvalidPairSymbol {
        symbol: String,
        #[source]
        source: ShortStringError,
    },
}

/// Failure to split a [`FeedId`] back into its components.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DecodingError {
    #[error("unknown feed type: {0}")]
    UnknownFeedType(u8),

    #[error("unknown variant {variant} for feed type {feed_type}")]
    UnknownVariant { feed_type: u8, variant: u8 },

    #[error("unknown asset class: {0}")]
    UnknownAssetClass(u32),

    #[error("pair ID {pair_id:#x} is not a short string: {source}")]
    InvalidPairId {
        pair_id: U256,
        #[source]
        source: ShortStringError,
    },

    #[error("pair {0:?} is not of the form BASE/QUOTE")]
    MalformedPair(String),
}

/// Failure to pack or unpack a Starknet short string.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ShortStringError {
    #[error("{0} bytes exceed the {max} byte limit", max = crate::short_string::MAX_SHORT_STRING_LEN)]
    TooLong(usize),

    #[error("byte {byte:#04x} at position {position} is not printable ASCII")]
    NonAscii { position: usize, byte: u8 },

    #[error("value does not fit into a short string")]
    Overflow,
}

/// Feed ID text that is neither `0x` hex nor decimal.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid feed ID {input:?}: {reason}")]
pub struct ParseFeedIdError {
    pub input: String,
    pub reason: String,
}

/// First failure in a batch decode.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("feed #{index} ({feed_id}): {source}")]
pub struct BatchDecodeError {
    pub index: usize,
    pub feed_id: FeedId,
    #[source]
    pub source: DecodingError,
}
