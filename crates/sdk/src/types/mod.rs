mod asset_class;
mod feed_type;

use std::{fmt::Display, str::FromStr};

use alloy::primitives::U256;
pub use asset_class::AssetClass;
pub use feed_type::{FeedType, RealizedVolatilityVariant, TwapVariant, UniqueVariant};

use crate::{
    error::{DecodingError, ParseFeedIdError, ShortStringError},
    short_string,
};

/// Packed identifier of a feed, the key the on-chain registry stores feeds
/// under.
///
/// See [`crate::codec`] for the bit layout. Rendered as `0x`-prefixed hex.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, derive_more::Debug)]
#[debug("FeedId({_0:#x})")]
pub struct FeedId(U256);

impl FeedId {
    pub const fn from_raw(value: U256) -> Self { Self(value) }

    pub fn as_u256(&self) -> U256 { self.0 }
}

impl From<U256> for FeedId {
    fn from(value: U256) -> Self { Self(value) }
}

impl From<FeedId> for U256 {
    fn from(value: FeedId) -> Self { value.0 }
}

impl Display for FeedId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{:#x}", self.0) }
}

impl FromStr for FeedId {
    type Err = ParseFeedIdError;

    /// Accepts `0x`-prefixed hex or plain decimal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let (digits, radix) = match input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")) {
            Some(hex) => (hex, 16u32),
            None => (input, 10),
        };
        let err = |reason: String| ParseFeedIdError { input: s.to_string(), reason };
        if digits.is_empty() {
            return Err(err("no digits".to_string()));
        }
        // `from_str_radix` tolerates `_` separators, registry ids never carry them.
        if let Some(c) = digits.chars().find(|c| !c.is_digit(radix)) {
            return Err(err(format!("invalid digit {c:?}")));
        }
        U256::from_str_radix(digits, u64::from(radix))
            .map(Self)
            .map_err(|e| err(e.to_string()))
    }
}

impl TryFrom<String> for FeedId {
    type Error = ParseFeedIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> { FeedId::from_str(&value) }
}

/// Pair symbol such as `ETH/USD` packed as a Starknet short string.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, derive_more::Debug)]
#[debug("PairId({_0:#x})")]
pub struct PairId(U256);

impl PairId {
    pub fn from_symbol(symbol: &str) -> Result<Self, ShortStringError> {
        short_string::pack_ascii_to_int(symbol).map(Self)
    }

    /// Wraps already packed bits without checking they form a valid symbol.
    pub const fn from_raw(bits: U256) -> Self { Self(bits) }

    pub fn as_u256(&self) -> U256 { self.0 }

    /// ASCII symbol the pair ID was packed from.
    pub fn symbol(&self) -> Result<String, DecodingError> {
        short_string::unpack_int_to_ascii(self.0)
            .map_err(|source| DecodingError::InvalidPairId { pair_id: self.0, source })
    }

    /// Base and quote currency symbols, e.g. `("ETH", "USD")`.
    pub fn base_quote(&self) -> Result<(String, String), DecodingError> {
        let symbol = self.symbol()?;
        match symbol.split_once('/') {
            Some((base, quote)) if !base.is_empty() && !quote.is_empty() && !quote.contains('/') => {
                Ok((base.to_string(), quote.to_string()))
            },
            _ => Err(DecodingError::MalformedPair(symbol)),
        }
    }
}

impl Display for PairId {
    /// Renders the ASCII symbol, or the raw hex if the bits are not one.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.symbol() {
            Ok(symbol) => f.write_str(&symbol),
            Err(_) => write!(f, "{:#x}", self.0),
        }
    }
}
