use std::{fmt::Display, str::FromStr};

use crate::error::{DecodingError, EncodingError};

const UNIQUE: u8 = 0;
const TWAP: u8 = 1;
const REALIZED_VOLATILITY: u8 = 2;

/// Declares a feed type variant enumeration with pinned discriminants,
/// name lookup and numeric conversion.
macro_rules! feed_variant {
    (
        $(#[$meta:meta])*
        $name:ident for $feed_type:literal ($main_type:expr) {
            $($variant:ident = $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $($variant = $value),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn value(&self) -> u8 { *self as u8 }

            pub fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }

        impl TryFrom<u8> for $name {
            type Error = DecodingError;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $($value => Ok($name::$variant),)+
                    _ => Err(DecodingError::UnknownVariant { feed_type: $main_type, variant: value }),
                }
            }
        }

        impl FromStr for $name {
            type Err = EncodingError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL.iter().copied().find(|v| v.name() == s).ok_or_else(|| {
                    EncodingError::InvalidVariant {
                        feed_type: $feed_type.to_string(),
                        variant: s.to_string(),
                    }
                })
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

feed_variant! {
    /// Single aggregated value computed from the latest observations.
    UniqueVariant for "Unique" (UNIQUE) {
        SpotMedian = 0,
        PerpMedian = 1,
        SpotMean = 2,
    }
}

feed_variant! {
    /// Time-weighted average over a fixed window.
    TwapVariant for "Twap" (TWAP) {
        SpotMedianOneDay = 0,
    }
}

feed_variant! {
    /// Realized volatility over a fixed window.
    RealizedVolatilityVariant for "RealizedVolatility" (REALIZED_VOLATILITY) {
        OneWeek = 0,
    }
}

/// Aggregation method of a feed.
///
/// Packs into 16 bits: the main type in the high byte and the variant in
/// the low byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeedType {
    Unique(UniqueVariant),
    Twap(TwapVariant),
    RealizedVolatility(RealizedVolatilityVariant),
}

impl FeedType {
    /// Every feed type the registry knows about.
    pub fn all() -> impl Iterator<Item = FeedType> {
        let unique = UniqueVariant::ALL.iter().copied().map(FeedType::Unique);
        let twap = TwapVariant::ALL.iter().copied().map(FeedType::Twap);
        let realized_volatility = RealizedVolatilityVariant::ALL
            .iter()
            .copied()
            .map(FeedType::RealizedVolatility);
        unique.chain(twap).chain(realized_volatility)
    }

    /// Parses a feed type from its tag and variant names, e.g. `"Unique"` and
    /// `"SpotMedian"`.
    pub fn from_parts(feed_type: &str, variant: &str) -> Result<Self, EncodingError> {
        match feed_type {
            "Unique" => Ok(FeedType::Unique(variant.parse()?)),
            "Twap" => Ok(FeedType::Twap(variant.parse()?)),
            "RealizedVolatility" => Ok(FeedType::RealizedVolatility(variant.parse()?)),
            _ => Err(EncodingError::InvalidFeedType(feed_type.to_string())),
        }
    }

    /// Name of the outer tag.
    pub fn name(&self) -> &'static str {
        match self {
            FeedType::Unique(_) => "Unique",
            FeedType::Twap(_) => "Twap",
            FeedType::RealizedVolatility(_) => "RealizedVolatility",
        }
    }

    pub fn main_type(&self) -> u8 {
        match self {
            FeedType::Unique(_) => UNIQUE,
            FeedType::Twap(_) => TWAP,
            FeedType::RealizedVolatility(_) => REALIZED_VOLATILITY,
        }
    }

    pub fn variant(&self) -> u8 {
        match self {
            FeedType::Unique(v) => v.value(),
            FeedType::Twap(v) => v.value(),
            FeedType::RealizedVolatility(v) => v.value(),
        }
    }

    /// 16-bit `(main_type << 8) | variant` encoding.
    pub fn to_numeric(&self) -> u16 { (u16::from(self.main_type()) << 8) | u16::from(self.variant()) }

    pub fn from_numeric(value: u16) -> Result<Self, DecodingError> {
        let [main_type, variant] = value.to_be_bytes();
        match main_type {
            UNIQUE => Ok(FeedType::Unique(variant.try_into()?)),
            TWAP => Ok(FeedType::Twap(variant.try_into()?)),
            REALIZED_VOLATILITY => Ok(FeedType::RealizedVolatility(variant.try_into()?)),
            _ => Err(DecodingError::UnknownFeedType(main_type)),
        }
    }
}

impl From<FeedType> for u16 {
    fn from(value: FeedType) -> Self { value.to_numeric() }
}

impl TryFrom<u16> for FeedType {
    type Error = DecodingError;

    fn try_from(value: u16) -> Result<Self, Self::Error> { FeedType::from_numeric(value) }
}

impl Display for FeedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedType::Unique(v) => write!(f, "Unique({v})"),
            FeedType::Twap(v) => write!(f, "Twap({v})"),
            FeedType::RealizedVolatility(v) => write!(f, "RealizedVolatility({v})"),
        }
    }
}
