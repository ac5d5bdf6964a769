use std::{fmt::Display, str::FromStr};

use crate::error::{DecodingError, EncodingError};

/// Top-level category of the feed's underlying data.
///
/// Discriminants are shared with the on-chain registry and must never be
/// reordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AssetClass {
    Crypto = 0,
}

impl AssetClass {
    pub const ALL: &'static [AssetClass] = &[AssetClass::Crypto];

    pub fn value(&self) -> u8 { *self as u8 }

    pub fn name(&self) -> &'static str {
        match self {
            AssetClass::Crypto => "Crypto",
        }
    }
}

impl TryFrom<u32> for AssetClass {
    type Error = DecodingError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AssetClass::Crypto),
            _ => Err(DecodingError::UnknownAssetClass(value)),
        }
    }
}

impl FromStr for AssetClass {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|class| class.name() == s)
            .ok_or_else(|| EncodingError::InvalidAssetClass(s.to_string()))
    }
}

impl Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.name()) }
}
