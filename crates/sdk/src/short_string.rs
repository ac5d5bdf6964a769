//! Starknet short strings: ASCII text packed big-endian into a single
//! field element.
//!
//! `"BTC/USD"` packs to `0x4254432f555344`. A field element holds at most
//! [`MAX_SHORT_STRING_LEN`] bytes.

use alloy::primitives::U256;

use crate::error::ShortStringError;

/// Maximum number of bytes a short string can carry.
pub const MAX_SHORT_STRING_LEN: usize = 31;

/// Packs `text` into an integer, first character in the most significant
/// byte.
///
/// Only printable ASCII (and space) is accepted, so that
/// [`unpack_int_to_ascii`] is an exact inverse.
pub fn pack_ascii_to_int(text: &str) -> Result<U256, ShortStringError> {
    let bytes = text.as_bytes();
    if bytes.len() > MAX_SHORT_STRING_LEN {
        return Err(ShortStringError::TooLong(bytes.len()));
    }
    if let Some((position, &byte)) = bytes.iter().enumerate().find(|(_, b)| !is_printable(**b)) {
        return Err(ShortStringError::NonAscii { position, byte });
    }
    U256::try_from_be_slice(bytes).ok_or(ShortStringError::Overflow)
}

/// Unpacks an integer produced by [`pack_ascii_to_int`]. Leading zero bytes
/// are padding and dropped.
pub fn unpack_int_to_ascii(value: U256) -> Result<String, ShortStringError> {
    let len = value.byte_len();
    if len > MAX_SHORT_STRING_LEN {
        return Err(ShortStringError::Overflow);
    }
    let bytes = value.to_be_bytes::<32>();
    let text = &bytes[bytes.len() - len..];
    if let Some((position, &byte)) = text.iter().enumerate().find(|(_, b)| !is_printable(**b)) {
        return Err(ShortStringError::NonAscii { position, byte });
    }
    Ok(text.iter().map(|&b| b as char).collect())
}

fn is_printable(byte: u8) -> bool { byte.is_ascii_graphic() || byte == b' ' }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_pair_symbol() {
        assert_eq!(pack_ascii_to_int("BTC/USD").unwrap(), U256::from(0x4254432f555344u64));
        assert_eq!(pack_ascii_to_int("ETH/USD").unwrap(), U256::from(0x4554482f555344u64));
        assert_eq!(pack_ascii_to_int("").unwrap(), U256::ZERO);
    }

    #[test]
    fn test_unpack_pair_symbol() {
        assert_eq!(unpack_int_to_ascii(U256::from(0x4254432f555344u64)).unwrap(), "BTC/USD");
        assert_eq!(unpack_int_to_ascii(U256::ZERO).unwrap(), "");
    }

    #[test]
    fn test_max_length() {
        let longest = "A".repeat(MAX_SHORT_STRING_LEN);
        let packed = pack_ascii_to_int(&longest).unwrap();
        assert_eq!(unpack_int_to_ascii(packed).unwrap(), longest);

        let too_long = "A".repeat(MAX_SHORT_STRING_LEN + 1);
        assert_eq!(pack_ascii_to_int(&too_long), Err(ShortStringError::TooLong(32)));
    }

    #[test]
    fn test_rejects_non_ascii() {
        assert_eq!(
            pack_ascii_to_int("BTC/€"),
            Err(ShortStringError::NonAscii { position: 4, byte: 0xe2 })
        );
        assert_eq!(
            pack_ascii_to_int("A\0B"),
            Err(ShortStringError::NonAscii { position: 1, byte: 0 })
        );
    }

    #[test]
    fn test_unpack_rejects_embedded_nul() {
        // "A\0B"
        assert_eq!(
            unpack_int_to_ascii(U256::from(0x410042u64)),
            Err(ShortStringError::NonAscii { position: 1, byte: 0 })
        );
    }

    #[test]
    fn test_unpack_rejects_full_width_value() {
        assert_eq!(unpack_int_to_ascii(U256::MAX), Err(ShortStringError::Overflow));
    }
}
