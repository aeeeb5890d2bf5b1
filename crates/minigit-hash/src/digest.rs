use std::fmt;
use std::str::FromStr;

use crate::HashError;

/// Number of hex characters in a printed digest.
pub const HEX_LEN: usize = 8;

/// A 32-bit FNV-1a digest identifying a piece of content.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest(u32);

impl Digest {
    /// Wrap a raw accumulator value.
    pub const fn from_u32(value: u32) -> Self {
        Self(value)
    }

    /// The raw 32-bit value.
    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    /// Lowercase, zero-padded, fixed-width hex.
    pub fn to_hex(&self) -> String {
        format!("{:08x}", self.0)
    }

    /// Parse exactly 8 hex characters (either case).
    pub fn from_hex(hex: &str) -> Result<Self, HashError> {
        if hex.len() != HEX_LEN {
            return Err(HashError::InvalidHexLength {
                expected: HEX_LEN,
                actual: hex.len(),
            });
        }
        let mut value = 0u32;
        for (position, character) in hex.chars().enumerate() {
            let nibble = character
                .to_digit(16)
                .ok_or(HashError::InvalidHex { position, character })?;
            value = (value << 4) | nibble;
        }
        Ok(Self(value))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({:08x})", self.0)
    }
}

impl FromStr for Digest {
    type Err = HashError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_padded() {
        assert_eq!(Digest::from_u32(0x1a).to_hex(), "0000001a");
        assert_eq!(Digest::from_u32(0).to_string(), "00000000");
    }

    #[test]
    fn display_roundtrip() {
        let d = Digest::from_u32(0x811c_9dc5);
        let parsed: Digest = d.to_string().parse().unwrap();
        assert_eq!(parsed, d);
    }

    #[test]
    fn uppercase_accepted() {
        assert_eq!(
            Digest::from_hex("DEADBEEF").unwrap(),
            Digest::from_hex("deadbeef").unwrap()
        );
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", Digest::from_u32(0xabc)), "Digest(00000abc)");
    }

    #[test]
    fn wrong_length() {
        let err = Digest::from_hex("abc").unwrap_err();
        assert!(matches!(
            err,
            HashError::InvalidHexLength { expected: 8, actual: 3 }
        ));
    }

    #[test]
    fn invalid_char() {
        match Digest::from_hex("dead-eef").unwrap_err() {
            HashError::InvalidHex {
                position: 4,
                character: '-',
            } => {}
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_ascii_rejected() {
        // 8 bytes but only 7 chars
        assert!(Digest::from_hex("deadbeé").is_err());
    }

    #[test]
    fn ordering_follows_value() {
        assert!(Digest::from_u32(1) < Digest::from_u32(2));
    }
}
