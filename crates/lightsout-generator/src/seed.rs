use std::{fmt, str::FromStr};

use sha2::{Digest as _, Sha256};

const SEED_LEN: usize = 32;

/// A 256-bit seed identifying a generated puzzle.
///
/// Seeds are shown and parsed as 64 lowercase hexadecimal digits.
///
/// # Examples
///
/// ```
/// use lightsout_generator::PuzzleSeed;
///
/// let text = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";
/// let seed: PuzzleSeed = text.parse()?;
/// assert_eq!(seed.to_string(), text);
/// # Ok::<(), lightsout_generator::PuzzleSeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; SEED_LEN]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes of the seed.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    /// Draws a fresh seed from the thread-local random generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives the seed used for one generation attempt.
    ///
    /// Each attempt hashes the puzzle seed together with the attempt number, so a
    /// rejected attempt never repeats and the accepted one is reproducible.
    #[must_use]
    pub(crate) fn derive(&self, attempt: u32) -> [u8; SEED_LEN] {
        let digest = Sha256::new()
            .chain_update(self.0)
            .chain_update(attempt.to_le_bytes())
            .finalize();
        let mut bytes = [0; SEED_LEN];
        bytes.copy_from_slice(&digest);
        bytes
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors returned when parsing a [`PuzzleSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleSeedParseError {
    /// The text was not 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// A character was not a hexadecimal digit.
    #[display("invalid hex digit {ch:?} at index {index}")]
    InvalidHexDigit {
        /// Character index in the input.
        index: usize,
        /// The offending character.
        ch: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = PuzzleSeedParseError;

    #[expect(clippy::cast_possible_truncation)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != SEED_LEN * 2 {
            return Err(PuzzleSeedParseError::InvalidLength { len });
        }

        let mut bytes = [0; SEED_LEN];
        let mut chars = s.chars().enumerate();
        for byte in &mut bytes {
            for _ in 0..2 {
                let Some((index, ch)) = chars.next() else {
                    return Err(PuzzleSeedParseError::InvalidLength { len });
                };
                let digit = ch
                    .to_digit(16)
                    .ok_or(PuzzleSeedParseError::InvalidHexDigit { index, ch })?;
                *byte = (*byte << 4) | digit as u8;
            }
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_parse_and_display() {
        let seed: PuzzleSeed = SEED.parse().unwrap();
        assert_eq!(seed.as_bytes()[0], 0xc1);
        assert_eq!(seed.as_bytes()[31], 0xf1);
        assert_eq!(seed.to_string(), SEED);
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let seed: PuzzleSeed = SEED.to_uppercase().parse().unwrap();
        assert_eq!(seed.to_string(), SEED);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            "abcd".parse::<PuzzleSeed>(),
            Err(PuzzleSeedParseError::InvalidLength { len: 4 })
        );
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        let text = format!("{}g", &SEED[..63]);
        assert_eq!(
            text.parse::<PuzzleSeed>(),
            Err(PuzzleSeedParseError::InvalidHexDigit { index: 63, ch: 'g' })
        );
    }

    #[test]
    fn test_derive_depends_on_attempt() {
        let seed: PuzzleSeed = SEED.parse().unwrap();
        assert_eq!(seed.derive(0), seed.derive(0));
        assert_ne!(seed.derive(0), seed.derive(1));
    }
}
