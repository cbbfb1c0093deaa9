//! Reproducible generation seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::Rng as _;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed identifying one generated puzzle.
///
/// Every generation run is a pure function of its seed: replaying a seed
/// reproduces the identical solution and puzzle. Seeds render as 64
/// lowercase hex characters and parse back from the same format, so a
/// puzzle can be shared or re-created from its printed seed alone.
///
/// # Examples
///
/// ```
/// use numplace_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed =
///     "630e102b510ed6ef6fe7d0907b84207d0034d6acb06289a5d9a69f3731aadddd"
///         .parse()
///         .unwrap();
/// assert_eq!(
///     seed.to_string(),
///     "630e102b510ed6ef6fe7d0907b84207d0034d6acb06289a5d9a69f3731aadddd"
/// );
///
/// // Derive a seed from arbitrary text
/// let phrase_seed = PuzzleSeed::from_phrase("rainy sunday");
/// assert_eq!(phrase_seed, PuzzleSeed::from_phrase("rainy sunday"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

/// Error returned when parsing a [`PuzzleSeed`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The input was not exactly 64 characters long.
    #[display("expected 64 hex characters, got {len}")]
    WrongLength {
        /// Number of characters found.
        len: usize,
    },
    /// The input contained a non-hex character.
    #[display("invalid hex character: {character:?}")]
    InvalidCharacter {
        /// The rejected character.
        character: char,
    },
}

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Creates a fresh seed from the thread-local random source.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from arbitrary text by hashing it with SHA-256.
    ///
    /// The same phrase always yields the same seed, which makes memorable
    /// puzzle identifiers possible without handling raw hex.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseSeedError::WrongLength { len });
        }
        if let Some(character) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseSeedError::InvalidCharacter { character });
        }
        let mut bytes = [0; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16)
                .expect("chunk was checked to be hex");
        }
        Ok(Self(bytes))
    }
}
