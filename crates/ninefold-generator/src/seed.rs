//! Reproducible generation seeds.

use std::{fmt, str::FromStr};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// Seed for one reproducible puzzle generation.
///
/// A seed is 32 bytes of entropy, displayed and parsed as 64 lowercase hex
/// digits. The same seed always produces the same puzzle, which makes
/// generated puzzles shareable and bug reports replayable.
///
/// Each generation phase derives its own RNG stream from the seed, so a
/// retry of one phase never disturbs the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Wraps raw seed bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread RNG.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Derives the RNG for one generation phase.
    ///
    /// The stream is keyed by the seed, a phase label, and the attempt
    /// counter, so every phase of every attempt is independent.
    pub(crate) fn phase_rng(&self, label: &str, attempt: u32) -> Pcg64 {
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        hasher.update(label.as_bytes());
        hasher.update(attempt.to_le_bytes());
        Pcg64::from_seed(hasher.finalize().into())
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

/// Error from parsing a [`PuzzleSeed`] from a hex string.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The input did not contain exactly 64 characters.
    #[display("expected 64 hex digits, found {count} characters")]
    BadLength {
        /// Number of characters found.
        count: usize,
    },
    /// A character was not a hex digit.
    #[display("invalid hex digit {character:?}")]
    BadCharacter {
        /// The offending character.
        character: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0; 32];
        let mut chars = s.chars();
        for byte in &mut bytes {
            for _ in 0..2 {
                let Some(character) = chars.next() else {
                    return Err(ParseSeedError::BadLength {
                        count: s.chars().count(),
                    });
                };
                let Some(value) = hex_value(character) else {
                    return Err(ParseSeedError::BadCharacter { character });
                };
                *byte = (*byte << 4) | value;
            }
        }
        if chars.next().is_some() {
            return Err(ParseSeedError::BadLength {
                count: s.chars().count(),
            });
        }
        Ok(Self(bytes))
    }
}

fn hex_value(character: char) -> Option<u8> {
    character
        .to_digit(16)
        .and_then(|value| u8::try_from(value).ok())
}
