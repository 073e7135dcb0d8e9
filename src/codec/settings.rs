//! The 12-character settings prefix of a stored hash.
//!
//! ```text
//! $S$D.2U.1EE/
//! ^^^ ^^^^^^^^
//!  |  |   salt (8 alphabet characters)
//!  |  iteration count (log2, one alphabet character)
//!  scheme tag
//! ```

use std::fmt::{self, Display, Formatter};

use anyhow::{Context, Result, anyhow, ensure};
use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::codec::alphabet::{encode, position, symbol};
use crate::config::{COUNT_OFFSET, MAX_HASH_COUNT, MIN_HASH_COUNT, MODERN_PREFIX, SALT_BYTES, SALT_LENGTH, SALT_OFFSET, SETTING_LENGTH};

/// Clamps a log2 iteration count into the accepted range.
#[inline]
#[must_use]
pub const fn enforce_bounds(count_log2: u32) -> u32 {
    if count_log2 < MIN_HASH_COUNT {
        MIN_HASH_COUNT
    } else if count_log2 > MAX_HASH_COUNT {
        MAX_HASH_COUNT
    } else {
        count_log2
    }
}

/// Reads the log2 iteration count character of a stored hash or settings string.
///
/// Returns `None` when the string is too short or the character lies outside
/// the alphabet. No range check is applied.
#[must_use]
pub fn count_log2(stored: &str) -> Option<u32> {
    stored.as_bytes().get(COUNT_OFFSET).copied().and_then(position)
}

/// A validated settings string.
///
/// The text is kept verbatim so a recomputed hash reproduces the stored
/// prefix byte for byte, whatever scheme tag it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    text: String,
    count_log2: u32,
}

impl Settings {
    /// Parses the settings out of the first 12 characters of `stored`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is shorter than a settings prefix, the
    /// `$` delimiters are missing, the count character is outside the
    /// alphabet, or the count lies outside the accepted range.
    pub fn parse(stored: &str) -> Result<Self> {
        let text = stored.get(..SETTING_LENGTH).context("settings shorter than 12 characters")?;
        let bytes = text.as_bytes();

        ensure!(bytes[0] == b'$' && bytes[2] == b'$', "malformed settings delimiters");

        let count_log2 = count_log2(text).context("iteration count character outside alphabet")?;
        ensure!((MIN_HASH_COUNT..=MAX_HASH_COUNT).contains(&count_log2), "iteration count 2^{count_log2} outside accepted range");

        Ok(Self { text: text.to_owned(), count_log2 })
    }

    /// Builds `$S$` settings from a log2 count and six salt bytes.
    ///
    /// The count is clamped; this never fails.
    #[must_use]
    pub fn with_salt(count_log2: u32, salt: &[u8; SALT_BYTES]) -> Self {
        let count_log2 = enforce_bounds(count_log2);

        let mut text = String::with_capacity(SETTING_LENGTH);
        text.push_str(MODERN_PREFIX);
        text.push(char::from(symbol(count_log2)));
        text.push_str(&encode(salt));

        Self { text, count_log2 }
    }

    /// Builds `$S$` settings with a fresh salt from the operating system RNG.
    ///
    /// # Errors
    ///
    /// Returns an error if the system random number generator is unavailable.
    pub fn generate(count_log2: u32) -> Result<Self> {
        let mut salt = [0u8; SALT_BYTES];
        OsRng.try_fill_bytes(&mut salt).map_err(|e| anyhow!("rng failed: {e}"))?;

        Ok(Self::with_salt(count_log2, &salt))
    }

    /// The log2 iteration count.
    #[inline]
    #[must_use]
    pub const fn count_log2(&self) -> u32 {
        self.count_log2
    }

    /// The encoded salt characters, used as raw bytes by the stretching loop.
    #[inline]
    #[must_use]
    pub fn salt(&self) -> &[u8] {
        &self.text.as_bytes()[SALT_OFFSET..SALT_OFFSET + SALT_LENGTH]
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Display for Settings {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
