//! # Password Hashing Policy
//!
//! The three operations an authentication layer needs on top of the codec:
//!
//! - [`PasswordHasher::hash`]: new `$S$` hash with a fresh salt
//! - [`PasswordHasher::verify`]: check a candidate against any supported stored format
//! - [`PasswordHasher::needs_rehash`]: detect foreign formats and outdated stretch factors
//!
//! A `PasswordHasher` holds nothing but the configured default iteration
//! count, so it is `Copy` and can be shared freely across threads. The free
//! functions [`hash`], [`verify`] and [`needs_rehash`] use
//! [`DEFAULT_HASH_COUNT`].
//!
//! ## Migrated Hashes
//!
//! Records imported from plain MD5 storage were rehashed as
//! `"U" + hash(md5_hex(password))`. Verification recognises the leading
//! marker, strips it, and substitutes the hex MD5 of the candidate before
//! running the normal pipeline.

use std::borrow::Cow;

use anyhow::{Context, Result};
use md5::{Digest, Md5};
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::codec::{Scheme, Settings, count_log2, crypt, enforce_bounds};
use crate::config::{DEFAULT_HASH_COUNT, HASH_LENGTH, MIGRATION_MARKER, MODERN_PREFIX};

/// Hashes `password` with the default stretch factor, or `count_log2` when given and non-zero.
///
/// # Errors
///
/// See [`PasswordHasher::hash_with_count`].
pub fn hash(password: &[u8], count_log2: Option<u32>) -> Result<String> {
    PasswordHasher::default().hash_with_count(password, count_log2)
}

/// Checks `password` against a stored hash.
#[must_use]
pub fn verify(password: &[u8], stored: &str) -> bool {
    PasswordHasher::default().verify(password, stored)
}

/// Reports whether `stored` should be regenerated under the default stretch factor.
#[must_use]
pub fn needs_rehash(stored: &str) -> bool {
    PasswordHasher::default().needs_rehash(stored)
}

/// Splits the migration marker off a stored hash.
///
/// Returns the hash that follows the marker, or `None` when there is no marker.
#[must_use]
pub fn strip_migration_marker(stored: &str) -> Option<&str> {
    stored.starts_with(MIGRATION_MARKER).then(|| &stored[1..])
}

/// Stored-password hasher bound to a default iteration count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    /// Clamped log2 iteration count used for new hashes and staleness checks.
    count_log2: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_COUNT)
    }
}

impl PasswordHasher {
    /// Creates a hasher whose default stretch factor is `2^count_log2`.
    ///
    /// Zero selects [`DEFAULT_HASH_COUNT`]; any other value is clamped into
    /// the accepted range.
    #[must_use]
    pub const fn new(count_log2: u32) -> Self {
        let count_log2 = if count_log2 == 0 { DEFAULT_HASH_COUNT } else { count_log2 };
        Self { count_log2: enforce_bounds(count_log2) }
    }

    /// The effective log2 iteration count.
    #[inline]
    #[must_use]
    pub const fn count_log2(&self) -> u32 {
        self.count_log2
    }

    /// Hashes `password` with this hasher's stretch factor.
    ///
    /// # Errors
    ///
    /// See [`PasswordHasher::hash_with_count`].
    #[inline]
    pub fn hash(&self, password: &[u8]) -> Result<String> {
        self.hash_with_count(password, None)
    }

    /// Hashes `password` into a 55-character `$S$` stored hash.
    ///
    /// A `count_log2` of `None` or `Some(0)` uses this hasher's count; other
    /// values are clamped into the accepted range rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the password is longer than 512 bytes or the
    /// system random number generator fails.
    pub fn hash_with_count(&self, password: &[u8], count_log2: Option<u32>) -> Result<String> {
        let count_log2 = match count_log2 {
            None | Some(0) => self.count_log2,
            Some(count) => count,
        };

        let settings = Settings::generate(count_log2).context("failed to generate salt")?;
        crypt(Scheme::Sha512, password, &settings)
    }

    /// Checks `password` against `stored`.
    ///
    /// Accepts `$S$`, `$P$` and `$H$` hashes, each optionally carrying the
    /// migration marker. Anything malformed or unrecognised verifies as
    /// `false`. The final comparison runs in constant time.
    #[must_use]
    pub fn verify(&self, password: &[u8], stored: &str) -> bool {
        match Self::check(password, stored) {
            Ok(matched) => matched,
            Err(e) => {
                debug!(error = %e, "stored hash rejected");
                false
            }
        }
    }

    /// Reports whether `stored` should be replaced by a fresh hash.
    ///
    /// True for anything that is not a 55-character `$S$` hash, and for
    /// `$S$` hashes whose iteration count differs from this hasher's.
    /// Migrated hashes always need a rehash.
    #[must_use]
    pub fn needs_rehash(&self, stored: &str) -> bool {
        if !stored.starts_with(MODERN_PREFIX) || stored.len() != HASH_LENGTH {
            return true;
        }

        count_log2(stored) != Some(self.count_log2)
    }

    fn check(password: &[u8], stored: &str) -> Result<bool> {
        let (password, stored) = match strip_migration_marker(stored) {
            Some(inner) => (Cow::Owned(hex::encode(Md5::digest(password)).into_bytes()), inner),
            None => (Cow::Borrowed(password), stored),
        };

        let scheme = Scheme::from_prefix(stored).context("unrecognized hash prefix")?;
        let settings = Settings::parse(stored)?;
        let computed = crypt(scheme, &password, &settings)?;

        Ok(bool::from(computed.as_bytes().ct_eq(stored.as_bytes())))
    }
}
