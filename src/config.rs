//! Global Configuration Constants
//!
//! This module contains the fixed parameters of the Drupal 7 stored-password
//! format. Every value here is part of the on-disk representation of existing
//! user records: changing one breaks verification of hashes already stored.
//!
//! ## Runtime Overrides
//!
//! Only the stretch factor is tunable at runtime. [`DEFAULT_HASH_COUNT`] is the
//! fallback used when a caller does not supply one, mirroring the platform's
//! `password_count_log2` variable. Everything else is format, not policy.

/// Application name used in user interfaces.
pub const APP_NAME: &str = "drupass";

// === Iteration Count Bounds ===
// The count is stored as a single alphabet character holding log2 of the
// number of stretching rounds.

/// Smallest accepted log2 iteration count.
///
/// Requests below this are raised to it when hashing; stored hashes carrying
/// a smaller value are rejected when verifying.
pub const MIN_HASH_COUNT: u32 = 7;

/// Largest accepted log2 iteration count.
///
/// 2^30 rounds is the ceiling on work a single verification may demand, so
/// a crafted stored hash cannot pin a worker indefinitely.
pub const MAX_HASH_COUNT: u32 = 30;

/// Default log2 iteration count for newly generated hashes.
///
/// 2^15 rounds of SHA-512 is the platform's shipped stretch factor.
/// Hashes with any other embedded count are reported as needing a rehash.
pub const DEFAULT_HASH_COUNT: u32 = 15;

// === Stored Hash Layout ===

/// Length of a modern (`$S$`) stored hash.
///
/// The encoded SHA-512 digest is 86 characters; only enough of it to bring
/// the total to 55 is kept. Legacy MD5 hashes are 34 characters and are
/// never truncated.
pub const HASH_LENGTH: usize = 55;

/// Length of the settings prefix: `$`, tag, `$`, count character, salt.
pub const SETTING_LENGTH: usize = 12;

/// Offset of the iteration count character inside the settings.
pub const COUNT_OFFSET: usize = 3;

/// Offset of the salt inside the settings.
pub const SALT_OFFSET: usize = 4;

/// Number of encoded salt characters.
pub const SALT_LENGTH: usize = 8;

/// Random bytes drawn per salt; 6 bytes encode to exactly [`SALT_LENGTH`] characters.
pub const SALT_BYTES: usize = 6;

/// Prefix of stored hashes produced by this crate (SHA-512).
pub const MODERN_PREFIX: &str = "$S$";

/// phpass portable prefix (MD5).
pub const PORTABLE_PREFIX: &str = "$P$";

/// phpBB flavour of the phpass portable prefix (MD5), same scheme.
pub const PHPBB_PREFIX: &str = "$H$";

/// Leading marker of hashes migrated from plain unsalted MD5 storage.
///
/// Such records were produced by hashing the hex MD5 of the password, so
/// verification must apply that digest first. The marker is always followed
/// by the `$` of a regular settings string.
pub const MIGRATION_MARKER: &str = "U$";

// === Input Limits ===

/// Maximum password length in bytes.
///
/// Each stretching round hashes the full password, so unbounded input turns
/// a login form into a CPU amplifier.
pub const MAX_PASSWORD_LENGTH: usize = 512;
