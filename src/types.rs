//! Common type definitions for drupass.
//!
//! - [`HashFormat`]: Classifies a stored hash by its textual shape
//! - [`Operation`]: The actions offered by the command-line front end

use strum::{Display, IntoStaticStr};

use crate::codec::Scheme;
use crate::config::HASH_LENGTH;
use crate::password::strip_migration_marker;

/// Length of a phpass portable (`$P$`/`$H$`) hash: 12 settings + 22 digest characters.
const PORTABLE_LENGTH: usize = 34;

/// Shape of a stored hash, decided from prefix and length alone.
///
/// This never accepts or rejects a password; it only tells a migration tool
/// what kind of record it is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum HashFormat {
    /// `$S$` SHA-512, 55 characters.
    #[strum(serialize = "modern")]
    Modern,

    /// `$P$` or `$H$` MD5, 34 characters.
    #[strum(serialize = "portable")]
    Portable,

    /// A recognised hash behind the `U` migration marker.
    #[strum(serialize = "migrated")]
    Migrated,

    /// Anything else.
    #[strum(serialize = "unknown")]
    Unknown,
}

impl HashFormat {
    /// Array containing all formats for iteration.
    pub const ALL: &'static [Self] = &[Self::Modern, Self::Portable, Self::Migrated, Self::Unknown];

    /// Classifies `stored`.
    #[must_use]
    pub fn identify(stored: &str) -> Self {
        match strip_migration_marker(stored) {
            Some(inner) if Self::shape(inner).is_some() => Self::Migrated,
            Some(_) => Self::Unknown,
            None => Self::shape(stored).unwrap_or(Self::Unknown),
        }
    }

    fn shape(stored: &str) -> Option<Self> {
        match (Scheme::from_prefix(stored)?, stored.len()) {
            (Scheme::Sha512, HASH_LENGTH) => Some(Self::Modern),
            (Scheme::Md5, PORTABLE_LENGTH) => Some(Self::Portable),
            _ => None,
        }
    }
}

/// An action of the command-line front end.
#[derive(Clone, Copy, PartialEq, Eq, Display)]
pub enum Operation {
    #[strum(serialize = "Hash a password")]
    Hash,

    #[strum(serialize = "Verify a password")]
    Verify,

    #[strum(serialize = "Check whether a hash needs rehashing")]
    NeedsRehash,
}

impl Operation {
    /// Array containing all operations for menu selection.
    pub const ALL: &'static [Self] = &[Self::Hash, Self::Verify, Self::NeedsRehash];
}
