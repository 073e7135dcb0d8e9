use md5::Md5;
use sha2::Sha512;
use strum::{Display, IntoStaticStr};

use crate::codec::stretch::stretch;
use crate::config::{MODERN_PREFIX, PHPBB_PREFIX, PORTABLE_PREFIX};

/// Digest algorithm selected by the three-character prefix of a stored hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum Scheme {
    /// `$S$`: the format this crate generates.
    #[strum(serialize = "SHA-512")]
    Sha512,

    /// `$P$` and `$H$`: phpass portable hashes, kept for verification only.
    #[strum(serialize = "MD5")]
    Md5,
}

impl Scheme {
    /// Selects the scheme from the leading `$X$` of `stored`.
    ///
    /// Returns `None` for any prefix this crate cannot verify.
    #[must_use]
    pub fn from_prefix(stored: &str) -> Option<Self> {
        match stored.get(..MODERN_PREFIX.len()) {
            Some(MODERN_PREFIX) => Some(Self::Sha512),
            Some(PORTABLE_PREFIX | PHPBB_PREFIX) => Some(Self::Md5),
            _ => None,
        }
    }

    /// Raw digest size in bytes.
    #[inline]
    #[must_use]
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Sha512 => 64,
            Self::Md5 => 16,
        }
    }

    /// Runs the stretching loop with this scheme's digest.
    pub fn stretch(self, salt: &[u8], password: &[u8], count_log2: u32) -> Vec<u8> {
        match self {
            Self::Sha512 => stretch::<Sha512>(salt, password, count_log2),
            Self::Md5 => stretch::<Md5>(salt, password, count_log2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_prefix() {
        assert_eq!(Scheme::from_prefix("$S$D.2U.1EE/"), Some(Scheme::Sha512));
        assert_eq!(Scheme::from_prefix("$P$9IQRaTwmf"), Some(Scheme::Md5));
        assert_eq!(Scheme::from_prefix("$H$9IQRaTwmf"), Some(Scheme::Md5));
    }

    #[test]
    fn test_from_prefix_rejects_unknown() {
        for stored in ["", "$S", "$2y$10$abc", "$1$abc", "U$S$D.2U", "S$D", "$s$D.2U.1EE/", "é$S$"] {
            assert_eq!(Scheme::from_prefix(stored), None, "{stored}");
        }
    }

    #[test]
    fn test_digest_len_matches_stretch_output() {
        for scheme in [Scheme::Sha512, Scheme::Md5] {
            assert_eq!(scheme.stretch(b"saltsalt", b"pw", 0).len(), scheme.digest_len());
        }
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Scheme::Sha512.to_string(), "SHA-512");
        let label: &'static str = Scheme::Md5.into();
        assert_eq!(label, "MD5");
    }
}
