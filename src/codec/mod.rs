//! # Hash Codec
//!
//! The bit-exact core of the stored-password format: the stretching loop,
//! the crypt-style alphabet encoding, and the settings prefix that carries
//! the scheme, iteration count and salt inside the hash text itself.
//!
//! ## Layout
//!
//! - **Alphabet Layer**: [`alphabet`] maps 6-bit values to symbols and packs bytes
//! - **Settings Layer**: [`Settings`] parses and generates the 12-character prefix
//! - **Digest Layer**: [`Scheme`] selects SHA-512 or MD5 and runs the stretching loop
//!
//! [`crypt`] ties the three together; it is the only routine that produces
//! stored-hash text.

use anyhow::{Result, ensure};

pub mod alphabet;
mod scheme;
mod settings;
mod stretch;

pub use scheme::Scheme;
pub use settings::{Settings, count_log2, enforce_bounds};

use crate::config::{HASH_LENGTH, MAX_PASSWORD_LENGTH, SETTING_LENGTH};

/// Computes the stored-hash text for `password` under `settings`.
///
/// The output is the settings text followed by the encoded digest, cut to
/// [`HASH_LENGTH`] characters. MD5 output (34 characters) is shorter than
/// the cap and is returned whole.
///
/// # Errors
///
/// Returns an error if the password exceeds [`MAX_PASSWORD_LENGTH`] bytes or
/// the encoded length disagrees with the digest size.
pub fn crypt(scheme: Scheme, password: &[u8], settings: &Settings) -> Result<String> {
    ensure!(password.len() <= MAX_PASSWORD_LENGTH, "password exceeds {MAX_PASSWORD_LENGTH} bytes");

    let digest = scheme.stretch(settings.salt(), password, settings.count_log2());

    let expected = SETTING_LENGTH + alphabet::encoded_len(scheme.digest_len());
    let mut output = String::with_capacity(expected);
    output.push_str(settings.as_str());
    output.push_str(&alphabet::encode(&digest));

    ensure!(output.len() == expected, "encoded hash is {} characters, expected {expected}", output.len());

    output.truncate(HASH_LENGTH);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crypt_sha512_vector() {
        let settings = Settings::with_salt(15, &[0, 1, 2, 3, 4, 5]);
        let hash = crypt(Scheme::Sha512, b"password", &settings).unwrap();
        assert_eq!(hash, "$S$D.2U.1EE/Rv3Jf9ZNiGnrXobfKPWaocZXJlb3JwQxYSCpLHO.Lc8");
        assert_eq!(hash.len(), HASH_LENGTH);
    }

    #[test]
    fn test_crypt_md5_vector_is_untruncated() {
        let stored = "$P$9IQRaTwmfeRo7ud9Fh4E2PdI0S3r.L0";
        let settings = Settings::parse(stored).unwrap();
        let hash = crypt(Scheme::Md5, b"test12345", &settings).unwrap();
        assert_eq!(hash, stored);
        assert_eq!(hash.len(), 34);
    }

    #[test]
    fn test_crypt_phpbb_tag() {
        let settings = Settings::parse("$H$7V7qMYJaN").unwrap();
        let hash = crypt(Scheme::Md5, b"password", &settings).unwrap();
        assert_eq!(hash, "$H$7V7qMYJaNrqdQf/JoGBOqxA74p9NJP/");
    }

    #[test]
    fn test_crypt_empty_password() {
        let settings = Settings::with_salt(7, b"abcdef");
        let hash = crypt(Scheme::Sha512, b"", &settings).unwrap();
        assert_eq!(hash, "$S$5V7qMYJaNLbmua9JDki6ymmiwtHK85CdXvmJcxo/uiaJ3wuXB00.");
    }

    #[test]
    fn test_crypt_password_length_limit() {
        let settings = Settings::with_salt(7, b"abcdef");
        assert!(crypt(Scheme::Sha512, &[b'a'; MAX_PASSWORD_LENGTH], &settings).is_ok());
        assert!(crypt(Scheme::Sha512, &[b'a'; MAX_PASSWORD_LENGTH + 1], &settings).is_err());
    }
}
