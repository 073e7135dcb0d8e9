//! The iterated ("stretched") hash.
//!
//! ```text
//! h = H(salt || password)
//! repeat 2^count_log2 times:
//!     h = H(h || password)
//! ```
//!
//! The seed hash is not part of the repeat count, so `H` runs
//! `2^count_log2 + 1` times. Stored phpass and Drupal hashes depend on that
//! exact loop shape.

use sha2::Digest;

use crate::config::MAX_HASH_COUNT;

/// Runs the stretching loop with digest `D` and returns the final raw digest.
///
/// `count_log2` must already be validated against the accepted bounds.
pub fn stretch<D: Digest>(salt: &[u8], password: &[u8], count_log2: u32) -> Vec<u8> {
    debug_assert!(count_log2 <= MAX_HASH_COUNT, "iteration count must be bounded before stretching");

    let rounds = 1u64 << count_log2;
    let mut hash = D::new().chain_update(salt).chain_update(password).finalize();

    for _ in 0..rounds {
        hash = D::new().chain_update(&hash).chain_update(password).finalize();
    }

    hash.to_vec()
}

#[cfg(test)]
mod tests {
    use md5::Md5;
    use sha2::Sha512;

    use super::*;

    #[test]
    fn test_stretch_zero_count_is_two_invocations() {
        let seed = Md5::digest(b"saltpass");
        let expected = Md5::new().chain_update(seed).chain_update(b"pass").finalize();
        assert_eq!(stretch::<Md5>(b"salt", b"pass", 0), expected.to_vec());
    }

    #[test]
    fn test_stretch_output_sizes() {
        assert_eq!(stretch::<Md5>(b"12345678", b"pw", 1).len(), 16);
        assert_eq!(stretch::<Sha512>(b"12345678", b"pw", 1).len(), 64);
    }

    #[test]
    fn test_stretch_depends_on_every_input() {
        let base = stretch::<Sha512>(b"12345678", b"pw", 3);
        assert_eq!(base, stretch::<Sha512>(b"12345678", b"pw", 3));
        assert_ne!(base, stretch::<Sha512>(b"12345679", b"pw", 3));
        assert_ne!(base, stretch::<Sha512>(b"12345678", b"px", 3));
        assert_ne!(base, stretch::<Sha512>(b"12345678", b"pw", 4));
    }
}
