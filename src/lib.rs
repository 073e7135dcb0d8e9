//! drupass - Drupal 7 compatible stored-password hashing.
//!
//! Produces and verifies the platform's stretched, salted password hashes:
//! - `$S$` SHA-512 hashes (generated and verified)
//! - `$P$`/`$H$` phpass portable MD5 hashes (verified only)
//! - `U`-prefixed hashes migrated from plain MD5 storage (verified only)
//!
//! ```
//! let stored = drupass::hash(b"correct horse", Some(7)).unwrap();
//! assert_eq!(stored.len(), 55);
//! assert!(drupass::verify(b"correct horse", &stored));
//! assert!(!drupass::needs_rehash(&drupass::hash(b"pw", None).unwrap()));
//! ```

pub mod audit;
pub mod codec;
pub mod config;
pub mod password;
pub mod secret;
pub mod types;

pub use password::{PasswordHasher, hash, needs_rehash, verify};
