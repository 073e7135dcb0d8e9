use std::fmt::{self, Debug, Formatter};

use secrecy::{ExposeSecret, SecretBox};

/// Plaintext password held for the duration of one operation.
///
/// The bytes are zeroized on drop and never appear in `Debug` output, so a
/// stray `tracing` field or panic message cannot leak them.
pub struct Password {
    inner: SecretBox<Vec<u8>>,
}

impl Password {
    pub fn new(password: &str) -> Self {
        Self::from_vec(password.as_bytes().to_vec())
    }

    pub fn from_string(password: String) -> Self {
        Self::from_vec(password.into_bytes())
    }

    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self { inner: SecretBox::new(Box::new(bytes)) }
    }

    pub fn expose_secret(&self) -> &[u8] {
        self.inner.expose_secret()
    }
}

impl Debug for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Password([... {} bytes ...])", self.inner.expose_secret().len())
    }
}
