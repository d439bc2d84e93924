//! Seat secrets and the credentials used to claim a seat.
//!
//! A [`Secret`] only ever holds a SHA-256 digest of the password. It has no
//! `Serialize` impl and its `Debug` output is redacted, so no view or log line
//! can carry it.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::constants;

/// Digest of a seat password.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret([u8; 32]);

impl Secret {
    #[must_use]
    pub fn new(password: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(constants::SECRET_DIGEST_DOMAIN);
        hasher.update(password.as_bytes());
        Self(hasher.finalize().into())
    }

    /// Constant-time comparison against a candidate password.
    #[must_use]
    pub fn verify(&self, password: &str) -> bool {
        let candidate = Self::new(password);
        self.0
            .iter()
            .zip(candidate.0.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

/// A (name, password) pair presented by a caller.
#[derive(Clone, Copy)]
pub struct Credentials<'a> {
    pub name: &'a str,
    pub password: &'a str,
}

impl<'a> Credentials<'a> {
    #[must_use]
    pub fn new(name: &'a str, password: &'a str) -> Self {
        Self { name, password }
    }
}

impl fmt::Debug for Credentials<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, distributions::Alphanumeric};

    use super::*;

    #[test]
    fn verifies_original_password() {
        let secret = Secret::new("Secr3t!");
        assert!(secret.verify("Secr3t!"));
        assert!(!secret.verify("secr3t!"));
        assert!(!secret.verify(""));
    }

    #[test]
    fn random_passwords_only_match_themselves() {
        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            let len = rng.gen_range(1..40);
            let password: String = (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(len)
                .map(char::from)
                .collect();
            let secret = Secret::new(&password);
            assert!(secret.verify(&password));
            assert!(!secret.verify(&format!("{password}x")));
        }
    }

    #[test]
    fn debug_never_prints_material() {
        let secret = Secret::new("hunter2");
        assert_eq!(format!("{secret:?}"), "Secret(<redacted>)");

        let creds = Credentials::new("Alice", "hunter2");
        let shown = format!("{creds:?}");
        assert!(shown.contains("Alice"));
        assert!(!shown.contains("hunter2"));
    }
}
