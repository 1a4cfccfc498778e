//! Username and password digest value types.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use storefront_core::ValueObject;

/// Unique key of a registered user.
///
/// Taken verbatim from the request: no trimming, case folding, or length rules.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Username {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Username {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl ValueObject for Username {}

/// Lowercase hex SHA-256 of a password.
///
/// Unsalted: equal passwords always produce equal digests, across users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Length of the hex encoding (32 bytes, two chars each).
    pub const HEX_LEN: usize = 64;

    pub fn of(password: &str) -> Self {
        Self(hex::encode(Sha256::digest(password.as_bytes())))
    }

    /// Whether `password` hashes to this digest. Compares in constant time.
    pub fn verify(&self, password: &str) -> bool {
        let candidate = Self::of(password);
        self.0.as_bytes().ct_eq(candidate.0.as_bytes()).into()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for PasswordDigest {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_matches_known_sha256_vector() {
        assert_eq!(
            PasswordDigest::of("abc").as_str(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn empty_password_still_has_a_full_length_digest() {
        assert_eq!(PasswordDigest::of("").as_str().len(), PasswordDigest::HEX_LEN);
    }

    #[test]
    fn verify_accepts_only_the_original_password() {
        let digest = PasswordDigest::of("pw1");
        assert!(digest.verify("pw1"));
        assert!(!digest.verify("pw2"));
        assert!(!digest.verify("PW1"));
    }

    #[test]
    fn username_is_not_normalized() {
        assert_ne!(Username::from("alice"), Username::from("Alice"));
        assert_ne!(Username::from("alice"), Username::from(" alice"));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the digest is deterministic and fixed-length lowercase hex.
            #[test]
            fn digest_is_deterministic_fixed_length_hex(password in ".*") {
                let a = PasswordDigest::of(&password);
                let b = PasswordDigest::of(&password);
                prop_assert_eq!(&a, &b);
                prop_assert_eq!(a.as_str().len(), PasswordDigest::HEX_LEN);
                prop_assert!(a.as_str().chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
            }

            /// Property: the stored form is never the plaintext.
            #[test]
            fn digest_never_equals_plaintext(password in ".*") {
                let digest = PasswordDigest::of(&password);
                prop_assert_ne!(digest.as_str(), password.as_str());
            }
        }
    }
}
