//! Registration and login against a username → digest store.

use tracing::{info, warn};

use storefront_core::{DomainError, DomainResult};
use storefront_infra::KeyValueStore;

use crate::credentials::{PasswordDigest, Username};

/// Detail returned when registering a taken username.
pub const USERNAME_TAKEN: &str = "Username already exists";

/// Detail returned for any failed login (unknown user or wrong password alike).
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Registers users and verifies their credentials.
///
/// Stateless apart from the store: login issues no session, so every call
/// re-checks the password from scratch.
#[derive(Debug)]
pub struct AuthService<S> {
    users: S,
}

impl<S> AuthService<S>
where
    S: KeyValueStore<Username, PasswordDigest>,
{
    pub fn new(users: S) -> Self {
        Self { users }
    }

    /// Store the digest of `password` under `username`.
    ///
    /// Fails with `Conflict` when the username is taken; the existing digest is
    /// left untouched. The uniqueness check and the insert are one atomic store
    /// operation.
    pub fn register(&self, username: &str, password: &str) -> DomainResult<()> {
        let username = Username::from(username);
        let digest = PasswordDigest::of(password);

        if !self.users.insert_if_absent(username.clone(), digest) {
            info!(%username, "registration rejected: username taken");
            return Err(DomainError::conflict(USERNAME_TAKEN));
        }

        info!(%username, "user registered");
        Ok(())
    }

    /// Verify `password` against the stored digest for `username`.
    pub fn login(&self, username: &str, password: &str) -> DomainResult<()> {
        let username = Username::from(username);

        match self.users.get(&username) {
            Some(digest) if digest.verify(password) => {
                info!(%username, "login succeeded");
                Ok(())
            }
            _ => {
                warn!(%username, "login failed");
                Err(DomainError::unauthorized(INVALID_CREDENTIALS))
            }
        }
    }

    /// The stored digest for `username`, if registered.
    pub fn digest_of(&self, username: &str) -> Option<PasswordDigest> {
        self.users.get(&Username::from(username))
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use storefront_infra::InMemoryStore;

    use super::*;

    fn service() -> AuthService<InMemoryStore<Username, PasswordDigest>> {
        AuthService::new(InMemoryStore::new())
    }

    #[test]
    fn register_then_login_succeeds() {
        let auth = service();
        auth.register("alice", "pw1").unwrap();
        assert_eq!(auth.login("alice", "pw1"), Ok(()));
    }

    #[test]
    fn duplicate_registration_conflicts_and_keeps_first_digest() {
        let auth = service();
        auth.register("alice", "pw1").unwrap();
        let before = auth.digest_of("alice").unwrap();

        let err = auth.register("alice", "something-else").unwrap_err();
        assert_eq!(err, DomainError::conflict(USERNAME_TAKEN));

        assert_eq!(auth.digest_of("alice").unwrap(), before);
        assert_eq!(auth.login("alice", "pw1"), Ok(()));
        assert_eq!(auth.user_count(), 1);
    }

    #[test]
    fn wrong_password_is_unauthorized() {
        let auth = service();
        auth.register("alice", "pw1").unwrap();
        assert_eq!(
            auth.login("alice", "wrong"),
            Err(DomainError::unauthorized(INVALID_CREDENTIALS))
        );
    }

    #[test]
    fn unknown_user_is_unauthorized() {
        let auth = service();
        assert_eq!(
            auth.login("nobody", "pw1"),
            Err(DomainError::unauthorized(INVALID_CREDENTIALS))
        );
    }

    #[test]
    fn stored_credential_is_not_the_plaintext() {
        let auth = service();
        auth.register("alice", "pw1").unwrap();
        let digest = auth.digest_of("alice").unwrap();
        assert_ne!(digest.as_str(), "pw1");
        assert_eq!(digest, PasswordDigest::of("pw1"));
    }

    #[test]
    fn same_password_yields_same_digest_for_different_users() {
        let auth = service();
        auth.register("alice", "shared").unwrap();
        auth.register("bob", "shared").unwrap();
        assert_eq!(auth.digest_of("alice"), auth.digest_of("bob"));
    }

    #[test]
    fn login_does_not_change_state() {
        let auth = service();
        auth.register("alice", "pw1").unwrap();
        for _ in 0..3 {
            assert_eq!(auth.login("alice", "pw1"), Ok(()));
        }
        assert_eq!(auth.user_count(), 1);
    }

    #[test]
    fn concurrent_registration_of_one_username_has_one_winner() {
        let store: Arc<InMemoryStore<Username, PasswordDigest>> = Arc::new(InMemoryStore::new());
        let auth = Arc::new(AuthService::new(store));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let auth = Arc::clone(&auth);
                thread::spawn(move || auth.register("alice", &format!("pw{i}")).is_ok())
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(successes, 1);
        assert_eq!(auth.user_count(), 1);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any registered pair logs in, and any other password does not.
            #[test]
            fn registered_credentials_round_trip(
                username in "[a-z]{1,16}",
                password in ".{0,32}",
                other in ".{0,32}",
            ) {
                prop_assume!(password != other);
                let auth = service();
                auth.register(&username, &password).unwrap();
                prop_assert!(auth.login(&username, &password).is_ok());
                prop_assert!(auth.login(&username, &other).is_err());
            }
        }
    }
}
