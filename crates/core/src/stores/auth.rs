//! User directory and session store

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{Error, Result};
use crate::invariants;
use crate::models::{Principal, UserRecord};
use crate::storage::{load_slot, save_slot, SlotStore};

/// Durable slot name; must stay bit-exact to read existing deployments
pub const AUTH_SLOT: &str = "campus-auth-storage";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct AuthState {
    user: Option<Principal>,
    users: Vec<UserRecord>,
}

/// Account directory and active session.
///
/// At most one principal is signed in at a time; the directory is
/// append-only. Credentials are compared and stored verbatim — see
/// [`UserRecord`] for the threat-model caveat on plaintext passwords.
pub struct AuthStore<'a> {
    slots: &'a dyn SlotStore,
    state: AuthState,
}

impl<'a> AuthStore<'a> {
    /// Construct from the durable slot, falling back to an empty directory
    pub fn new(slots: &'a dyn SlotStore) -> Self {
        let state = load_slot(slots, AUTH_SLOT).unwrap_or_default();
        Self { slots, state }
    }

    /// Register a new account and sign it in.
    ///
    /// Fails with [`Error::DuplicateEmail`] when the email (case-sensitive)
    /// already has a directory record.
    #[instrument(skip(self, password))]
    pub fn register(&mut self, name: &str, email: &str, password: &str) -> Result<Principal> {
        if self.state.users.iter().any(|u| u.email == email) {
            return Err(Error::DuplicateEmail);
        }

        let record = UserRecord {
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
        };
        let principal = Principal::for_record(&record);
        self.state.users.push(record);
        self.state.user = Some(principal.clone());
        self.check_invariants();
        self.persist();
        Ok(principal)
    }

    /// Sign in with an exact credential match.
    ///
    /// No lockout and no rate limit; a mismatch on either field is
    /// [`Error::NotFound`].
    #[instrument(skip(self, password))]
    pub fn login(&mut self, email: &str, password: &str) -> Result<Principal> {
        let record = self
            .state
            .users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .ok_or_else(|| Error::NotFound("no account matches these credentials".to_string()))?;

        let principal = Principal::for_record(record);
        self.state.user = Some(principal.clone());
        self.persist();
        Ok(principal)
    }

    /// Clear the active session; the directory is untouched
    pub fn logout(&mut self) {
        self.state.user = None;
        self.persist();
    }

    /// The signed-in user, if any
    pub fn current_principal(&self) -> Option<&Principal> {
        self.state.user.as_ref()
    }

    /// Number of registered accounts
    pub fn user_count(&self) -> usize {
        self.state.users.len()
    }

    fn check_invariants(&self) {
        invariants::assert_directory_invariants(&self.state.users, self.state.user.as_ref());
    }

    fn persist(&self) {
        save_slot(self.slots, AUTH_SLOT, &self.state);
    }
}
