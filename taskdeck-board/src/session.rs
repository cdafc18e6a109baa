//! Session - the explicit authentication context
//!
//! Global "current user" state is modeled as an explicitly passed object,
//! never as process-wide ambient state. Sign-in initializes it, sign-out
//! tears it down; the store consults it before any owner-scoped operation.

use crate::error::{BoardError, Result};
use crate::types::UserId;
use std::sync::RwLock;

/// Authentication context shared by every component that needs the owner id
#[derive(Debug, Default)]
pub struct Session {
    user: RwLock<Option<UserId>>,
}

impl Session {
    /// Create a signed-out session
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session that is already signed in
    pub fn signed_in(user: UserId) -> Self {
        Self {
            user: RwLock::new(Some(user)),
        }
    }

    /// Sign in as the given user
    pub fn sign_in(&self, user: UserId) {
        tracing::debug!(user = %user, "session sign-in");
        *self.user.write().expect("session lock poisoned") = Some(user);
    }

    /// Sign out, clearing the current user
    pub fn sign_out(&self) {
        tracing::debug!("session sign-out");
        *self.user.write().expect("session lock poisoned") = None;
    }

    /// The currently signed-in user, if any
    pub fn current_user(&self) -> Option<UserId> {
        self.user.read().expect("session lock poisoned").clone()
    }

    /// The currently signed-in user, or an auth error
    pub fn require_user(&self) -> Result<UserId> {
        self.current_user().ok_or(BoardError::Auth)
    }
}
