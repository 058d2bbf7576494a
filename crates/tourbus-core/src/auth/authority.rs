//! The session authority
//!
//! One authority exists per running console. It is created by the
//! application and handed to every view that needs the current role; clones
//! share the same session.

use std::sync::Arc;

use tokio::sync::watch;

use super::{CredentialTable, Role, Session};
use crate::error::{AuthError, Result};

/// Owner of the console session
///
/// The session lives in a watch channel: writes replace the whole value at
/// once, readers always see a consistent role/username pair, and
/// [`subscribe`](Self::subscribe) lets views re-render on change.
#[derive(Clone)]
pub struct SessionAuthority {
    inner: Arc<Inner>,
}

struct Inner {
    credentials: CredentialTable,
    state: watch::Sender<Session>,
}

impl SessionAuthority {
    /// Create an authority starting in the guest state
    pub fn new(credentials: CredentialTable) -> Self {
        let (state, _) = watch::channel(Session::Guest);
        Self {
            inner: Arc::new(Inner { credentials, state }),
        }
    }

    /// Attempt to log in
    ///
    /// On a match the session switches to the credential's role and username,
    /// whatever it was before. On a mismatch the session is left untouched.
    pub fn login(&self, username: &str, password: &str) -> Result<Session> {
        let Some(credential) = self.inner.credentials.find(username, password) else {
            tracing::warn!(username = username.trim(), "Login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        let session = Session::Authenticated {
            role: credential.role,
            username: credential.username.clone(),
        };
        let previous = self.inner.state.send_replace(session.clone());

        tracing::info!(
            username = %credential.username,
            role = %credential.role,
            previous = %previous.role(),
            "Login succeeded"
        );
        Ok(session)
    }

    /// Return to the guest state
    ///
    /// Subscribers are only notified when the session actually changes.
    pub fn logout(&self) {
        let changed = self.inner.state.send_if_modified(|session| {
            if session.is_authenticated() {
                *session = Session::Guest;
                true
            } else {
                false
            }
        });

        if changed {
            tracing::debug!("Logged out");
        }
    }

    /// Snapshot of the current session
    pub fn session(&self) -> Session {
        self.inner.state.borrow().clone()
    }

    pub fn role(&self) -> Role {
        self.inner.state.borrow().role()
    }

    pub fn username(&self) -> Option<String> {
        self.inner.state.borrow().username().map(str::to_owned)
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.state.borrow().is_authenticated()
    }

    /// Receiver that observes every session change from now on
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.inner.state.subscribe()
    }

    pub fn credentials(&self) -> &CredentialTable {
        &self.inner.credentials
    }
}

impl Default for SessionAuthority {
    fn default() -> Self {
        Self::new(CredentialTable::builtin())
    }
}

impl std::fmt::Debug for SessionAuthority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionAuthority")
            .field("session", &*self.inner.state.borrow())
            .field("credentials", &self.inner.credentials.len())
            .finish()
    }
}
