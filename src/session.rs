//! Session state: the bearer token holder.

use std::sync::RwLock;

/// Holds the current bearer token for an authenticated session.
///
/// The token is absent until a sign-in succeeds and is replaced only by a
/// later successful sign-in. Reads happen on every authenticated request
/// while [`crate::Client::sign_in`] is the single writer, so the token sits
/// behind an `RwLock`. Critical sections are short and never held across an
/// `.await`.
#[derive(Debug, Default)]
pub(crate) struct Session {
    token: RwLock<Option<String>>,
}

impl Session {
    /// Whether a token has been installed.
    pub(crate) fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    /// A copy of the current token, if any.
    pub(crate) fn token(&self) -> Option<String> {
        self.read().clone()
    }

    /// Install a token, replacing any previous one.
    pub(crate) fn install(&self, token: String) {
        // A poisoned lock still holds a valid Option<String>.
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(token);
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Option<String>> {
        self.token.read().unwrap_or_else(|e| e.into_inner())
    }
}
