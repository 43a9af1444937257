use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

#[derive(Clone, Default)]
/// Bearer token shared by every service of one client.
/// Written by login and logout, read when a request is built
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::default();
        session.set_token(token);
        session
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write() = Some(token.into());
    }

    pub fn clear(&self) {
        *self.token.write() = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_token() {
        let session = Session::new();
        let shared = session.clone();
        assert!(!shared.is_authenticated());

        session.set_token("abc");
        assert_eq!(shared.token().as_deref(), Some("abc"));

        shared.clear();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn debug_hides_token() {
        let session = Session::with_token("very-secret");
        let printed = format!("{session:?}");
        assert!(!printed.contains("very-secret"));
        assert!(printed.contains("authenticated: true"));
    }
}
