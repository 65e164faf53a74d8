//! Session state
//!
//! Tracks the logged-in identity for one run of the program. A session is
//! either logged out or holds exactly one logged-in username; there are no
//! other states.

#[derive(Debug, Default)]
pub struct Session {
    username: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the logged-in username if any.
    pub fn current_user(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }

    /// Transitions to the logged-in state for `username`.
    ///
    /// Also used to adopt a new identity after a username change.
    pub fn login(&mut self, username: String) {
        self.username = Some(username);
    }

    /// Clears the logged-in identity.
    pub fn logout(&mut self) {
        self.username = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_logout_transitions() {
        let mut session = Session::new();
        assert!(!session.is_logged_in());
        assert_eq!(session.current_user(), None);

        session.login("alice".to_string());
        assert!(session.is_logged_in());
        assert_eq!(session.current_user(), Some("alice"));

        session.logout();
        assert!(!session.is_logged_in());
    }
}
