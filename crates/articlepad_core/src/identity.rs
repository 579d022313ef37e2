//! Acting-user identity passed explicitly into save operations.

use crate::constants::GUEST_USERNAME;
use std::fmt;

/// Username the client acts as when persisting edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    username: String,
}

impl Identity {
    /// Resolve an identity from a stored username.
    ///
    /// A missing or empty value falls back to [`GUEST_USERNAME`]. The stored
    /// value is otherwise used verbatim.
    pub fn resolve(stored: Option<&str>) -> Self {
        match stored {
            Some(username) if !username.is_empty() => Self {
                username: username.to_string(),
            },
            _ => Self::guest(),
        }
    }

    /// The sentinel guest identity.
    pub fn guest() -> Self {
        Self {
            username: GUEST_USERNAME.to_string(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn is_guest(&self) -> bool {
        self.username == GUEST_USERNAME
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_username_resolves_to_guest() {
        let identity = Identity::resolve(None);
        assert_eq!(identity.username(), "guest");
        assert!(identity.is_guest());
    }

    #[test]
    fn empty_username_resolves_to_guest() {
        assert_eq!(Identity::resolve(Some("")).username(), "guest");
    }

    #[test]
    fn stored_username_is_used_verbatim() {
        let identity = Identity::resolve(Some(" Alice "));
        assert_eq!(identity.username(), " Alice ");
        assert!(!identity.is_guest());
        assert_eq!(identity.to_string(), " Alice ");
    }
}
