//! User identity handle

use serde::{Deserialize, Serialize};

/// An already-authenticated user's identity, resolved by an external identity
/// provider and passed into components explicitly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSession {
    /// Stable user identifier
    pub user_id: String,

    /// Email address, if the provider supplied one
    pub email: Option<String>,
}

impl UserSession {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Display name derived from the email local part, uppercased; falls
    /// back to the user id when no email is known
    pub fn display_name(&self) -> String {
        match &self.email {
            Some(email) => email
                .split('@')
                .next()
                .unwrap_or(email)
                .to_uppercase(),
            None => self.user_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_from_email() {
        let session = UserSession::new("u1").with_email("jane.doe@example.com");
        assert_eq!(session.display_name(), "JANE.DOE");
    }

    #[test]
    fn test_display_name_without_email() {
        assert_eq!(UserSession::new("u1").display_name(), "u1");
    }
}
