//! Identity provider session types

use serde::{Deserialize, Serialize};

/// Profile of the logged-in user as reported by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    /// Avatar image reference, if the provider has one
    #[serde(default)]
    pub picture: Option<String>,
}

/// Current identity session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthSession {
    #[default]
    LoggedOut,
    LoggedIn(UserProfile),
}

impl AuthSession {
    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            AuthSession::LoggedIn(user) => Some(user),
            AuthSession::LoggedOut => None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, AuthSession::LoggedIn(_))
    }
}
