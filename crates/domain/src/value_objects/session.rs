//! Authenticated session held by the client

use serde::{Deserialize, Serialize};

/// The logged-in player's identity
///
/// Stored under the `currentUser` key as JSON `{"id": .., "username": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
}

impl CurrentUser {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
        }
    }
}

/// Authentication token plus the user it belongs to
///
/// Both fields are absent while logged out. A session only counts as
/// authenticated once a token and a user with a non-empty username are both
/// present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub access_token: Option<String>,
    pub user: Option<CurrentUser>,
}

impl Session {
    pub fn new(access_token: impl Into<String>, user: CurrentUser) -> Self {
        Self {
            access_token: Some(access_token.into()),
            user: Some(user),
        }
    }

    /// Whether a token is held, regardless of the user record
    pub fn has_token(&self) -> bool {
        self.access_token.is_some()
    }

    /// Whether the session is complete enough to resume at startup
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
            && self
                .user
                .as_ref()
                .is_some_and(|user| !user.username.is_empty())
    }

    /// Reset both fields to absent
    pub fn clear(&mut self) {
        self.access_token = None;
        self.user = None;
    }
}
