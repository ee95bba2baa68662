//! Request bodies sent to the game API

use serde::{Deserialize, Serialize};

/// Body of `POST {base}/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_wire_shape() {
        let json = serde_json::to_value(LoginRequest::new("demo", "demo123")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"username": "demo", "password": "demo123"})
        );
    }
}
