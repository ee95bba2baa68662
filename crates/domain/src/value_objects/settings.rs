//! Client settings value object
//!
//! Settings are persisted independently of the session and survive logout.

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// API base URL used when nothing has been configured
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// User-editable client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Base URL of the game API, without a trailing `/login` or `/inventory`
    pub api_base_url: String,
    /// Whether the inventory tab refreshes itself periodically
    pub auto_refresh_enabled: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            auto_refresh_enabled: false,
        }
    }
}

impl ClientSettings {
    pub fn new(api_base_url: impl Into<String>, auto_refresh_enabled: bool) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            auto_refresh_enabled,
        }
    }

    /// Join an endpoint path onto the base URL
    ///
    /// A trailing slash on the base is tolerated so `http://host/api/` and
    /// `http://host/api` resolve to the same endpoint.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Parse a stored boolean flag (`"true"` / `"false"`)
pub fn parse_flag(raw: &str) -> Result<bool, DomainError> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(DomainError::parse(format!("Invalid flag value: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = ClientSettings::default();
        assert_eq!(settings.api_base_url, "http://localhost:8080/api");
        assert!(!settings.auto_refresh_enabled);
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let settings = ClientSettings::new("http://localhost:8080/api", false);
        assert_eq!(settings.endpoint("login"), "http://localhost:8080/api/login");

        let trailing = ClientSettings::new("http://localhost:8080/api/", false);
        assert_eq!(
            trailing.endpoint("/inventory"),
            "http://localhost:8080/api/inventory"
        );
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Ok(true));
        assert_eq!(parse_flag("false"), Ok(false));
        assert!(matches!(parse_flag("yes"), Err(DomainError::Parse(_))));
    }
}
