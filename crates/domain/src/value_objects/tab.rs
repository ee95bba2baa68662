//! Top-level panels of the authenticated view

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Panel tabs; exactly one is active at a time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Inventory,
    Profile,
    Settings,
}

impl Tab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inventory => "inventory",
            Self::Profile => "profile",
            Self::Settings => "settings",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inventory" => Ok(Self::Inventory),
            "profile" => Ok(Self::Profile),
            "settings" => Ok(Self::Settings),
            other => Err(DomainError::parse(format!("Unknown tab: {}", other))),
        }
    }
}
