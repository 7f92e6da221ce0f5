//! Account roles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role gating which operations a caller may invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Manages catalog, users and reporting.
    Admin,
    /// Browses products, places orders, edits own profile.
    #[default]
    Customer,
}

impl Role {
    /// Parse a role name, ignoring case. Unknown names yield `None`.
    #[must_use]
    pub fn from_str_case_insensitive(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Some(Self::Admin),
            "customer" => Some(Self::Customer),
            _ => None,
        }
    }

    /// Check if this is the admin role.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Get the role name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Customer => "customer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_role() {
        assert_eq!(Role::from_str_case_insensitive("admin"), Some(Role::Admin));
        assert_eq!(Role::from_str_case_insensitive("ADMIN"), Some(Role::Admin));
        assert_eq!(
            Role::from_str_case_insensitive(" Customer "),
            Some(Role::Customer)
        );
        assert_eq!(Role::from_str_case_insensitive("root"), None);
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"customer\"").unwrap();
        assert_eq!(role, Role::Customer);
    }
}
