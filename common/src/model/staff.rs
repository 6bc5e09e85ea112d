use serde::{Deserialize, Serialize};

/// Access level of a staff account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Staff,
    Manager,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Staff => "staff",
            Role::Manager => "manager",
        }
    }

    pub fn parse(value: &str) -> Option<Role> {
        match value.trim().to_ascii_lowercase().as_str() {
            "staff" => Some(Role::Staff),
            "manager" => Some(Role::Manager),
            _ => None,
        }
    }

    /// Whether this role may override status-workflow gates, e.g. marking a
    /// diary entry collected while unpaid.
    pub fn is_elevated(&self) -> bool {
        matches!(self, Role::Manager)
    }
}

/// A staff member able to sign in and log customer requests.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaffAccount {
    pub id: String,
    pub username: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parse_roundtrip() {
        assert_eq!(Role::parse("manager"), Some(Role::Manager));
        assert_eq!(Role::parse(" Staff "), Some(Role::Staff));
        assert_eq!(Role::parse("intern"), None);
        assert_eq!(Role::parse(Role::Manager.as_str()), Some(Role::Manager));
    }

    #[test]
    fn only_managers_are_elevated() {
        assert!(Role::Manager.is_elevated());
        assert!(!Role::Staff.is_elevated());
    }
}
