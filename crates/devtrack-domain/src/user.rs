//! User domain types.

use serde::{Deserialize, Serialize};

/// Staff permission level as injected by the gateway.
///
/// Wire format: `u8` (0 = Staff, 1 = Admin, 2 = Superuser).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Staff = 0,
    Admin = 1,
    Superuser = 2,
}

impl UserRole {
    /// Convert from `u8` wire value. Returns `None` for unknown values.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Staff),
            1 => Some(Self::Admin),
            2 => Some(Self::Superuser),
            _ => None,
        }
    }

    /// Convert to `u8` wire value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// True when a raw wire role grants at least `self`.
    pub fn is_granted_to(self, role: u8) -> bool {
        UserRole::from_u8(role).is_some_and(|r| r >= self)
    }
}

impl PartialOrd for UserRole {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UserRole {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_u8().cmp(&other.as_u8())
    }
}
