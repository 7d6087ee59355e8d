//! User activity audit types: what was done, and to which business area.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Returned when a wire string does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Kind of action recorded in an audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Create,
    Update,
    Delete,
    View,
    Import,
    Export,
    Login,
    Logout,
    Other,
}

impl ActionType {
    pub const ALL: [ActionType; 9] = [
        Self::Create,
        Self::Update,
        Self::Delete,
        Self::View,
        Self::Import,
        Self::Export,
        Self::Login,
        Self::Logout,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::View => "view",
            Self::Import => "import",
            Self::Export => "export",
            Self::Login => "login",
            Self::Logout => "logout",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "action type",
                value: s.to_owned(),
            })
    }
}

/// Business area an audited action touched.
///
/// Not an HTTP `Content-Type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    DeviceArrival,
    DeviceDelivery,
    DeviceSecurity,
    User,
    System,
}

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        Self::DeviceArrival,
        Self::DeviceDelivery,
        Self::DeviceSecurity,
        Self::User,
        Self::System,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::DeviceArrival => "device_arrival",
            Self::DeviceDelivery => "device_delivery",
            Self::DeviceSecurity => "device_security",
            Self::User => "user",
            Self::System => "system",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "content type",
                value: s.to_owned(),
            })
    }
}
