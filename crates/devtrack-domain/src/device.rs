//! Device reconciliation bucket.

use serde::{Deserialize, Serialize};

/// Which identifier set a dashboard request asks for.
///
/// - `Online`: arrived and seen by an installation check
/// - `Offline`: arrived, never seen by an installation check
/// - `Other`: seen by an installation check, no arrival on record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceBucket {
    #[default]
    Online,
    Offline,
    Other,
}

impl DeviceBucket {
    /// Parse a query value. Unknown or missing values fall back to `Online`.
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("offline") => Self::Offline,
            Some("other") => Self::Other,
            _ => Self::Online,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Other => "other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_known_buckets() {
        assert_eq!(
            DeviceBucket::from_query(Some("online")),
            DeviceBucket::Online
        );
        assert_eq!(
            DeviceBucket::from_query(Some("offline")),
            DeviceBucket::Offline
        );
        assert_eq!(DeviceBucket::from_query(Some("other")), DeviceBucket::Other);
    }

    #[test]
    fn should_default_unknown_bucket_to_online() {
        assert_eq!(DeviceBucket::from_query(None), DeviceBucket::Online);
        assert_eq!(DeviceBucket::from_query(Some("")), DeviceBucket::Online);
        assert_eq!(
            DeviceBucket::from_query(Some("retired")),
            DeviceBucket::Online
        );
    }

    #[test]
    fn should_serialize_bucket_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&DeviceBucket::Other).unwrap(),
            "\"other\""
        );
    }
}
