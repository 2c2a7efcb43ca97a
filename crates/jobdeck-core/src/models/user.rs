//! The authenticated user's profile.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Profile delivered by the backend at login and echoed by `/auth/validate`.
///
/// The schema is backend-defined; only the display name and email are
/// interpreted here. Unknown fields are kept verbatim so a profile survives a
/// round trip through storage unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    /// Best available human-readable name.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("unknown user")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_tolerates_superset_of_fields() {
        let json = r#"{"name":"Ana Diaz","email":"ana@example.com","picture":"https://cdn/x.png","locale":"fr"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name.as_deref(), Some("Ana Diaz"));
        assert_eq!(profile.extra.get("locale").and_then(|v| v.as_str()), Some("fr"));
    }

    #[test]
    fn test_profile_round_trips_through_json() {
        let json = r#"{"name":"Ana","picture":"https://cdn/x.png"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        let serialized = serde_json::to_string(&profile).unwrap();
        let reparsed: UserProfile = serde_json::from_str(&serialized).unwrap();
        assert_eq!(profile, reparsed);
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let profile: UserProfile = serde_json::from_str(r#"{"email":"ana@example.com"}"#).unwrap();
        assert_eq!(profile.display_name(), "ana@example.com");
        let empty = UserProfile::default();
        assert_eq!(empty.display_name(), "unknown user");
    }
}
