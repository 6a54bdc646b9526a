use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Guest,
    Employer,
    Admin,
}

/// Account record as the server returns it. The password is write-only and
/// only ever appears in request payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_wire_names_are_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Employer).unwrap(), "\"employer\"");
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::from_str::<UserRole>("\"guest\"").unwrap(),
            UserRole::Guest
        );
    }

    #[test]
    fn decodes_camel_case_payload() {
        let user: User = serde_json::from_str(
            r#"{
                "id": "u-1",
                "email": "dana@example.com",
                "firstName": "Dana",
                "lastName": "Reyes",
                "role": "employer",
                "profileImage": "https://cdn.example.com/u-1.png"
            }"#,
        )
        .unwrap();

        assert_eq!(user.first_name, "Dana");
        assert_eq!(user.role, UserRole::Employer);
        assert_eq!(
            user.profile_image.as_deref(),
            Some("https://cdn.example.com/u-1.png")
        );
        assert!(user.created_at.is_none());
    }
}
