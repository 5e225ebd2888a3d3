use serde::{Deserialize, Serialize};

/// localStorage key holding the serialized [`AuthUser`].
pub const AUTH_USER_STORAGE_KEY: &str = "auth_user";
/// localStorage key holding the bearer token issued at login.
pub const AUTH_TOKEN_STORAGE_KEY: &str = "auth_session_token";

/// Closed set of roles a signed-in user can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Engineer,
    Manager,
    Fsm,
    Stakeholder,
    OohManager,
}

impl UserRole {
    pub const ALL: [UserRole; 5] = [
        UserRole::Engineer,
        UserRole::Manager,
        UserRole::Fsm,
        UserRole::Stakeholder,
        UserRole::OohManager,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Engineer => "engineer",
            UserRole::Manager => "manager",
            UserRole::Fsm => "fsm",
            UserRole::Stakeholder => "stakeholder",
            UserRole::OohManager => "ooh_manager",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == value)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Engineer => "Engineer",
            UserRole::Manager => "Manager",
            UserRole::Fsm => "Field Service Manager",
            UserRole::Stakeholder => "Stakeholder",
            UserRole::OohManager => "OOH Manager",
        }
    }

    /// Roles allowed to edit vehicle allocations.
    pub fn can_manage_allocations(&self) -> bool {
        matches!(self, UserRole::Manager | UserRole::Fsm | UserRole::OohManager)
    }
}

/// The signed-in user as the client persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engineer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_engineer_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AuthUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignoutResponse {
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String, // user_id
    pub email: String,
    pub role: UserRole,
    pub exp: usize,
    pub iat: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_user_uses_camel_case_keys() {
        let user = AuthUser {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            role: UserRole::OohManager,
            engineer_id: None,
            managed_engineer_ids: Some(vec!["E1".into(), "E2".into()]),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["role"], "ooh_manager");
        assert_eq!(json["managedEngineerIds"][1], "E2");
        assert!(json.get("engineerId").is_none());

        let back: AuthUser = serde_json::from_value(json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn role_strings_match_serde_names() {
        for role in UserRole::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(UserRole::parse("admin"), None);
    }
}
