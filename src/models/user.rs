//! User models for bearer-token authentication.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Role assigned to every admin-gated account check.
pub const ADMIN_ROLE: &str = "admin";
/// Default role for newly registered accounts.
pub const TECHNICIAN_ROLE: &str = "technician";
/// Built-in account seeded at startup; protected from deletion.
pub const DEFAULT_ADMIN_USERNAME: &str = "IgnitionLab Dynamics";

/// Authenticated user resolved from a bearer token.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub username: String,
    pub role: String,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

impl From<crate::entity::user::Model> for CurrentUser {
    fn from(m: crate::entity::user::Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            role: m.role,
        }
    }
}

/// User info returned by the user-management endpoints (never the hash).
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<crate::entity::user::Model> for UserResponse {
    fn from(m: crate::entity::user::Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            role: m.role,
            created_at: m.created_at,
        }
    }
}

/// Login request body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UserLogin {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub username: String,
    pub role: String,
}

/// Admin user-creation request body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UserCreate {
    pub username: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    TECHNICIAN_ROLE.to_string()
}

/// Role update request body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RoleUpdate {
    pub role: String,
}

/// Bearer token JWT claims.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub iss: String,
    pub exp: usize,
    pub iat: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_create_defaults_to_technician() {
        let parsed: UserCreate =
            serde_json::from_str(r#"{"username": "sam", "password": "pw"}"#).unwrap();
        assert_eq!(parsed.role, TECHNICIAN_ROLE);
    }

    #[test]
    fn test_login_ignores_unknown_fields() {
        let parsed: UserLogin =
            serde_json::from_str(r#"{"username": "sam", "password": "pw", "extra": 1}"#).unwrap();
        assert_eq!(parsed.username, "sam");
    }
}
