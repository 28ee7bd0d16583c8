//! Authentication endpoints and session lifecycle.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;

/// The authenticated user as returned by the backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Login/signup response: the user record plus a bearer token.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// Login request body.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Signup request body.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signup {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl ApiClient {
    /// Exchanges credentials for a session token.
    ///
    /// On success the token is stored on the client and used as a bearer
    /// token for all subsequent requests. A 401 here means the credentials
    /// were rejected, not that a session expired.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self.post_public("/auth/login", credentials).await?;
        debug!("[Auth] logged in as user {}", response.user.id);
        self.set_token(response.token.clone());
        Ok(response)
    }

    /// Creates an account and starts a session with the returned token.
    pub async fn signup(&self, signup: &Signup) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self.post_public("/auth/signup", signup).await?;
        debug!("[Auth] signed up as user {}", response.user.id);
        self.set_token(response.token.clone());
        Ok(response)
    }

    /// Ends the session locally by discarding the bearer token.
    pub fn logout(&self) {
        debug!("[Auth] logged out");
        self.clear_token();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_deserialization() {
        let json = r#"{"user":{"id":7,"name":"Ada","email":"ada@example.com"},"token":"jwt-abc"}"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.user.id, 7);
        assert_eq!(response.user.email, "ada@example.com");
        assert_eq!(response.token, "jwt-abc");
    }

    #[test]
    fn test_credentials_serialization() {
        let credentials = Credentials {
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let json = serde_json::to_string(&credentials).unwrap();
        assert_eq!(json, r#"{"email":"ada@example.com","password":"hunter2"}"#);
    }
}
