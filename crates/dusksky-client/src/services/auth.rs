//! Auth service facade: login, registration, user lookup, role changes.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Value, json};

use crate::http::{ApiClient, ApiError};
use crate::session::{Claims, Role};

/// Successful login response from the auth service.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// Result of a completed login: the issued token and its decoded claims.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub claims: Claims,
}

/// User record as the auth service returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    #[serde(alias = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Facade over the auth microservice.
pub struct AuthService {
    api: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Authenticate and store the issued token in the session.
    ///
    /// On success the session holds the token (and has notified its
    /// watchers); the decoded claims come back to the caller as well.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, ApiError> {
        let resp: LoginResponse = self
            .api
            .post(
                "/auth/login/",
                Some(&json!({"username": username, "password": password})),
            )
            .await?;

        let claims = self.api.session().set_token(&resp.access_token)?;
        Ok(LoginOutcome { token: resp.access_token, claims })
    }

    /// Create an account. The response shape varies by auth-service version,
    /// so it is passed through unparsed.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Value, ApiError> {
        self.api
            .post(
                "/auth/register/",
                Some(&json!({
                    "username": username,
                    "email": email,
                    "password": password,
                })),
            )
            .await
    }

    pub async fn search_users(&self, username: &str) -> Result<Vec<AuthUser>, ApiError> {
        let path = format!("/auth/users/search?username={}", urlencoding::encode(username));
        self.api.get(&path).await
    }

    pub async fn get_user(&self, user_id: &str) -> Result<AuthUser, ApiError> {
        self.api.get(&format!("/auth/users/{user_id}")).await
    }

    /// Grant the moderator role.
    pub async fn promote(&self, user_id: &str) -> Result<Value, ApiError> {
        self.api.put(&format!("/auth/promote/{user_id}"), None).await
    }

    /// Revert a moderator back to a plain user.
    pub async fn demote(&self, user_id: &str) -> Result<Value, ApiError> {
        self.api.put(&format!("/auth/demote/{user_id}"), None).await
    }
}
