use contracts::system::auth::{LoginRequest, RegisterRequest, TokenResponse, UserInfo};

use super::session::Session;
use crate::shared::error::ApiError;
use crate::shared::http::{get_json, post_json_public};

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<TokenResponse, ApiError> {
    let request = LoginRequest { username, password };
    post_json_public("/login", &request).await
}

/// Create a new account; the caller logs in separately afterwards
pub async fn register(
    username: String,
    email: String,
    password: String,
) -> Result<UserInfo, ApiError> {
    let request = RegisterRequest {
        username,
        email,
        password,
    };
    post_json_public("/register", &request).await
}

/// Get current user info; also validates a restored credential
pub async fn get_current_user(session: &Session) -> Result<UserInfo, ApiError> {
    get_json(session, "/me").await
}
