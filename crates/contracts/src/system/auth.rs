use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response. The backend answers 200 even for bad credentials, with
/// the token simply absent, so both fields are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}
