use contracts::system::auth::{LoginRequest, LoginResponse, RegisterRequest};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { email, password };

    let response = Request::post(&format!("{}/auth/login", api_base()))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Login failed: {}", response.status()));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Register a new dashboard user
pub async fn register(
    username: String,
    email: String,
    password: String,
) -> Result<(), String> {
    let request = RegisterRequest {
        username,
        email,
        password,
    };

    let response = Request::post(&format!("{}/auth/register", api_base()))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Registration failed: {}", response.status()));
    }

    Ok(())
}
