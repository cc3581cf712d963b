//! API utilities for frontend-backend communication.

/// Get the base URL for API requests.
///
/// Constructs the API base URL from the current window location, using
/// port 8080 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:8080"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8080", protocol, hostname)
}
