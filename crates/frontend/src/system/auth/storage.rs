//! Token persistence. All `localStorage` access for the session lives here;
//! the rest of the app only sees `get`/`save`/`clear`.

use web_sys::window;

const TOKEN_KEY: &str = "token";
const ROLE_KEY: &str = "role";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the access token and role after a successful login
pub fn save_session(token: &str, role: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        let _ = storage.set_item(ROLE_KEY, role);
    }
}

/// Get the stored access token
pub fn get_token() -> Option<String> {
    get_local_storage()?.get_item(TOKEN_KEY).ok()?
}

/// Get the stored role
pub fn get_role() -> Option<String> {
    get_local_storage()?.get_item(ROLE_KEY).ok()?
}

/// Clear the stored session on logout
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(ROLE_KEY);
    }
}
