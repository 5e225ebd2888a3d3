//! Browser persistence of the signed-in user.
//!
//! The serialized [`AuthUser`] under `auth_user` is what the app trusts on
//! reload; the session token sits next to it for API calls.

use contracts::system::auth::{AuthUser, AUTH_TOKEN_STORAGE_KEY, AUTH_USER_STORAGE_KEY};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Parse a stored user; anything unreadable counts as signed out.
pub fn decode_user(raw: &str) -> Option<AuthUser> {
    serde_json::from_str(raw).ok()
}

pub fn save_user(user: &AuthUser) {
    let Ok(raw) = serde_json::to_string(user) else {
        return;
    };
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(AUTH_USER_STORAGE_KEY, &raw);
    }
}

pub fn get_user() -> Option<AuthUser> {
    let raw = get_local_storage()?.get_item(AUTH_USER_STORAGE_KEY).ok()??;
    let user = decode_user(&raw);
    if user.is_none() {
        log::warn!("Discarding unreadable stored user");
        clear_session();
    }
    user
}

pub fn save_session_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(AUTH_TOKEN_STORAGE_KEY, token);
    }
}

pub fn get_session_token() -> Option<String> {
    get_local_storage()?.get_item(AUTH_TOKEN_STORAGE_KEY).ok()?
}

/// Remove both the user and the token
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(AUTH_USER_STORAGE_KEY);
        let _ = storage.remove_item(AUTH_TOKEN_STORAGE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::UserRole;

    #[test]
    fn decodes_stored_user() {
        let raw = r#"{"name":"Fleet Manager","email":"manager@fleet.example","role":"manager","managedEngineerIds":["ENG-001"]}"#;
        let user = decode_user(raw).expect("valid user");
        assert_eq!(user.role, UserRole::Manager);
        assert_eq!(user.managed_engineer_ids, Some(vec!["ENG-001".to_string()]));
        assert_eq!(user.engineer_id, None);
    }

    #[test]
    fn unreadable_user_is_none() {
        assert!(decode_user("not json").is_none());
        assert!(decode_user(r#"{"name":"x","email":"y","role":"admin"}"#).is_none());
    }
}
