use web_sys::{window, Storage};

use crate::models::User;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

fn storage() -> Option<Storage> {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
}

fn read(storage: &Storage, key: &str) -> Option<String> {
    storage.get_item(key).ok().flatten()
}

pub fn token() -> Option<String> {
    storage().and_then(|storage| read(&storage, TOKEN_KEY))
}

/// What the two stored entries amount to.
#[derive(Debug, PartialEq)]
enum Cached {
    LoggedOut,
    LoggedIn(User),
    /// A token without a readable user, e.g. a half-written login or an
    /// entry from an older `User` shape.
    Broken,
}

fn classify(token: Option<&str>, raw_user: Option<&str>) -> Cached {
    let Some(_) = token else {
        return Cached::LoggedOut;
    };
    let Some(raw) = raw_user else {
        log::warn!("Token stored without a user");
        return Cached::Broken;
    };
    match serde_json::from_str(raw) {
        Ok(user) => Cached::LoggedIn(user),
        Err(e) => {
            log::warn!("Discarding cached user: {}", e);
            Cached::Broken
        }
    }
}

/// The user cached at login. A broken session is cleared and treated as
/// logged out.
pub fn current_user() -> Option<User> {
    let storage = storage()?;
    let token = read(&storage, TOKEN_KEY);
    let raw_user = read(&storage, USER_KEY);
    match classify(token.as_deref(), raw_user.as_deref()) {
        Cached::LoggedIn(user) => Some(user),
        Cached::LoggedOut => None,
        Cached::Broken => {
            clear();
            None
        }
    }
}

/// Same answer the dashboard gets from `current_user`.
pub fn is_logged_in() -> bool {
    current_user().is_some()
}

/// Writes both entries or neither.
pub fn store(token: &str, user: &User) -> bool {
    let Some(storage) = storage() else {
        return false;
    };
    let user_json = match serde_json::to_string(user) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize user: {}", e);
            return false;
        }
    };
    if storage.set_item(TOKEN_KEY, token).is_err() {
        return false;
    }
    if storage.set_item(USER_KEY, &user_json).is_err() {
        log::error!("Failed to store user, rolling back token");
        clear();
        return false;
    }
    true
}

pub fn clear() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: &str = r#"{"id": 7, "email": "kid@tecaikids.com", "full_name": "Sam Lee", "role": "student", "age_group": "9-12"}"#;

    #[test]
    fn no_token_is_logged_out() {
        assert_eq!(classify(None, None), Cached::LoggedOut);
        assert_eq!(classify(None, Some(USER)), Cached::LoggedOut);
    }

    #[test]
    fn token_and_user_is_logged_in() {
        let Cached::LoggedIn(user) = classify(Some("abc"), Some(USER)) else {
            panic!("expected a logged in session");
        };
        assert_eq!(user.id, "7");
        assert_eq!(user.email, "kid@tecaikids.com");
    }

    #[test]
    fn token_without_a_usable_user_is_broken() {
        assert_eq!(classify(Some("abc"), None), Cached::Broken);
        assert_eq!(classify(Some("abc"), Some("{not json")), Cached::Broken);
        assert_eq!(classify(Some("abc"), Some(r#"{"name": "old shape"}"#)), Cached::Broken);
    }
}
