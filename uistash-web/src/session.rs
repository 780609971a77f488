use gloo_storage::{LocalStorage, Storage};
use uistash_client::api::{AuthToken, UserId};

const KEY_SESSION: &str = "session";

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// Explicit session context passed to the components that need it, instead
/// of ambient storage lookups scattered across call sites. Loaded once at
/// startup, stored when the auth redirect lands, cleared at logout.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Session {
    pub token: AuthToken,
    pub role: Role,
    pub account_id: Option<UserId>,
}

impl Session {
    pub fn new(token: AuthToken, role: Role) -> Session {
        Session {
            token,
            role,
            account_id: None,
        }
    }

    pub fn load() -> Option<Session> {
        LocalStorage::get(KEY_SESSION).ok()
    }

    pub fn store(&self) {
        LocalStorage::set(KEY_SESSION, self).expect("failed saving session to LocalStorage");
    }

    pub fn clear() {
        LocalStorage::delete(KEY_SESSION);
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
