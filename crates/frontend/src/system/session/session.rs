use contracts::system::auth::AdminUser;
use serde::{Deserialize, Serialize};

use super::storage::KeyValueStore;

/// Production API, overridable at build time with `ADMIN_API_BASE`
pub const DEFAULT_API_BASE: &str = match option_env!("ADMIN_API_BASE") {
    Some(base) => base,
    None => "https://quisipp-admin-backend.onrender.com/api",
};

/// Sent as `x-admin-key` when the admin has not stored their own key
pub const DEFAULT_ADMIN_KEY: &str = "admin_secret_key";

pub const SESSION_STORAGE_KEY: &str = "grocery_admin_session";

/// Everything the console remembers between page loads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Session {
    pub api_base: String,
    pub token: Option<String>,
    pub admin: Option<AdminUser>,
    pub admin_key: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            token: None,
            admin: None,
            admin_key: None,
        }
    }
}

impl Session {
    /// Stored session, or a fresh one when nothing (or garbage) is stored
    pub fn load(store: &impl KeyValueStore) -> Self {
        let Some(raw) = store.get(SESSION_STORAGE_KEY) else {
            return Self::default();
        };
        match serde_json::from_str::<Session>(&raw) {
            Ok(mut session) => {
                if session.api_base.trim().is_empty() {
                    session.api_base = DEFAULT_API_BASE.to_string();
                }
                session
            }
            Err(e) => {
                log::warn!("Discarding unreadable stored session: {}", e);
                store.remove(SESSION_STORAGE_KEY);
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &impl KeyValueStore) -> Result<(), String> {
        let json = serde_json::to_string(self).map_err(|e| e.to_string())?;
        store.set(SESSION_STORAGE_KEY, &json)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.admin.is_some()
    }

    pub fn admin_key(&self) -> &str {
        self.admin_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .unwrap_or(DEFAULT_ADMIN_KEY)
    }

    pub fn has_custom_admin_key(&self) -> bool {
        self.admin_key() != DEFAULT_ADMIN_KEY
    }

    pub fn sign_in(&mut self, token: String, admin: AdminUser) {
        self.token = Some(token);
        self.admin = Some(admin);
    }

    /// Drops the credentials; the API base and admin key survive
    pub fn sign_out(&mut self) {
        self.token = None;
        self.admin = None;
    }

    /// Blank input clears the stored key
    pub fn set_admin_key(&mut self, key: &str) {
        let key = key.trim();
        self.admin_key = (!key.is_empty()).then(|| key.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::session::storage::MemoryStore;

    fn admin() -> AdminUser {
        AdminUser {
            id: "a1".to_string(),
            email: "admin@example.com".to_string(),
            role: "admin".to_string(),
        }
    }

    #[test]
    fn test_round_trip_through_store() {
        let store = MemoryStore::default();
        let mut session = Session::default();
        session.sign_in("tok".to_string(), admin());
        session.set_admin_key("secret");
        session.save(&store).unwrap();

        let loaded = Session::load(&store);
        assert_eq!(loaded, session);
        assert!(loaded.is_authenticated());
    }

    #[test]
    fn test_empty_store_gives_default() {
        let store = MemoryStore::default();
        let session = Session::load(&store);
        assert_eq!(session.api_base, DEFAULT_API_BASE);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_garbage_is_discarded() {
        let store = MemoryStore::default();
        store.set(SESSION_STORAGE_KEY, "{not json").unwrap();
        assert_eq!(Session::load(&store), Session::default());
        assert!(store.get(SESSION_STORAGE_KEY).is_none());
    }

    #[test]
    fn test_admin_key_falls_back_to_default() {
        let mut session = Session::default();
        assert_eq!(session.admin_key(), DEFAULT_ADMIN_KEY);
        assert!(!session.has_custom_admin_key());

        session.set_admin_key("  my-key ");
        assert_eq!(session.admin_key(), "my-key");

        session.set_admin_key("   ");
        assert_eq!(session.admin_key, None);
        assert_eq!(session.admin_key(), DEFAULT_ADMIN_KEY);
    }

    #[test]
    fn test_sign_out_keeps_admin_key() {
        let mut session = Session::default();
        session.sign_in("tok".to_string(), admin());
        session.set_admin_key("k");
        session.sign_out();
        assert!(!session.is_authenticated());
        assert_eq!(session.admin_key(), "k");
    }
}
