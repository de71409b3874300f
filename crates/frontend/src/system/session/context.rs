use contracts::system::auth::AdminUser;
use leptos::prelude::*;

use super::session::Session;
use super::storage::LocalStore;
use crate::shared::api_client::ApiClient;

/// Reactive handle to the persisted session.
///
/// Every mutation goes through [`SessionContext::update`], which writes the
/// new state back to localStorage.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: RwSignal<Session>,
}

impl SessionContext {
    pub fn restore() -> Self {
        let session = Session::load(&LocalStore);
        if session.is_authenticated() {
            log::info!("Restored session for {:?}", session.admin.as_ref().map(|a| &a.email));
        }
        Self {
            state: RwSignal::new(session),
        }
    }

    pub fn update(&self, edit: impl FnOnce(&mut Session)) {
        self.state.update(edit);
        let saved = self.state.with_untracked(|s| s.save(&LocalStore));
        if let Err(e) = saved {
            log::error!("Failed to persist session: {}", e);
        }
    }

    /// Client carrying the current credentials
    pub fn client(&self) -> ApiClient {
        self.state.with_untracked(ApiClient::from_session)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(Session::is_authenticated)
    }

    pub fn admin(&self) -> Option<AdminUser> {
        self.state.with(|s| s.admin.clone())
    }

    pub fn sign_in(&self, token: String, admin: AdminUser) {
        log::info!("Signed in as {}", admin.email);
        self.update(|s| s.sign_in(token, admin));
    }

    pub fn sign_out(&self) {
        log::info!("Signed out");
        self.update(Session::sign_out);
    }

    pub fn set_admin_key(&self, key: &str) {
        self.update(|s| s.set_admin_key(key));
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found in component tree")
}
