//! Auth session
//!
//! A single credential slot with an explicit lifecycle: loaded from
//! localStorage on startup, set as a side effect of a successful login,
//! cleared by the sign-out control in the shell. The session is provided
//! through context and handed to the API client, which is the only reader.
//! The token is opaque to the client and is never validated or refreshed.

use leptos::*;

use crate::config;

#[derive(Clone, Copy)]
pub struct Session {
    token: RwSignal<Option<String>>,
}

impl Session {
    /// Load the persisted token. Environments without storage (or with it
    /// blocked) degrade to an in-memory session.
    pub fn load() -> Self {
        let persisted = storage().and_then(|s| s.get_item(config::TOKEN_STORAGE_KEY).ok().flatten());
        Session {
            token: create_rw_signal(persisted),
        }
    }

    /// Current token, read untracked; callers are async request paths, not
    /// reactive scopes.
    pub fn token(&self) -> Option<String> {
        self.token.get_untracked()
    }

    /// Reactive read for the shell's session indicator.
    pub fn is_authenticated(&self) -> bool {
        self.token.with(|t| t.is_some())
    }

    pub fn set_token(&self, value: &str) {
        if let Some(s) = storage() {
            let _ = s.set_item(config::TOKEN_STORAGE_KEY, value);
        }
        self.token.set(Some(value.to_string()));
    }

    pub fn clear(&self) {
        if let Some(s) = storage() {
            let _ = s.remove_item(config::TOKEN_STORAGE_KEY);
        }
        self.token.set(None);
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn provide_session() -> Session {
    let session = Session::load();
    provide_context(session);
    session
}

pub fn use_session() -> Session {
    use_context::<Session>().unwrap_or_else(Session::load)
}
