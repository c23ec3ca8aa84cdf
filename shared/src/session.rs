//! Client session state: auth token, impersonation and dismissed bans.
//!
//! The session is loaded once from persistent storage when the app starts
//! and every mutation writes straight back through a [`SessionStore`].
//! Logging out or leaving impersonation are the only teardown paths.

use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet},
};

use crate::models::ImpersonationGrant;

/// Storage key of the active auth token.
pub const TOKEN_KEY: &str = "auth_token";
/// Storage key of the administrator token stashed during impersonation.
pub const ORIGINAL_TOKEN_KEY: &str = "original_token";
/// Storage key of the author currently impersonated.
pub const IMPERSONATED_AUTHOR_KEY: &str = "impersonated_author";
/// Storage key of the comma separated dismissed ban ids.
pub const DISMISSED_BANS_KEY: &str = "dismissed_ban_ids";

/// String key/value persistence, e.g. the browser's `localStorage`.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process [`SessionStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// An administrator acting as another author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Impersonation {
    /// Slug (or display name) of the impersonated author.
    pub author: String,
    /// Token to restore when impersonation stops.
    pub original_token: Option<String>,
}

/// Everything the app remembers about the current visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    impersonation: Option<Impersonation>,
    dismissed_bans: BTreeSet<u64>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Session {
    /// Read persisted state.
    pub fn load(store: &impl SessionStore) -> Self {
        let token = non_empty(store.get(TOKEN_KEY));
        let impersonation =
            non_empty(store.get(IMPERSONATED_AUTHOR_KEY)).map(|author| Impersonation {
                author,
                original_token: non_empty(store.get(ORIGINAL_TOKEN_KEY)),
            });
        let dismissed_bans = store
            .get(DISMISSED_BANS_KEY)
            .map(|raw| {
                raw.split(',')
                    .filter_map(|id| id.trim().parse().ok())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            token,
            impersonation,
            dismissed_bans,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Value for the `Authorization` header.
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Token {token}"))
    }

    pub fn impersonation(&self) -> Option<&Impersonation> {
        self.impersonation.as_ref()
    }

    pub fn is_impersonating(&self) -> bool {
        self.impersonation.is_some()
    }

    pub fn login(&mut self, store: &impl SessionStore, token: &str) {
        let token = token.trim();
        if token.is_empty() {
            return;
        }
        store.set(TOKEN_KEY, token);
        self.token = Some(token.to_string());
    }

    /// Swap in the substitute token from `grant`. When already impersonating
    /// the administrator's original token is kept.
    pub fn begin_impersonation(
        &mut self,
        store: &impl SessionStore,
        grant: &ImpersonationGrant,
        author_slug: &str,
    ) {
        let original_token = match &self.impersonation {
            Some(active) => active.original_token.clone(),
            None => self.token.clone(),
        };
        let author = grant
            .author
            .clone()
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| author_slug.to_string());

        match &original_token {
            Some(token) => store.set(ORIGINAL_TOKEN_KEY, token),
            None => store.remove(ORIGINAL_TOKEN_KEY),
        }
        store.set(IMPERSONATED_AUTHOR_KEY, &author);
        store.set(TOKEN_KEY, &grant.token);

        self.token = Some(grant.token.clone());
        self.impersonation = Some(Impersonation {
            author,
            original_token,
        });
    }

    /// Restore the administrator's token. Returns `false` when nothing was
    /// being impersonated.
    pub fn stop_impersonating(&mut self, store: &impl SessionStore) -> bool {
        let Some(active) = self.impersonation.take() else {
            return false;
        };
        store.remove(IMPERSONATED_AUTHOR_KEY);
        store.remove(ORIGINAL_TOKEN_KEY);
        match &active.original_token {
            Some(token) => store.set(TOKEN_KEY, token),
            None => store.remove(TOKEN_KEY),
        }
        self.token = active.original_token;
        true
    }

    /// Forget the token and any impersonation. Dismissed bans survive, they
    /// belong to the device rather than the account.
    pub fn logout(&mut self, store: &impl SessionStore) {
        store.remove(TOKEN_KEY);
        store.remove(ORIGINAL_TOKEN_KEY);
        store.remove(IMPERSONATED_AUTHOR_KEY);
        self.token = None;
        self.impersonation = None;
    }

    pub fn dismiss_ban(&mut self, store: &impl SessionStore, ban_id: u64) {
        if self.dismissed_bans.insert(ban_id) {
            let joined = self
                .dismissed_bans
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(",");
            store.set(DISMISSED_BANS_KEY, &joined);
        }
    }

    pub fn is_ban_dismissed(&self, ban_id: u64) -> bool {
        self.dismissed_bans.contains(&ban_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grant(token: &str) -> ImpersonationGrant {
        ImpersonationGrant {
            token: token.to_string(),
            author: None,
            author_name: None,
        }
    }

    #[test]
    fn load_reads_persisted_values() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "abc");
        store.set(IMPERSONATED_AUTHOR_KEY, "ana");
        store.set(ORIGINAL_TOKEN_KEY, "admin");
        store.set(DISMISSED_BANS_KEY, "3, 7,junk");

        let session = Session::load(&store);
        assert_eq!(session.token(), Some("abc"));
        assert_eq!(session.authorization().as_deref(), Some("Token abc"));
        assert_eq!(
            session.impersonation(),
            Some(&Impersonation {
                author: "ana".to_string(),
                original_token: Some("admin".to_string()),
            })
        );
        assert!(session.is_ban_dismissed(3));
        assert!(session.is_ban_dismissed(7));
        assert!(!session.is_ban_dismissed(4));
    }

    #[test]
    fn impersonation_round_trip_restores_admin_token() {
        let store = MemoryStore::new();
        let mut session = Session::default();
        session.login(&store, "admin");

        session.begin_impersonation(&store, &grant("sub-1"), "ana");
        assert_eq!(session.token(), Some("sub-1"));
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("sub-1"));
        assert_eq!(store.get(ORIGINAL_TOKEN_KEY).as_deref(), Some("admin"));

        // switching to another author keeps the administrator token
        session.begin_impersonation(&store, &grant("sub-2"), "bo");
        assert_eq!(session.impersonation().map(|i| i.author.as_str()), Some("bo"));

        assert!(session.stop_impersonating(&store));
        assert_eq!(session.token(), Some("admin"));
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("admin"));
        assert_eq!(store.get(IMPERSONATED_AUTHOR_KEY), None);
        assert!(!session.stop_impersonating(&store));
        assert_eq!(Session::load(&store), session);
    }

    #[test]
    fn logout_clears_credentials_but_keeps_dismissed_bans() {
        let store = MemoryStore::new();
        let mut session = Session::default();
        session.login(&store, "t");
        session.dismiss_ban(&store, 9);
        session.begin_impersonation(&store, &grant("sub"), "ana");

        session.logout(&store);
        assert!(!session.is_authenticated());
        assert!(!session.is_impersonating());
        assert_eq!(store.get(TOKEN_KEY), None);
        assert_eq!(store.get(DISMISSED_BANS_KEY).as_deref(), Some("9"));
        assert!(Session::load(&store).is_ban_dismissed(9));
    }

    #[test]
    fn blank_token_is_ignored() {
        let store = MemoryStore::new();
        let mut session = Session::default();
        session.login(&store, "   ");
        assert_eq!(session, Session::default());
        assert_eq!(store.get(TOKEN_KEY), None);
    }
}
