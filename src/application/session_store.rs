//! SessionStore - persists the client session across two storage scopes.
//!
//! A session lives under one key in either the durable scope ("remember me")
//! or the tab scope. Reads check durable first; anything unreadable is
//! treated as no session.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::session::{PersistenceScope, Session};
use crate::ports::{KeyValueStore, SessionProvider, StorageError};

/// Default storage key.
pub const DEFAULT_SESSION_KEY: &str = "edutech_session";

/// Errors from saving or clearing a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Failed to serialize session: {0}")]
    Serialization(String),

    #[error("{scope} session storage failed: {source}")]
    Storage {
        scope: PersistenceScope,
        #[source]
        source: StorageError,
    },
}

impl SessionStoreError {
    fn storage(scope: PersistenceScope, source: StorageError) -> Self {
        SessionStoreError::Storage { scope, source }
    }
}

/// Reads and writes the session in the durable and tab scopes.
#[derive(Clone)]
pub struct SessionStore {
    durable: Arc<dyn KeyValueStore>,
    tab: Arc<dyn KeyValueStore>,
    key: String,
}

impl SessionStore {
    /// Creates a store using the default key.
    pub fn new(durable: Arc<dyn KeyValueStore>, tab: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(durable, tab, DEFAULT_SESSION_KEY)
    }

    /// Creates a store using a custom key.
    pub fn with_key(
        durable: Arc<dyn KeyValueStore>,
        tab: Arc<dyn KeyValueStore>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            durable,
            tab,
            key: key.into(),
        }
    }

    /// The storage key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    fn scope(&self, scope: PersistenceScope) -> &Arc<dyn KeyValueStore> {
        match scope {
            PersistenceScope::Durable => &self.durable,
            PersistenceScope::Tab => &self.tab,
        }
    }

    /// Writes `session` into `scope`, replacing any previous value there.
    pub async fn save(
        &self,
        session: &Session,
        scope: PersistenceScope,
    ) -> Result<(), SessionStoreError> {
        let json = serde_json::to_string(session)
            .map_err(|e| SessionStoreError::Serialization(e.to_string()))?;

        self.scope(scope)
            .set(&self.key, &json)
            .await
            .map_err(|e| SessionStoreError::storage(scope, e))?;

        debug!(%scope, user_id = session.user.id, "Session saved");
        Ok(())
    }

    /// Returns the current session, durable scope first.
    ///
    /// The first scope holding a value decides the outcome: a malformed
    /// durable entry yields `None` even if the tab scope holds a good one.
    pub async fn load(&self) -> Option<Session> {
        for scope in PersistenceScope::read_order() {
            let raw = match self.scope(scope).get(&self.key).await {
                Ok(Some(raw)) => raw,
                Ok(None) => continue,
                Err(e) => {
                    warn!(%scope, error = %e, "Session storage unreadable, treating as absent");
                    continue;
                }
            };

            return match serde_json::from_str::<Session>(&raw) {
                Ok(session) => Some(session),
                Err(e) => {
                    warn!(%scope, error = %e, "Stored session is malformed, ignoring");
                    None
                }
            };
        }
        None
    }

    /// Removes the session from both scopes.
    ///
    /// Both removals are always attempted; the first failure is returned.
    pub async fn clear(&self) -> Result<(), SessionStoreError> {
        let durable = self
            .durable
            .remove(&self.key)
            .await
            .map_err(|e| SessionStoreError::storage(PersistenceScope::Durable, e));
        let tab = self
            .tab
            .remove(&self.key)
            .await
            .map_err(|e| SessionStoreError::storage(PersistenceScope::Tab, e));

        debug!("Session cleared");
        durable.and(tab)
    }
}

#[async_trait]
impl SessionProvider for SessionStore {
    async fn load(&self) -> Option<Session> {
        SessionStore::load(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::domain::session::UserRecord;
    use proptest::prelude::*;

    struct BrokenStore;

    #[async_trait]
    impl KeyValueStore for BrokenStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("quota".to_string()))
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota".to_string()))
        }

        async fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota".to_string()))
        }
    }

    fn stores() -> (Arc<InMemoryKeyValueStore>, Arc<InMemoryKeyValueStore>, SessionStore) {
        let durable = Arc::new(InMemoryKeyValueStore::new());
        let tab = Arc::new(InMemoryKeyValueStore::new());
        let store = SessionStore::new(durable.clone(), tab.clone());
        (durable, tab, store)
    }

    fn session(id: i64, token: &str) -> Session {
        Session::new(UserRecord::new(id), token)
    }

    #[tokio::test]
    async fn load_without_anything_is_none() {
        let (_, _, store) = stores();
        assert!(store.load().await.is_none());
    }

    #[tokio::test]
    async fn save_durable_then_load() {
        let (durable, tab, store) = stores();
        let s = session(1, "abc");

        store.save(&s, PersistenceScope::Durable).await.unwrap();

        assert_eq!(store.load().await, Some(s));
        assert!(durable.get(DEFAULT_SESSION_KEY).await.unwrap().is_some());
        assert!(tab.get(DEFAULT_SESSION_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_tab_then_load() {
        let (_, _, store) = stores();
        let s = session(2, "tab-token");

        store.save(&s, PersistenceScope::Tab).await.unwrap();

        assert_eq!(store.load().await, Some(s));
    }

    #[tokio::test]
    async fn durable_wins_when_both_present() {
        let (_, _, store) = stores();
        let durable = session(1, "durable");
        let tab = session(2, "tab");

        store.save(&tab, PersistenceScope::Tab).await.unwrap();
        store.save(&durable, PersistenceScope::Durable).await.unwrap();

        assert_eq!(store.load().await.unwrap().token, "durable");
    }

    #[tokio::test]
    async fn malformed_durable_entry_yields_none() {
        let (durable, _, store) = stores();
        store
            .save(&session(2, "tab"), PersistenceScope::Tab)
            .await
            .unwrap();
        durable.set(DEFAULT_SESSION_KEY, "{not json").await.unwrap();

        assert!(store.load().await.is_none());
    }

    #[tokio::test]
    async fn malformed_tab_entry_yields_none() {
        let (_, tab, store) = stores();
        tab.set(DEFAULT_SESSION_KEY, "[]").await.unwrap();

        assert!(store.load().await.is_none());
    }

    #[tokio::test]
    async fn unreadable_durable_scope_falls_through_to_tab() {
        let tab = Arc::new(InMemoryKeyValueStore::new());
        let store = SessionStore::new(Arc::new(BrokenStore), tab.clone());
        let s = session(3, "tab");
        store.save(&s, PersistenceScope::Tab).await.unwrap();

        assert_eq!(store.load().await, Some(s));
    }

    #[tokio::test]
    async fn clear_removes_both_scopes() {
        let (_, _, store) = stores();
        store
            .save(&session(1, "a"), PersistenceScope::Durable)
            .await
            .unwrap();
        store
            .save(&session(2, "b"), PersistenceScope::Tab)
            .await
            .unwrap();

        store.clear().await.unwrap();

        assert!(store.load().await.is_none());
    }

    #[tokio::test]
    async fn clear_is_idempotent() {
        let (_, _, store) = stores();
        store.clear().await.unwrap();
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn clear_attempts_tab_even_if_durable_fails() {
        let tab = Arc::new(InMemoryKeyValueStore::new());
        let store = SessionStore::new(Arc::new(BrokenStore), tab.clone());
        store
            .save(&session(1, "a"), PersistenceScope::Tab)
            .await
            .unwrap();

        let err = store.clear().await.unwrap_err();

        assert!(matches!(
            err,
            SessionStoreError::Storage {
                scope: PersistenceScope::Durable,
                ..
            }
        ));
        assert!(tab.get(DEFAULT_SESSION_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_reports_storage_failure() {
        let store = SessionStore::new(
            Arc::new(BrokenStore),
            Arc::new(InMemoryKeyValueStore::new()),
        );

        let err = store
            .save(&session(1, "a"), PersistenceScope::Durable)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("durable"));
    }

    #[tokio::test]
    async fn custom_key_is_used() {
        let durable = Arc::new(InMemoryKeyValueStore::new());
        let store = SessionStore::with_key(
            durable.clone(),
            Arc::new(InMemoryKeyValueStore::new()),
            "other_key",
        );
        store
            .save(&session(1, "a"), PersistenceScope::Durable)
            .await
            .unwrap();

        assert!(durable.get("other_key").await.unwrap().is_some());
        assert_eq!(store.key(), "other_key");
    }

    #[tokio::test]
    async fn works_through_provider_trait() {
        let (_, _, store) = stores();
        store
            .save(&session(1, "a"), PersistenceScope::Durable)
            .await
            .unwrap();
        let provider: Arc<dyn SessionProvider> = Arc::new(store);

        assert_eq!(provider.load().await.unwrap().token, "a");
    }

    proptest! {
        #[test]
        fn save_then_load_round_trips(
            id in any::<i64>(),
            token in "[A-Za-z0-9._-]{0,40}",
            username in proptest::option::of("[a-z]{1,12}"),
            durable in any::<bool>(),
        ) {
            let rt = tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();
            rt.block_on(async {
                let (_, _, store) = stores();
                let mut user = UserRecord::new(id);
                user.username = username;
                let s = Session::new(user, token.clone());

                store
                    .save(&s, PersistenceScope::from_persistent(durable))
                    .await
                    .unwrap();

                prop_assert_eq!(store.load().await, Some(s));
                Ok(())
            })?;
        }

        #[test]
        fn clear_then_load_is_none(durable in any::<bool>()) {
            let rt = tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();
            rt.block_on(async {
                let (_, _, store) = stores();
                store
                    .save(&session(1, "t"), PersistenceScope::from_persistent(durable))
                    .await
                    .unwrap();
                store.clear().await.unwrap();
                prop_assert!(store.load().await.is_none());
                Ok(())
            })?;
        }
    }
}
