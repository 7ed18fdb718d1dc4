//! DashMap-backed in-memory identity store.
//!
//! Holds the chat-user to tracker-login mapping for the lifetime of the
//! process. Links are lost on restart; durability is an explicit non-goal.

use dashmap::DashMap;

use taskbridge_types::chat::ChatUserId;

use super::store::IdentityStore;

/// Volatile, concurrency-safe identity store.
#[derive(Default)]
pub struct InMemoryIdentityStore {
    links: DashMap<ChatUserId, String>,
}

impl InMemoryIdentityStore {
    pub fn new() -> Self {
        Self {
            links: DashMap::new(),
        }
    }
}

impl IdentityStore for InMemoryIdentityStore {
    async fn get(&self, user: &ChatUserId) -> Option<String> {
        self.links.get(user).map(|entry| entry.value().clone())
    }

    async fn set(&self, user: ChatUserId, login: String) {
        self.links.insert(user, login);
    }

    async fn remove(&self, user: &ChatUserId) -> bool {
        self.links.remove(user).is_some()
    }

    async fn len(&self) -> usize {
        self.links.len()
    }
}

impl std::fmt::Debug for InMemoryIdentityStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryIdentityStore")
            .field("linked_users", &self.links.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_missing_returns_none() {
        let store = InMemoryIdentityStore::new();
        assert!(store.get(&ChatUserId::new("u-1")).await.is_none());
    }

    #[tokio::test]
    async fn set_then_get() {
        let store = InMemoryIdentityStore::new();
        store
            .set(ChatUserId::new("u-1"), "octocat".to_string())
            .await;
        assert_eq!(
            store.get(&ChatUserId::new("u-1")).await.as_deref(),
            Some("octocat")
        );
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn set_overwrites_existing_link() {
        let store = InMemoryIdentityStore::new();
        store.set(ChatUserId::new("u-1"), "old".to_string()).await;
        store.set(ChatUserId::new("u-1"), "new".to_string()).await;
        assert_eq!(store.get(&ChatUserId::new("u-1")).await.as_deref(), Some("new"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn remove_reports_presence() {
        let store = InMemoryIdentityStore::new();
        store.set(ChatUserId::new("u-1"), "octocat".to_string()).await;
        assert!(store.remove(&ChatUserId::new("u-1")).await);
        assert!(!store.remove(&ChatUserId::new("u-1")).await);
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn concurrent_writers_do_not_lose_links() {
        let store = std::sync::Arc::new(InMemoryIdentityStore::new());

        let mut handles = Vec::new();
        for i in 0..32 {
            let store = std::sync::Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .set(ChatUserId::new(format!("user-{i}")), format!("login-{i}"))
                    .await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.len().await, 32);
        assert_eq!(
            store.get(&ChatUserId::new("user-7")).await.as_deref(),
            Some("login-7")
        );
    }
}
