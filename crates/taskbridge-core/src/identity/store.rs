//! Identity store trait.
//!
//! Defines the interface for the chat-user to tracker-login association.
//! Uses RPITIT (native async fn in traits, Rust 2024 edition). The mutation
//! discipline lives behind this port, so a durable backend can replace the
//! in-memory one without touching call sites.

use taskbridge_types::chat::ChatUserId;

/// Key-value association from chat user to tracker login.
///
/// Invoked concurrently from independent command handlers; implementations
/// must be safe under concurrent get/set.
pub trait IdentityStore: Send + Sync {
    /// Look up the tracker login linked to a chat user.
    fn get(
        &self,
        user: &ChatUserId,
    ) -> impl std::future::Future<Output = Option<String>> + Send;

    /// Link a chat user to a tracker login (upsert).
    fn set(
        &self,
        user: ChatUserId,
        login: String,
    ) -> impl std::future::Future<Output = ()> + Send;

    /// Remove a link. Returns true when a link existed.
    fn remove(&self, user: &ChatUserId) -> impl std::future::Future<Output = bool> + Send;

    /// Number of linked users.
    fn len(&self) -> impl std::future::Future<Output = usize> + Send;
}
