//! Chat response-channel port.
//!
//! The concrete REST client lives in taskbridge-infra; the interactions
//! handler delivers replies through this trait so it can be exercised with a
//! stub in tests.

use taskbridge_types::error::ChatError;

/// Delivers reply messages for an interaction, in order.
pub trait ResponseChannel: Send + Sync {
    /// Send one reply message for the given interaction.
    fn respond(
        &self,
        interaction_id: &str,
        interaction_token: &str,
        content: &str,
        ephemeral: bool,
    ) -> impl std::future::Future<Output = Result<(), ChatError>> + Send;
}
