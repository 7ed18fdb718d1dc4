//! Interaction webhook handler.
//!
//! Receives signed command invocations, verifies the signature against the
//! raw body, dispatches through the bridge service, and delivers each reply
//! chunk through the response channel in order.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use secrecy::ExposeSecret;
use serde_json::json;

use taskbridge_core::chat::ResponseChannel;
use taskbridge_infra::chat::signature::verify_signature;
use taskbridge_types::chat::{CommandInvocation, CommandReply};

use crate::http::error::AppError;
use crate::state::AppState;

/// Header carrying the hex-encoded HMAC-SHA256 of the request body.
const SIGNATURE_HEADER: &str = "x-signature-256";

/// POST /interactions - Receive a signed command invocation.
///
/// Replies are delivered through the chat client rather than the HTTP
/// response; the webhook response only acknowledges receipt. A delivery
/// failure for one chunk does not stop the remaining chunks.
pub async fn receive_interaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<serde_json::Value>, AppError> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("X-Signature-256 header required".to_string()))?;

    verify_signature(
        state.signing_secret.expose_secret().as_bytes(),
        &body,
        signature,
    )
    .map_err(|_| AppError::Unauthorized("signature verification failed".to_string()))?;

    let invocation: CommandInvocation = serde_json::from_slice(&body)
        .map_err(|e| AppError::Validation(format!("invalid interaction payload: {e}")))?;

    tracing::info!(
        command = %invocation.command,
        user = invocation.user_id.as_ref().map(|u| u.as_str()).unwrap_or("-"),
        "handling interaction"
    );

    let reply = state.bridge.execute(&invocation).await;
    let delivered = deliver_reply(state.chat.as_ref(), &invocation, &reply).await;

    Ok(Json(json!({
        "status": "ok",
        "delivered": delivered,
    })))
}

/// Deliver each reply message in order, logging (not propagating) failures.
///
/// Returns the number of messages delivered.
async fn deliver_reply<C: ResponseChannel>(
    channel: &C,
    invocation: &CommandInvocation,
    reply: &CommandReply,
) -> usize {
    let mut delivered = 0;
    for message in &reply.messages {
        match channel
            .respond(
                &invocation.interaction_id,
                &invocation.interaction_token,
                message,
                reply.ephemeral,
            )
            .await
        {
            Ok(()) => delivered += 1,
            Err(err) => {
                tracing::error!(
                    interaction = %invocation.interaction_id,
                    error = %err,
                    "failed to deliver reply message"
                );
            }
        }
    }
    delivered
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use taskbridge_types::error::ChatError;

    /// Response channel stub recording deliveries, failing on marked content.
    struct RecordingChannel {
        sent: Mutex<Vec<String>>,
        fail_on: Option<String>,
    }

    impl ResponseChannel for RecordingChannel {
        async fn respond(
            &self,
            _interaction_id: &str,
            _interaction_token: &str,
            content: &str,
            ephemeral: bool,
        ) -> Result<(), ChatError> {
            assert!(ephemeral);
            if self.fail_on.as_deref() == Some(content) {
                return Err(ChatError::Http("boom".to_string()));
            }
            self.sent.lock().unwrap().push(content.to_string());
            Ok(())
        }
    }

    fn invocation() -> CommandInvocation {
        CommandInvocation {
            interaction_id: "i-1".to_string(),
            interaction_token: "tok".to_string(),
            command: "all".to_string(),
            options: Vec::new(),
            user_id: None,
        }
    }

    #[tokio::test]
    async fn delivers_messages_in_order() {
        let channel = RecordingChannel {
            sent: Mutex::new(Vec::new()),
            fail_on: None,
        };
        let reply = CommandReply::ephemeral_sequence(vec!["one".into(), "two".into()]);

        let delivered = deliver_reply(&channel, &invocation(), &reply).await;

        assert_eq!(delivered, 2);
        assert_eq!(*channel.sent.lock().unwrap(), vec!["one", "two"]);
    }

    #[tokio::test]
    async fn one_failed_chunk_does_not_stop_the_rest() {
        let channel = RecordingChannel {
            sent: Mutex::new(Vec::new()),
            fail_on: Some("two".to_string()),
        };
        let reply =
            CommandReply::ephemeral_sequence(vec!["one".into(), "two".into(), "three".into()]);

        let delivered = deliver_reply(&channel, &invocation(), &reply).await;

        assert_eq!(delivered, 2);
        assert_eq!(*channel.sent.lock().unwrap(), vec!["one", "three"]);
    }
}
