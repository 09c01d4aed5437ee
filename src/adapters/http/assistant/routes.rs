//! Axum router configuration for the assistant webhook.

use axum::{routing::post, Router};

use super::handlers::{post_message, preflight, AssistantAppState};

/// Path of the REST channel webhook.
pub const WEBHOOK_PATH: &str = "/webhooks/rest/webhook";

/// Create the assistant API router.
///
/// # Routes
/// - `POST /webhooks/rest/webhook` - Send a message, receive replies
/// - `OPTIONS /webhooks/rest/webhook` - Pre-flight check
pub fn assistant_routes() -> Router<AssistantAppState> {
    Router::new().route(WEBHOOK_PATH, post(post_message).options(preflight))
}
