//! HTTP adapter for the assistant webhook.

mod dto;
mod handlers;
mod routes;

pub use dto::{BotMessage, ErrorResponse, StatusResponse, WebhookRequest};
pub use handlers::{AssistantApiError, AssistantAppState};
pub use routes::{assistant_routes, WEBHOOK_PATH};
