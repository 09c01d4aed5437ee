//! HTTP handlers for the assistant webhook.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::error;

use crate::application::{GatewaySettings, HandleTurnCommand, HandleTurnError, HandleTurnHandler};
use crate::domain::foundation::SenderId;
use crate::ports::{NluClassifier, SessionStore, TranscriptWriter};

use super::dto::{BotMessage, ErrorResponse, StatusResponse, WebhookRequest};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the assistant endpoints.
#[derive(Clone)]
pub struct AssistantAppState {
    pub sessions: Arc<dyn SessionStore>,
    pub nlu: Arc<dyn NluClassifier>,
    pub transcripts: Arc<dyn TranscriptWriter>,
    pub settings: GatewaySettings,
}

impl AssistantAppState {
    /// Create the turn handler from the shared state.
    pub fn handle_turn_handler(&self) -> HandleTurnHandler {
        HandleTurnHandler::new(
            self.sessions.clone(),
            self.nlu.clone(),
            self.transcripts.clone(),
            self.settings.clone(),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /webhooks/rest/webhook - Handle one user message
pub async fn post_message(
    State(state): State<AssistantAppState>,
    payload: Result<Json<WebhookRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AssistantApiError> {
    let Json(request) = payload.map_err(|rejection| {
        AssistantApiError::BadRequest(
            ErrorResponse::bad_request("Invalid request body")
                .with_details(serde_json::Value::String(rejection.body_text())),
        )
    })?;

    let message = match request.message {
        Some(message) if !message.is_empty() => message,
        _ => {
            return Err(AssistantApiError::BadRequest(ErrorResponse::bad_request(
                "No message provided",
            )))
        }
    };

    let sender = request
        .sender
        .and_then(|s| SenderId::new(s).ok())
        .unwrap_or_default();

    let handler = state.handle_turn_handler();
    let result = handler.handle(HandleTurnCommand { sender, message }).await?;

    Ok(Json(BotMessage::from_result(result)))
}

/// OPTIONS /webhooks/rest/webhook - Pre-flight compatibility
pub async fn preflight() -> impl IntoResponse {
    (StatusCode::OK, Json(StatusResponse::ok()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts handler errors to HTTP responses.
#[derive(Debug)]
pub enum AssistantApiError {
    BadRequest(ErrorResponse),
    Turn(HandleTurnError),
}

impl From<HandleTurnError> for AssistantApiError {
    fn from(err: HandleTurnError) -> Self {
        Self::Turn(err)
    }
}

impl IntoResponse for AssistantApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AssistantApiError::BadRequest(body) => (StatusCode::BAD_REQUEST, Json(body)).into_response(),
            AssistantApiError::Turn(err) => {
                error!(error = %err, "Error processing message");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::internal(err.to_string())),
                )
                    .into_response()
            }
        }
    }
}
