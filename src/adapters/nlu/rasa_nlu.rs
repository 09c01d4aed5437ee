//! Rasa-compatible NLU Client
//!
//! Calls an external NLU server's `/model/parse` endpoint and maps the
//! result onto the port types. Only the intent and entity fields are read.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::foundation::SenderId;
use crate::ports::{Entity, Intent, NluClassifier, NluError, NluParse};

/// Configuration for the Rasa NLU client.
#[derive(Debug, Clone)]
pub struct RasaNluConfig {
    /// Base URL of the NLU server (e.g., "http://localhost:5005").
    pub base_url: String,
    /// Optional token passed as the `token` query parameter.
    token: Option<Secret<String>>,
    /// Request timeout.
    pub timeout: Duration,
}

impl RasaNluConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the access token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(Secret::new(token.into()));
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn token(&self) -> Option<&str> {
        self.token.as_ref().map(|t| t.expose_secret().as_str())
    }
}

/// HTTP client for a Rasa-compatible NLU server.
pub struct RasaNluClient {
    config: RasaNluConfig,
    client: Client,
}

impl RasaNluClient {
    /// Creates a client; fails only if the HTTP client cannot be built.
    pub fn new(config: RasaNluConfig) -> Result<Self, NluError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| NluError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the parse endpoint URL.
    fn parse_url(&self) -> String {
        format!("{}/model/parse", self.config.base_url.trim_end_matches('/'))
    }

    async fn send_request(&self, text: &str, sender: &SenderId) -> Result<Response, NluError> {
        let body = ParseRequest {
            text,
            message_id: sender.as_str(),
        };

        let mut request = self.client.post(self.parse_url()).json(&body);
        if let Some(token) = self.config.token() {
            request = request.query(&[("token", token)]);
        }

        request.send().await.map_err(|e| {
            if e.is_timeout() {
                NluError::Timeout
            } else if e.is_connect() {
                NluError::Unavailable(format!("Connection failed: {}", e))
            } else {
                NluError::Unavailable(e.to_string())
            }
        })
    }

    async fn handle_response_status(&self, response: Response) -> Result<Response, NluError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        Err(NluError::Unavailable(format!(
            "Unexpected status {}: {}",
            status, error_body
        )))
    }
}

#[async_trait]
impl NluClassifier for RasaNluClient {
    async fn parse(&self, text: &str, sender: &SenderId) -> Result<NluParse, NluError> {
        let response = self.send_request(text, sender).await?;
        let response = self.handle_response_status(response).await?;

        let body: ParseResponse = response
            .json()
            .await
            .map_err(|e| NluError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        Ok(body.into())
    }

    fn provider_name(&self) -> &'static str {
        "rasa"
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Wire types
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct ParseRequest<'a> {
    text: &'a str,
    message_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct ParseResponse {
    intent: Option<WireIntent>,
    #[serde(default)]
    entities: Vec<WireEntity>,
}

#[derive(Debug, Deserialize)]
struct WireIntent {
    name: Option<String>,
    #[serde(default)]
    confidence: f64,
}

#[derive(Debug, Deserialize)]
struct WireEntity {
    entity: String,
    value: serde_json::Value,
}

impl From<ParseResponse> for NluParse {
    fn from(body: ParseResponse) -> Self {
        let intent = match body.intent {
            Some(WireIntent {
                name: Some(name),
                confidence,
            }) => Intent::new(name, confidence),
            _ => Intent::fallback(),
        };

        let entities = body
            .entities
            .into_iter()
            .map(|e| {
                let value = match e.value {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                Entity::new(e.entity, value)
            })
            .collect();

        NluParse { intent, entities }
    }
}
