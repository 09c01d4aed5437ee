//! Mock NLU Classifier for testing.
//!
//! Returns queued parses in order, then a configurable default. Errors can
//! be queued alongside parses, and every call is recorded.
//!
//! # Example
//!
//! ```ignore
//! let nlu = MockNluClassifier::new()
//!     .with_intent("ask_about_unit", 0.98)
//!     .with_error(MockNluError::Timeout);
//!
//! let parse = nlu.parse("tell me about ccs", &sender).await?;
//! assert_eq!(nlu.call_count(), 1);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::foundation::SenderId;
use crate::ports::{Intent, NluClassifier, NluError, NluParse};

/// A configured mock outcome.
#[derive(Debug, Clone)]
pub enum MockNluResponse {
    Parse(NluParse),
    Error(MockNluError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockNluError {
    Unavailable { message: String },
    Timeout,
    InvalidResponse { message: String },
}

impl From<MockNluError> for NluError {
    fn from(err: MockNluError) -> Self {
        match err {
            MockNluError::Unavailable { message } => NluError::Unavailable(message),
            MockNluError::Timeout => NluError::Timeout,
            MockNluError::InvalidResponse { message } => NluError::InvalidResponse(message),
        }
    }
}

/// A recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub text: String,
    pub sender: SenderId,
}

/// Mock NLU classifier.
#[derive(Debug, Clone)]
pub struct MockNluClassifier {
    responses: Arc<Mutex<VecDeque<MockNluResponse>>>,
    default_parse: NluParse,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl Default for MockNluClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl MockNluClassifier {
    /// Creates a mock that answers `nlu_fallback` until configured otherwise.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            default_parse: NluParse::new(Intent::fallback()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a parse.
    pub fn with_parse(self, parse: NluParse) -> Self {
        self.push(MockNluResponse::Parse(parse));
        self
    }

    /// Queues a parse with the given intent and no entities.
    pub fn with_intent(self, name: impl Into<String>, confidence: f64) -> Self {
        self.with_parse(NluParse::new(Intent::new(name, confidence)))
    }

    /// Queues an error.
    pub fn with_error(self, error: MockNluError) -> Self {
        self.push(MockNluResponse::Error(error));
        self
    }

    /// Sets the parse returned once the queue is empty.
    pub fn with_default(mut self, parse: NluParse) -> Self {
        self.default_parse = parse;
        self
    }

    /// Returns the number of calls made to this classifier.
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn push(&self, response: MockNluResponse) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push_back(response);
        }
    }

    fn next_response(&self) -> MockNluResponse {
        self.responses
            .lock()
            .ok()
            .and_then(|mut r| r.pop_front())
            .unwrap_or_else(|| MockNluResponse::Parse(self.default_parse.clone()))
    }
}

#[async_trait]
impl NluClassifier for MockNluClassifier {
    async fn parse(&self, text: &str, sender: &SenderId) -> Result<NluParse, NluError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                text: text.to_string(),
                sender: sender.clone(),
            });
        }

        match self.next_response() {
            MockNluResponse::Parse(parse) => Ok(parse),
            MockNluResponse::Error(error) => Err(error.into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
