//! NLU Adapters - Implementations of the NluClassifier port.
//!
//! - `KeywordNluClassifier` - Ordered keyword rules, no external service
//! - `RasaNluClient` - HTTP client for a Rasa-compatible `/model/parse` server
//! - `MockNluClassifier` - Scripted responses for tests

mod keyword_nlu;
mod mock_nlu;
mod rasa_nlu;

pub use keyword_nlu::KeywordNluClassifier;
pub use mock_nlu::{MockNluClassifier, MockNluError, MockNluResponse, RecordedCall};
pub use rasa_nlu::{RasaNluClient, RasaNluConfig};
