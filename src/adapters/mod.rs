//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `nlu` - Intent classifiers (keyword rules, Rasa-compatible HTTP, mock)
//! - `storage` - Session registry and transcript writers
//! - `http` - Axum webhook endpoint

pub mod http;
pub mod nlu;
pub mod storage;
