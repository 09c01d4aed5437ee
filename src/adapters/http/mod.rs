//! HTTP adapters - REST API implementations.

pub mod assistant;

pub use assistant::{assistant_routes, AssistantAppState};
