//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod assistant;

pub use assistant::{
    GatewaySettings, HandleTurnCommand, HandleTurnError, HandleTurnHandler, HandleTurnResult,
    DEFAULT_FALLBACK_MESSAGE, DEFAULT_FEEDBACK_MESSAGE, LIMIT_REACHED_NOTE,
};
