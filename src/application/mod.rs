//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    GatewaySettings, HandleTurnCommand, HandleTurnError, HandleTurnHandler, HandleTurnResult,
    DEFAULT_FALLBACK_MESSAGE, DEFAULT_FEEDBACK_MESSAGE, LIMIT_REACHED_NOTE,
};
