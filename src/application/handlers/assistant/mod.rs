//! Assistant handlers - the Session Gateway turn pipeline.

mod handle_turn;

pub use handle_turn::{
    GatewaySettings, HandleTurnCommand, HandleTurnError, HandleTurnHandler, HandleTurnResult,
    DEFAULT_FALLBACK_MESSAGE, DEFAULT_FEEDBACK_MESSAGE, LIMIT_REACHED_NOTE,
};
