//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `assistant` - Keyword classification, conversation state, and actions
//! - `session` - Per-sender session, quota policy, and transcript

pub mod assistant;
pub mod foundation;
pub mod session;
