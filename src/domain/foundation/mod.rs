//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the campus assistant domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::ValidationError;
pub use ids::SenderId;
pub use timestamp::{Timestamp, TRANSCRIPT_FORMAT};
