//! Session domain module.
//!
//! A session is created on the first turn from a sender and retained for
//! the process lifetime. It owns one conversation state, one turn counter,
//! and one transcript buffer.

mod aggregate;
mod quota;
mod transcript;

pub use aggregate::Session;
pub use quota::{QuotaPolicy, QuotaVerdict, DEFAULT_MESSAGE_LIMIT};
pub use transcript::{Role, Transcript, SEPARATOR_WIDTH};
