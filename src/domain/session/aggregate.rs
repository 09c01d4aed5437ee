//! Session aggregate.
//!
//! One session exists per sender for the lifetime of the process. It owns
//! the conversation state, the turn counter, and the transcript buffer.

use crate::domain::assistant::ConversationState;
use crate::domain::foundation::{SenderId, Timestamp};

use super::transcript::{Role, Transcript};

/// Per-sender conversation session.
///
/// # Invariants
///
/// - `turns` only increases, by exactly one per [`Session::begin_turn`]
/// - the transcript header is written once, at creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    sender: SenderId,
    state: ConversationState,
    turns: u32,
    transcript: Transcript,
}

impl Session {
    /// Creates an empty session and writes the transcript header.
    pub fn new(sender: SenderId, started_at: Timestamp) -> Self {
        let transcript = Transcript::start(&sender, &started_at);
        Self {
            sender,
            state: ConversationState::new(),
            turns: 0,
            transcript,
        }
    }

    pub fn sender(&self) -> &SenderId {
        &self.sender
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ConversationState {
        &mut self.state
    }

    /// Number of turns received so far, including over-quota turns.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Counts a new turn and records the user line. Returns the turn number.
    pub fn begin_turn(&mut self, text: &str, at: &Timestamp) -> u32 {
        self.turns = self.turns.saturating_add(1);
        self.transcript.append(at, Role::User, text);
        self.turns
    }

    pub fn record_bot(&mut self, text: &str, at: &Timestamp) {
        self.transcript.append(at, Role::Bot, text);
    }

    pub fn record_system(&mut self, text: &str, at: &Timestamp) {
        self.transcript.append(at, Role::System, text);
    }
}
