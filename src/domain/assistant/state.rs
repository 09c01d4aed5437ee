//! Per-session conversation state.

use serde::{Deserialize, Serialize};

use super::mutation::{StateBatch, StateMutation};
use super::{Stage, Unit};

/// The slots tracked for one conversation.
///
/// Slots are only written through [`ConversationState::apply`], so every
/// change arrives as a complete batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    active_unit: Option<Unit>,
    active_topic: Option<String>,
    active_program: Option<String>,
    active_location: Option<String>,
    last_topic: Option<Unit>,
    conversation_stage: Option<Stage>,
}

impl ConversationState {
    /// Creates a state with every slot unset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_unit(&self) -> Option<Unit> {
        self.active_unit
    }

    pub fn active_topic(&self) -> Option<&str> {
        self.active_topic.as_deref()
    }

    pub fn active_program(&self) -> Option<&str> {
        self.active_program.as_deref()
    }

    pub fn active_location(&self) -> Option<&str> {
        self.active_location.as_deref()
    }

    pub fn last_topic(&self) -> Option<Unit> {
        self.last_topic
    }

    pub fn stage(&self) -> Option<Stage> {
        self.conversation_stage
    }

    /// Applies every mutation of the batch in order.
    pub fn apply(&mut self, batch: StateBatch) {
        for mutation in batch.into_mutations() {
            match mutation {
                StateMutation::ActiveUnit(unit) => self.active_unit = Some(unit),
                StateMutation::ActiveTopic(topic) => self.active_topic = topic,
                StateMutation::ActiveProgram(program) => self.active_program = Some(program),
                StateMutation::ActiveLocation(location) => self.active_location = Some(location),
                StateMutation::LastTopic(unit) => self.last_topic = Some(unit),
                StateMutation::Stage(stage) => self.conversation_stage = Some(stage),
            }
        }
    }
}
