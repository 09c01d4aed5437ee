//! State mutation batches produced by resolver actions.

use super::{Stage, Unit};

/// A single slot write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateMutation {
    ActiveUnit(Unit),
    /// `None` clears the topic.
    ActiveTopic(Option<String>),
    ActiveProgram(String),
    ActiveLocation(String),
    LastTopic(Unit),
    Stage(Stage),
}

/// Ordered list of slot writes applied as one unit.
///
/// Later writes to the same slot win, so a batch may carry a transient
/// value followed by its replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateBatch {
    mutations: Vec<StateMutation>,
}

impl StateBatch {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unit(mut self, unit: Unit) -> Self {
        self.mutations.push(StateMutation::ActiveUnit(unit));
        self
    }

    pub fn set_topic(mut self, topic: impl Into<String>) -> Self {
        self.mutations
            .push(StateMutation::ActiveTopic(Some(topic.into())));
        self
    }

    pub fn clear_topic(mut self) -> Self {
        self.mutations.push(StateMutation::ActiveTopic(None));
        self
    }

    pub fn set_program(mut self, program: impl Into<String>) -> Self {
        self.mutations
            .push(StateMutation::ActiveProgram(program.into()));
        self
    }

    pub fn set_location(mut self, location: impl Into<String>) -> Self {
        self.mutations
            .push(StateMutation::ActiveLocation(location.into()));
        self
    }

    pub fn set_last_topic(mut self, unit: Unit) -> Self {
        self.mutations.push(StateMutation::LastTopic(unit));
        self
    }

    pub fn set_stage(mut self, stage: Stage) -> Self {
        self.mutations.push(StateMutation::Stage(stage));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.mutations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.mutations.len()
    }

    pub fn mutations(&self) -> &[StateMutation] {
        &self.mutations
    }

    pub(crate) fn into_mutations(self) -> Vec<StateMutation> {
        self.mutations
    }
}
