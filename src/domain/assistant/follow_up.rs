//! Follow-up Generator - state-conditioned suggestion lists.

use super::catalog::{service_suggestions, suggestions_for};
use super::{ConversationState, ResponseDispatcher, Stage, StateBatch};

/// A selected suggestion list with its lead-in sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowUp {
    intro: String,
    items: &'static [&'static str],
}

impl FollowUp {
    pub fn items(&self) -> &'static [&'static str] {
        self.items
    }

    /// Lead-in line followed by a 1-indexed numbered list.
    pub fn render(&self) -> String {
        let list = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}. {}", i + 1, item))
            .collect::<Vec<_>>()
            .join("\n");
        format!("{}\n{}", self.intro, list)
    }
}

/// Picks suggestions from the static tables based on state.
#[derive(Debug, Clone, Copy, Default)]
pub struct FollowUpGenerator;

impl FollowUpGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Selects a suggestion list, or `None` when nothing applies.
    ///
    /// Precedence: the active unit's program-specific list, then the unit's
    /// topic bucket for the active topic, then a unit-independent service topic.
    pub fn suggest(&self, state: &ConversationState) -> Option<FollowUp> {
        if let Some(tables) = state.active_unit().and_then(suggestions_for) {
            if let Some(program) = state.active_program() {
                if let Some(items) = tables.program(&program_key(program)) {
                    return Some(FollowUp {
                        intro: format!("For {}, would you like to know about:", program.to_uppercase()),
                        items,
                    });
                }
            }

            if let Some(items) = state.active_topic().and_then(|t| tables.topic(t)) {
                return Some(FollowUp {
                    intro: "Would you like to know about:".to_string(),
                    items,
                });
            }
        }

        let topic = state.active_topic()?;
        service_suggestions(topic).map(|items| FollowUp {
            intro: format!("Regarding {}, would you like to know about:", topic),
            items,
        })
    }

    /// Emits the rendered suggestions and moves the stage to `following_up`.
    pub fn generate(
        &self,
        state: &ConversationState,
        dispatcher: &mut ResponseDispatcher,
    ) -> StateBatch {
        match self.suggest(state) {
            Some(follow_up) => {
                dispatcher.utter(follow_up.render());
                StateBatch::new().set_stage(Stage::FollowingUp)
            }
            None => StateBatch::new(),
        }
    }
}

/// Suggestion tables key programs with underscores.
fn program_key(program: &str) -> String {
    program.trim().to_lowercase().replace(' ', "_")
}
