//! Dialogue engine - runs an action plan against one conversation state.

use tracing::debug;

use super::{
    AssistantAction, ContextResolver, ConversationState, FollowUpGenerator, ResponseDispatcher,
    StateBatch, Utterance,
};

/// Executes assistant actions in order, applying each batch before the next
/// action runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogueEngine {
    resolver: ContextResolver,
    follow_up: FollowUpGenerator,
}

impl DialogueEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a recognized `program` entity into the state.
    pub fn fill_program(&self, program: &str, state: &mut ConversationState) {
        let program = program.trim().to_lowercase();
        if program.is_empty() {
            return;
        }
        state.apply(StateBatch::new().set_program(program));
    }

    /// Runs one action and returns its mutations without applying them.
    pub fn execute(
        &self,
        action: AssistantAction,
        utterance: &Utterance,
        state: &ConversationState,
        dispatcher: &mut ResponseDispatcher,
    ) -> StateBatch {
        match action {
            AssistantAction::SetActiveUnit => self.resolver.set_active_unit(utterance, state),
            AssistantAction::FollowUp => self.follow_up.generate(state, dispatcher),
            AssistantAction::ComparePrograms => {
                self.resolver.compare_programs(utterance, state, dispatcher)
            }
            AssistantAction::ProgramDifficulty => {
                self.resolver.program_difficulty(utterance, state, dispatcher)
            }
            AssistantAction::FacilityAccess => self.resolver.facility_access(utterance, dispatcher),
            AssistantAction::TrackLocation => {
                self.resolver.track_location(utterance, state, dispatcher)
            }
            AssistantAction::ProgramRequirements => {
                self.resolver.program_requirements(utterance, state, dispatcher)
            }
            AssistantAction::RecommendPrograms => {
                self.resolver.recommend_programs(utterance, dispatcher)
            }
        }
    }

    /// Runs the whole plan and returns the emitted messages in order.
    pub fn run(
        &self,
        plan: &[AssistantAction],
        utterance: &Utterance,
        state: &mut ConversationState,
    ) -> Vec<String> {
        let mut dispatcher = ResponseDispatcher::new();
        for action in plan {
            let batch = self.execute(*action, utterance, state, &mut dispatcher);
            debug!(action = %action, mutations = batch.len(), "action executed");
            state.apply(batch);
        }
        dispatcher.into_messages()
    }
}
