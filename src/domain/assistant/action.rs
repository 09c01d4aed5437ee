//! Assistant actions and the intent-to-action policy table.

use std::fmt;

/// One unit of rule-driven work triggered by a recognized intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssistantAction {
    SetActiveUnit,
    FollowUp,
    ComparePrograms,
    ProgramDifficulty,
    FacilityAccess,
    TrackLocation,
    ProgramRequirements,
    RecommendPrograms,
}

impl AssistantAction {
    /// Stable action name, as reported in transcripts.
    pub fn name(&self) -> &'static str {
        match self {
            AssistantAction::SetActiveUnit => "action_set_active_unit",
            AssistantAction::FollowUp => "action_follow_up",
            AssistantAction::ComparePrograms => "action_compare_programs",
            AssistantAction::ProgramDifficulty => "action_program_difficulty",
            AssistantAction::FacilityAccess => "action_facility_access",
            AssistantAction::TrackLocation => "action_track_location",
            AssistantAction::ProgramRequirements => "action_program_requirements",
            AssistantAction::RecommendPrograms => "action_recommend_programs",
        }
    }
}

impl fmt::Display for AssistantAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

use AssistantAction::*;

static POLICY: &[(&str, &[AssistantAction])] = &[
    ("ask_about_unit", &[SetActiveUnit, FollowUp]),
    ("compare_programs", &[ComparePrograms]),
    ("ask_program_difficulty", &[ProgramDifficulty]),
    ("ask_requirements", &[SetActiveUnit, ProgramRequirements]),
    ("ask_facility", &[FacilityAccess, FollowUp]),
    ("ask_location", &[TrackLocation]),
    ("share_interests", &[RecommendPrograms]),
    ("ask_follow_up", &[FollowUp]),
];

/// Maps intent names to the ordered actions they trigger.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionPolicy;

impl ActionPolicy {
    pub fn new() -> Self {
        Self
    }

    /// Returns the action plan for an intent; unknown intents plan nothing.
    pub fn plan(&self, intent: &str) -> &'static [AssistantAction] {
        POLICY
            .iter()
            .find(|(name, _)| *name == intent)
            .map(|(_, actions)| *actions)
            .unwrap_or(&[])
    }

    /// Intent names that have a non-empty plan.
    pub fn intents(&self) -> impl Iterator<Item = &'static str> {
        POLICY.iter().map(|(name, _)| *name)
    }
}
