//! Context Resolver - merges keyword classification with stored state.
//!
//! Each operation reads the current state, may emit messages through the
//! dispatcher, and returns the complete batch of slot writes it wants
//! applied. Operations never mutate state themselves.

use tracing::debug;

use super::catalog::{
    difficulty_for, offices_for, programs_for, requirements_for, UnitPrograms,
    CAMPUS_LOCATION_PROMPT, COMPARISON_FOLLOW_UP, DIFFICULTY_FOLLOW_UP, FACILITIES_PROMPT,
    FACILITY_ACCESS_WORDS, FACILITY_GENERIC_WORDS, FACILITY_USAGE_WORDS, LOCATION_VAGUE_WORDS,
    MAX_RECOMMENDATIONS, RECOMMENDATION_FOLLOW_UP, REQUIREMENTS_PROMPT,
};
use super::classifier::{KeywordClassifier, Utterance};
use super::{ConversationState, ResponseDispatcher, Stage, StateBatch, Unit};

/// Resolves focus changes and canned answers for one utterance.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextResolver {
    classifier: KeywordClassifier,
}

impl ContextResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches the active unit when the utterance names one.
    ///
    /// Moving away from a different unit records it as `last_topic` and
    /// clears the topic before the new unit is written. The stage becomes
    /// `inquiring` only if no stage was set; otherwise the prior stage is
    /// restored after the transient `switching` marker.
    pub fn set_active_unit(&self, utterance: &Utterance, state: &ConversationState) -> StateBatch {
        let Some(new_unit) = self.classifier.unit(utterance) else {
            return StateBatch::new();
        };

        let mut batch = StateBatch::new();
        if let Some(current) = state.active_unit().filter(|u| *u != new_unit) {
            debug!(from = %current, to = %new_unit, "Switching active unit");
            batch = batch
                .set_last_topic(current)
                .set_stage(Stage::Switching)
                .clear_topic();
        }

        batch
            .set_unit(new_unit)
            .set_topic(format!("{}_general", new_unit))
            .set_stage(state.stage().unwrap_or(Stage::Inquiring))
    }

    /// Compares two programs of the same unit.
    pub fn compare_programs(
        &self,
        utterance: &Utterance,
        state: &ConversationState,
        dispatcher: &mut ResponseDispatcher,
    ) -> StateBatch {
        let (mut batch, unit, programs) = self.resolve_program_scope(utterance, state, 2);
        let mentioned = programs
            .map(|list| self.classifier.mentioned_programs(utterance, list))
            .unwrap_or_default();

        if let [first, second, ..] = mentioned[..] {
            debug!(first, second, "Comparing programs");
            dispatcher.utter(format!(
                "I'll help you compare {} and {} programs. They differ in several aspects \
                 including curriculum focus, career paths, and specialization opportunities.",
                first.to_uppercase(),
                second.to_uppercase()
            ));
            dispatcher.utter(COMPARISON_FOLLOW_UP);

            batch = batch
                .set_topic(format!("compare_{}_{}", first, second))
                .set_program(format!("{}_vs_{}", first, second))
                .set_stage(Stage::Comparing);
        } else if let Some(unit) = unit {
            dispatcher.utter(format!(
                "I can help you compare different programs in the {}. \
                 Which specific programs would you like to compare?",
                unit.display_code()
            ));
            utter_program_list(dispatcher, programs);
        }

        batch
    }

    /// Describes how demanding a single program is.
    pub fn program_difficulty(
        &self,
        utterance: &Utterance,
        state: &ConversationState,
        dispatcher: &mut ResponseDispatcher,
    ) -> StateBatch {
        let (mut batch, unit, programs) = self.resolve_program_scope(utterance, state, 1);
        let mentioned = programs.and_then(|list| {
            self.classifier
                .mentioned_programs(utterance, list)
                .first()
                .copied()
        });

        if let Some(program) = mentioned {
            let info = difficulty_for(program).map(str::to_string).unwrap_or_else(|| {
                format!(
                    "The {} program has its own unique challenges. \
                     I can provide more specific information if needed.",
                    program
                )
            });
            dispatcher.utter(info);
            dispatcher.utter(DIFFICULTY_FOLLOW_UP);

            batch = batch
                .set_program(program)
                .set_topic("program_difficulty")
                .set_stage(Stage::DiscussingDifficulty);
        } else if let Some(unit) = unit {
            dispatcher.utter(format!(
                "Programs in the {} vary in difficulty. Each has unique challenges based on \
                 your skills and interests. Which specific program would you like to know about?",
                unit.full_name()
            ));
            utter_program_list(dispatcher, programs);
        }

        batch
    }

    /// Answers access, usage, or general questions about a facility.
    pub fn facility_access(
        &self,
        utterance: &Utterance,
        dispatcher: &mut ResponseDispatcher,
    ) -> StateBatch {
        if let Some(facility) = self.classifier.facility(utterance) {
            if utterance.contains_any(FACILITY_ACCESS_WORDS) {
                dispatcher.utter(facility.access);
                dispatcher.utter(format!("Hours: {}", facility.hours));
                dispatcher.utter(format!("Location: {}", facility.location));
            } else if utterance.contains_any(FACILITY_USAGE_WORDS) {
                dispatcher.utter(facility.usage);
            } else {
                dispatcher.utter(format!("About the {}:", facility.title()));
                dispatcher.utter(facility.access);
                dispatcher.utter(facility.usage);
                dispatcher.utter(format!("Hours: {}", facility.hours));
                dispatcher.utter(format!("Location: {}", facility.location));
            }

            return StateBatch::new()
                .set_topic(facility.code)
                .set_stage(Stage::FacilityInfo);
        }

        if utterance.contains_any(FACILITY_GENERIC_WORDS) {
            dispatcher.utter(FACILITIES_PROMPT);
            return StateBatch::new().set_topic("facilities_general");
        }

        StateBatch::new()
    }

    /// Tracks the campus location a question is about.
    ///
    /// The landmark lookup and the dean/department office check are
    /// independent; both may emit in the same turn.
    pub fn track_location(
        &self,
        utterance: &Utterance,
        state: &ConversationState,
        dispatcher: &mut ResponseDispatcher,
    ) -> StateBatch {
        let mut batch = StateBatch::new();
        let mut found = false;

        if let Some(location) = self.classifier.location(utterance) {
            dispatcher.utter(location.description);
            batch = batch.set_location(location.code).set_topic("location_info");
            found = true;
        }

        let unit = state.active_unit();
        if let Some((unit, offices)) = unit.and_then(|u| offices_for(u).map(|o| (u, o))) {
            if utterance.contains_all(&["dean", "office"]) {
                dispatcher.utter(offices.dean);
                batch = batch
                    .set_location(format!("{}_dean_office", unit))
                    .set_topic("location_dean");
                found = true;
            } else if utterance.contains_all(&["department", "office"]) {
                dispatcher.utter(offices.departments);
                batch = batch
                    .set_location(format!("{}_department_offices", unit))
                    .set_topic("location_departments");
                found = true;
            }
        }

        if !found && utterance.contains_any(LOCATION_VAGUE_WORDS) {
            match unit {
                Some(unit) => dispatcher.utter(format!(
                    "The {} building has various facilities including classrooms, faculty \
                     offices, the Dean's Office, department offices, and specialized \
                     laboratories. Which specific location are you looking for?",
                    unit.display_code()
                )),
                None => dispatcher.utter(CAMPUS_LOCATION_PROMPT),
            }
            batch = batch.set_topic("location_general");
        }

        batch
    }

    /// Answers admission, curriculum, or graduation questions.
    ///
    /// The subject is the active program when it has requirement texts,
    /// otherwise the active unit.
    pub fn program_requirements(
        &self,
        utterance: &Utterance,
        state: &ConversationState,
        dispatcher: &mut ResponseDispatcher,
    ) -> StateBatch {
        let Some(category) = self.classifier.requirement_category(utterance) else {
            return StateBatch::new();
        };

        let subject = state
            .active_program()
            .and_then(requirements_for)
            .or_else(|| state.active_unit().and_then(|u| requirements_for(u.code())));

        match subject {
            Some(texts) => {
                debug!(subject = texts.subject, category = category.as_str(), "Providing requirements");
                dispatcher.utter(texts.text(category));
                StateBatch::new()
                    .set_topic(format!("{}_{}", texts.subject, category.as_str()))
                    .set_stage(Stage::ProvidingRequirements)
            }
            None => {
                dispatcher.utter(REQUIREMENTS_PROMPT);
                StateBatch::new().set_topic("program_requirements_general")
            }
        }
    }

    /// Recommends programs for every interest the utterance mentions.
    pub fn recommend_programs(
        &self,
        utterance: &Utterance,
        dispatcher: &mut ResponseDispatcher,
    ) -> StateBatch {
        let interests = self.classifier.interests(utterance);
        if interests.is_empty() {
            return StateBatch::new();
        }

        let mut recommendations: Vec<&str> = Vec::new();
        for program in interests.iter().flat_map(|i| i.recommendations.iter().copied()) {
            if !recommendations.contains(&program) {
                recommendations.push(program);
            }
        }
        recommendations.truncate(MAX_RECOMMENDATIONS);

        let names: Vec<&str> = interests.iter().map(|i| i.name).collect();
        dispatcher.utter(format!(
            "Based on your interests in {}, you might consider these programs: {}",
            names.join(", "),
            recommendations.join(", ")
        ));
        dispatcher.utter(RECOMMENDATION_FOLLOW_UP);

        StateBatch::new()
            .set_topic("program_recommendation")
            .set_stage(Stage::Recommending)
    }

    /// Picks the program list to scan: the active unit's, or the first list
    /// with at least `min_mentions` hits. An adopted unit is written to the batch.
    fn resolve_program_scope(
        &self,
        utterance: &Utterance,
        state: &ConversationState,
        min_mentions: usize,
    ) -> (StateBatch, Option<Unit>, Option<&'static UnitPrograms>) {
        if let Some(unit) = state.active_unit() {
            return (StateBatch::new(), Some(unit), programs_for(unit));
        }

        match self
            .classifier
            .first_unit_with_programs(utterance, min_mentions)
        {
            Some(list) => (StateBatch::new().set_unit(list.unit), Some(list.unit), Some(list)),
            None => (StateBatch::new(), None, None),
        }
    }
}

fn utter_program_list(dispatcher: &mut ResponseDispatcher, programs: Option<&UnitPrograms>) {
    if let Some(list) = programs.filter(|l| !l.programs.is_empty()) {
        dispatcher.utter(format!("Available programs: {}", list.display_list()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn state_with(batch: StateBatch) -> ConversationState {
        let mut state = ConversationState::new();
        state.apply(batch);
        state
    }

    fn run(
        state: &mut ConversationState,
        op: impl FnOnce(&ContextResolver, &ConversationState, &mut ResponseDispatcher) -> StateBatch,
    ) -> Vec<String> {
        let resolver = ContextResolver::new();
        let mut dispatcher = ResponseDispatcher::new();
        let batch = op(&resolver, state, &mut dispatcher);
        state.apply(batch);
        dispatcher.into_messages()
    }

    mod unit_switch {
        use super::*;

        #[test]
        fn first_unit_sets_general_topic_and_inquiring_stage() {
            let resolver = ContextResolver::new();
            let mut state = ConversationState::new();
            state.apply(resolver.set_active_unit(&Utterance::new("tell me about ccs"), &state));

            assert_eq!(state.active_unit(), Some(Unit::Ccs));
            assert_eq!(state.active_topic(), Some("ccs_general"));
            assert_eq!(state.stage(), Some(Stage::Inquiring));
            assert_eq!(state.last_topic(), None);
        }

        #[test]
        fn switching_records_previous_unit_and_keeps_stage() {
            let resolver = ContextResolver::new();
            let mut state = state_with(
                StateBatch::new()
                    .set_unit(Unit::Ccs)
                    .set_topic("compare_bscs_bsit")
                    .set_stage(Stage::Comparing),
            );

            let batch = resolver.set_active_unit(&Utterance::new("what about engineering"), &state);
            assert!(batch
                .mutations()
                .contains(&crate::domain::assistant::StateMutation::Stage(Stage::Switching)));
            state.apply(batch);

            assert_eq!(state.active_unit(), Some(Unit::Coe));
            assert_eq!(state.last_topic(), Some(Unit::Ccs));
            assert_eq!(state.active_topic(), Some("coe_general"));
            assert_eq!(state.stage(), Some(Stage::Comparing));
        }

        #[test]
        fn same_unit_does_not_touch_last_topic() {
            let resolver = ContextResolver::new();
            let mut state = state_with(StateBatch::new().set_unit(Unit::Chs));
            state.apply(resolver.set_active_unit(&Utterance::new("nursing"), &state));

            assert_eq!(state.last_topic(), None);
            assert_eq!(state.active_topic(), Some("chs_general"));
        }

        #[test]
        fn no_unit_keyword_yields_empty_batch() {
            let resolver = ContextResolver::new();
            let state = ConversationState::new();
            assert!(resolver
                .set_active_unit(&Utterance::new("hello there"), &state)
                .is_empty());
        }

        const UNIT_PROBES: [(Unit, &str); 7] = [
            (Unit::Ccs, "ccs"),
            (Unit::Coe, "engineering"),
            (Unit::Csm, "biology"),
            (Unit::Ceba, "finance"),
            (Unit::Cass, "sociology"),
            (Unit::Ced, "pedagogy"),
            (Unit::Chs, "nursing"),
        ];

        const STAGES: [Stage; 8] = [
            Stage::Inquiring,
            Stage::Switching,
            Stage::Comparing,
            Stage::DiscussingDifficulty,
            Stage::FollowingUp,
            Stage::ProvidingRequirements,
            Stage::Recommending,
            Stage::FacilityInfo,
        ];

        proptest! {
            #[test]
            fn switch_always_sets_general_topic_and_last_topic(
                prior in prop::option::of(0usize..7),
                prior_stage in prop::option::of(0usize..8),
                prior_topic in prop::option::of("[a-z_]{1,12}"),
                target in 0usize..7,
            ) {
                let resolver = ContextResolver::new();
                let mut seed = StateBatch::new();
                if let Some(p) = prior {
                    seed = seed.set_unit(UNIT_PROBES[p].0);
                }
                if let Some(s) = prior_stage {
                    seed = seed.set_stage(STAGES[s]);
                }
                if let Some(t) = prior_topic {
                    seed = seed.set_topic(t);
                }
                let mut state = state_with(seed);
                let before = state.clone();

                let (target_unit, probe) = UNIT_PROBES[target];
                state.apply(resolver.set_active_unit(&Utterance::new(probe), &before));

                prop_assert_eq!(state.active_unit(), Some(target_unit));
                let expected_topic = format!("{}_general", target_unit);
                prop_assert_eq!(state.active_topic(), Some(expected_topic.as_str()));
                match before.active_unit() {
                    Some(p) if p != target_unit => prop_assert_eq!(state.last_topic(), Some(p)),
                    _ => prop_assert_eq!(state.last_topic(), before.last_topic()),
                }
                prop_assert_eq!(state.stage(), Some(before.stage().unwrap_or(Stage::Inquiring)));
            }
        }
    }

    mod comparison {
        use super::*;

        #[test]
        fn compare_without_unit_adopts_first_unit_with_two_programs() {
            let mut state = ConversationState::new();
            let messages = run(&mut state, |r, s, d| {
                r.compare_programs(&Utterance::new("compare bscs and bsit"), s, d)
            });

            assert_eq!(state.active_unit(), Some(Unit::Ccs));
            assert_eq!(state.active_topic(), Some("compare_bscs_bsit"));
            assert_eq!(state.active_program(), Some("bscs_vs_bsit"));
            assert_eq!(state.stage(), Some(Stage::Comparing));
            assert_eq!(messages.len(), 2);
            assert!(messages[0].starts_with("I'll help you compare BSCS and BSIT programs."));
            assert_eq!(messages[1], COMPARISON_FOLLOW_UP);
        }

        #[test]
        fn compare_uses_list_order_not_mention_order() {
            let mut state = ConversationState::new();
            run(&mut state, |r, s, d| {
                r.compare_programs(&Utterance::new("civil vs mechanical"), s, d)
            });
            assert_eq!(state.active_topic(), Some("compare_mechanical_civil"));
        }

        #[test]
        fn compare_with_active_unit_but_no_pair_lists_programs() {
            let mut state = state_with(StateBatch::new().set_unit(Unit::Ceba));
            let messages = run(&mut state, |r, s, d| {
                r.compare_programs(&Utterance::new("compare programs please"), s, d)
            });

            assert_eq!(
                messages,
                vec![
                    "I can help you compare different programs in the CEBA. Which specific programs would you like to compare?".to_string(),
                    "Available programs: BUSINESS, ECONOMICS, ACCOUNTANCY, FINANCE, MANAGEMENT".to_string(),
                ]
            );
            assert_eq!(state.stage(), None);
        }

        #[test]
        fn compare_with_nothing_known_is_silent() {
            let mut state = ConversationState::new();
            let messages = run(&mut state, |r, s, d| {
                r.compare_programs(&Utterance::new("compare them"), s, d)
            });
            assert!(messages.is_empty());
            assert_eq!(state, ConversationState::new());
        }

        #[test]
        fn active_unit_scopes_the_scan() {
            let mut state = state_with(StateBatch::new().set_unit(Unit::Coe));
            let messages = run(&mut state, |r, s, d| {
                r.compare_programs(&Utterance::new("compare bscs and bsit"), s, d)
            });
            assert_eq!(messages.len(), 2);
            assert!(messages[0].contains("in the COE"));
            assert_eq!(state.active_unit(), Some(Unit::Coe));
        }
    }

    mod difficulty {
        use super::*;

        #[test]
        fn known_program_emits_canned_text_then_follow_up() {
            let mut state = ConversationState::new();
            let messages = run(&mut state, |r, s, d| {
                r.program_difficulty(&Utterance::new("how hard is nursing"), s, d)
            });

            assert_eq!(state.active_unit(), Some(Unit::Chs));
            assert_eq!(state.active_program(), Some("nursing"));
            assert_eq!(state.active_topic(), Some("program_difficulty"));
            assert_eq!(state.stage(), Some(Stage::DiscussingDifficulty));
            assert_eq!(messages.len(), 2);
            assert!(messages[0].starts_with("Nursing combines scientific knowledge"));
            assert_eq!(messages[1], DIFFICULTY_FOLLOW_UP);
        }

        #[test]
        fn program_without_entry_gets_generic_sentence() {
            let mut state = ConversationState::new();
            let messages = run(&mut state, |r, s, d| {
                r.program_difficulty(&Utterance::new("is statistics difficult"), s, d)
            });

            assert_eq!(state.active_unit(), Some(Unit::Csm));
            assert_eq!(
                messages[0],
                "The statistics program has its own unique challenges. I can provide more specific information if needed."
            );
        }

        #[test]
        fn unit_without_program_gets_overview() {
            let mut state = state_with(StateBatch::new().set_unit(Unit::Ced));
            let messages = run(&mut state, |r, s, d| {
                r.program_difficulty(&Utterance::new("are the courses hard"), s, d)
            });

            assert_eq!(messages.len(), 2);
            assert!(messages[0].starts_with("Programs in the College of Education vary in difficulty."));
            assert_eq!(
                messages[1],
                "Available programs: ELEMENTARY, SECONDARY, SPECIAL EDUCATION, PHYSICAL EDUCATION"
            );
            assert_eq!(state.active_program(), None);
        }
    }

    mod facilities {
        use super::*;

        fn ask(text: &str) -> (ConversationState, Vec<String>) {
            let mut state = ConversationState::new();
            let messages = run(&mut state, |r, _, d| r.facility_access(&Utterance::new(text), d));
            (state, messages)
        }

        #[test]
        fn access_question_gets_access_hours_location() {
            let (state, messages) = ask("how do i access the fablab");
            assert_eq!(messages.len(), 3);
            assert!(messages[0].starts_with("To access the FAB LAB"));
            assert!(messages[1].starts_with("Hours: "));
            assert!(messages[2].starts_with("Location: "));
            assert_eq!(state.active_topic(), Some("fablab"));
            assert_eq!(state.stage(), Some(Stage::FacilityInfo));
        }

        #[test]
        fn usage_question_gets_usage_only() {
            let (_, messages) = ask("what equipment is in the fablab");
            assert_eq!(messages.len(), 1);
            assert!(messages[0].starts_with("The FAB LAB has 3D printers"));
        }

        #[test]
        fn general_question_gets_full_bundle_in_order() {
            let (state, messages) = ask("tell me about the library");
            assert_eq!(messages.len(), 5);
            assert_eq!(messages[0], "About the Library:");
            assert!(messages[3].starts_with("Hours: "));
            assert!(messages[4].starts_with("Location: "));
            assert_eq!(state.active_topic(), Some("library"));
        }

        #[test]
        fn generic_facility_words_prompt_for_specifics() {
            let (state, messages) = ask("what labs do you have");
            assert_eq!(messages, vec![FACILITIES_PROMPT.to_string()]);
            assert_eq!(state.active_topic(), Some("facilities_general"));
            assert_eq!(state.stage(), None);
        }

        #[test]
        fn unrelated_text_is_silent() {
            let (state, messages) = ask("good morning");
            assert!(messages.is_empty());
            assert_eq!(state, ConversationState::new());
        }
    }

    mod locations {
        use super::*;

        #[test]
        fn landmark_hit_sets_location_and_topic() {
            let mut state = ConversationState::new();
            let messages = run(&mut state, |r, s, d| {
                r.track_location(&Utterance::new("where is the gym"), s, d)
            });
            assert_eq!(messages.len(), 1);
            assert!(messages[0].starts_with("The gymnasium and sports complex"));
            assert_eq!(state.active_location(), Some("gym"));
            assert_eq!(state.active_topic(), Some("location_info"));
        }

        #[test]
        fn dean_office_uses_active_unit() {
            let mut state = state_with(StateBatch::new().set_unit(Unit::Ccs));
            let messages = run(&mut state, |r, s, d| {
                r.track_location(&Utterance::new("where is the dean office"), s, d)
            });
            assert_eq!(
                messages,
                vec!["The Dean's Office of the College of Computer Studies is on the 3rd floor, Room 301.".to_string()]
            );
            assert_eq!(state.active_location(), Some("ccs_dean_office"));
            assert_eq!(state.active_topic(), Some("location_dean"));
        }

        #[test]
        fn department_office_uses_active_unit() {
            let mut state = state_with(StateBatch::new().set_unit(Unit::Csm));
            run(&mut state, |r, s, d| {
                r.track_location(&Utterance::new("which floor is the department office"), s, d)
            });
            assert_eq!(state.active_location(), Some("csm_department_offices"));
            assert_eq!(state.active_topic(), Some("location_departments"));
        }

        #[test]
        fn landmark_and_dean_office_both_fire() {
            let mut state = state_with(StateBatch::new().set_unit(Unit::Ccs));
            let messages = run(&mut state, |r, s, d| {
                r.track_location(&Utterance::new("is the dean office in the ccs building"), s, d)
            });
            assert_eq!(messages.len(), 2);
            assert!(messages[0].starts_with("The College of Computer Studies building"));
            assert_eq!(state.active_topic(), Some("location_dean"));
        }

        #[test]
        fn dean_office_without_unit_falls_back_to_prompt() {
            let mut state = ConversationState::new();
            let messages = run(&mut state, |r, s, d| {
                r.track_location(&Utterance::new("where is the dean office"), s, d)
            });
            assert_eq!(messages, vec![CAMPUS_LOCATION_PROMPT.to_string()]);
            assert_eq!(state.active_topic(), Some("location_general"));
        }

        #[test]
        fn vague_question_with_unit_gets_unit_prompt() {
            let mut state = state_with(StateBatch::new().set_unit(Unit::Coe));
            let messages = run(&mut state, |r, s, d| {
                r.track_location(&Utterance::new("where should i go"), s, d)
            });
            assert_eq!(messages.len(), 1);
            assert!(messages[0].starts_with("The COE building has various facilities"));
        }
    }

    mod requirements {
        use super::*;

        #[test]
        fn active_program_wins_over_unit() {
            let mut state =
                state_with(StateBatch::new().set_unit(Unit::Ccs).set_program("bscs"));
            let messages = run(&mut state, |r, s, d| {
                r.program_requirements(&Utterance::new("what are the admission requirements"), s, d)
            });
            assert_eq!(messages.len(), 1);
            assert!(messages[0].starts_with("For BSCS, admission requirements include"));
            assert_eq!(state.active_topic(), Some("bscs_admission"));
            assert_eq!(state.stage(), Some(Stage::ProvidingRequirements));
        }

        #[test]
        fn program_without_texts_falls_back_to_unit() {
            let mut state =
                state_with(StateBatch::new().set_unit(Unit::Coe).set_program("civil"));
            run(&mut state, |r, s, d| {
                r.program_requirements(&Utterance::new("show me the curriculum"), s, d)
            });
            assert_eq!(state.active_topic(), Some("coe_curriculum"));
        }

        #[test]
        fn no_subject_prompts_for_one() {
            let mut state = ConversationState::new();
            let messages = run(&mut state, |r, s, d| {
                r.program_requirements(&Utterance::new("what do i need to graduate"), s, d)
            });
            assert_eq!(messages, vec![REQUIREMENTS_PROMPT.to_string()]);
            assert_eq!(state.active_topic(), Some("program_requirements_general"));
            assert_eq!(state.stage(), None);
        }

        #[test]
        fn no_category_is_silent() {
            let mut state = state_with(StateBatch::new().set_unit(Unit::Coe));
            let messages = run(&mut state, |r, s, d| {
                r.program_requirements(&Utterance::new("hello"), s, d)
            });
            assert!(messages.is_empty());
        }
    }

    mod recommendations {
        use super::*;

        fn recommended(message: &str) -> Vec<String> {
            message
                .split("you might consider these programs: ")
                .nth(1)
                .unwrap()
                .split(", ")
                .map(str::to_string)
                .collect()
        }

        #[test]
        fn matching_interests_are_unioned_and_deduplicated() {
            let mut state = ConversationState::new();
            let messages = run(&mut state, |r, _, d| {
                r.recommend_programs(&Utterance::new("i enjoy programming and research"), d)
            });

            assert_eq!(messages.len(), 2);
            assert!(messages[0].starts_with("Based on your interests in technical, research, "));
            let programs = recommended(&messages[0]);
            assert_eq!(programs.len(), 5);
            for expected in ["BSCS", "BSIT", "Physics", "Biology", "Chemistry"] {
                assert!(programs.iter().any(|p| p == expected), "missing {}", expected);
            }
            assert_eq!(messages[1], RECOMMENDATION_FOLLOW_UP);
            assert_eq!(state.active_topic(), Some("program_recommendation"));
            assert_eq!(state.stage(), Some(Stage::Recommending));
        }

        #[test]
        fn list_is_capped_at_five() {
            let mut state = ConversationState::new();
            let messages = run(&mut state, |r, _, d| {
                r.recommend_programs(&Utterance::new("programming, research and design"), d)
            });
            assert_eq!(recommended(&messages[0]).len(), 5);
        }

        #[test]
        fn no_interest_is_silent() {
            let mut state = ConversationState::new();
            let messages = run(&mut state, |r, _, d| {
                r.recommend_programs(&Utterance::new("good morning"), d)
            });
            assert!(messages.is_empty());
            assert_eq!(state.stage(), None);
        }
    }
}
