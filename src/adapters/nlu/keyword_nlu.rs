//! Keyword NLU Classifier
//!
//! Deterministic intent recognition built on the assistant's keyword
//! tables. Rules are checked in order and the first hit wins; nothing is
//! scored. The default classifier when no external NLU service is set.

use async_trait::async_trait;

use crate::domain::assistant::catalog::FACILITY_GENERIC_WORDS;
use crate::domain::assistant::{KeywordClassifier, Utterance};
use crate::domain::foundation::SenderId;
use crate::ports::{Intent, NluClassifier, NluError, NluParse, PROGRAM_ENTITY};

const COMPARE_CUES: &[&str] = &["compare", "comparison", " vs ", " vs. ", "versus", "difference", "differ"];
const DIFFICULTY_CUES: &[&str] = &["difficult", "hard", "challenging", "tough", "easy"];
const LOCATION_CUES: &[&str] = &["where", "located", "location", "directions", "how to get", "office", "which floor"];
const INTEREST_CUES: &[&str] = &["interest", "enjoy", "like", "love", "passion", "good at", "prefer"];
const FOLLOW_UP_CUES: &[&str] = &["tell me more", "more about", "what else", "anything else", "more info", "more details", "options"];

type RuleFn = fn(&KeywordClassifier, &Utterance) -> bool;

/// Ordered intent rules; the first rule that matches decides the intent.
static RULES: &[(&str, RuleFn)] = &[
    ("compare_programs", is_comparison),
    ("ask_program_difficulty", is_difficulty),
    ("ask_location", is_location),
    ("ask_facility", is_facility),
    ("ask_requirements", is_requirements),
    ("ask_location", is_landmark),
    ("share_interests", is_interests),
    ("ask_follow_up", is_follow_up),
    ("ask_about_unit", is_unit_mention),
];

fn is_comparison(_: &KeywordClassifier, u: &Utterance) -> bool {
    u.contains_any(COMPARE_CUES)
}

fn is_difficulty(_: &KeywordClassifier, u: &Utterance) -> bool {
    u.contains_any(DIFFICULTY_CUES)
}

fn is_location(_: &KeywordClassifier, u: &Utterance) -> bool {
    u.contains_any(LOCATION_CUES)
}

fn is_facility(c: &KeywordClassifier, u: &Utterance) -> bool {
    c.facility(u).is_some() || u.contains_any(FACILITY_GENERIC_WORDS)
}

fn is_requirements(c: &KeywordClassifier, u: &Utterance) -> bool {
    c.requirement_category(u).is_some()
}

// Checked after facilities and requirements: "library" and "admissions"
// also appear in those tables.
fn is_landmark(c: &KeywordClassifier, u: &Utterance) -> bool {
    c.location(u).is_some()
}

fn is_interests(c: &KeywordClassifier, u: &Utterance) -> bool {
    u.contains_any(INTEREST_CUES) && !c.interests(u).is_empty()
}

fn is_follow_up(_: &KeywordClassifier, u: &Utterance) -> bool {
    u.contains_any(FOLLOW_UP_CUES)
}

fn is_unit_mention(c: &KeywordClassifier, u: &Utterance) -> bool {
    c.unit(u).is_some()
}

/// Rule-based NLU over the static keyword tables
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordNluClassifier {
    classifier: KeywordClassifier,
}

impl KeywordNluClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies synchronously; the async port wraps this.
    pub fn classify(&self, text: &str) -> NluParse {
        let utterance = Utterance::new(text);

        let intent = RULES
            .iter()
            .find(|(_, rule)| rule(&self.classifier, &utterance))
            .map(|(name, _)| Intent::new(*name, 1.0))
            .unwrap_or_else(Intent::fallback);

        let mut parse = NluParse::new(intent);
        if let Some(program) = self.classifier.first_program(&utterance) {
            parse = parse.with_entity(PROGRAM_ENTITY, program);
        }
        parse
    }
}

#[async_trait]
impl NluClassifier for KeywordNluClassifier {
    async fn parse(&self, text: &str, _sender: &SenderId) -> Result<NluParse, NluError> {
        Ok(self.classify(text))
    }

    fn provider_name(&self) -> &'static str {
        "keyword"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::FALLBACK_INTENT;

    fn intent_of(text: &str) -> String {
        KeywordNluClassifier::new().classify(text).intent.name
    }

    #[test]
    fn comparison_wins_over_everything() {
        let parse = KeywordNluClassifier::new().classify("Compare BSCS and BSIT");
        assert_eq!(parse.intent.name, "compare_programs");
        assert_eq!(parse.intent.confidence, 1.0);
        assert_eq!(parse.entity(PROGRAM_ENTITY), Some("bscs"));
    }

    #[test]
    fn difficulty_questions_are_recognized() {
        assert_eq!(intent_of("is nursing hard"), "ask_program_difficulty");
    }

    #[test]
    fn where_questions_are_locations() {
        assert_eq!(intent_of("where is the gym"), "ask_location");
        assert_eq!(intent_of("which floor is the dean office on"), "ask_location");
    }

    #[test]
    fn entering_a_facility_is_not_an_admission_question() {
        assert_eq!(intent_of("how do i enter the fablab"), "ask_facility");
        assert_eq!(intent_of("what labs are available"), "ask_facility");
    }

    #[test]
    fn bare_landmarks_are_locations() {
        for text in [
            "cafeteria",
            "the auditorium",
            "ccs building",
            "tell me about the cafeteria",
            "admin building",
            "gymnasium hours",
        ] {
            assert_eq!(intent_of(text), "ask_location", "{text}");
        }
    }

    #[test]
    fn shared_landmark_words_keep_earlier_intents() {
        assert_eq!(intent_of("how do i access the library"), "ask_facility");
        assert_eq!(intent_of("what are the admissions requirements"), "ask_requirements");
    }

    #[test]
    fn requirement_questions_carry_program_entity() {
        let parse = KeywordNluClassifier::new().classify("what are the admission requirements for bscs");
        assert_eq!(parse.intent.name, "ask_requirements");
        assert_eq!(parse.entity(PROGRAM_ENTITY), Some("bscs"));
    }

    #[test]
    fn interests_need_a_preference_cue() {
        assert_eq!(intent_of("i enjoy programming and research"), "share_interests");
        assert_eq!(intent_of("tell me about nursing"), "ask_about_unit");
    }

    #[test]
    fn follow_up_requests_are_recognized() {
        assert_eq!(intent_of("tell me more"), "ask_follow_up");
    }

    #[test]
    fn unmatched_text_falls_back_with_zero_confidence() {
        let parse = KeywordNluClassifier::new().classify("hello");
        assert_eq!(parse.intent.name, FALLBACK_INTENT);
        assert_eq!(parse.intent.confidence, 0.0);
        assert!(parse.entities.is_empty());
    }

    #[tokio::test]
    async fn port_delegates_to_classify() {
        let nlu = KeywordNluClassifier::new();
        let parse = nlu.parse("tell me about ccs", &SenderId::default()).await.unwrap();
        assert_eq!(parse.intent.name, "ask_about_unit");
        assert_eq!(nlu.provider_name(), "keyword");
    }
}
