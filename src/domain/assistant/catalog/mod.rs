//! Static lookup tables shared by every session.
//!
//! All tables are ordered slices initialised at compile time. Lookups that
//! pick a single entry return the first match in declaration order.

mod academics;
mod campus;
mod suggestions;

pub use academics::{
    difficulty_for, programs_for, requirements_for, Interest, RequirementCategory,
    RequirementTexts, UnitKeywords, UnitPrograms, COMPARISON_FOLLOW_UP, DIFFICULTY_FOLLOW_UP,
    INTERESTS, MAX_RECOMMENDATIONS, PROGRAM_DIFFICULTY, RECOMMENDATION_FOLLOW_UP, REQUIREMENTS,
    REQUIREMENTS_PROMPT, UNIT_KEYWORDS, UNIT_PROGRAMS,
};
pub use campus::{
    offices_for, Facility, Location, UnitOffices, CAMPUS_LOCATION_PROMPT, FACILITIES,
    FACILITIES_PROMPT, FACILITY_ACCESS_WORDS, FACILITY_GENERIC_WORDS, FACILITY_USAGE_WORDS,
    LOCATIONS, LOCATION_VAGUE_WORDS, UNIT_OFFICES,
};
pub use suggestions::{
    service_suggestions, suggestions_for, UnitSuggestions, SERVICE_SUGGESTIONS, UNIT_SUGGESTIONS,
};
