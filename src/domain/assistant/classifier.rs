//! Keyword Classifier - first-match substring lookup over ordered tables.
//!
//! Every table is a slice whose declaration order is part of its contract:
//! the first entry with any keyword contained in the utterance wins. There
//! is no scoring and no longest-match preference.

use super::catalog::{
    self, Facility, Interest, Location, RequirementCategory, UnitPrograms,
};
use super::Unit;

/// Lowercased user text ready for keyword scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    text: String,
}

impl Utterance {
    /// Lowercases the raw text.
    pub fn new(raw: &str) -> Self {
        Self {
            text: raw.to_lowercase(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True when `keyword` occurs anywhere in the text.
    pub fn contains(&self, keyword: &str) -> bool {
        self.text.contains(keyword)
    }

    /// True when any keyword occurs anywhere in the text.
    pub fn contains_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.contains(k))
    }

    /// True when every keyword occurs somewhere in the text.
    pub fn contains_all(&self, keywords: &[&str]) -> bool {
        keywords.iter().all(|k| self.contains(k))
    }
}

/// A table row that can be matched by keyword.
pub trait KeywordEntry {
    fn keywords(&self) -> &[&'static str];
}

/// Returns the first entry with a keyword hit, in table order.
pub fn first_match<'t, E: KeywordEntry>(utterance: &Utterance, table: &'t [E]) -> Option<&'t E> {
    table.iter().find(|entry| utterance.contains_any(entry.keywords()))
}

/// Returns every entry with a keyword hit, in table order.
pub fn all_matches<'t, E: KeywordEntry>(utterance: &Utterance, table: &'t [E]) -> Vec<&'t E> {
    table
        .iter()
        .filter(|entry| utterance.contains_any(entry.keywords()))
        .collect()
}

/// Stateless classifier over the static catalog tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }

    /// First unit whose keyword set hits.
    pub fn unit(&self, utterance: &Utterance) -> Option<Unit> {
        first_match(utterance, catalog::UNIT_KEYWORDS).map(|entry| entry.unit)
    }

    /// First facility whose keyword set hits.
    pub fn facility(&self, utterance: &Utterance) -> Option<&'static Facility> {
        first_match(utterance, catalog::FACILITIES)
    }

    /// First campus location whose keyword set hits.
    pub fn location(&self, utterance: &Utterance) -> Option<&'static Location> {
        first_match(utterance, catalog::LOCATIONS)
    }

    /// Every interest category that hits; categories are independent.
    pub fn interests(&self, utterance: &Utterance) -> Vec<&'static Interest> {
        all_matches(utterance, catalog::INTERESTS)
    }

    /// First requirement category that hits, checked admission, curriculum, graduation.
    pub fn requirement_category(&self, utterance: &Utterance) -> Option<RequirementCategory> {
        RequirementCategory::all()
            .iter()
            .copied()
            .find(|category| utterance.contains_any(category.keywords()))
    }

    /// Programs of one list mentioned in the utterance, in list order.
    pub fn mentioned_programs(
        &self,
        utterance: &Utterance,
        list: &UnitPrograms,
    ) -> Vec<&'static str> {
        list.programs
            .iter()
            .copied()
            .filter(|program| utterance.contains(program))
            .collect()
    }

    /// First program list, in program-table order, with at least `min` mentions.
    pub fn first_unit_with_programs(
        &self,
        utterance: &Utterance,
        min: usize,
    ) -> Option<&'static UnitPrograms> {
        catalog::UNIT_PROGRAMS
            .iter()
            .find(|list| self.mentioned_programs(utterance, list).len() >= min)
    }

    /// First program mentioned anywhere, scanning lists in program-table order.
    pub fn first_program(&self, utterance: &Utterance) -> Option<&'static str> {
        catalog::UNIT_PROGRAMS
            .iter()
            .find_map(|list| self.mentioned_programs(utterance, list).first().copied())
    }
}
