//! Unit enum representing the university's academic colleges.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// An academic college, identified by its short code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Ccs,
    Coe,
    Csm,
    Ceba,
    Cass,
    Ced,
    Chs,
}

impl Unit {
    /// Returns all units in keyword-table declaration order.
    pub fn all() -> &'static [Unit] {
        &[
            Unit::Ccs,
            Unit::Coe,
            Unit::Csm,
            Unit::Ceba,
            Unit::Cass,
            Unit::Ced,
            Unit::Chs,
        ]
    }

    /// Returns the lowercase short code.
    pub fn code(&self) -> &'static str {
        match self {
            Unit::Ccs => "ccs",
            Unit::Coe => "coe",
            Unit::Csm => "csm",
            Unit::Ceba => "ceba",
            Unit::Cass => "cass",
            Unit::Ced => "ced",
            Unit::Chs => "chs",
        }
    }

    /// Returns the college's full name.
    pub fn full_name(&self) -> &'static str {
        match self {
            Unit::Ccs => "College of Computer Studies",
            Unit::Coe => "College of Engineering",
            Unit::Csm => "College of Science and Mathematics",
            Unit::Ceba => "College of Economics and Business Administration",
            Unit::Cass => "College of Arts and Social Sciences",
            Unit::Ced => "College of Education",
            Unit::Chs => "College of Health Sciences",
        }
    }

    /// Returns the uppercase code used in user-facing text.
    pub fn display_code(&self) -> String {
        self.code().to_uppercase()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Unit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        Unit::all()
            .iter()
            .copied()
            .find(|u| u.code() == code)
            .ok_or_else(|| ValidationError::invalid_format("unit", format!("unknown code '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_seven_units_in_declaration_order() {
        let codes: Vec<_> = Unit::all().iter().map(|u| u.code()).collect();
        assert_eq!(codes, vec!["ccs", "coe", "csm", "ceba", "cass", "ced", "chs"]);
    }

    #[test]
    fn from_str_parses_codes_case_insensitively() {
        assert_eq!("CEBA".parse::<Unit>().unwrap(), Unit::Ceba);
        assert_eq!(" chs ".parse::<Unit>().unwrap(), Unit::Chs);
        assert!("law".parse::<Unit>().is_err());
    }

    #[test]
    fn serializes_as_lowercase_code() {
        let json = serde_json::to_string(&Unit::Cass).unwrap();
        assert_eq!(json, "\"cass\"");
    }

    #[test]
    fn display_code_is_uppercase() {
        assert_eq!(Unit::Coe.display_code(), "COE");
        assert_eq!(Unit::Coe.to_string(), "coe");
    }
}
