//! Follow-up suggestion tables.

use crate::domain::assistant::Unit;

type SuggestionList = &'static [&'static str];

/// Suggestion lists scoped to one unit.
#[derive(Debug)]
pub struct UnitSuggestions {
    pub unit: Unit,
    /// Named topic buckets, e.g. `programs_overview`.
    pub topics: &'static [(&'static str, SuggestionList)],
    /// Program-specific lists keyed by underscore-joined program code.
    pub programs: &'static [(&'static str, SuggestionList)],
}

impl UnitSuggestions {
    pub fn topic(&self, name: &str) -> Option<SuggestionList> {
        lookup(self.topics, name)
    }

    pub fn program(&self, code: &str) -> Option<SuggestionList> {
        lookup(self.programs, code)
    }
}

fn lookup(table: &'static [(&'static str, SuggestionList)], key: &str) -> Option<SuggestionList> {
    table.iter().find(|(k, _)| *k == key).map(|(_, list)| *list)
}

pub static UNIT_SUGGESTIONS: &[UnitSuggestions] = &[
    UnitSuggestions {
        unit: Unit::Ccs,
        topics: &[
            (
                "programs_overview",
                &["Program admission requirements", "Program duration", "Career opportunities"],
            ),
            (
                "facilities_info",
                &["Laboratory equipment", "Research facilities", "Study areas", "Usage policies"],
            ),
        ],
        programs: &[
            ("bscs", &["Curriculum details", "Specialization tracks", "Research opportunities"]),
            ("bsit", &["Industry certifications", "Technical skills", "Internship opportunities"]),
            ("bsis", &["Business components", "Enterprise systems", "Industry partners"]),
            ("bsca", &["Application development", "UI/UX design", "Project portfolio"]),
        ],
    },
    UnitSuggestions {
        unit: Unit::Coe,
        topics: &[
            (
                "programs_overview",
                &[
                    "Program admission requirements",
                    "Engineering specializations",
                    "Career prospects for engineers",
                ],
            ),
            (
                "facilities_info",
                &["Engineering laboratories", "Workshop facilities", "Research equipment"],
            ),
        ],
        programs: &[
            ("mechanical", &["Thermodynamics", "Machine design", "Manufacturing"]),
            ("civil", &["Structural engineering", "Environmental engineering", "Construction management"]),
            ("electrical", &["Power systems", "Electronics", "Communications"]),
            ("chemical", &["Process design", "Plant operations", "Materials science"]),
            ("industrial", &["Operations research", "Management systems", "Production planning"]),
        ],
    },
    UnitSuggestions {
        unit: Unit::Chs,
        topics: &[
            (
                "programs_overview",
                &["Health sciences programs", "Clinical requirements", "Board exam preparation"],
            ),
            (
                "facilities_info",
                &["Medical laboratories", "Simulation facilities", "Clinical practice areas"],
            ),
        ],
        programs: &[
            ("nursing", &["Patient care", "Clinical rotations", "Healthcare administration"]),
            ("pharmacy", &["Pharmaceutical sciences", "Clinical pharmacy", "Drug development"]),
            ("public_health", &["Epidemiology", "Community health", "Health promotion"]),
        ],
    },
    UnitSuggestions {
        unit: Unit::Ceba,
        topics: &[
            (
                "programs_overview",
                &["Business programs", "Economics specializations", "Industry connections"],
            ),
            (
                "facilities_info",
                &["Business resource center", "Economics research facilities", "Case study rooms"],
            ),
        ],
        programs: &[
            ("business", &["Management", "Marketing", "Entrepreneurship"]),
            ("economics", &["Macroeconomics", "Development economics", "Policy analysis"]),
            ("accountancy", &["Financial accounting", "Audit", "Taxation"]),
        ],
    },
    UnitSuggestions {
        unit: Unit::Cass,
        topics: &[
            (
                "programs_overview",
                &["Arts programs", "Social sciences offerings", "Research focus"],
            ),
            (
                "facilities_info",
                &["Arts studios", "Social research laboratories", "Performance spaces"],
            ),
        ],
        programs: &[
            ("psychology", &["Clinical psychology", "Developmental psychology", "Research methods"]),
            ("sociology", &["Social theory", "Research methods", "Community studies"]),
            ("political_science", &["Governance", "International relations", "Policy studies"]),
        ],
    },
    UnitSuggestions {
        unit: Unit::Ced,
        topics: &[
            (
                "programs_overview",
                &["Education programs", "Teaching specializations", "Licensure preparation"],
            ),
            (
                "facilities_info",
                &["Teaching laboratories", "Demonstration classrooms", "Educational technology"],
            ),
        ],
        programs: &[
            ("elementary", &["Child development", "Teaching methods", "Curriculum development"]),
            ("secondary", &["Subject specialization", "Adolescent education", "Assessment methods"]),
            ("special_education", &["Inclusive education", "Intervention strategies", "Adaptive methods"]),
        ],
    },
    UnitSuggestions {
        unit: Unit::Csm,
        topics: &[
            (
                "programs_overview",
                &["Science programs", "Mathematics specializations", "Research opportunities"],
            ),
            (
                "facilities_info",
                &["Science laboratories", "Research facilities", "Computing resources"],
            ),
        ],
        programs: &[
            ("biology", &["Molecular biology", "Ecology", "Biotechnology"]),
            ("chemistry", &["Organic chemistry", "Analytical chemistry", "Biochemistry"]),
            ("mathematics", &["Pure mathematics", "Applied mathematics", "Statistics"]),
            ("physics", &["Theoretical physics", "Applied physics", "Astronomy"]),
        ],
    },
];

pub fn suggestions_for(unit: Unit) -> Option<&'static UnitSuggestions> {
    UNIT_SUGGESTIONS.iter().find(|s| s.unit == unit)
}

/// Unit-independent service topics.
pub static SERVICE_SUGGESTIONS: &[(&str, SuggestionList)] = &[
    (
        "admission",
        &["Admission requirements", "Application process", "Document submission", "Transfer admission"],
    ),
    (
        "registrar",
        &["Transcript requests", "Document processing", "Academic records", "Enrollment procedures"],
    ),
    (
        "scholarship",
        &["Scholarship types", "Application requirements", "Deadlines", "Renewal process"],
    ),
    (
        "fablab",
        &["Available equipment", "Access procedures", "Project guidelines", "Costs and fees"],
    ),
    (
        "osds",
        &["Student assistance programs", "Counseling services", "Student organizations", "Housing information"],
    ),
    (
        "clinic",
        &["Medical services", "Dental services", "Health certificates", "Laboratory tests"],
    ),
];

pub fn service_suggestions(topic: &str) -> Option<SuggestionList> {
    lookup(SERVICE_SUGGESTIONS, topic)
}
