//! Academic tables: unit keywords, program lists, difficulty notes,
//! requirement texts, and interest recommendations.

use crate::domain::assistant::classifier::KeywordEntry;
use crate::domain::assistant::Unit;

// ════════════════════════════════════════════════════════════════════════════════
// Units
// ════════════════════════════════════════════════════════════════════════════════

/// Keywords that identify a unit.
#[derive(Debug)]
pub struct UnitKeywords {
    pub unit: Unit,
    pub keywords: &'static [&'static str],
}

impl KeywordEntry for UnitKeywords {
    fn keywords(&self) -> &[&'static str] {
        self.keywords
    }
}

/// Unit keyword table. Order is significant: the first hit wins.
pub static UNIT_KEYWORDS: &[UnitKeywords] = &[
    UnitKeywords {
        unit: Unit::Ccs,
        keywords: &[
            "ccs",
            "computer",
            "computing",
            "it",
            "information technology",
            "programming",
            "software",
            "development",
            "coding",
            "cs",
            "information systems",
            "is",
            "computer applications",
            "ca",
            "college of computer studies",
        ],
    },
    UnitKeywords {
        unit: Unit::Coe,
        keywords: &[
            "coe",
            "engineering",
            "engineer",
            "mechanical",
            "civil",
            "electrical",
            "chemical",
            "industrial",
            "college of engineering",
            "engineering college",
        ],
    },
    UnitKeywords {
        unit: Unit::Csm,
        keywords: &[
            "csm",
            "science",
            "math",
            "mathematics",
            "biology",
            "chemistry",
            "physics",
            "laboratory",
            "college of science and mathematics",
            "science college",
        ],
    },
    UnitKeywords {
        unit: Unit::Ceba,
        keywords: &[
            "ceba",
            "business",
            "accountancy",
            "accounting",
            "management",
            "finance",
            "economics",
            "administration",
            "college of economics and business administration",
            "economics college",
            "business college",
        ],
    },
    UnitKeywords {
        unit: Unit::Cass,
        keywords: &[
            "cass",
            "arts",
            "social sciences",
            "sociology",
            "psychology",
            "political science",
            "history",
            "college of arts and social sciences",
            "arts college",
            "social sciences college",
        ],
    },
    UnitKeywords {
        unit: Unit::Ced,
        keywords: &[
            "ced",
            "education",
            "teaching",
            "pedagogy",
            "instructional",
            "teacher",
            "college of education",
            "education college",
        ],
    },
    UnitKeywords {
        unit: Unit::Chs,
        keywords: &[
            "chs",
            "health",
            "nursing",
            "medical",
            "healthcare",
            "public health",
            "college of health sciences",
            "health college",
        ],
    },
];

// ════════════════════════════════════════════════════════════════════════════════
// Programs
// ════════════════════════════════════════════════════════════════════════════════

/// Programs offered by one unit.
#[derive(Debug)]
pub struct UnitPrograms {
    pub unit: Unit,
    pub programs: &'static [&'static str],
}

impl UnitPrograms {
    /// Comma-separated uppercase program list.
    pub fn display_list(&self) -> String {
        self.programs
            .iter()
            .map(|p| p.to_uppercase())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Program lists. Scanned in this order when no unit is active.
pub static UNIT_PROGRAMS: &[UnitPrograms] = &[
    UnitPrograms {
        unit: Unit::Ccs,
        programs: &["bscs", "bsit", "bsis", "bsca"],
    },
    UnitPrograms {
        unit: Unit::Coe,
        programs: &["mechanical", "civil", "electrical", "chemical", "industrial"],
    },
    UnitPrograms {
        unit: Unit::Chs,
        programs: &["nursing", "pharmacy", "medical technology", "public health"],
    },
    UnitPrograms {
        unit: Unit::Ceba,
        programs: &["business", "economics", "accountancy", "finance", "management"],
    },
    UnitPrograms {
        unit: Unit::Cass,
        programs: &[
            "psychology",
            "sociology",
            "political science",
            "history",
            "languages",
        ],
    },
    UnitPrograms {
        unit: Unit::Ced,
        programs: &[
            "elementary",
            "secondary",
            "special education",
            "physical education",
        ],
    },
    UnitPrograms {
        unit: Unit::Csm,
        programs: &["biology", "chemistry", "mathematics", "physics", "statistics"],
    },
];

/// Program list of a unit.
pub fn programs_for(unit: Unit) -> Option<&'static UnitPrograms> {
    UNIT_PROGRAMS.iter().find(|list| list.unit == unit)
}

/// Canned difficulty notes keyed by program code.
pub static PROGRAM_DIFFICULTY: &[(&str, &str)] = &[
    ("bscs", "The BSCS program requires strong analytical skills and mathematical aptitude. It involves intensive programming and theoretical computer science concepts."),
    ("bsit", "BSIT has a balanced mix of technical and practical components. While challenging, it focuses more on applied technology than theoretical aspects."),
    ("bsis", "BSIS combines business knowledge with information systems concepts. The challenge comes from integrating business processes with technical solutions."),
    ("bsca", "BSCA focuses on application development and multimedia. It requires creative skills alongside technical knowledge."),
    ("mechanical", "Mechanical Engineering is math-intensive with complex physics concepts. It requires strong analytical skills for design and thermodynamics."),
    ("civil", "Civil Engineering involves structural analysis, materials science, and environmental systems. It requires both theoretical knowledge and practical application."),
    ("electrical", "Electrical Engineering is considered challenging due to abstract concepts in circuit analysis, electromagnetic theory, and signal processing."),
    ("nursing", "Nursing combines scientific knowledge with clinical skills. The program is demanding due to intensive clinical rotations and comprehensive healthcare knowledge."),
    ("pharmacy", "Pharmacy requires strong chemistry foundations and medical knowledge. The curriculum covers pharmaceutical sciences, clinical pharmacy, and patient care."),
    ("economics", "Economics requires strong analytical and mathematical skills. Students must master economic theory, statistics, and applied economics methods."),
    ("accountancy", "Accountancy is rigorous due to detailed accounting principles, taxation, and auditing standards that must be mastered."),
    ("psychology", "Psychology balances research methodology with theoretical frameworks. The challenge lies in understanding complex human behavior and research design."),
    ("elementary_education", "Elementary Education involves comprehensive teaching methodologies across multiple subjects. It requires strong pedagogical knowledge."),
    ("physics", "Physics is one of the more challenging science programs due to advanced mathematics and abstract concepts in theoretical physics."),
    ("mathematics", "Mathematics programs are abstract and require strong logical reasoning skills. Students progress from calculus to advanced topics like abstract algebra."),
];

pub fn difficulty_for(program: &str) -> Option<&'static str> {
    PROGRAM_DIFFICULTY
        .iter()
        .find(|(code, _)| *code == program)
        .map(|(_, text)| *text)
}

pub const COMPARISON_FOLLOW_UP: &str =
    "Would you like to know about specific differences in curriculum, job prospects, or difficulty level?";

pub const DIFFICULTY_FOLLOW_UP: &str =
    "Would you like to know about specific challenging courses, study tips, or compare with other programs?";

// ════════════════════════════════════════════════════════════════════════════════
// Requirements
// ════════════════════════════════════════════════════════════════════════════════

/// Kind of requirement a user asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequirementCategory {
    Admission,
    Curriculum,
    Graduation,
}

impl RequirementCategory {
    /// Categories in the order they are checked.
    pub fn all() -> &'static [RequirementCategory] {
        &[
            RequirementCategory::Admission,
            RequirementCategory::Curriculum,
            RequirementCategory::Graduation,
        ]
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            RequirementCategory::Admission => {
                &["admission", "requirements", "qualify", "enter", "application"]
            }
            RequirementCategory::Curriculum => {
                &["curriculum", "subjects", "courses", "study", "learn"]
            }
            RequirementCategory::Graduation => &["graduate", "graduation", "finish", "complete"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementCategory::Admission => "admission",
            RequirementCategory::Curriculum => "curriculum",
            RequirementCategory::Graduation => "graduation",
        }
    }
}

/// Requirement texts for a program or unit.
#[derive(Debug)]
pub struct RequirementTexts {
    pub subject: &'static str,
    pub admission: &'static str,
    pub curriculum: &'static str,
    pub graduation: &'static str,
}

impl RequirementTexts {
    pub fn text(&self, category: RequirementCategory) -> &'static str {
        match category {
            RequirementCategory::Admission => self.admission,
            RequirementCategory::Curriculum => self.curriculum,
            RequirementCategory::Graduation => self.graduation,
        }
    }
}

pub static REQUIREMENTS: &[RequirementTexts] = &[
    RequirementTexts {
        subject: "bscs",
        admission: "For BSCS, admission requirements include good grades in Mathematics and Science subjects, passing the university entrance exam with a high score in analytical reasoning.",
        curriculum: "The BSCS curriculum includes intensive programming courses, data structures, algorithms, software engineering, and computer architecture. A thesis project is required in the senior year.",
        graduation: "To graduate, BSCS students must complete all required courses (approx. 150 units), maintain a satisfactory GPA, and successfully defend their thesis.",
    },
    RequirementTexts {
        subject: "bsit",
        admission: "BSIT admission requires passing the entrance exam with good scores in logical reasoning. Previous experience with computers is beneficial but not required.",
        curriculum: "The BSIT curriculum balances technical knowledge with practical applications, including networking, web development, database management, and IT project management.",
        graduation: "BSIT graduation requirements include completing approximately 145 units, a capstone project, and possibly industry certifications.",
    },
    RequirementTexts {
        subject: "mechanical",
        admission: "Mechanical Engineering requires strong mathematics and physics background, with high scores in these areas on the entrance exam.",
        curriculum: "The curriculum includes thermodynamics, fluid mechanics, machine design, manufacturing processes, and engineering mathematics.",
        graduation: "Graduation requires completing all engineering courses, laboratories, design projects, and a comprehensive final project.",
    },
    RequirementTexts {
        subject: "electrical",
        admission: "Electrical Engineering admission requires excellent mathematics and physics scores, with particular strength in calculus and electricity concepts.",
        curriculum: "The curriculum covers circuit theory, electronics, electromagnetic fields, control systems, power systems, and communications engineering.",
        graduation: "To graduate, students must complete all required courses, laboratory work, and a final engineering project.",
    },
    RequirementTexts {
        subject: "ccs",
        admission: "The College of Computer Studies admission requirements include a strong aptitude for logical and analytical thinking, demonstrated through good grades in mathematics and science subjects.",
        curriculum: "CCS programs emphasize programming fundamentals, systems analysis, software development, and IT management, with specialized tracks in later years.",
        graduation: "Graduation from CCS programs requires completing all required and elective courses, maintaining a satisfactory GPA, and fulfilling thesis or capstone requirements.",
    },
    RequirementTexts {
        subject: "coe",
        admission: "The College of Engineering requires strong mathematics and science backgrounds, high entrance exam scores, and good problem-solving abilities.",
        curriculum: "Engineering programs include fundamental engineering sciences, specialized discipline courses, laboratory work, and design projects.",
        graduation: "COE students must complete all technical requirements, laboratory courses, design projects, and satisfy general education requirements.",
    },
    RequirementTexts {
        subject: "chs",
        admission: "Health Sciences programs require good grades in biology and chemistry, strong entrance exam scores, and often interviews to assess aptitude for healthcare.",
        curriculum: "CHS programs combine theoretical knowledge with clinical/practical training in healthcare settings.",
        graduation: "Graduation requires completing all academic and clinical requirements, often with minimum grade requirements in major subjects.",
    },
    RequirementTexts {
        subject: "ceba",
        admission: "Business and Economics programs look for aptitude in mathematics, critical thinking, and communication skills.",
        curriculum: "CEBA programs cover core business/economics principles, management techniques, analytical methods, and case studies.",
        graduation: "Students must complete all required business courses, case analyses, and often internships or business projects.",
    },
    RequirementTexts {
        subject: "cass",
        admission: "Arts and Social Sciences programs evaluate communication skills, critical thinking, and social awareness.",
        curriculum: "CASS curricula emphasize theoretical frameworks, research methodologies, and critical analysis in humanities and social sciences.",
        graduation: "Graduation requires completing coursework, research papers, and often a thesis or creative project.",
    },
    RequirementTexts {
        subject: "ced",
        admission: "Education programs assess communication skills, aptitude for teaching, and often conduct interviews.",
        curriculum: "CED programs include pedagogical theories, teaching methodologies, and extensive practice teaching experience.",
        graduation: "Students must complete academic requirements, demonstration teaching, and field experiences with satisfactory performance.",
    },
    RequirementTexts {
        subject: "csm",
        admission: "Science and Mathematics programs require strong backgrounds in related subjects and high analytical scores on entrance exams.",
        curriculum: "CSM curricula include theoretical foundations, laboratory work, research methodologies, and applications of scientific principles.",
        graduation: "Graduation requires completing all science courses, laboratory requirements, and often research projects or theses.",
    },
];

pub fn requirements_for(subject: &str) -> Option<&'static RequirementTexts> {
    REQUIREMENTS.iter().find(|r| r.subject == subject)
}

pub const REQUIREMENTS_PROMPT: &str = "I can provide information about admission requirements, curriculum, or graduation requirements for specific programs or colleges. Which program or college are you interested in?";

// ════════════════════════════════════════════════════════════════════════════════
// Interests
// ════════════════════════════════════════════════════════════════════════════════

/// An interest category and the programs it suggests.
#[derive(Debug)]
pub struct Interest {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub recommendations: &'static [&'static str],
}

impl KeywordEntry for Interest {
    fn keywords(&self) -> &[&'static str] {
        self.keywords
    }
}

pub static INTERESTS: &[Interest] = &[
    Interest {
        name: "technical",
        keywords: &["programming", "coding", "software", "development", "technical"],
        recommendations: &["BSCS", "BSIT"],
    },
    Interest {
        name: "research",
        keywords: &["research", "analysis", "investigation", "discovery", "innovation"],
        recommendations: &["BSCS", "Physics", "Biology", "Chemistry"],
    },
    Interest {
        name: "creative",
        keywords: &["design", "creative", "artistic", "multimedia", "visual"],
        recommendations: &["BSCA", "Fine Arts", "Architecture"],
    },
    Interest {
        name: "business",
        keywords: &["business", "management", "entrepreneurship", "economics", "finance"],
        recommendations: &["BSIS", "Business Administration", "Economics"],
    },
    Interest {
        name: "healthcare",
        keywords: &["health", "medical", "care", "treatment", "nursing"],
        recommendations: &["Nursing", "Pharmacy", "Public Health"],
    },
    Interest {
        name: "teaching",
        keywords: &["teach", "education", "training", "instruction", "teaching"],
        recommendations: &["Education", "Teaching"],
    },
    Interest {
        name: "sciences",
        keywords: &["science", "laboratory", "experiment", "discovery", "analysis"],
        recommendations: &["Biology", "Chemistry", "Physics", "Mathematics"],
    },
    Interest {
        name: "practical",
        keywords: &["hands-on", "practical", "implementation", "applied", "skills"],
        recommendations: &["BSIT", "Engineering", "Nursing"],
    },
];

/// Most recommendations shown in one reply.
pub const MAX_RECOMMENDATIONS: usize = 5;

pub const RECOMMENDATION_FOLLOW_UP: &str =
    "Would you like more specific information about any of these programs?";
