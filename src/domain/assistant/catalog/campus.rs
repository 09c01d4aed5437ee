//! Campus tables: facilities, locations, and college offices.

use crate::domain::assistant::classifier::KeywordEntry;
use crate::domain::assistant::Unit;

// ════════════════════════════════════════════════════════════════════════════════
// Facilities
// ════════════════════════════════════════════════════════════════════════════════

/// A campus facility and its canned information.
#[derive(Debug)]
pub struct Facility {
    pub code: &'static str,
    pub keywords: &'static [&'static str],
    pub access: &'static str,
    pub usage: &'static str,
    pub hours: &'static str,
    pub location: &'static str,
}

impl Facility {
    /// Human-readable title derived from the code, e.g. `computer_labs` -> `Computer Labs`.
    pub fn title(&self) -> String {
        self.code
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl KeywordEntry for Facility {
    fn keywords(&self) -> &[&'static str] {
        self.keywords
    }
}

pub static FACILITIES: &[Facility] = &[
    Facility {
        code: "fablab",
        keywords: &["fablab", "fab lab", "fabrication", "maker space", "3d printing"],
        access: "To access the FAB LAB, students need to submit a request form available at the FAB LAB website. First-time users must attend an orientation session.",
        usage: "The FAB LAB has 3D printers, laser cutters, CNC machines, and electronics workstations. Users must follow safety protocols and equipment guidelines.",
        hours: "Monday-Friday: 8:00 AM - 5:00 PM, Saturday: 9:00 AM - 3:00 PM",
        location: "Ground Floor, Innovation Center Building",
    },
    Facility {
        code: "library",
        keywords: &["library", "books", "research center", "study space"],
        access: "The library is accessible to all students with a valid ID. For special collections, request forms may be required.",
        usage: "The library offers study areas, digital resources, book borrowing, and research assistance.",
        hours: "Monday-Friday: 7:00 AM - 8:00 PM, Saturday: 8:00 AM - 5:00 PM",
        location: "Main Campus, Library Building",
    },
    Facility {
        code: "computer_labs",
        keywords: &["computer lab", "pc", "computer room", "it lab", "ccs lab"],
        access: "Computer labs are available for scheduled classes and open hours. CCS students can access labs with their ID during open hours.",
        usage: "Labs provide computers with specialized software for programming, design, and other coursework.",
        hours: "Monday-Friday: 7:00 AM - 8:00 PM (open hours vary by lab)",
        location: "College of Computer Studies Building, various floors",
    },
    Facility {
        code: "engineering_labs",
        keywords: &["engineering lab", "workshop", "coe lab", "engineering workshop"],
        access: "Engineering labs require course enrollment or special permission. Safety orientation is mandatory.",
        usage: "Labs contain specialized equipment for different engineering disciplines. Supervision may be required for equipment use.",
        hours: "Monday-Friday: 8:00 AM - 5:00 PM (varies by specific lab)",
        location: "College of Engineering Building, various floors",
    },
    Facility {
        code: "science_labs",
        keywords: &["science lab", "biology lab", "chemistry lab", "physics lab", "csm lab"],
        access: "Science labs are accessible during scheduled class time or with professor permission. Safety training required.",
        usage: "Labs provide equipment and materials for scientific experiments. Safety protocols must be strictly followed.",
        hours: "Monday-Friday: 8:00 AM - 5:00 PM (varies by specific lab)",
        location: "College of Science and Mathematics Building, various floors",
    },
    Facility {
        code: "clinic",
        keywords: &["clinic", "health center", "medical", "nurse", "doctor"],
        access: "The campus clinic is open to all students and staff. Present your ID and fill out a consultation form.",
        usage: "Provides basic medical services, consultations, first aid, and medical certificates.",
        hours: "Monday-Friday: 8:00 AM - 5:00 PM",
        location: "Health Services Building, Main Campus",
    },
];

/// Words that route a facility question to access details.
pub const FACILITY_ACCESS_WORDS: &[&str] = &["access", "enter", "use", "get into", "permission"];

/// Words that route a facility question to usage details.
pub const FACILITY_USAGE_WORDS: &[&str] = &["use", "equipment", "tools", "machine", "operate"];

/// Words that signal a general facilities question.
pub const FACILITY_GENERIC_WORDS: &[&str] =
    &["facility", "facilities", "lab", "laboratory", "resource"];

pub const FACILITIES_PROMPT: &str = "MSU-IIT offers various facilities including the FAB LAB, library, computer labs, engineering workshops, science laboratories, and health clinic. Which specific facility would you like to know about?";

// ════════════════════════════════════════════════════════════════════════════════
// Locations
// ════════════════════════════════════════════════════════════════════════════════

/// A campus landmark and its description.
#[derive(Debug)]
pub struct Location {
    pub code: &'static str,
    pub keywords: &'static [&'static str],
    pub description: &'static str,
}

impl KeywordEntry for Location {
    fn keywords(&self) -> &[&'static str] {
        self.keywords
    }
}

pub static LOCATIONS: &[Location] = &[
    Location {
        code: "ccs_building",
        keywords: &["ccs building", "computer studies building", "ccs location"],
        description: "The College of Computer Studies building is located at the north side of the campus. It's a three-story building with computer labs on all floors.",
    },
    Location {
        code: "coe_building",
        keywords: &["coe building", "engineering building", "coe location"],
        description: "The College of Engineering building is at the eastern part of the campus. It houses specialized engineering laboratories and workshops.",
    },
    Location {
        code: "chs_building",
        keywords: &["chs building", "health sciences building", "chs location"],
        description: "The College of Health Sciences building is near the campus clinic. It includes simulation labs and healthcare training facilities.",
    },
    Location {
        code: "ceba_building",
        keywords: &["ceba building", "business building", "economics building", "ceba location"],
        description: "The College of Economics and Business Administration building is centrally located. It features case study rooms and a business resource center.",
    },
    Location {
        code: "cass_building",
        keywords: &["cass building", "arts building", "social sciences building", "cass location"],
        description: "The College of Arts and Social Sciences building is near the university theater. It has dedicated spaces for arts, performances, and social science research.",
    },
    Location {
        code: "ced_building",
        keywords: &["ced building", "education building", "ced location"],
        description: "The College of Education building is adjacent to the demonstration school. It includes teaching laboratories and educational technology resources.",
    },
    Location {
        code: "csm_building",
        keywords: &["csm building", "science building", "mathematics building", "csm location"],
        description: "The College of Science and Mathematics building houses specialized science laboratories for biology, chemistry, and physics research.",
    },
    Location {
        code: "admin_building",
        keywords: &["admin building", "administration", "registrar", "admissions"],
        description: "The Administration Building is the central hub for university administration, including the Registrar's Office, Admissions, and other administrative services.",
    },
    Location {
        code: "library",
        keywords: &["library", "research center"],
        description: "The University Library is a multi-story building with study spaces, book collections, and digital resource centers. It's located at the heart of the campus.",
    },
    Location {
        code: "cafeteria",
        keywords: &["cafeteria", "canteen", "food court"],
        description: "The main cafeteria is on the ground floor of the Student Center, offering a variety of food options at affordable prices.",
    },
    Location {
        code: "gym",
        keywords: &["gymnasium", "gym", "sports complex"],
        description: "The gymnasium and sports complex are located at the western side of the campus, featuring indoor courts, training areas, and an outdoor track.",
    },
    Location {
        code: "auditorium",
        keywords: &["auditorium", "theater", "assembly hall"],
        description: "The main auditorium is part of the Cultural Center, capable of seating 1,000 people for performances, ceremonies, and large gatherings.",
    },
];

/// Words that signal a location question without a specific place.
pub const LOCATION_VAGUE_WORDS: &[&str] = &["where", "location", "find", "building", "room"];

pub const CAMPUS_LOCATION_PROMPT: &str = "MSU-IIT has several key buildings including college buildings, the Administration Building, Library, Cultural Center, Sports Complex, and Student Center. Which specific location are you looking for?";

// ════════════════════════════════════════════════════════════════════════════════
// College offices
// ════════════════════════════════════════════════════════════════════════════════

/// Where a unit's dean and department offices are.
#[derive(Debug)]
pub struct UnitOffices {
    pub unit: Unit,
    pub dean: &'static str,
    pub departments: &'static str,
}

pub static UNIT_OFFICES: &[UnitOffices] = &[
    UnitOffices {
        unit: Unit::Ccs,
        dean: "The Dean's Office of the College of Computer Studies is on the 3rd floor, Room 301.",
        departments: "Department offices in the College of Computer Studies are located on the 2nd floor, Rooms 201-207.",
    },
    UnitOffices {
        unit: Unit::Coe,
        dean: "The Dean's Office of the College of Engineering is on the 2nd floor, Room 201.",
        departments: "Department offices in the College of Engineering are distributed across the 1st and 2nd floors based on specialization.",
    },
    UnitOffices {
        unit: Unit::Chs,
        dean: "The Dean's Office of the College of Health Sciences is on the 2nd floor, Room 205.",
        departments: "Health Sciences department offices are on the 1st floor, Rooms 101-110.",
    },
    UnitOffices {
        unit: Unit::Ceba,
        dean: "The Dean's Office of the College of Economics and Business Administration is on the 2nd floor, Room 210.",
        departments: "Economics and Business Administration department offices are located on the 1st floor, Rooms 105-115.",
    },
    UnitOffices {
        unit: Unit::Cass,
        dean: "The Dean's Office of the College of Arts and Social Sciences is on the 2nd floor, Room 215.",
        departments: "Arts and Social Sciences department offices can be found on the 1st and 3rd floors.",
    },
    UnitOffices {
        unit: Unit::Ced,
        dean: "The Dean's Office of the College of Education is on the 2nd floor, Room 202.",
        departments: "Education department offices are on the 1st floor, Rooms 101-108.",
    },
    UnitOffices {
        unit: Unit::Csm,
        dean: "The Dean's Office of the College of Science and Mathematics is on the 2nd floor, Room 220.",
        departments: "Science and Mathematics department offices are located on the 1st floor, Rooms 110-120.",
    },
];

pub fn offices_for(unit: Unit) -> Option<&'static UnitOffices> {
    UNIT_OFFICES.iter().find(|o| o.unit == unit)
}
