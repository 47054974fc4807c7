//! 取值池与固定规模常量。

pub const CONTROLLER_COUNT: usize = 4;
pub const DOOR_COUNT: usize = 12;
pub const INPUT_COUNT: usize = 16;
pub const OUTPUT_COUNT: usize = 12;
pub const CAMERA_COUNT: usize = 8;
pub const BOOKMARK_COUNT: usize = 12;
pub const VMS_EVENT_COUNT: usize = 40;

pub const FIRST_NAMES: [&str; 24] = [
    "Alice", "Ben", "Carmen", "Diego", "Elena", "Felix", "Grace", "Hassan", "Ingrid", "Jamal",
    "Keiko", "Lars", "Maria", "Noah", "Olivia", "Pavel", "Quinn", "Rosa", "Samir", "Tara",
    "Umar", "Vera", "Wei", "Yusuf",
];

pub const LAST_NAMES: [&str; 24] = [
    "Anderson", "Brooks", "Chen", "Dawson", "Eriksen", "Flores", "Gupta", "Hughes", "Ivanov",
    "Johnson", "Kowalski", "Lindberg", "Martinez", "Nguyen", "Okafor", "Petersen", "Quintero",
    "Rossi", "Schmidt", "Tanaka", "Ueda", "Vasquez", "Walker", "Yamamoto",
];

pub const DEPARTMENTS: [&str; 8] = [
    "Engineering",
    "Security",
    "Facilities",
    "Finance",
    "Human Resources",
    "Operations",
    "IT Services",
    "Logistics",
];

pub const JOB_TITLES: [&str; 8] = [
    "Engineer",
    "Security Officer",
    "Facilities Technician",
    "Analyst",
    "Coordinator",
    "Shift Supervisor",
    "Systems Administrator",
    "Warehouse Operator",
];

pub const BUILDINGS: [&str; 4] = ["Building A", "Building B", "Building C", "Building D"];

pub const DOOR_NAMES: [&str; 12] = [
    "Main Entrance",
    "Lobby North",
    "Server Room",
    "Loading Dock",
    "East Stairwell",
    "Parking Garage",
    "Records Office",
    "Lab Entrance",
    "Roof Access",
    "West Stairwell",
    "Mail Room",
    "Executive Suite",
];

/// (名称, 描述, 时段)
pub const ACCESS_GROUP_NAMES: [(&str, &str, &str); 6] = [
    ("All Staff", "Default access for all employees", "Business Hours"),
    ("Engineering", "Engineering department areas", "Business Hours"),
    ("Security Team", "Security operations areas", "24/7"),
    ("Management", "Management and executive areas", "Business Hours"),
    ("Contractors", "Escorted contractor access", "Business Hours"),
    ("After Hours Access", "Extended hours access", "24/7"),
];

pub const INPUT_TYPES: [&str; 4] = ["Door Contact", "REX Button", "Tamper Switch", "Motion Sensor"];

pub const OUTPUT_TYPES: [&str; 3] = ["Lock Relay", "Sounder", "Indicator"];

/// (名称, 描述, 权限)
pub const OPERATOR_GROUPS: [(&str, &str, &[&str]); 4] = [
    (
        "Administrators",
        "Full system administration",
        &["view", "edit", "configure", "manage_operators"],
    ),
    (
        "Security Operators",
        "Monitor and respond to events",
        &["view", "acknowledge", "control_doors"],
    ),
    (
        "Reception",
        "Visitor and cardholder management",
        &["view", "edit_cardholders"],
    ),
    ("Auditors", "Read-only reporting access", &["view", "export"]),
];

pub const BOOKMARK_HEADERS: [&str; 4] = [
    "Motion detected",
    "Tailgating review",
    "Forced door follow-up",
    "Incident evidence",
];

pub const VMS_MESSAGES: [&str; 5] = [
    "Motion Started",
    "Motion Stopped",
    "Recording Started",
    "Recording Stopped",
    "Camera Communication Error",
];
