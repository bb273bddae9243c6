//! Built-in sample data used to seed a fresh session.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use super::domain::{
    ElLevel, Employee, EmployeeId, EmployeeStatus, HiringId, HiringRecord, HiringStatus, RoleType,
};

const FIRST_NAMES: [&str; 8] = [
    "Aarav", "Priya", "Daniel", "Meera", "Lucas", "Ananya", "Sofia", "Rohan",
];
const LAST_NAMES: [&str; 8] = [
    "Sharma", "Iyer", "Brooks", "Nair", "Fischer", "Kulkarni", "Moreau", "Patel",
];
const TEAMS: [&str; 6] = [
    "Coral/Atlantis/Achievers",
    "Skyrocket",
    "Achievers",
    "OFS",
    "Engineering Team A",
    "Product Team",
];
const MANAGERS: [&str; 4] = ["Keshav", "Kunjal", "Sarah Mitchell", "David Thompson"];
const TITLES: [&str; 5] = [
    "Software Engineer",
    "Senior Software Engineer",
    "QA Analyst",
    "Business Analyst",
    "Engineering Manager",
];
const LOCATIONS: [&str; 3] = ["Bengaluru", "Pune", "Austin"];
const VENDORS: [&str; 6] = ["PS", "CTS", "TCS", "Infosys", "Wipro", "Accenture"];

pub const EMPLOYEE_FIXTURE_COUNT: usize = 64;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn timestamp(day: NaiveDate, hour: u32) -> NaiveDateTime {
    day.and_hms_opt(hour, 30, 0).unwrap_or_default()
}

pub fn employees() -> Vec<Employee> {
    (0..EMPLOYEE_FIXTURE_COUNT)
        .map(|n| {
            let first = FIRST_NAMES[n % FIRST_NAMES.len()];
            let last = LAST_NAMES[(n / FIRST_NAMES.len()) % LAST_NAMES.len()];
            let team = TEAMS[n % TEAMS.len()];
            let title = TITLES[n % TITLES.len()];
            let role_type = match n % 5 {
                3 => RoleType::NonEngineering,
                4 => RoleType::Both,
                _ => RoleType::Engineering,
            };
            let status = match n % 9 {
                7 => EmployeeStatus::Inactive,
                8 => EmployeeStatus::Open,
                _ => EmployeeStatus::Active,
            };
            let hire_date = date(2019, 1, 7) + Duration::days((n as i64) * 23);
            let term_date = (status == EmployeeStatus::Inactive)
                .then(|| hire_date + Duration::days(400));
            let modified_on = date(2025, 6, 2) + Duration::days((n % 28) as i64);

            Employee {
                prj_alignment: if n % 2 == 0 { "Core" } else { "Shared" }.to_string(),
                emp_id: EmployeeId(10_001 + n as u32),
                resource_name: format!("{first} {last}"),
                core_alignment: team.split('/').next().unwrap_or(team).to_string(),
                core_team: team.to_string(),
                job_title: title.to_string(),
                role_type,
                email: format!(
                    "{}.{}@example.com",
                    first.to_ascii_lowercase(),
                    last.to_ascii_lowercase()
                ),
                vendor: VENDORS[n % VENDORS.len()].to_string(),
                contact_number: format!("+91 98450 {:05}", 31_000 + n * 7),
                team_name: team.to_string(),
                secondary_team: TEAMS[(n + 2) % TEAMS.len()].to_string(),
                manager_name: MANAGERS[n % MANAGERS.len()].to_string(),
                status,
                base_location: LOCATIONS[n % LOCATIONS.len()].to_string(),
                hire_date,
                term_date,
                modified_by: "admin".to_string(),
                modified_at: timestamp(modified_on, 9 + (n % 8) as u32),
            }
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn requisition(
    team: &str,
    req_fg: &str,
    tracking_id: &str,
    backfill_type: &str,
    skill_set: &str,
    el_level: ElLevel,
    resource: &str,
    remarks: &str,
    status: HiringStatus,
    vendor: &str,
    hiring_manager: &str,
) -> HiringRecord {
    HiringRecord {
        id: HiringId(0),
        team: team.to_string(),
        req_fg: req_fg.to_string(),
        tracking_id: tracking_id.to_string(),
        backfill_type: backfill_type.to_string(),
        skill_set: skill_set.to_string(),
        el_level,
        resource: resource.to_string(),
        remarks: remarks.to_string(),
        status,
        vendor: vendor.to_string(),
        hiring_manager: hiring_manager.to_string(),
    }
}

/// Requisitions carry a placeholder id; the store assigns real ones on insert.
pub fn hiring() -> Vec<HiringRecord> {
    vec![
        requisition(
            "Coral/Atlantis/Achievers",
            "REQ-40112",
            "SP-1021",
            "Incremental",
            "Rust, Kafka",
            ElLevel::El4,
            "Meera Nair",
            "Offer accepted, joining in July",
            HiringStatus::Hired,
            "PS",
            "Keshav",
        ),
        requisition(
            "Skyrocket",
            "FG-7781",
            "SP-1022",
            "Backfill",
            "React, TypeScript",
            ElLevel::El3,
            "",
            "Second round scheduled",
            HiringStatus::ActiveHiring,
            "CTS",
            "Kunjal",
        ),
        requisition(
            "OFS",
            "REQ-40131",
            "SP-1023",
            "Incremental",
            "Java, Spring",
            ElLevel::El5,
            "",
            "Budget review pending",
            HiringStatus::OnHold,
            "TCS",
            "Sarah Mitchell",
        ),
        requisition(
            "Achievers",
            "FG-7790",
            "SP-1024",
            "Backfill",
            "QA Automation",
            ElLevel::El3,
            "Lucas Fischer",
            "",
            HiringStatus::Hired,
            "Infosys",
            "David Thompson",
        ),
        requisition(
            "Engineering Team A",
            "REQ-40150",
            "SP-1025",
            "Incremental",
            "Go, Kubernetes",
            ElLevel::El6,
            "",
            "Role merged into platform team",
            HiringStatus::Cancelled,
            "Wipro",
            "Emily Rodriguez",
        ),
        requisition(
            "Product Team",
            "FG-7802",
            "SP-1026",
            "Backfill",
            "Product Analytics, SQL",
            ElLevel::El4,
            "",
            "Shortlist shared with \"core\" panel",
            HiringStatus::ActiveHiring,
            "Accenture",
            "Michael Chen",
        ),
        requisition(
            "Design Team",
            "REQ-40177",
            "SP-1027",
            "Incremental",
            "Figma, Design Systems",
            ElLevel::El4,
            "",
            "",
            HiringStatus::ActiveHiring,
            "PS",
            "Sarah Mitchell",
        ),
        requisition(
            "Engineering Team B",
            "FG-7815",
            "SP-1028",
            "Backfill",
            "Python, Airflow",
            ElLevel::El5,
            "Rohan Patel",
            "Background check in progress",
            HiringStatus::Hired,
            "TCS",
            "Keshav",
        ),
    ]
}
