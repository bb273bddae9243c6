use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable key for employees. Supplied by whoever creates the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub u32);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Synthetic key assigned by the record store when a hiring requisition is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HiringId(pub u64);

impl fmt::Display for HiringId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req-{:04}", self.0)
    }
}

/// The two record kinds the dashboard can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Employees,
    Hiring,
}

impl View {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Employees => "Resourcing",
            Self::Hiring => "Hiring",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "employees" | "employee" | "resourcing" => Some(Self::Employees),
            "hiring" => Some(Self::Hiring),
            _ => None,
        }
    }
}

/// Key addressing a single record in either view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum RecordKey {
    Employee(EmployeeId),
    Hiring(HiringId),
}

/// Colour hint for status chips; renderers map these onto their own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Green,
    Red,
    Yellow,
    Blue,
    Purple,
    Indigo,
    Pink,
    Gray,
}

fn parse_label<T: Copy>(candidates: &[T], label: fn(T) -> &'static str, raw: &str) -> Option<T> {
    let wanted = raw.trim();
    candidates
        .iter()
        .copied()
        .find(|candidate| label(*candidate).eq_ignore_ascii_case(wanted))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleType {
    #[serde(rename = "Engineering")]
    Engineering,
    #[serde(rename = "Non Engineering")]
    NonEngineering,
    #[serde(rename = "Both")]
    Both,
}

impl RoleType {
    pub const ALL: [Self; 3] = [Self::Engineering, Self::NonEngineering, Self::Both];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Engineering => "Engineering",
            Self::NonEngineering => "Non Engineering",
            Self::Both => "Both",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        parse_label(&Self::ALL, Self::label, raw)
    }

    pub const fn tone(self) -> BadgeTone {
        match self {
            Self::Engineering => BadgeTone::Blue,
            Self::NonEngineering => BadgeTone::Purple,
            Self::Both => BadgeTone::Green,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeStatus {
    Active,
    Inactive,
    Open,
}

impl EmployeeStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Inactive, Self::Open];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Open => "Open",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        parse_label(&Self::ALL, Self::label, raw)
    }

    pub const fn tone(self) -> BadgeTone {
        match self {
            Self::Active => BadgeTone::Green,
            Self::Inactive => BadgeTone::Red,
            Self::Open => BadgeTone::Yellow,
        }
    }
}

/// Experience level requested by a requisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElLevel {
    #[serde(rename = "EL3")]
    El3,
    #[serde(rename = "EL4")]
    El4,
    #[serde(rename = "EL5")]
    El5,
    #[serde(rename = "EL6")]
    El6,
}

impl ElLevel {
    pub const ALL: [Self; 4] = [Self::El3, Self::El4, Self::El5, Self::El6];

    pub const fn label(self) -> &'static str {
        match self {
            Self::El3 => "EL3",
            Self::El4 => "EL4",
            Self::El5 => "EL5",
            Self::El6 => "EL6",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        parse_label(&Self::ALL, Self::label, raw)
    }

    pub const fn tone(self) -> BadgeTone {
        match self {
            Self::El3 => BadgeTone::Purple,
            Self::El4 => BadgeTone::Indigo,
            Self::El5 => BadgeTone::Pink,
            Self::El6 => BadgeTone::Gray,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HiringStatus {
    #[serde(rename = "Hired")]
    Hired,
    #[serde(rename = "Active hiring")]
    ActiveHiring,
    #[serde(rename = "On Hold")]
    OnHold,
    #[serde(rename = "Cancelled")]
    Cancelled,
}

impl HiringStatus {
    pub const ALL: [Self; 4] = [
        Self::Hired,
        Self::ActiveHiring,
        Self::OnHold,
        Self::Cancelled,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Hired => "Hired",
            Self::ActiveHiring => "Active hiring",
            Self::OnHold => "On Hold",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        parse_label(&Self::ALL, Self::label, raw)
    }

    pub const fn tone(self) -> BadgeTone {
        match self {
            Self::Hired => BadgeTone::Green,
            Self::ActiveHiring => BadgeTone::Blue,
            Self::OnHold | Self::Cancelled => BadgeTone::Gray,
        }
    }
}

/// Resourcing record for a single person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub prj_alignment: String,
    pub emp_id: EmployeeId,
    pub resource_name: String,
    pub core_alignment: String,
    pub core_team: String,
    pub job_title: String,
    pub role_type: RoleType,
    pub email: String,
    pub vendor: String,
    pub contact_number: String,
    pub team_name: String,
    pub secondary_team: String,
    pub manager_name: String,
    pub status: EmployeeStatus,
    pub base_location: String,
    pub hire_date: NaiveDate,
    pub term_date: Option<NaiveDate>,
    pub modified_by: String,
    pub modified_at: NaiveDateTime,
}

/// Open or closed hiring requisition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiringRecord {
    pub id: HiringId,
    pub team: String,
    pub req_fg: String,
    pub tracking_id: String,
    pub backfill_type: String,
    pub skill_set: String,
    pub el_level: ElLevel,
    pub resource: String,
    pub remarks: String,
    pub status: HiringStatus,
    pub vendor: String,
    pub hiring_manager: String,
}
