use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::domain::{
    ElLevel, Employee, EmployeeId, EmployeeStatus, HiringId, HiringRecord, HiringStatus, RoleType,
};
use super::export::DATE_FORMAT;

/// Inline messages keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

fn required<'a>(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &'a str,
    label: &str,
) -> Option<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.insert(field, format!("{label} is required"));
        None
    } else {
        Some(trimmed)
    }
}

fn required_choice<T>(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    label: &str,
    parse: fn(&str) -> Option<T>,
) -> Option<T> {
    let raw = required(errors, field, value, label)?;
    let parsed = parse(raw);
    if parsed.is_none() {
        errors.insert(field, format!("{label} is invalid"));
    }
    parsed
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Text captured by the employee add/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeDraft {
    pub prj_alignment: String,
    pub emp_id: String,
    pub resource_name: String,
    pub core_alignment: String,
    pub core_team: String,
    pub job_title: String,
    pub role_type: String,
    pub email: String,
    pub vendor: String,
    pub contact_number: String,
    pub team_name: String,
    pub secondary_team: String,
    pub manager_name: String,
    pub status: String,
    pub base_location: String,
    pub hire_date: String,
    pub term_date: String,
}

impl EmployeeDraft {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            prj_alignment: employee.prj_alignment.clone(),
            emp_id: employee.emp_id.to_string(),
            resource_name: employee.resource_name.clone(),
            core_alignment: employee.core_alignment.clone(),
            core_team: employee.core_team.clone(),
            job_title: employee.job_title.clone(),
            role_type: employee.role_type.label().to_string(),
            email: employee.email.clone(),
            vendor: employee.vendor.clone(),
            contact_number: employee.contact_number.clone(),
            team_name: employee.team_name.clone(),
            secondary_team: employee.secondary_team.clone(),
            manager_name: employee.manager_name.clone(),
            status: employee.status.label().to_string(),
            base_location: employee.base_location.clone(),
            hire_date: employee.hire_date.format(DATE_FORMAT).to_string(),
            term_date: employee
                .term_date
                .map(|date| date.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
        }
    }

    /// Checks required fields and formats, stamping the audit fields on success.
    pub fn validate(&self, editor: &str, now: NaiveDateTime) -> Result<Employee, FieldErrors> {
        let mut errors = FieldErrors::default();

        let emp_id = required(&mut errors, "emp_id", &self.emp_id, "Employee ID").and_then(|raw| {
            let parsed = raw.parse::<u32>().ok().filter(|id| *id > 0);
            if parsed.is_none() {
                errors.insert("emp_id", "Employee ID must be a positive number");
            }
            parsed
        });
        let resource_name = required(&mut errors, "resource_name", &self.resource_name, "Name");
        let job_title = required(&mut errors, "job_title", &self.job_title, "Job title");
        let role_type = required_choice(
            &mut errors,
            "role_type",
            &self.role_type,
            "Role type",
            RoleType::parse,
        );
        let email = required(&mut errors, "email", &self.email, "Email").and_then(|raw| {
            let valid = raw
                .split_once('@')
                .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
            if !valid {
                errors.insert("email", "Email is invalid");
            }
            valid.then_some(raw)
        });
        let team_name = required(&mut errors, "team_name", &self.team_name, "Team");
        let manager_name = required(&mut errors, "manager_name", &self.manager_name, "Manager");
        let status = required_choice(
            &mut errors,
            "status",
            &self.status,
            "Status",
            EmployeeStatus::parse,
        );
        let hire_date =
            required(&mut errors, "hire_date", &self.hire_date, "Hire date").and_then(|raw| {
                let parsed = parse_date(raw);
                if parsed.is_none() {
                    errors.insert("hire_date", "Hire date must be YYYY-MM-DD");
                }
                parsed
            });
        let term_date = if self.term_date.trim().is_empty() {
            None
        } else {
            let parsed = parse_date(&self.term_date);
            if parsed.is_none() {
                errors.insert("term_date", "Termination date must be YYYY-MM-DD");
            }
            parsed
        };

        errors.into_result(|| Employee {
            prj_alignment: self.prj_alignment.trim().to_string(),
            emp_id: EmployeeId(emp_id.unwrap_or_default()),
            resource_name: resource_name.unwrap_or_default().to_string(),
            core_alignment: self.core_alignment.trim().to_string(),
            core_team: self.core_team.trim().to_string(),
            job_title: job_title.unwrap_or_default().to_string(),
            role_type: role_type.unwrap_or(RoleType::Engineering),
            email: email.unwrap_or_default().to_string(),
            vendor: self.vendor.trim().to_string(),
            contact_number: self.contact_number.trim().to_string(),
            team_name: team_name.unwrap_or_default().to_string(),
            secondary_team: self.secondary_team.trim().to_string(),
            manager_name: manager_name.unwrap_or_default().to_string(),
            status: status.unwrap_or(EmployeeStatus::Active),
            base_location: self.base_location.trim().to_string(),
            hire_date: hire_date.unwrap_or_default(),
            term_date,
            modified_by: editor.to_string(),
            modified_at: now,
        })
    }
}

/// Text captured by the hiring edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HiringDraft {
    pub team: String,
    pub req_fg: String,
    pub tracking_id: String,
    pub backfill_type: String,
    pub skill_set: String,
    pub el_level: String,
    pub resource: String,
    pub remarks: String,
    pub status: String,
    pub vendor: String,
    pub hiring_manager: String,
}

impl HiringDraft {
    pub fn from_record(record: &HiringRecord) -> Self {
        Self {
            team: record.team.clone(),
            req_fg: record.req_fg.clone(),
            tracking_id: record.tracking_id.clone(),
            backfill_type: record.backfill_type.clone(),
            skill_set: record.skill_set.clone(),
            el_level: record.el_level.label().to_string(),
            resource: record.resource.clone(),
            remarks: record.remarks.clone(),
            status: record.status.label().to_string(),
            vendor: record.vendor.clone(),
            hiring_manager: record.hiring_manager.clone(),
        }
    }

    pub fn validate(&self, id: HiringId) -> Result<HiringRecord, FieldErrors> {
        let mut errors = FieldErrors::default();

        let team = required(&mut errors, "team", &self.team, "Team");
        let skill_set = required(&mut errors, "skill_set", &self.skill_set, "Skill set");
        let el_level = required_choice(
            &mut errors,
            "el_level",
            &self.el_level,
            "EL Level",
            ElLevel::parse,
        );
        let status = required_choice(
            &mut errors,
            "status",
            &self.status,
            "Status",
            HiringStatus::parse,
        );
        let hiring_manager = required(
            &mut errors,
            "hiring_manager",
            &self.hiring_manager,
            "Hiring manager",
        );

        errors.into_result(|| HiringRecord {
            id,
            team: team.unwrap_or_default().to_string(),
            req_fg: self.req_fg.trim().to_string(),
            tracking_id: self.tracking_id.trim().to_string(),
            backfill_type: self.backfill_type.trim().to_string(),
            skill_set: skill_set.unwrap_or_default().to_string(),
            el_level: el_level.unwrap_or(ElLevel::El3),
            resource: self.resource.trim().to_string(),
            remarks: self.remarks.trim().to_string(),
            status: status.unwrap_or(HiringStatus::ActiveHiring),
            vendor: self.vendor.trim().to_string(),
            hiring_manager: hiring_manager.unwrap_or_default().to_string(),
        })
    }
}
