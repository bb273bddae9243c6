use std::collections::HashSet;
use std::io::Read;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::domain::{Employee, EmployeeId};
use super::validation::{EmployeeDraft, FieldErrors};

/// Validation failures for one data row (1-based, header excluded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowErrors {
    pub row: usize,
    pub errors: FieldErrors,
}

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("invalid employee CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("employee CSV contained no data rows")]
    Empty,
    #[error("{} of the submitted rows failed validation", .0.len())]
    Rejected(Vec<RowErrors>),
}

impl ImportError {
    pub fn row_errors(&self) -> &[RowErrors] {
        match self {
            ImportError::Rejected(rows) => rows,
            ImportError::Csv(_) | ImportError::Empty => &[],
        }
    }
}

/// Bulk "Add Multiple Users" intake. Either every row is accepted or none are.
pub struct EmployeeBatchImporter;

impl EmployeeBatchImporter {
    /// Reads rows labelled like the employee export into form drafts.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<EmployeeDraft>, ImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut drafts = Vec::new();
        for row in csv_reader.deserialize::<EmployeeRow>() {
            drafts.push(row?.into_draft());
        }

        if drafts.is_empty() {
            return Err(ImportError::Empty);
        }
        Ok(drafts)
    }

    /// Validates every draft, rejecting ids that already exist or repeat within the batch.
    pub fn validate(
        drafts: &[EmployeeDraft],
        exists: impl Fn(EmployeeId) -> bool,
        editor: &str,
        now: NaiveDateTime,
    ) -> Result<Vec<Employee>, ImportError> {
        let mut accepted = Vec::with_capacity(drafts.len());
        let mut rejected = Vec::new();
        let mut seen: HashSet<EmployeeId> = HashSet::new();

        for (index, draft) in drafts.iter().enumerate() {
            let row = index + 1;
            match draft.validate(editor, now) {
                Ok(employee) => {
                    let mut errors = FieldErrors::default();
                    if exists(employee.emp_id) {
                        errors.insert("emp_id", "Employee ID already exists");
                    } else if !seen.insert(employee.emp_id) {
                        errors.insert("emp_id", "Employee ID is repeated in this batch");
                    }

                    if errors.is_empty() {
                        accepted.push(employee);
                    } else {
                        rejected.push(RowErrors { row, errors });
                    }
                }
                Err(errors) => rejected.push(RowErrors { row, errors }),
            }
        }

        if rejected.is_empty() {
            Ok(accepted)
        } else {
            Err(ImportError::Rejected(rejected))
        }
    }

    pub fn from_reader<R: Read>(
        reader: R,
        exists: impl Fn(EmployeeId) -> bool,
        editor: &str,
        now: NaiveDateTime,
    ) -> Result<Vec<Employee>, ImportError> {
        let drafts = Self::parse(reader)?;
        Self::validate(&drafts, exists, editor, now)
    }
}

#[derive(Debug, Deserialize)]
struct EmployeeRow {
    #[serde(rename = "PRJ core alignment", default)]
    prj_alignment: String,
    #[serde(rename = "Employee ID", default)]
    emp_id: String,
    #[serde(rename = "Name", default)]
    resource_name: String,
    #[serde(rename = "Core alignment", default)]
    core_alignment: String,
    #[serde(rename = "Core Team", default)]
    core_team: String,
    #[serde(rename = "Job Title", default)]
    job_title: String,
    #[serde(rename = "Role type", default)]
    role_type: String,
    #[serde(rename = "Email", default)]
    email: String,
    #[serde(rename = "Vendor", default)]
    vendor: String,
    #[serde(rename = "Contact Number", default)]
    contact_number: String,
    #[serde(rename = "Team Name", default)]
    team_name: String,
    #[serde(rename = "Secondary Team", default)]
    secondary_team: String,
    #[serde(rename = "Manager Name", default)]
    manager_name: String,
    #[serde(rename = "Status", default)]
    status: String,
    #[serde(rename = "Location", default)]
    base_location: String,
    #[serde(rename = "Hire Date", default)]
    hire_date: String,
    #[serde(rename = "Termination Date", default)]
    term_date: String,
}

impl EmployeeRow {
    fn into_draft(self) -> EmployeeDraft {
        EmployeeDraft {
            prj_alignment: self.prj_alignment,
            emp_id: self.emp_id,
            resource_name: self.resource_name,
            core_alignment: self.core_alignment,
            core_team: self.core_team,
            job_title: self.job_title,
            role_type: self.role_type,
            email: self.email,
            vendor: self.vendor,
            contact_number: self.contact_number,
            team_name: self.team_name,
            secondary_team: self.secondary_team,
            manager_name: self.manager_name,
            status: self.status,
            base_location: self.base_location,
            hire_date: self.hire_date,
            term_date: self.term_date,
        }
    }
}
