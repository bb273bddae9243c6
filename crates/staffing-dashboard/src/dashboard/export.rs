use serde::Serialize;

use super::domain::{Employee, HiringRecord, View};

pub const EMPLOYEE_EXPORT_FILENAME: &str = "employees.csv";
pub const HIRING_EXPORT_FILENAME: &str = "hiring_data.csv";

/// Column labels for the employee export, in output order.
pub const EMPLOYEE_COLUMNS: [&str; 19] = [
    "PRJ core alignment",
    "Employee ID",
    "Name",
    "Core alignment",
    "Core Team",
    "Job Title",
    "Role type",
    "Email",
    "Vendor",
    "Contact Number",
    "Team Name",
    "Secondary Team",
    "Manager Name",
    "Status",
    "Location",
    "Hire Date",
    "Termination Date",
    "Modified By",
    "Modified at",
];

/// Column labels for the hiring export, in output order.
pub const HIRING_COLUMNS: [&str; 11] = [
    "Team",
    "REQ/FG",
    "Sharepoint ID",
    "Incremental/Backfill",
    "Skill Set",
    "EL Level",
    "Resource",
    "Remarks",
    "Status",
    "Vendor",
    "Hiring Manager",
];

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write CSV record: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush CSV buffer: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// A rendered download: what a browser would save under `filename`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportFile {
    pub filename: &'static str,
    pub content_type: String,
    pub body: String,
}

impl ExportFile {
    fn csv(filename: &'static str, body: String) -> Self {
        Self {
            filename,
            content_type: mime::TEXT_CSV_UTF_8.to_string(),
            body,
        }
    }

    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

pub const fn export_filename(view: View) -> &'static str {
    match view {
        View::Employees => EMPLOYEE_EXPORT_FILENAME,
        View::Hiring => HIRING_EXPORT_FILENAME,
    }
}

pub fn export_employees(employees: &[Employee]) -> Result<ExportFile, ExportError> {
    let rows = employees.iter().map(employee_row);
    let body = render(&EMPLOYEE_COLUMNS, rows)?;
    Ok(ExportFile::csv(EMPLOYEE_EXPORT_FILENAME, body))
}

pub fn export_hiring(records: &[HiringRecord]) -> Result<ExportFile, ExportError> {
    let rows = records.iter().map(hiring_row);
    let body = render(&HIRING_COLUMNS, rows)?;
    Ok(ExportFile::csv(HIRING_EXPORT_FILENAME, body))
}

fn employee_row(employee: &Employee) -> Vec<String> {
    vec![
        employee.prj_alignment.clone(),
        employee.emp_id.to_string(),
        employee.resource_name.clone(),
        employee.core_alignment.clone(),
        employee.core_team.clone(),
        employee.job_title.clone(),
        employee.role_type.label().to_string(),
        employee.email.clone(),
        employee.vendor.clone(),
        employee.contact_number.clone(),
        employee.team_name.clone(),
        employee.secondary_team.clone(),
        employee.manager_name.clone(),
        employee.status.label().to_string(),
        employee.base_location.clone(),
        employee.hire_date.format(DATE_FORMAT).to_string(),
        employee
            .term_date
            .map(|date| date.format(DATE_FORMAT).to_string())
            .unwrap_or_default(),
        employee.modified_by.clone(),
        employee.modified_at.format(TIMESTAMP_FORMAT).to_string(),
    ]
}

fn hiring_row(record: &HiringRecord) -> Vec<String> {
    vec![
        record.team.clone(),
        record.req_fg.clone(),
        record.tracking_id.clone(),
        record.backfill_type.clone(),
        record.skill_set.clone(),
        record.el_level.label().to_string(),
        record.resource.clone(),
        record.remarks.clone(),
        record.status.label().to_string(),
        record.vendor.clone(),
        record.hiring_manager.clone(),
    ]
}

// Header labels go out bare; every data field is quoted. Rows are joined by
// '\n' with no terminator after the last data row.
fn render<I>(columns: &[&str], rows: I) -> Result<String, ExportError>
where
    I: Iterator<Item = Vec<String>>,
{
    let mut header = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    header.write_record(columns)?;
    let buffer = header.into_inner().map_err(|err| err.into_error())?;

    let mut body = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(buffer);
    let mut wrote_rows = false;
    for row in rows {
        body.write_record(&row)?;
        wrote_rows = true;
    }
    let mut bytes = body.into_inner().map_err(|err| err.into_error())?;

    if wrote_rows && bytes.last() == Some(&b'\n') {
        bytes.pop();
    }

    Ok(String::from_utf8(bytes)?)
}
