use serde::Serialize;

use super::domain::{BadgeTone, Employee, EmployeeId, HiringId, HiringRecord, RecordKey, View};
use super::export::ExportFile;
use super::filters::{FilterDescriptor, FilterField, FilterMode};
use super::import::RowErrors;
use super::pager::PageInfo;
use super::validation::{EmployeeDraft, FieldErrors, HiringDraft};

/// The single dialog that may be open at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Modal {
    #[default]
    None,
    Confirm {
        title: String,
        message: String,
        target: RecordKey,
    },
    EditEmployee {
        id: EmployeeId,
        draft: EmployeeDraft,
        errors: FieldErrors,
    },
    EditHiring {
        id: HiringId,
        draft: HiringDraft,
        errors: FieldErrors,
    },
    AddOne {
        draft: EmployeeDraft,
        errors: FieldErrors,
    },
    AddMany {
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
        rows: Vec<RowErrors>,
    },
}

impl Modal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::None)
    }
}

/// "Add User" dropdown on the resourcing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddMenu {
    #[default]
    Closed,
    Open,
}

/// Result of applying one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CommandOutcome {
    Applied,
    /// The command did not apply to the current state; nothing changed.
    Ignored,
    Invalid {
        errors: FieldErrors,
    },
    InvalidBatch {
        message: String,
        rows: Vec<RowErrors>,
    },
    Download(ExportFile),
}

impl CommandOutcome {
    pub(crate) fn from_change(changed: bool) -> Self {
        if changed {
            Self::Applied
        } else {
            Self::Ignored
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EmployeeRowView {
    pub position: usize,
    pub selected: bool,
    pub status_tone: BadgeTone,
    pub role_type_tone: BadgeTone,
    #[serde(flatten)]
    pub record: Employee,
}

#[derive(Debug, Clone, Serialize)]
pub struct HiringRowView {
    pub position: usize,
    pub selected: bool,
    pub status_tone: BadgeTone,
    pub el_level_tone: BadgeTone,
    #[serde(flatten)]
    pub record: HiringRecord,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "rows", rename_all = "snake_case")]
pub enum TableRows {
    Employees(Vec<EmployeeRowView>),
    Hiring(Vec<HiringRowView>),
}

impl TableRows {
    pub fn len(&self) -> usize {
        match self {
            TableRows::Employees(rows) => rows.len(),
            TableRows::Hiring(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything a renderer needs to draw the dashboard for the current state.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub view: View,
    pub view_label: &'static str,
    pub is_admin: bool,
    pub filter_mode: FilterMode,
    pub filter_options: Vec<FilterField>,
    pub selected_filter_field: Option<FilterField>,
    pub filter_value: String,
    pub filters: Vec<FilterDescriptor>,
    pub page: PageInfo,
    pub page_size_choices: Vec<usize>,
    pub selected_count: usize,
    pub all_selected: bool,
    pub table: TableRows,
    pub modal: Modal,
    pub add_menu: AddMenu,
}
