//! Admin dashboard over employee resourcing and hiring requisitions.
//!
//! A [`DashboardController`] owns the session's record lists and drives the
//! pager, filter engine, selection tracker, modal workflow and CSV exporter
//! from [`DashboardCommand`] values. Renderers read a [`DashboardSnapshot`].

pub mod controller;
pub mod domain;
pub mod export;
pub mod filters;
pub mod fixtures;
pub mod import;
pub mod pager;
pub mod router;
pub mod selection;
pub mod store;
pub mod validation;
pub mod views;

#[cfg(test)]
mod tests;

pub use controller::{DashboardCommand, DashboardController, DashboardError, ViewState};
pub use domain::{
    BadgeTone, ElLevel, Employee, EmployeeId, EmployeeStatus, HiringId, HiringRecord,
    HiringStatus, RecordKey, RoleType, View,
};
pub use export::{
    export_employees, export_filename, export_hiring, ExportError, ExportFile, EMPLOYEE_COLUMNS,
    EMPLOYEE_EXPORT_FILENAME, HIRING_COLUMNS, HIRING_EXPORT_FILENAME,
};
pub use filters::{FilterDescriptor, FilterField, FilterMode, FilterSet};
pub use import::{EmployeeBatchImporter, ImportError, RowErrors};
pub use pager::{PageInfo, Pager, PAGE_SIZE_CHOICES};
pub use router::{dashboard_router, SharedDashboard};
pub use selection::Selection;
pub use store::{RecordStore, StoreError};
pub use validation::{EmployeeDraft, FieldErrors, HiringDraft};
pub use views::{
    AddMenu, CommandOutcome, DashboardSnapshot, EmployeeRowView, HiringRowView, Modal, TableRows,
};
