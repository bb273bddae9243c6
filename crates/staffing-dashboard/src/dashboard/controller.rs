use std::io::Cursor;

use chrono::{Local, NaiveDateTime};
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::domain::{Employee, EmployeeId, HiringId, HiringRecord, RecordKey, View};
use super::export::{export_employees, export_hiring, ExportError, ExportFile};
use super::filters::{FilterField, FilterMode, FilterSet};
use super::import::{EmployeeBatchImporter, ImportError};
use super::pager::{Pager, PAGE_SIZE_CHOICES};
use super::selection::Selection;
use super::store::RecordStore;
use super::validation::{EmployeeDraft, FieldErrors, HiringDraft};
use super::views::{
    AddMenu, CommandOutcome, DashboardSnapshot, EmployeeRowView, HiringRowView, Modal, TableRows,
};
use crate::config::DashboardConfig;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Every interaction a renderer can forward to the controller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashboardCommand {
    SwitchView { view: View },
    NextPage,
    PreviousPage,
    SetPageSize { page_size: usize },
    SetGoToInput { input: String },
    GoToPage,
    ResetFilters,
    SelectFilterField { field: Option<FilterField> },
    SetFilterValue { value: String },
    SubmitFilter,
    AddFilter { field: FilterField, value: String },
    RemoveFilter { label: String },
    ToggleEmployee { id: EmployeeId },
    ToggleHiring { id: HiringId },
    SelectAll { selected: bool },
    RequestDelete { target: RecordKey },
    ConfirmModal,
    CancelModal,
    EditEmployee { id: EmployeeId },
    EditHiring { id: HiringId },
    SaveEmployee { draft: EmployeeDraft },
    SaveHiring { draft: HiringDraft },
    ToggleAddMenu,
    OpenAddEmployee,
    OpenAddMany,
    SubmitNewEmployee { draft: EmployeeDraft },
    SubmitEmployeeBatch { csv: String },
    Export,
}

/// Filters and checked rows kept separately for each view.
#[derive(Debug, Clone)]
pub struct ViewState<K: Ord + Copy> {
    pub filters: FilterSet,
    pub selection: Selection<K>,
}

impl<K: Ord + Copy> ViewState<K> {
    fn new(view: View) -> Self {
        Self {
            filters: FilterSet::new(view),
            selection: Selection::new(),
        }
    }
}

/// Session state machine behind the admin dashboard.
#[derive(Debug, Clone)]
pub struct DashboardController {
    store: RecordStore,
    config: DashboardConfig,
    active_view: View,
    pager: Pager,
    employees: ViewState<EmployeeId>,
    hiring: ViewState<HiringId>,
    modal: Modal,
    add_menu: AddMenu,
    clock: fn() -> NaiveDateTime,
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl DashboardController {
    pub fn new(store: RecordStore, config: DashboardConfig) -> Self {
        Self {
            store,
            pager: Pager::new(config.page_size),
            config,
            active_view: View::Employees,
            employees: ViewState::new(View::Employees),
            hiring: ViewState::new(View::Hiring),
            modal: Modal::None,
            add_menu: AddMenu::Closed,
            clock: local_now,
        }
    }

    pub fn seeded(config: DashboardConfig) -> Self {
        Self::new(RecordStore::seeded(), config)
    }

    /// Replaces the clock used to stamp `modified_at` on saves.
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn active_view(&self) -> View {
        self.active_view
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn add_menu(&self) -> AddMenu {
        self.add_menu
    }

    pub fn filters(&self, view: View) -> &FilterSet {
        match view {
            View::Employees => &self.employees.filters,
            View::Hiring => &self.hiring.filters,
        }
    }

    pub fn employee_selection(&self) -> &Selection<EmployeeId> {
        &self.employees.selection
    }

    pub fn hiring_selection(&self) -> &Selection<HiringId> {
        &self.hiring.selection
    }

    /// Employees the table is paging over: all of them, or the filtered subset in predicate mode.
    pub fn visible_employees(&self) -> Vec<&Employee> {
        let filters = &self.employees.filters;
        self.store
            .employees()
            .iter()
            .filter(|employee| self.shows_all() || filters.matches_employee(employee))
            .collect()
    }

    pub fn visible_hiring(&self) -> Vec<&HiringRecord> {
        let filters = &self.hiring.filters;
        self.store
            .hiring()
            .iter()
            .filter(|record| self.shows_all() || filters.matches_hiring(record))
            .collect()
    }

    // descriptors are display-only in tag mode
    fn shows_all(&self) -> bool {
        self.config.filter_mode == FilterMode::Tag
    }

    fn visible_len(&self) -> usize {
        match self.active_view {
            View::Employees => self.visible_employees().len(),
            View::Hiring => self.visible_hiring().len(),
        }
    }

    pub fn apply(&mut self, command: DashboardCommand) -> Result<CommandOutcome, DashboardError> {
        use DashboardCommand as C;

        debug!(?command, view = ?self.active_view, "applying dashboard command");
        let outcome = match command {
            C::SwitchView { view } => self.switch_view(view),
            C::NextPage => {
                let len = self.visible_len();
                CommandOutcome::from_change(self.pager.next(len))
            }
            C::PreviousPage => CommandOutcome::from_change(self.pager.previous()),
            C::SetPageSize { page_size } => self.set_page_size(page_size),
            C::SetGoToInput { input } => {
                self.pager.set_go_to_input(input);
                CommandOutcome::Applied
            }
            C::GoToPage => {
                let len = self.visible_len();
                CommandOutcome::from_change(self.pager.go(len))
            }
            C::ResetFilters => self.reset_filters(),
            C::SelectFilterField { field } => {
                CommandOutcome::from_change(self.active_filters_mut().select_field(field))
            }
            C::SetFilterValue { value } => {
                self.active_filters_mut().set_draft_value(value);
                CommandOutcome::Applied
            }
            C::SubmitFilter => {
                let changed = self.active_filters_mut().submit();
                self.after_filter_change(changed)
            }
            C::AddFilter { field, value } => {
                let changed = self.active_filters_mut().add(field, &value);
                self.after_filter_change(changed)
            }
            C::RemoveFilter { label } => {
                let changed = self.active_filters_mut().remove(&label);
                self.after_filter_change(changed)
            }
            C::ToggleEmployee { id } => self.toggle_employee(id),
            C::ToggleHiring { id } => self.toggle_hiring(id),
            C::SelectAll { selected } => self.select_all(selected),
            C::RequestDelete { target } => self.request_delete(target),
            C::ConfirmModal => self.confirm_delete(),
            C::CancelModal => {
                let open = self.modal.is_open();
                self.modal = Modal::None;
                CommandOutcome::from_change(open)
            }
            C::EditEmployee { id } => self.edit_employee(id),
            C::EditHiring { id } => self.edit_hiring(id),
            C::SaveEmployee { draft } => self.save_employee(draft),
            C::SaveHiring { draft } => self.save_hiring(draft),
            C::ToggleAddMenu => self.toggle_add_menu(),
            C::OpenAddEmployee => self.open_add(Modal::AddOne {
                draft: EmployeeDraft::default(),
                errors: FieldErrors::default(),
            }),
            C::OpenAddMany => self.open_add(Modal::AddMany {
                message: None,
                rows: Vec::new(),
            }),
            C::SubmitNewEmployee { draft } => self.submit_new_employee(draft),
            C::SubmitEmployeeBatch { csv } => self.submit_batch(csv),
            C::Export => CommandOutcome::Download(self.export()?),
        };
        Ok(outcome)
    }

    /// Full stored list of the active view as a CSV download.
    pub fn export(&self) -> Result<ExportFile, ExportError> {
        let file = match self.active_view {
            View::Employees => export_employees(self.store.employees())?,
            View::Hiring => export_hiring(self.store.hiring())?,
        };
        info!(
            view = ?self.active_view,
            filename = file.filename,
            bytes = file.body.len(),
            "exported dashboard view"
        );
        Ok(file)
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        let (filters, table, selected_count, all_selected) = match self.active_view {
            View::Employees => {
                let visible = self.visible_employees();
                let selection = &self.employees.selection;
                let first = self.pager.info(visible.len()).first_row;
                let rows = self
                    .pager
                    .window(&visible)
                    .iter()
                    .enumerate()
                    .map(|(offset, employee)| EmployeeRowView {
                        position: first + offset,
                        selected: selection.contains(employee.emp_id),
                        status_tone: employee.status.tone(),
                        role_type_tone: employee.role_type.tone(),
                        record: (*employee).clone(),
                    })
                    .collect();
                (
                    &self.employees.filters,
                    TableRows::Employees(rows),
                    selection.len(),
                    selection.all_selected(visible.iter().map(|employee| employee.emp_id)),
                )
            }
            View::Hiring => {
                let visible = self.visible_hiring();
                let selection = &self.hiring.selection;
                let first = self.pager.info(visible.len()).first_row;
                let rows = self
                    .pager
                    .window(&visible)
                    .iter()
                    .enumerate()
                    .map(|(offset, record)| HiringRowView {
                        position: first + offset,
                        selected: selection.contains(record.id),
                        status_tone: record.status.tone(),
                        el_level_tone: record.el_level.tone(),
                        record: (*record).clone(),
                    })
                    .collect();
                (
                    &self.hiring.filters,
                    TableRows::Hiring(rows),
                    selection.len(),
                    selection.all_selected(visible.iter().map(|record| record.id)),
                )
            }
        };

        DashboardSnapshot {
            view: self.active_view,
            view_label: self.active_view.label(),
            is_admin: self.config.is_admin,
            filter_mode: self.config.filter_mode,
            filter_options: FilterField::options_for(self.active_view).to_vec(),
            selected_filter_field: filters.selected_field(),
            filter_value: filters.draft_value().to_string(),
            filters: filters.descriptors().to_vec(),
            page: self.pager.info(self.visible_len()),
            page_size_choices: PAGE_SIZE_CHOICES.to_vec(),
            selected_count,
            all_selected,
            table,
            modal: self.modal.clone(),
            add_menu: self.add_menu,
        }
    }

    fn active_filters_mut(&mut self) -> &mut FilterSet {
        match self.active_view {
            View::Employees => &mut self.employees.filters,
            View::Hiring => &mut self.hiring.filters,
        }
    }

    fn after_filter_change(&mut self, changed: bool) -> CommandOutcome {
        if changed && self.config.filter_mode == FilterMode::Predicate {
            self.pager.reset_page();
        }
        CommandOutcome::from_change(changed)
    }

    fn switch_view(&mut self, view: View) -> CommandOutcome {
        if view == self.active_view {
            return CommandOutcome::Ignored;
        }
        info!(from = ?self.active_view, to = ?view, "switching dashboard view");
        self.active_view = view;
        self.pager.reset_page();
        if view != View::Employees {
            self.add_menu = AddMenu::Closed;
        }
        CommandOutcome::Applied
    }

    fn set_page_size(&mut self, page_size: usize) -> CommandOutcome {
        if page_size == self.pager.page_size() {
            return CommandOutcome::Ignored;
        }
        CommandOutcome::from_change(self.pager.set_page_size(page_size))
    }

    fn reset_filters(&mut self) -> CommandOutcome {
        self.active_filters_mut().reset();
        self.pager.reset(self.config.page_size);
        CommandOutcome::Applied
    }

    fn toggle_employee(&mut self, id: EmployeeId) -> CommandOutcome {
        if !self.store.contains_employee(id) {
            return CommandOutcome::Ignored;
        }
        self.employees.selection.toggle(id);
        CommandOutcome::Applied
    }

    fn toggle_hiring(&mut self, id: HiringId) -> CommandOutcome {
        if self.store.hiring_record(id).is_none() {
            return CommandOutcome::Ignored;
        }
        self.hiring.selection.toggle(id);
        CommandOutcome::Applied
    }

    fn select_all(&mut self, selected: bool) -> CommandOutcome {
        match self.active_view {
            View::Employees => {
                let loaded: Vec<EmployeeId> = self
                    .visible_employees()
                    .iter()
                    .map(|employee| employee.emp_id)
                    .collect();
                self.employees.selection.select_all(selected, loaded);
            }
            View::Hiring => {
                let loaded: Vec<HiringId> =
                    self.visible_hiring().iter().map(|record| record.id).collect();
                self.hiring.selection.select_all(selected, loaded);
            }
        }
        CommandOutcome::Applied
    }

    fn request_delete(&mut self, target: RecordKey) -> CommandOutcome {
        if self.modal.is_open() {
            return CommandOutcome::Ignored;
        }
        let (title, message) = match target {
            RecordKey::Employee(id) => match self.store.employee(id) {
                Some(employee) => (
                    "Delete Employee",
                    format!(
                        "Are you sure you want to delete {}? This action cannot be undone.",
                        employee.resource_name
                    ),
                ),
                None => return CommandOutcome::Ignored,
            },
            RecordKey::Hiring(id) => match self.store.hiring_record(id) {
                Some(record) => (
                    "Delete Hiring Record",
                    format!(
                        "Are you sure you want to delete the hiring record for {}? This action cannot be undone.",
                        record.team
                    ),
                ),
                None => return CommandOutcome::Ignored,
            },
        };
        self.modal = Modal::Confirm {
            title: title.to_string(),
            message,
            target,
        };
        CommandOutcome::Applied
    }

    fn confirm_delete(&mut self) -> CommandOutcome {
        let Modal::Confirm { target, .. } = &self.modal else {
            return CommandOutcome::Ignored;
        };
        let target = *target;
        self.modal = Modal::None;

        match target {
            RecordKey::Employee(id) => {
                if let Some(removed) = self.store.remove_employee(id) {
                    info!(emp_id = %id, name = %removed.resource_name, "deleted employee");
                }
                self.employees.selection.prune(id);
            }
            RecordKey::Hiring(id) => {
                if let Some(removed) = self.store.remove_hiring(id) {
                    info!(hiring_id = %id, team = %removed.team, "deleted hiring record");
                }
                self.hiring.selection.prune(id);
            }
        }

        let len = self.visible_len();
        self.pager.clamp(len);
        CommandOutcome::Applied
    }

    fn edit_employee(&mut self, id: EmployeeId) -> CommandOutcome {
        if self.modal.is_open() {
            return CommandOutcome::Ignored;
        }
        let Some(employee) = self.store.employee(id) else {
            return CommandOutcome::Ignored;
        };
        self.modal = Modal::EditEmployee {
            id,
            draft: EmployeeDraft::from_employee(employee),
            errors: FieldErrors::default(),
        };
        CommandOutcome::Applied
    }

    fn edit_hiring(&mut self, id: HiringId) -> CommandOutcome {
        if self.modal.is_open() {
            return CommandOutcome::Ignored;
        }
        let Some(record) = self.store.hiring_record(id) else {
            return CommandOutcome::Ignored;
        };
        self.modal = Modal::EditHiring {
            id,
            draft: HiringDraft::from_record(record),
            errors: FieldErrors::default(),
        };
        CommandOutcome::Applied
    }

    fn save_employee(&mut self, draft: EmployeeDraft) -> CommandOutcome {
        let Modal::EditEmployee { id, .. } = &self.modal else {
            return CommandOutcome::Ignored;
        };
        let id = *id;

        let validated = draft
            .validate(&self.config.editor, (self.clock)())
            .and_then(|employee| {
                if employee.emp_id == id {
                    Ok(employee)
                } else {
                    let mut errors = FieldErrors::default();
                    errors.insert("emp_id", "Employee ID cannot be changed");
                    Err(errors)
                }
            });

        match validated {
            Ok(employee) => {
                self.modal = Modal::None;
                match self.store.replace_employee(employee) {
                    Ok(()) => {
                        info!(emp_id = %id, editor = %self.config.editor, "saved employee");
                        let len = self.visible_len();
                        self.pager.clamp(len);
                        CommandOutcome::Applied
                    }
                    Err(err) => {
                        warn!(emp_id = %id, error = %err, "employee vanished before save");
                        CommandOutcome::Ignored
                    }
                }
            }
            Err(errors) => {
                debug!(emp_id = %id, fields = errors.len(), "employee form rejected");
                self.modal = Modal::EditEmployee {
                    id,
                    draft,
                    errors: errors.clone(),
                };
                CommandOutcome::Invalid { errors }
            }
        }
    }

    fn save_hiring(&mut self, draft: HiringDraft) -> CommandOutcome {
        let Modal::EditHiring { id, .. } = &self.modal else {
            return CommandOutcome::Ignored;
        };
        let id = *id;

        match draft.validate(id) {
            Ok(record) => {
                self.modal = Modal::None;
                match self.store.replace_hiring(record) {
                    Ok(()) => {
                        info!(hiring_id = %id, "saved hiring record");
                        let len = self.visible_len();
                        self.pager.clamp(len);
                        CommandOutcome::Applied
                    }
                    Err(err) => {
                        warn!(hiring_id = %id, error = %err, "hiring record vanished before save");
                        CommandOutcome::Ignored
                    }
                }
            }
            Err(errors) => {
                debug!(hiring_id = %id, fields = errors.len(), "hiring form rejected");
                self.modal = Modal::EditHiring {
                    id,
                    draft,
                    errors: errors.clone(),
                };
                CommandOutcome::Invalid { errors }
            }
        }
    }

    fn toggle_add_menu(&mut self) -> CommandOutcome {
        if self.active_view != View::Employees || self.modal.is_open() {
            return CommandOutcome::Ignored;
        }
        self.add_menu = match self.add_menu {
            AddMenu::Closed => AddMenu::Open,
            AddMenu::Open => AddMenu::Closed,
        };
        CommandOutcome::Applied
    }

    fn open_add(&mut self, modal: Modal) -> CommandOutcome {
        if self.active_view != View::Employees || self.modal.is_open() {
            return CommandOutcome::Ignored;
        }
        self.add_menu = AddMenu::Closed;
        self.modal = modal;
        CommandOutcome::Applied
    }

    fn submit_new_employee(&mut self, draft: EmployeeDraft) -> CommandOutcome {
        if !matches!(self.modal, Modal::AddOne { .. }) {
            return CommandOutcome::Ignored;
        }

        let store = &self.store;
        let validated = draft
            .validate(&self.config.editor, (self.clock)())
            .and_then(|employee| {
                if store.contains_employee(employee.emp_id) {
                    let mut errors = FieldErrors::default();
                    errors.insert("emp_id", "Employee ID already exists");
                    Err(errors)
                } else {
                    Ok(employee)
                }
            });

        match validated {
            Ok(employee) => {
                let id = employee.emp_id;
                self.modal = Modal::None;
                match self.store.insert_employee(employee) {
                    Ok(()) => {
                        info!(emp_id = %id, "added employee");
                        CommandOutcome::Applied
                    }
                    Err(err) => {
                        warn!(emp_id = %id, error = %err, "employee insert rejected");
                        CommandOutcome::Ignored
                    }
                }
            }
            Err(errors) => {
                self.modal = Modal::AddOne {
                    draft,
                    errors: errors.clone(),
                };
                CommandOutcome::Invalid { errors }
            }
        }
    }

    fn submit_batch(&mut self, csv: String) -> CommandOutcome {
        if !matches!(self.modal, Modal::AddMany { .. }) {
            return CommandOutcome::Ignored;
        }

        let store = &self.store;
        let imported = EmployeeBatchImporter::from_reader(
            Cursor::new(csv.into_bytes()),
            |id| store.contains_employee(id),
            &self.config.editor,
            (self.clock)(),
        );

        match imported {
            Ok(employees) => {
                let count = employees.len();
                for employee in employees {
                    let id = employee.emp_id;
                    if let Err(err) = self.store.insert_employee(employee) {
                        warn!(emp_id = %id, error = %err, "batch insert rejected");
                    }
                }
                info!(count, "imported employee batch");
                self.modal = Modal::None;
                CommandOutcome::Applied
            }
            Err(err) => {
                let message = err.to_string();
                let rows = match err {
                    ImportError::Rejected(rows) => rows,
                    ImportError::Csv(_) | ImportError::Empty => Vec::new(),
                };
                debug!(%message, rejected = rows.len(), "employee batch rejected");
                self.modal = Modal::AddMany {
                    message: Some(message.clone()),
                    rows: rows.clone(),
                };
                CommandOutcome::InvalidBatch { message, rows }
            }
        }
    }
}
