use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::config::DashboardConfig;
use crate::dashboard::domain::{
    ElLevel, Employee, EmployeeId, EmployeeStatus, HiringId, HiringRecord, HiringStatus, RoleType,
};
use crate::dashboard::filters::FilterMode;
use crate::dashboard::store::RecordStore;
use crate::dashboard::validation::EmployeeDraft;
use crate::dashboard::{dashboard_router, DashboardController, SharedDashboard};

pub(super) const TEAMS: [&str; 3] = ["OFS", "Skyrocket", "Achievers"];
pub(super) const MANAGERS: [&str; 2] = ["Keshav", "Kunjal"];

pub(super) fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 7, 1)
        .expect("valid date")
        .and_hms_opt(9, 15, 0)
        .expect("valid time")
}

pub(super) fn employee(n: u32) -> Employee {
    let index = n as usize;
    Employee {
        prj_alignment: "Core".to_string(),
        emp_id: EmployeeId(20_000 + n),
        resource_name: format!("Person {n}"),
        core_alignment: "Coral".to_string(),
        core_team: TEAMS[index % TEAMS.len()].to_string(),
        job_title: "Software Engineer".to_string(),
        role_type: RoleType::Engineering,
        email: format!("person{n}@example.com"),
        vendor: "PS".to_string(),
        contact_number: String::new(),
        team_name: TEAMS[index % TEAMS.len()].to_string(),
        secondary_team: String::new(),
        manager_name: MANAGERS[index % MANAGERS.len()].to_string(),
        status: EmployeeStatus::Active,
        base_location: "Pune".to_string(),
        hire_date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
        term_date: None,
        modified_by: "seed".to_string(),
        modified_at: fixed_now(),
    }
}

pub(super) fn requisition(team: &str, status: HiringStatus) -> HiringRecord {
    HiringRecord {
        id: HiringId(0),
        team: team.to_string(),
        req_fg: format!("REQ-{team}"),
        tracking_id: String::new(),
        backfill_type: "Backfill".to_string(),
        skill_set: "Rust".to_string(),
        el_level: ElLevel::El4,
        resource: String::new(),
        remarks: String::new(),
        status,
        vendor: "PS".to_string(),
        hiring_manager: "Keshav".to_string(),
    }
}

/// Store with `employees` generated employees and requisitions for `teams`.
pub(super) fn store_with(employees: u32, teams: &[&str]) -> RecordStore {
    let mut store = RecordStore::new();
    for n in 1..=employees {
        store.insert_employee(employee(n)).expect("unique ids");
    }
    for team in teams {
        store.insert_hiring(requisition(team, HiringStatus::ActiveHiring));
    }
    store
}

pub(super) fn config(page_size: usize, filter_mode: FilterMode) -> DashboardConfig {
    DashboardConfig {
        page_size,
        filter_mode,
        ..DashboardConfig::default()
    }
}

pub(super) fn controller(employees: u32, teams: &[&str]) -> DashboardController {
    DashboardController::new(store_with(employees, teams), config(50, FilterMode::Tag))
        .with_clock(fixed_now)
}

pub(super) fn predicate_controller(employees: u32, teams: &[&str]) -> DashboardController {
    DashboardController::new(store_with(employees, teams), config(50, FilterMode::Predicate))
        .with_clock(fixed_now)
}

pub(super) fn new_employee_draft(id: u32) -> EmployeeDraft {
    EmployeeDraft {
        emp_id: id.to_string(),
        resource_name: "New Hire".to_string(),
        job_title: "QA Analyst".to_string(),
        role_type: "Non Engineering".to_string(),
        email: "new.hire@example.com".to_string(),
        team_name: "OFS".to_string(),
        manager_name: "Keshav".to_string(),
        status: "Open".to_string(),
        hire_date: "2025-06-30".to_string(),
        ..EmployeeDraft::default()
    }
}

pub(super) fn shared(controller: DashboardController) -> SharedDashboard {
    Arc::new(Mutex::new(controller))
}

pub(super) fn router_with(controller: DashboardController) -> axum::Router {
    dashboard_router(shared(controller))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}
