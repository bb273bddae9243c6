use super::common::*;

use crate::dashboard::controller::DashboardCommand;
use crate::dashboard::domain::{EmployeeId, HiringId, RecordKey, View};
use crate::dashboard::filters::{FilterField, FilterMode};
use crate::dashboard::store::RecordStore;
use crate::dashboard::views::{CommandOutcome, Modal, TableRows};
use crate::dashboard::DashboardController;

fn apply(
    controller: &mut crate::dashboard::DashboardController,
    command: DashboardCommand,
) -> CommandOutcome {
    controller.apply(command).expect("command applies")
}

fn employee_ids(table: &TableRows) -> Vec<u32> {
    match table {
        TableRows::Employees(rows) => rows.iter().map(|row| row.record.emp_id.0).collect(),
        TableRows::Hiring(_) => panic!("expected employee rows"),
    }
}

#[test]
fn pages_through_one_hundred_twenty_employees() {
    let mut dashboard = controller(120, &[]);

    let snapshot = dashboard.snapshot();
    assert_eq!(snapshot.page.caption(), "Displaying Page 1 of 3");
    assert_eq!(snapshot.table.len(), 50);
    assert!(!snapshot.page.has_previous);

    assert_eq!(apply(&mut dashboard, DashboardCommand::NextPage), CommandOutcome::Applied);
    assert_eq!(apply(&mut dashboard, DashboardCommand::NextPage), CommandOutcome::Applied);
    assert_eq!(apply(&mut dashboard, DashboardCommand::NextPage), CommandOutcome::Ignored);

    let snapshot = dashboard.snapshot();
    assert_eq!(snapshot.page.page, 3);
    assert_eq!(snapshot.page.first_row, 101);
    assert_eq!(snapshot.page.last_row, 120);
    assert_eq!(employee_ids(&snapshot.table).first(), Some(&20_101));
    assert_eq!(employee_ids(&snapshot.table).len(), 20);

    assert_eq!(apply(&mut dashboard, DashboardCommand::PreviousPage), CommandOutcome::Applied);
    assert_eq!(dashboard.pager().page(), 2);
}

#[test]
fn rows_carry_their_absolute_position() {
    let mut dashboard = controller(60, &[]);
    apply(&mut dashboard, DashboardCommand::SetPageSize { page_size: 25 });
    apply(&mut dashboard, DashboardCommand::NextPage);

    let TableRows::Employees(rows) = dashboard.snapshot().table else {
        panic!("expected employee rows");
    };
    assert_eq!(rows.first().map(|row| row.position), Some(26));
    assert_eq!(rows.last().map(|row| row.position), Some(50));
}

#[test]
fn page_size_change_returns_to_first_page() {
    let mut dashboard = controller(120, &[]);
    apply(&mut dashboard, DashboardCommand::NextPage);

    let outcome = apply(&mut dashboard, DashboardCommand::SetPageSize { page_size: 25 });
    assert_eq!(outcome, CommandOutcome::Applied);
    assert_eq!(dashboard.pager().page(), 1);
    assert_eq!(dashboard.snapshot().page.total_pages, 5);

    let outcome = apply(&mut dashboard, DashboardCommand::SetPageSize { page_size: 25 });
    assert_eq!(outcome, CommandOutcome::Ignored);
    let outcome = apply(&mut dashboard, DashboardCommand::SetPageSize { page_size: 0 });
    assert_eq!(outcome, CommandOutcome::Ignored);
}

#[test]
fn go_to_page_keeps_bad_input_and_clears_good_input() {
    let mut dashboard = controller(120, &[]);

    apply(
        &mut dashboard,
        DashboardCommand::SetGoToInput {
            input: "7".to_string(),
        },
    );
    assert_eq!(apply(&mut dashboard, DashboardCommand::GoToPage), CommandOutcome::Ignored);
    assert_eq!(dashboard.pager().go_to_input(), "7");
    assert_eq!(dashboard.pager().page(), 1);

    apply(
        &mut dashboard,
        DashboardCommand::SetGoToInput {
            input: "abc".to_string(),
        },
    );
    assert_eq!(apply(&mut dashboard, DashboardCommand::GoToPage), CommandOutcome::Ignored);

    apply(
        &mut dashboard,
        DashboardCommand::SetGoToInput {
            input: "3".to_string(),
        },
    );
    assert_eq!(apply(&mut dashboard, DashboardCommand::GoToPage), CommandOutcome::Applied);
    assert_eq!(dashboard.pager().page(), 3);
    assert_eq!(dashboard.pager().go_to_input(), "");
}

#[test]
fn empty_list_still_renders_one_page() {
    let dashboard = controller(0, &[]);
    let snapshot = dashboard.snapshot();
    assert_eq!(snapshot.page.caption(), "Displaying Page 1 of 1");
    assert!(snapshot.table.is_empty());
    assert!(!snapshot.page.has_next);
}

#[test]
fn switching_views_resets_page_and_keeps_per_view_state() {
    let mut dashboard = controller(120, &["OFS", "Skyrocket"]);
    apply(&mut dashboard, DashboardCommand::NextPage);
    apply(
        &mut dashboard,
        DashboardCommand::AddFilter {
            field: FilterField::Team,
            value: "OFS".to_string(),
        },
    );
    apply(
        &mut dashboard,
        DashboardCommand::ToggleEmployee {
            id: EmployeeId(20_001),
        },
    );

    let outcome = apply(&mut dashboard, DashboardCommand::SwitchView { view: View::Hiring });
    assert_eq!(outcome, CommandOutcome::Applied);
    assert_eq!(dashboard.pager().page(), 1);

    let snapshot = dashboard.snapshot();
    assert_eq!(snapshot.view_label, "Hiring");
    assert!(snapshot.filters.is_empty());
    assert_eq!(snapshot.selected_count, 0);
    assert_eq!(
        snapshot.filter_options,
        vec![FilterField::Team, FilterField::Status, FilterField::HiringManager]
    );

    apply(&mut dashboard, DashboardCommand::SwitchView { view: View::Employees });
    let snapshot = dashboard.snapshot();
    assert_eq!(snapshot.filters.len(), 1);
    assert_eq!(snapshot.filters[0].label, "Team - OFS");
    assert_eq!(snapshot.selected_count, 1);

    let outcome = apply(&mut dashboard, DashboardCommand::SwitchView { view: View::Employees });
    assert_eq!(outcome, CommandOutcome::Ignored);
}

#[test]
fn tag_mode_filters_do_not_narrow_the_table() {
    let mut dashboard = controller(120, &[]);
    apply(
        &mut dashboard,
        DashboardCommand::SelectFilterField {
            field: Some(FilterField::Team),
        },
    );
    apply(
        &mut dashboard,
        DashboardCommand::SetFilterValue {
            value: "  OFS ".to_string(),
        },
    );
    assert_eq!(apply(&mut dashboard, DashboardCommand::SubmitFilter), CommandOutcome::Applied);

    let snapshot = dashboard.snapshot();
    assert_eq!(snapshot.filters[0].label, "Team - OFS");
    assert_eq!(snapshot.filter_value, "");
    assert_eq!(snapshot.page.total_entries, 120);

    // duplicate descriptor
    apply(
        &mut dashboard,
        DashboardCommand::SetFilterValue {
            value: "OFS".to_string(),
        },
    );
    assert_eq!(apply(&mut dashboard, DashboardCommand::SubmitFilter), CommandOutcome::Ignored);
    assert_eq!(dashboard.snapshot().filters.len(), 1);
}

#[test]
fn blank_and_foreign_filters_are_rejected() {
    let mut dashboard = controller(3, &[]);
    let blank = apply(
        &mut dashboard,
        DashboardCommand::AddFilter {
            field: FilterField::Team,
            value: "   ".to_string(),
        },
    );
    assert_eq!(blank, CommandOutcome::Ignored);

    let foreign = apply(
        &mut dashboard,
        DashboardCommand::AddFilter {
            field: FilterField::HiringManager,
            value: "Keshav".to_string(),
        },
    );
    assert_eq!(foreign, CommandOutcome::Ignored);

    let staged = apply(
        &mut dashboard,
        DashboardCommand::SelectFilterField {
            field: Some(FilterField::Status),
        },
    );
    assert_eq!(staged, CommandOutcome::Ignored);
    assert!(dashboard.snapshot().filters.is_empty());
}

#[test]
fn predicate_mode_ors_within_a_field_and_ands_across_fields() {
    let mut dashboard = predicate_controller(120, &[]);
    for team in ["ofs", "Skyrocket"] {
        apply(
            &mut dashboard,
            DashboardCommand::AddFilter {
                field: FilterField::Team,
                value: team.to_string(),
            },
        );
    }
    assert_eq!(dashboard.snapshot().page.total_entries, 80);

    apply(&mut dashboard, DashboardCommand::NextPage);
    apply(
        &mut dashboard,
        DashboardCommand::AddFilter {
            field: FilterField::Manager,
            value: "KESHAV".to_string(),
        },
    );
    let snapshot = dashboard.snapshot();
    assert_eq!(snapshot.page.page, 1);
    assert_eq!(snapshot.page.total_entries, 40);
    let TableRows::Employees(rows) = snapshot.table else {
        panic!("expected employee rows");
    };
    assert!(rows
        .iter()
        .all(|row| row.record.manager_name == "Keshav" && row.record.team_name != "Achievers"));

    let removed = apply(
        &mut dashboard,
        DashboardCommand::RemoveFilter {
            label: "Manager - KESHAV".to_string(),
        },
    );
    assert_eq!(removed, CommandOutcome::Applied);
    assert_eq!(dashboard.snapshot().page.total_entries, 80);
}

#[test]
fn reset_restores_configured_defaults() {
    let mut dashboard = controller(120, &[]);
    apply(&mut dashboard, DashboardCommand::SetPageSize { page_size: 4 });
    apply(&mut dashboard, DashboardCommand::NextPage);
    apply(
        &mut dashboard,
        DashboardCommand::SetGoToInput {
            input: "9".to_string(),
        },
    );
    apply(
        &mut dashboard,
        DashboardCommand::SelectFilterField {
            field: Some(FilterField::Manager),
        },
    );
    apply(
        &mut dashboard,
        DashboardCommand::AddFilter {
            field: FilterField::Team,
            value: "OFS".to_string(),
        },
    );

    assert_eq!(apply(&mut dashboard, DashboardCommand::ResetFilters), CommandOutcome::Applied);

    let snapshot = dashboard.snapshot();
    assert!(snapshot.filters.is_empty());
    assert_eq!(snapshot.selected_filter_field, None);
    assert_eq!(snapshot.page.page, 1);
    assert_eq!(snapshot.page.page_size, 50);
    assert_eq!(snapshot.page.go_to_input, "");
}

#[test]
fn select_all_and_toggle_track_stable_keys() {
    let mut dashboard = controller(5, &[]);
    assert_eq!(
        apply(&mut dashboard, DashboardCommand::SelectAll { selected: true }),
        CommandOutcome::Applied
    );
    let snapshot = dashboard.snapshot();
    assert_eq!(snapshot.selected_count, 5);
    assert!(snapshot.all_selected);

    apply(
        &mut dashboard,
        DashboardCommand::ToggleEmployee {
            id: EmployeeId(20_003),
        },
    );
    let snapshot = dashboard.snapshot();
    assert_eq!(snapshot.selected_count, 4);
    assert!(!snapshot.all_selected);

    let unknown = apply(
        &mut dashboard,
        DashboardCommand::ToggleEmployee {
            id: EmployeeId(1),
        },
    );
    assert_eq!(unknown, CommandOutcome::Ignored);

    apply(&mut dashboard, DashboardCommand::SelectAll { selected: false });
    assert!(dashboard.employee_selection().is_empty());
}

#[test]
fn deleting_a_hiring_record_keeps_selection_on_the_same_records() {
    let mut dashboard = controller(0, &["A", "B", "C", "D", "E"]);
    apply(&mut dashboard, DashboardCommand::SwitchView { view: View::Hiring });

    let ids: Vec<HiringId> = dashboard.store().hiring_ids().collect();
    let (b, c, d) = (ids[1], ids[2], ids[3]);
    apply(&mut dashboard, DashboardCommand::ToggleHiring { id: b });
    apply(&mut dashboard, DashboardCommand::ToggleHiring { id: d });

    apply(
        &mut dashboard,
        DashboardCommand::RequestDelete {
            target: RecordKey::Hiring(c),
        },
    );
    assert_eq!(apply(&mut dashboard, DashboardCommand::ConfirmModal), CommandOutcome::Applied);

    let teams: Vec<&str> = dashboard
        .store()
        .hiring()
        .iter()
        .map(|record| record.team.as_str())
        .collect();
    assert_eq!(teams, vec!["A", "B", "D", "E"]);
    assert_eq!(dashboard.hiring_selection().keys().collect::<Vec<_>>(), vec![b, d]);

    let TableRows::Hiring(rows) = dashboard.snapshot().table else {
        panic!("expected hiring rows");
    };
    let selected: Vec<&str> = rows
        .iter()
        .filter(|row| row.selected)
        .map(|row| row.record.team.as_str())
        .collect();
    assert_eq!(selected, vec!["B", "D"]);
}

#[test]
fn deleting_a_selected_employee_prunes_it() {
    let mut dashboard = controller(3, &[]);
    let id = EmployeeId(20_002);
    apply(&mut dashboard, DashboardCommand::ToggleEmployee { id });
    apply(
        &mut dashboard,
        DashboardCommand::RequestDelete {
            target: RecordKey::Employee(id),
        },
    );
    apply(&mut dashboard, DashboardCommand::ConfirmModal);

    assert!(!dashboard.store().contains_employee(id));
    assert!(dashboard.employee_selection().is_empty());
}

#[test]
fn deleting_the_last_row_of_the_last_page_moves_back_a_page() {
    let mut dashboard = controller(51, &[]);
    apply(&mut dashboard, DashboardCommand::NextPage);
    assert_eq!(dashboard.pager().page(), 2);

    apply(
        &mut dashboard,
        DashboardCommand::RequestDelete {
            target: RecordKey::Employee(EmployeeId(20_051)),
        },
    );
    apply(&mut dashboard, DashboardCommand::ConfirmModal);

    let snapshot = dashboard.snapshot();
    assert_eq!(snapshot.page.page, 1);
    assert_eq!(snapshot.page.caption(), "Displaying Page 1 of 1");
    assert_eq!(snapshot.table.len(), 50);
}

#[test]
fn export_covers_the_full_list_even_when_narrowed() {
    let mut dashboard = predicate_controller(120, &[]);
    apply(
        &mut dashboard,
        DashboardCommand::AddFilter {
            field: FilterField::Team,
            value: "OFS".to_string(),
        },
    );
    assert_eq!(dashboard.snapshot().page.total_entries, 40);

    let CommandOutcome::Download(file) = apply(&mut dashboard, DashboardCommand::Export) else {
        panic!("export yields a download");
    };
    assert_eq!(file.filename, "employees.csv");
    assert_eq!(file.body.lines().count(), 121);
}

#[test]
fn export_follows_the_active_view() {
    let mut dashboard = controller(2, &["OFS"]);
    apply(&mut dashboard, DashboardCommand::SwitchView { view: View::Hiring });

    let file = dashboard.export().expect("export renders");
    assert_eq!(file.filename, "hiring_data.csv");
    assert!(file.body.starts_with("Team,REQ/FG,Sharepoint ID"));
    assert_eq!(file.body.lines().count(), 2);
}

#[test]
fn editing_an_employee_out_of_the_filter_clamps_the_page() {
    let mut dashboard =
        DashboardController::new(store_with(10, &[]), config(4, FilterMode::Predicate))
            .with_clock(fixed_now);
    apply(
        &mut dashboard,
        DashboardCommand::AddFilter {
            field: FilterField::Manager,
            value: "Keshav".to_string(),
        },
    );
    assert_eq!(dashboard.snapshot().page.caption(), "Displaying Page 1 of 2");
    apply(&mut dashboard, DashboardCommand::NextPage);
    assert_eq!(employee_ids(&dashboard.snapshot().table), vec![20_010]);

    apply(
        &mut dashboard,
        DashboardCommand::EditEmployee {
            id: EmployeeId(20_010),
        },
    );
    let Modal::EditEmployee { mut draft, .. } = dashboard.modal().clone() else {
        panic!("edit form expected");
    };
    draft.manager_name = "Kunjal".to_string();
    assert_eq!(
        apply(&mut dashboard, DashboardCommand::SaveEmployee { draft }),
        CommandOutcome::Applied
    );

    let snapshot = dashboard.snapshot();
    assert_eq!(snapshot.page.caption(), "Displaying Page 1 of 1");
    assert_eq!(snapshot.page.total_entries, 4);
    assert_eq!(snapshot.table.len(), 4);
}

#[test]
fn editing_a_requisition_out_of_the_filter_clamps_the_page() {
    let teams = ["OFS", "OFS", "OFS", "OFS", "OFS", "Skyrocket"];
    let mut dashboard =
        DashboardController::new(store_with(0, &teams), config(4, FilterMode::Predicate))
            .with_clock(fixed_now);
    apply(&mut dashboard, DashboardCommand::SwitchView { view: View::Hiring });
    apply(
        &mut dashboard,
        DashboardCommand::AddFilter {
            field: FilterField::Team,
            value: "OFS".to_string(),
        },
    );
    apply(&mut dashboard, DashboardCommand::NextPage);
    assert_eq!(dashboard.pager().page(), 2);

    let id = dashboard.store().hiring()[4].id;
    apply(&mut dashboard, DashboardCommand::EditHiring { id });
    let Modal::EditHiring { mut draft, .. } = dashboard.modal().clone() else {
        panic!("edit form expected");
    };
    draft.team = "Skyrocket".to_string();
    assert_eq!(
        apply(&mut dashboard, DashboardCommand::SaveHiring { draft }),
        CommandOutcome::Applied
    );

    let snapshot = dashboard.snapshot();
    assert_eq!(snapshot.page.page, 1);
    assert_eq!(snapshot.page.total_pages, 1);
    assert_eq!(snapshot.table.len(), 4);
}

#[test]
fn predicate_matching_folds_non_ascii_case() {
    let mut store = RecordStore::new();
    for (n, manager) in [(1, "Öztürk"), (2, "Keshav")] {
        let mut record = employee(n);
        record.manager_name = manager.to_string();
        store.insert_employee(record).expect("unique ids");
    }
    let mut dashboard =
        DashboardController::new(store, config(50, FilterMode::Predicate)).with_clock(fixed_now);
    apply(
        &mut dashboard,
        DashboardCommand::AddFilter {
            field: FilterField::Manager,
            value: "ÖZTÜRK".to_string(),
        },
    );

    assert_eq!(employee_ids(&dashboard.snapshot().table), vec![20_001]);
}
