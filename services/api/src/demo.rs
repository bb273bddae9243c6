use clap::Args;
use staffing_dashboard::config::AppConfig;
use staffing_dashboard::dashboard::{
    CommandOutcome, DashboardCommand, DashboardController, DashboardSnapshot, FilterField,
    FilterMode, Modal, RecordKey, TableRows, View,
};
use staffing_dashboard::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Rows per page for the walkthrough (defaults to the configured page size).
    #[arg(long, value_parser = crate::infra::parse_page_size)]
    pub(crate) page_size: Option<usize>,
    /// View to walk through: employees or hiring.
    #[arg(long, value_parser = crate::infra::parse_view)]
    pub(crate) view: Option<View>,
    /// Let filter descriptors narrow the table instead of only being listed.
    #[arg(long)]
    pub(crate) predicate_filters: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    /// View to export: employees or hiring.
    #[arg(long, value_parser = crate::infra::parse_view)]
    pub(crate) view: View,
    /// Destination file (defaults to the download filename for the view).
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let ExportArgs { view, output } = args;

    let config = AppConfig::load()?;
    let mut dashboard = DashboardController::seeded(config.dashboard);
    step(&mut dashboard, DashboardCommand::SwitchView { view })?;

    let file = dashboard.export()?;
    let path = output.unwrap_or_else(|| PathBuf::from(file.filename));
    std::fs::write(&path, file.body.as_bytes())?;

    let rows = match view {
        View::Employees => dashboard.store().employees().len(),
        View::Hiring => dashboard.store().hiring().len(),
    };
    println!(
        "Exported {} {} rows to {}",
        rows,
        view.label().to_lowercase(),
        path.display()
    );
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        page_size,
        view,
        predicate_filters,
    } = args;

    let mut config = AppConfig::load()?.dashboard;
    if let Some(page_size) = page_size {
        config.page_size = page_size;
    }
    if predicate_filters {
        config.filter_mode = FilterMode::Predicate;
    }
    let view = view.unwrap_or(View::Employees);

    let mut dashboard = DashboardController::seeded(config);
    step(&mut dashboard, DashboardCommand::SwitchView { view })?;

    println!("Staffing dashboard demo");
    println!("=======================");
    render_snapshot(&dashboard.snapshot());

    println!("\n> Next page");
    report(step(&mut dashboard, DashboardCommand::NextPage)?);
    render_snapshot(&dashboard.snapshot());

    let first_team = match view {
        View::Employees => dashboard.store().employees().first().map(|e| e.team_name.clone()),
        View::Hiring => dashboard.store().hiring().first().map(|r| r.team.clone()),
    };
    if let Some(team) = first_team {
        println!("\n> Filter Team = {team}");
        report(step(
            &mut dashboard,
            DashboardCommand::AddFilter {
                field: FilterField::Team,
                value: team,
            },
        )?);
        render_snapshot(&dashboard.snapshot());
    }

    println!("\n> Select all, then uncheck the first row");
    step(&mut dashboard, DashboardCommand::SelectAll { selected: true })?;
    let first_key = first_row_key(&dashboard.snapshot());
    match first_key {
        Some(RecordKey::Employee(id)) => {
            step(&mut dashboard, DashboardCommand::ToggleEmployee { id })?;
        }
        Some(RecordKey::Hiring(id)) => {
            step(&mut dashboard, DashboardCommand::ToggleHiring { id })?;
        }
        None => {}
    }
    println!("  Selected rows: {}", dashboard.snapshot().selected_count);

    if let Some(key) = first_key {
        println!("\n> Edit the first row");
        edit_first_row(&mut dashboard, key)?;

        println!("\n> Delete the first row");
        report(step(&mut dashboard, DashboardCommand::RequestDelete { target: key })?);
        if let Modal::Confirm { title, message, .. } = dashboard.modal() {
            println!("  {title}: {message}");
        }
        report(step(&mut dashboard, DashboardCommand::ConfirmModal)?);
        render_snapshot(&dashboard.snapshot());
    }

    println!("\n> Export");
    if let CommandOutcome::Download(file) = step(&mut dashboard, DashboardCommand::Export)? {
        println!(
            "  {} ({}, {} bytes)",
            file.filename,
            file.content_type,
            file.body.len()
        );
        for line in file.body.lines().take(3) {
            println!("  {line}");
        }
    }

    Ok(())
}

fn step(
    dashboard: &mut DashboardController,
    command: DashboardCommand,
) -> Result<CommandOutcome, AppError> {
    Ok(dashboard.apply(command)?)
}

fn report(outcome: CommandOutcome) {
    match outcome {
        CommandOutcome::Applied => println!("  applied"),
        CommandOutcome::Ignored => println!("  ignored (nothing to change)"),
        CommandOutcome::Invalid { errors } => {
            for (field, message) in errors.iter() {
                println!("  {field}: {message}");
            }
        }
        CommandOutcome::InvalidBatch { message, .. } => println!("  {message}"),
        CommandOutcome::Download(file) => println!("  download {}", file.filename),
    }
}

fn first_row_key(snapshot: &DashboardSnapshot) -> Option<RecordKey> {
    match &snapshot.table {
        TableRows::Employees(rows) => rows
            .first()
            .map(|row| RecordKey::Employee(row.record.emp_id)),
        TableRows::Hiring(rows) => rows.first().map(|row| RecordKey::Hiring(row.record.id)),
    }
}

fn edit_first_row(dashboard: &mut DashboardController, key: RecordKey) -> Result<(), AppError> {
    match key {
        RecordKey::Employee(id) => {
            step(dashboard, DashboardCommand::EditEmployee { id })?;
            if let Modal::EditEmployee { mut draft, .. } = dashboard.modal().clone() {
                draft.base_location = "Remote".to_string();
                report(step(dashboard, DashboardCommand::SaveEmployee { draft })?);
            }
            if let Some(employee) = dashboard.store().employee(id) {
                println!(
                    "  {} now based in {} (modified by {} at {})",
                    employee.resource_name,
                    employee.base_location,
                    employee.modified_by,
                    employee.modified_at.format("%Y-%m-%d %H:%M")
                );
            }
        }
        RecordKey::Hiring(id) => {
            step(dashboard, DashboardCommand::EditHiring { id })?;
            if let Modal::EditHiring { mut draft, .. } = dashboard.modal().clone() {
                draft.remarks = "Reviewed in demo".to_string();
                report(step(dashboard, DashboardCommand::SaveHiring { draft })?);
            }
            if let Some(record) = dashboard.store().hiring_record(id) {
                println!("  {} {}: {}", record.id, record.team, record.remarks);
            }
        }
    }
    Ok(())
}

fn render_snapshot(snapshot: &DashboardSnapshot) {
    println!(
        "\n{} | {} ({} entries, {} per page)",
        snapshot.view_label,
        snapshot.page.caption(),
        snapshot.page.total_entries,
        snapshot.page.page_size
    );
    if !snapshot.filters.is_empty() {
        let labels: Vec<&str> = snapshot
            .filters
            .iter()
            .map(|descriptor| descriptor.label.as_str())
            .collect();
        println!("Filters: {}", labels.join(", "));
    }

    match &snapshot.table {
        TableRows::Employees(rows) => {
            for row in rows {
                let employee = &row.record;
                println!(
                    "{:>4}. [{}] {:<6} {:<20} {:<26} {:<16} {}",
                    row.position,
                    if row.selected { "x" } else { " " },
                    employee.emp_id.0,
                    employee.resource_name,
                    employee.team_name,
                    employee.manager_name,
                    employee.status.label()
                );
            }
        }
        TableRows::Hiring(rows) => {
            for row in rows {
                let record = &row.record;
                println!(
                    "{:>4}. [{}] {:<26} {:<24} {:<4} {:<14} {}",
                    row.position,
                    if row.selected { "x" } else { " " },
                    record.team,
                    record.skill_set,
                    record.el_level.label(),
                    record.status.label(),
                    record.hiring_manager
                );
            }
        }
    }
    if snapshot.table.is_empty() {
        println!("  (no rows on this page)");
    }
}
