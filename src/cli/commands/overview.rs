use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::core::{charts, kpi};
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::filter::FilterSelection;
use crate::models::kpi::{DeltaSet, KpiSet};
use crate::models::record::Dataset;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{RESET, color_for_delta};
use crate::utils::formatting::{fmt_delta_pct, fmt_hours, fmt_pct, pad_right};
use crate::utils::table::{Column, Table};

/// Handle the `overview` command: KPI cards with deltas against the
/// previous 30-day window, plus the chart aggregates as text tables.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Overview { filters, absolute } = cmd else {
        return Ok(());
    };
    let selection = filters.to_selection()?;

    let mut pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;

    if queries::record_count(&mut pool)? == 0 {
        warning("The store is empty. Import a CSV first: wodash import --file <csv>");
        return Ok(());
    }

    let session = Session::open(&mut pool)?;
    let filtered = session.filtered(&selection);
    if filtered.is_empty() {
        warning("No work orders match the current filters.");
        return Ok(());
    }

    let current = kpi::compute_kpis(&filtered);
    let previous = previous_kpis(&session, &filtered, &selection);
    let delta = kpi::compute_delta(&current, previous.as_ref(), !absolute);

    print_metric_cards(&current, &delta, *absolute);
    print_status_distribution(&filtered);
    print_status_by_type(&filtered);
    print_weekly_volume(&filtered);
    print_top_entities(&filtered);

    Ok(())
}

/// KPIs of the comparison period. Without an explicit date range the
/// current view's own date span anchors the 30-day shift; a view with no
/// valid dates has no comparison period at all.
fn previous_kpis(
    session: &Session,
    filtered: &Dataset,
    selection: &FilterSelection,
) -> Option<KpiSet> {
    let previous = if selection.date_range.is_some() {
        kpi::previous_window(session.dataset(), selection)
    } else {
        let min = filtered.min_notification_date()?;
        let max = filtered.max_notification_date()?;
        kpi::previous_window(
            session.dataset(),
            &selection.with_date_range(min.date(), max.date()),
        )
    };

    if previous.is_empty() {
        None
    } else {
        Some(kpi::compute_kpis(&previous))
    }
}

fn print_metric_cards(current: &KpiSet, delta: &DeltaSet, absolute: bool) {
    println!();
    header("Overview");

    metric_line(
        "Total Work Orders",
        &current.total_orders.to_string(),
        delta.total_orders,
        absolute,
    );
    metric_line(
        "Completion Rate",
        &fmt_pct(current.completion_rate),
        delta.completion_rate,
        absolute,
    );
    metric_line(
        "Avg MTTR (hrs)",
        &fmt_hours(current.avg_mttr),
        delta.avg_mttr,
        absolute,
    );
    metric_line(
        "Avg Duration (hrs)",
        &fmt_hours(current.avg_duration),
        delta.avg_duration,
        absolute,
    );
    println!();
}

fn metric_line(label: &str, value: &str, delta: f64, absolute: bool) {
    let rendered = if absolute {
        format!("{:+.1}", delta)
    } else {
        fmt_delta_pct(delta)
    };

    println!(
        "  {} {}  {}{}{}",
        pad_right(label, 20),
        pad_right(value, 8),
        color_for_delta(delta),
        rendered,
        RESET
    );
}

fn print_status_distribution(filtered: &Dataset) {
    header("Work Order Status Distribution");

    let mut table = Table::new(vec![Column::new("Status", 16), Column::new("Count", 6)]);
    for row in charts::status_distribution(filtered) {
        table.add_row(vec![row.status, row.count.to_string()]);
    }
    println!("{}", table.render());
}

fn print_status_by_type(filtered: &Dataset) {
    header("Work Order Status by Type");

    let mut table = Table::new(vec![
        Column::new("Type", 16),
        Column::new("Status", 16),
        Column::new("Count", 6),
    ]);
    for row in charts::status_by_type(filtered) {
        table.add_row(vec![
            row.notification_type,
            row.status,
            row.count.to_string(),
        ]);
    }
    println!("{}", table.render());
}

fn print_weekly_volume(filtered: &Dataset) {
    header("Work Order Volume Trend (weekly)");

    let mut table = Table::new(vec![
        Column::new("Week", 10),
        Column::new("Type", 16),
        Column::new("Count", 6),
    ]);
    for row in charts::weekly_volume(filtered) {
        table.add_row(vec![
            row.week.format("%Y-%m-%d").to_string(),
            row.notification_type,
            row.count.to_string(),
        ]);
    }
    println!("{}", table.render());
}

fn print_top_entities(filtered: &Dataset) {
    header("Top 10 Stations/Machines");

    let mut table = Table::new(vec![
        Column::new("Station - Machine", 32),
        Column::new("Count", 6),
    ]);
    for row in charts::top_entities(filtered) {
        table.add_row(vec![row.entity, row.count.to_string()]);
    }
    println!("{}", table.render());
}
