use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filters::search;
use crate::core::session::Session;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::csv::write_csv;
use crate::export::default_export_name;
use crate::models::record::Dataset;
use crate::ui::messages::{info, warning};
use crate::utils::table::{Column, Table};
use std::path::PathBuf;

/// Handle the `records` command: filterable/searchable record table with
/// optional CSV export of the current view.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Records {
        filters,
        search: term,
        export,
    } = cmd
    else {
        return Ok(());
    };
    let selection = filters.to_selection()?;

    let mut pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;

    let session = Session::open(&mut pool)?;
    let filtered = session.filtered(&selection);

    let view = match term {
        Some(term) => {
            let hits = search(&filtered, term);
            if hits.is_empty() {
                warning(format!("No records found matching '{}'", term));
            } else {
                info(format!(
                    "Found {} records matching '{}'",
                    hits.len(),
                    term
                ));
            }
            hits
        }
        None => filtered,
    };

    if view.is_empty() {
        warning("No records to display.");
    } else {
        print_record_table(&view);
    }

    if let Some(name) = export {
        let path = if name.is_empty() {
            PathBuf::from(&cfg.export_dir).join(default_export_name())
        } else {
            PathBuf::from(name)
        };
        write_csv(&path, &view)?;
    }

    Ok(())
}

fn print_record_table(view: &Dataset) {
    let mut table = Table::new(vec![
        Column::new("ID", 8),
        Column::new("Status", 12),
        Column::new("Type", 10),
        Column::new("Notification", 16),
        Column::new("Station", 14),
        Column::new("Machine", 14),
        Column::new("MTTR", 7),
        Column::new("Duration", 8),
        Column::new("Activity by", 14),
    ]);

    for r in view.iter() {
        table.add_row(vec![
            r.id.to_string(),
            r.status.clone().unwrap_or_default(),
            r.notification_type.clone().unwrap_or_default(),
            r.notification_date
                .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
            r.station.clone(),
            r.machine.clone(),
            format!("{:.2}", r.mttr),
            format!("{:.2}", r.activity_duration),
            r.activity_by.clone(),
        ]);
    }

    println!("{}", table.render());
}
