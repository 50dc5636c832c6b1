use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::project_calendar;
use crate::core::session::Session;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::json::{events_to_json, write_events};
use std::path::Path;

/// Handle the `calendar` command: one all-day JSON event per filtered
/// record with a notification date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Calendar { filters, out } = cmd else {
        return Ok(());
    };
    let selection = filters.to_selection()?;

    let mut pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;

    let session = Session::open(&mut pool)?;
    let filtered = session.filtered(&selection);
    let events = project_calendar(&filtered);

    match out {
        Some(path) => write_events(Path::new(path), &events)?,
        // Bare JSON on stdout so the output stays pipeable.
        None => println!("{}", events_to_json(&events)?),
    }

    Ok(())
}
