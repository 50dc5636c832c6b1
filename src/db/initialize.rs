//! Schema creation for the work-order store.
//!
//! One flat table, one row per work order, columns 1:1 with the record
//! fields. No secondary indexes: a full-table scan is fine at the target
//! volumes (thousands to low tens of thousands of rows).

use crate::errors::AppResult;
use crate::models::columns;
use rusqlite::Connection;

pub const TABLE_WORK_ORDERS: &str = "work_orders";

/// Initialize the database: the work-order table plus the internal
/// operation log.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    let cols: Vec<String> = columns::DISPLAY_COLUMNS
        .iter()
        .map(|display| {
            format!(
                "    {:<24} {}",
                columns::db_ident(display),
                column_type(display)
            )
        })
        .collect();

    conn.execute_batch(&format!(
        "CREATE TABLE IF NOT EXISTS {} (\n{}\n);",
        TABLE_WORK_ORDERS,
        cols.join(",\n")
    ))?;

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;

    Ok(())
}

fn column_type(display: &str) -> &'static str {
    match display {
        columns::ID => "INTEGER",
        columns::MTTR
        | columns::ACTIVITY_DURATION
        | columns::BREAKDOWN_HOUR
        | columns::ACTIVITY_COUNT => "REAL",
        _ => "TEXT",
    }
}
