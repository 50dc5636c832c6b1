//! Read/write contract of the record store: replace-all bulk load, full
//! read-back and count. The store holds at most one data generation.

use crate::db::initialize::TABLE_WORK_ORDERS;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::columns;
use crate::models::record::RawRecord;
use rusqlite::types::Value;
use rusqlite::{Row, params};

/// Atomically replace the entire store with a new generation of rows.
/// Runs in one transaction: a failure leaves the prior data untouched.
pub fn replace_all(pool: &mut DbPool, rows: &[RawRecord]) -> AppResult<usize> {
    let tx = pool.conn.transaction()?;

    tx.execute(&format!("DELETE FROM {}", TABLE_WORK_ORDERS), [])?;

    {
        let cols = columns::db_columns().join(", ");
        let placeholders = (1..=columns::DISPLAY_COLUMNS.len())
            .map(|i| format!("?{}", i))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            TABLE_WORK_ORDERS, cols, placeholders
        );

        let mut stmt = tx.prepare(&sql)?;
        for r in rows {
            stmt.execute(params![
                r.id,
                r.notification_date,
                r.status,
                r.notification_type,
                r.station,
                r.machine,
                r.equipment_list,
                r.equipment_group,
                r.equipment_part,
                r.problem_type,
                r.problem_cause,
                r.activity,
                r.activity_by,
                r.vendor_name,
                r.message,
                r.mttr,
                r.activity_duration,
                r.breakdown_hour,
                r.activity_count,
                r.malfunction_start,
                r.malfunction_stop,
                r.activity_start,
                r.activity_stop,
            ])?;
        }
    }

    tx.commit()?;
    Ok(rows.len())
}

/// Full read-back in insertion order (rowid order).
pub fn load_all(pool: &mut DbPool) -> AppResult<Vec<RawRecord>> {
    let sql = format!(
        "SELECT {} FROM {} ORDER BY rowid ASC",
        columns::db_columns().join(", "),
        TABLE_WORK_ORDERS
    );
    let mut stmt = pool.conn.prepare(&sql)?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn record_count(pool: &mut DbPool) -> AppResult<i64> {
    let count = pool.conn.query_row(
        &format!("SELECT COUNT(*) FROM {}", TABLE_WORK_ORDERS),
        [],
        |row| row.get(0),
    )?;
    Ok(count)
}

/// Column order matches `columns::DISPLAY_COLUMNS`.
pub fn map_row(row: &Row) -> rusqlite::Result<RawRecord> {
    Ok(RawRecord {
        id: cell(row, 0)?,
        notification_date: cell(row, 1)?,
        status: cell(row, 2)?,
        notification_type: cell(row, 3)?,
        station: cell(row, 4)?,
        machine: cell(row, 5)?,
        equipment_list: cell(row, 6)?,
        equipment_group: cell(row, 7)?,
        equipment_part: cell(row, 8)?,
        problem_type: cell(row, 9)?,
        problem_cause: cell(row, 10)?,
        activity: cell(row, 11)?,
        activity_by: cell(row, 12)?,
        vendor_name: cell(row, 13)?,
        message: cell(row, 14)?,
        mttr: cell(row, 15)?,
        activity_duration: cell(row, 16)?,
        breakdown_hour: cell(row, 17)?,
        activity_count: cell(row, 18)?,
        malfunction_start: cell(row, 19)?,
        malfunction_stop: cell(row, 20)?,
        activity_start: cell(row, 21)?,
        activity_stop: cell(row, 22)?,
    })
}

/// SQLite type affinity may have stored numeric-looking text as INTEGER
/// or REAL; everything is read back as raw text for the normalizer.
fn cell(row: &Row, idx: usize) -> rusqlite::Result<Option<String>> {
    Ok(match row.get::<_, Value>(idx)? {
        Value::Null => None,
        Value::Integer(i) => Some(i.to_string()),
        Value::Real(f) => Some(f.to_string()),
        Value::Text(s) => Some(s),
        Value::Blob(_) => None,
    })
}
