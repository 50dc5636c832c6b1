//! CSV import: a straight passthrough with column renaming.
//!
//! Import is all-or-nothing. The whole file is parsed before anything is
//! written; a malformed file fails with a readable cause and the prior
//! generation stays untouched. A known column missing from the header is
//! not an error: its cells are simply absent and the normalizer coerces
//! them downstream.

use crate::db::pool::DbPool;
use crate::db::{log, queries};
use crate::errors::{AppError, AppResult};
use crate::models::columns::DISPLAY_COLUMNS;
use crate::models::record::RawRecord;
use crate::ui::messages::warning;
use csv::StringRecord;
use std::path::Path;

/// Replace the entire store with the contents of a CSV export.
/// Returns the number of imported rows.
pub fn import_csv(pool: &mut DbPool, path: &Path) -> AppResult<usize> {
    let rows = read_csv(path)?;
    let count = queries::replace_all(pool, &rows)?;

    // The new generation is already committed at this point; a log-write
    // failure must not surface as an import failure.
    if let Err(e) = log::oplog(
        &pool.conn,
        "import",
        &path.display().to_string(),
        &format!("replaced store with {} records", count),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    Ok(count)
}

/// Parse a CSV export into raw rows, matching headers against the known
/// display column names.
pub fn read_csv(path: &Path) -> AppResult<Vec<RawRecord>> {
    let mut rdr = csv::Reader::from_path(path)
        .map_err(|e| AppError::Import(format!("cannot read {}: {}", path.display(), e)))?;

    let headers = rdr
        .headers()
        .map_err(|e| AppError::Import(format!("invalid CSV header: {}", e)))?
        .clone();

    let index = header_index(&headers);
    if index.iter().all(Option::is_none) {
        return Err(AppError::Import(format!(
            "{} has no recognized work-order columns",
            path.display()
        )));
    }

    let mut rows = Vec::new();
    for (line, result) in rdr.records().enumerate() {
        let record =
            result.map_err(|e| AppError::Import(format!("row {}: {}", line + 2, e)))?;
        rows.push(raw_from_csv(&record, &index));
    }

    Ok(rows)
}

/// Position of every known display column in the file header, None when
/// the file does not carry that column.
fn header_index(headers: &StringRecord) -> Vec<Option<usize>> {
    DISPLAY_COLUMNS
        .iter()
        .map(|col| headers.iter().position(|h| h.trim() == *col))
        .collect()
}

fn raw_from_csv(record: &StringRecord, index: &[Option<usize>]) -> RawRecord {
    // Slots follow the DISPLAY_COLUMNS order.
    let cell = |slot: usize| -> Option<String> {
        index[slot]
            .and_then(|i| record.get(i))
            .map(str::to_string)
            .filter(|s| !s.trim().is_empty())
    };

    RawRecord {
        id: cell(0),
        notification_date: cell(1),
        status: cell(2),
        notification_type: cell(3),
        station: cell(4),
        machine: cell(5),
        equipment_list: cell(6),
        equipment_group: cell(7),
        equipment_part: cell(8),
        problem_type: cell(9),
        problem_cause: cell(10),
        activity: cell(11),
        activity_by: cell(12),
        vendor_name: cell(13),
        message: cell(14),
        mttr: cell(15),
        activity_duration: cell(16),
        breakdown_hour: cell(17),
        activity_count: cell(18),
        malfunction_start: cell(19),
        malfunction_stop: cell(20),
        activity_start: cell(21),
        activity_stop: cell(22),
    }
}
