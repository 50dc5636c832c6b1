//! Raw rows → canonical dataset.
//!
//! Parse failures are absorbed, never propagated: bad timestamps become
//! None, bad numbers become 0. The dashboard stays available even when
//! individual cells are malformed.

use crate::models::record::{Dataset, RawRecord, WorkOrderRecord};
use crate::utils::date::parse_datetime;
use chrono::NaiveDateTime;

/// Convert raw imported rows into the canonical in-memory shape.
/// Pure and deterministic; empty input yields an empty dataset.
/// Idempotent: re-normalizing the raw projection of an already-normalized
/// dataset is a no-op.
pub fn normalize(raw: Vec<RawRecord>) -> Dataset {
    let records = raw.into_iter().map(normalize_record).collect();
    Dataset::new(records)
}

fn normalize_record(r: RawRecord) -> WorkOrderRecord {
    WorkOrderRecord {
        id: coerce_int(r.id.as_deref()),
        notification_date: parse_cell(r.notification_date.as_deref()),
        malfunction_start: parse_cell(r.malfunction_start.as_deref()),
        malfunction_stop: parse_cell(r.malfunction_stop.as_deref()),
        activity_start: parse_cell(r.activity_start.as_deref()),
        activity_stop: parse_cell(r.activity_stop.as_deref()),
        status: pass_through(r.status),
        notification_type: pass_through(r.notification_type),
        station: fill_unknown(r.station),
        machine: fill_unknown(r.machine),
        equipment_list: pass_through(r.equipment_list),
        equipment_group: pass_through(r.equipment_group),
        equipment_part: fill_unknown(r.equipment_part),
        problem_type: fill_unknown(r.problem_type),
        problem_cause: pass_through(r.problem_cause),
        activity: pass_through(r.activity),
        activity_by: fill_unknown(r.activity_by),
        vendor_name: pass_through(r.vendor_name),
        message: pass_through(r.message),
        mttr: coerce_num(r.mttr.as_deref()),
        activity_duration: coerce_num(r.activity_duration.as_deref()),
        breakdown_hour: coerce_num(r.breakdown_hour.as_deref()),
        activity_count: coerce_num(r.activity_count.as_deref()),
    }
}

fn parse_cell(cell: Option<&str>) -> Option<NaiveDateTime> {
    cell.and_then(parse_datetime)
}

/// Blank cells are treated as missing, other text passes through as-is.
fn pass_through(cell: Option<String>) -> Option<String> {
    cell.filter(|s| !s.trim().is_empty())
}

fn fill_unknown(cell: Option<String>) -> String {
    match cell {
        Some(s) if !s.trim().is_empty() => s,
        _ => "Unknown".to_string(),
    }
}

fn coerce_num(cell: Option<&str>) -> f64 {
    cell.and_then(|s| s.trim().parse::<f64>().ok()).unwrap_or(0.0)
}

/// The id is a display/label key only; duplicates are tolerated and a
/// missing or unparseable id degrades to 0.
fn coerce_int(cell: Option<&str>) -> i64 {
    cell.and_then(|s| s.trim().parse::<i64>().ok()).unwrap_or(0)
}
