use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::columns::DISPLAY_COLUMNS;
use crate::models::record::{Dataset, RawRecord};
use csv::Writer;
use std::path::Path;

/// Serialize the current (filtered/searched) view back to CSV using the
/// same human-readable column names as the import format.
pub fn write_csv(path: &Path, dataset: &Dataset) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(DISPLAY_COLUMNS)?;

    for raw in dataset.to_raw() {
        wtr.write_record(row_cells(&raw))?;
    }

    wtr.flush()?;
    notify_export_success("CSV", path);
    Ok(())
}

/// Cells in `DISPLAY_COLUMNS` order; missing values export as blanks.
fn row_cells(r: &RawRecord) -> Vec<String> {
    let fields = [
        &r.id,
        &r.notification_date,
        &r.status,
        &r.notification_type,
        &r.station,
        &r.machine,
        &r.equipment_list,
        &r.equipment_group,
        &r.equipment_part,
        &r.problem_type,
        &r.problem_cause,
        &r.activity,
        &r.activity_by,
        &r.vendor_name,
        &r.message,
        &r.mttr,
        &r.activity_duration,
        &r.breakdown_hour,
        &r.activity_count,
        &r.malfunction_start,
        &r.malfunction_stop,
        &r.activity_start,
        &r.activity_stop,
    ];

    fields
        .into_iter()
        .map(|cell| cell.clone().unwrap_or_default())
        .collect()
}
