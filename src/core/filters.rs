//! Filter application and free-text search over a dataset.

use crate::models::filter::FilterSelection;
use crate::models::record::{Dataset, WorkOrderRecord};

/// Apply a filter selection to a dataset.
///
/// A record passes when its notification date falls inside the inclusive
/// range (if one is set) and every categorical dimension accepts it.
/// Records without a notification date are dropped whenever a range is
/// set, independent of the other dimensions. Order-preserving.
pub fn apply_filters(dataset: &Dataset, selection: &FilterSelection) -> Dataset {
    let records = dataset
        .iter()
        .filter(|r| record_passes(r, selection))
        .cloned()
        .collect();
    Dataset::new(records)
}

fn record_passes(record: &WorkOrderRecord, selection: &FilterSelection) -> bool {
    if let Some((start, end)) = selection.date_range {
        match record.notification_day() {
            Some(day) => {
                if day < start || day > end {
                    return false;
                }
            }
            None => return false,
        }
    }

    selection.status.matches(record.status.as_deref())
        && selection.station.matches(Some(&record.station))
        && selection
            .notification_type
            .matches(record.notification_type.as_deref())
        && selection.staff.matches(Some(&record.activity_by))
}

/// Case-insensitive, non-regex substring search across the fields shown
/// in the record table. An empty term returns the dataset unchanged.
pub fn search(dataset: &Dataset, term: &str) -> Dataset {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return dataset.clone();
    }

    let records = dataset
        .iter()
        .filter(|r| record_matches_term(r, &term))
        .cloned()
        .collect();
    Dataset::new(records)
}

fn record_matches_term(record: &WorkOrderRecord, term: &str) -> bool {
    let direct = [
        record.station.as_str(),
        record.machine.as_str(),
        record.equipment_part.as_str(),
        record.problem_type.as_str(),
        record.activity_by.as_str(),
    ];
    let optional = [
        record.status.as_deref(),
        record.notification_type.as_deref(),
        record.equipment_list.as_deref(),
        record.equipment_group.as_deref(),
        record.problem_cause.as_deref(),
        record.activity.as_deref(),
        record.vendor_name.as_deref(),
        record.message.as_deref(),
    ];

    if record.id.to_string().contains(term) {
        return true;
    }

    direct
        .iter()
        .any(|v| v.to_lowercase().contains(term))
        || optional
            .iter()
            .flatten()
            .any(|v| v.to_lowercase().contains(term))
}
