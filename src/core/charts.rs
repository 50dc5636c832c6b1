//! Chart-ready grouped aggregates over a filtered dataset.
//!
//! Each aggregate is a pure grouping operation: counts keyed by status,
//! by (type × status), by ISO week, or by station/machine pair. Records
//! with a missing grouping value are skipped, mirroring how the charts
//! drop null groups. Ordering is deterministic, ties resolved by first
//! appearance in the input.

use crate::models::record::Dataset;
use crate::utils::date::week_start;
use chrono::NaiveDate;

/// Number of entries returned by [`top_entities`].
pub const TOP_ENTITIES_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct StatusCount {
    pub status: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusTypeCount {
    pub notification_type: String,
    pub status: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyCount {
    /// Monday of the ISO week containing the notification date.
    pub week: NaiveDate,
    pub notification_type: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntityCount {
    pub entity: String,
    pub count: u64,
}

/// Count of records per distinct status, descending.
pub fn status_distribution(dataset: &Dataset) -> Vec<StatusCount> {
    let mut counts: Vec<(String, u64)> = Vec::new();
    for record in dataset.iter() {
        if let Some(status) = &record.status {
            bump(&mut counts, status);
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .map(|(status, count)| StatusCount { status, count })
        .collect()
}

/// Cross-tabulation of notification type × status. Only observed
/// combinations are emitted; missing ones render as zero downstream.
pub fn status_by_type(dataset: &Dataset) -> Vec<StatusTypeCount> {
    let mut counts: Vec<((String, String), u64)> = Vec::new();
    for record in dataset.iter() {
        let (Some(ntype), Some(status)) = (&record.notification_type, &record.status) else {
            continue;
        };
        bump_key(&mut counts, (ntype.clone(), status.clone()));
    }

    counts
        .into_iter()
        .map(|((notification_type, status), count)| StatusTypeCount {
            notification_type,
            status,
            count,
        })
        .collect()
}

/// Work-order volume per (ISO week, notification type). Records without
/// a notification date are excluded. Sorted by week, then type.
pub fn weekly_volume(dataset: &Dataset) -> Vec<WeeklyCount> {
    let mut counts: Vec<((NaiveDate, String), u64)> = Vec::new();
    for record in dataset.iter() {
        let (Some(day), Some(ntype)) = (record.notification_day(), &record.notification_type)
        else {
            continue;
        };
        bump_key(&mut counts, (week_start(day), ntype.clone()));
    }
    counts.sort_by(|a, b| a.0.cmp(&b.0));

    counts
        .into_iter()
        .map(|((week, notification_type), count)| WeeklyCount {
            week,
            notification_type,
            count,
        })
        .collect()
}

/// Top 10 station/machine pairs by work-order count, descending, ties
/// broken by first appearance.
pub fn top_entities(dataset: &Dataset) -> Vec<EntityCount> {
    let mut counts: Vec<(String, u64)> = Vec::new();
    for record in dataset.iter() {
        bump(&mut counts, &record.station_machine_key());
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(TOP_ENTITIES_LIMIT);

    counts
        .into_iter()
        .map(|(entity, count)| EntityCount { entity, count })
        .collect()
}

// Linear-scan counters keep first-appearance order; datasets are small
// enough that a map buys nothing here.
fn bump(counts: &mut Vec<(String, u64)>, key: &str) {
    if let Some(entry) = counts.iter_mut().find(|(k, _)| k == key) {
        entry.1 += 1;
    } else {
        counts.push((key.to_string(), 1));
    }
}

fn bump_key<K: PartialEq>(counts: &mut Vec<(K, u64)>, key: K) {
    if let Some(entry) = counts.iter_mut().find(|(k, _)| *k == key) {
        entry.1 += 1;
    } else {
        counts.push((key, 1));
    }
}
