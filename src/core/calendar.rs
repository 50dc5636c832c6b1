//! Projection of filtered records onto calendar events.
//!
//! The output follows the FullCalendar event shape (camelCase keys,
//! all-day events with equal start/end) so it can be fed straight to a
//! calendar widget as JSON.

use crate::models::record::{Dataset, WorkOrderRecord};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Fixed status → color lookup. Unknown statuses fall back to grey.
const STATUS_COLORS: [(&str, &str); 5] = [
    ("Completed", "#2ca02c"),
    ("Open", "#1f77b4"),
    ("In Progress", "#ff7f0e"),
    ("On Hold", "#bcbd22"),
    ("Cancelled", "#d62728"),
];

const FALLBACK_COLOR: &str = "#7f7f7f";

pub fn status_color(status: Option<&str>) -> &'static str {
    let Some(status) = status else {
        return FALLBACK_COLOR;
    };
    STATUS_COLORS
        .iter()
        .find(|(s, _)| *s == status)
        .map(|(_, c)| *c)
        .unwrap_or(FALLBACK_COLOR)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub background_color: &'static str,
    pub border_color: &'static str,
    pub extended_props: EventDetails,
}

/// Descriptive payload attached to every event for on-click detail
/// display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    pub status: Option<String>,
    pub notification_type: Option<String>,
    pub station: String,
    pub machine: String,
    pub equipment_part: String,
    pub problem_type: String,
    pub description: Option<String>,
    pub activity_by: String,
    pub activity_duration: f64,
    pub activity_count: f64,
    pub breakdown_hour: f64,
    pub mttr: f64,
    pub malfunction_start: Option<NaiveDateTime>,
    pub malfunction_stop: Option<NaiveDateTime>,
}

/// One all-day event per record with a notification date; records
/// without one are silently skipped. Output order follows input order.
pub fn project_calendar(dataset: &Dataset) -> Vec<CalendarEvent> {
    dataset
        .iter()
        .enumerate()
        .filter_map(|(idx, record)| {
            record.notification_day().map(|day| to_event(idx, day, record))
        })
        .collect()
}

fn to_event(idx: usize, day: NaiveDate, record: &WorkOrderRecord) -> CalendarEvent {
    let color = status_color(record.status.as_deref());
    let ntype = record.notification_type.as_deref().unwrap_or("N/A");

    CalendarEvent {
        id: format!("event_{}", idx),
        title: format!("{} - {}", ntype, record.station),
        start: day,
        end: day,
        background_color: color,
        border_color: color,
        extended_props: EventDetails {
            status: record.status.clone(),
            notification_type: record.notification_type.clone(),
            station: record.station.clone(),
            machine: record.machine.clone(),
            equipment_part: record.equipment_part.clone(),
            problem_type: record.problem_type.clone(),
            description: record.message.clone(),
            activity_by: record.activity_by.clone(),
            activity_duration: record.activity_duration,
            activity_count: record.activity_count,
            breakdown_hour: record.breakdown_hour,
            mttr: record.mttr,
            malfunction_start: record.malfunction_start,
            malfunction_stop: record.malfunction_stop,
        },
    }
}
