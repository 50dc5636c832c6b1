use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// One imported row, exactly as it came from the CSV or the store.
/// Every cell is optional text; typing happens in the normalizer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub id: Option<String>,
    pub notification_date: Option<String>,
    pub malfunction_start: Option<String>,
    pub malfunction_stop: Option<String>,
    pub activity_start: Option<String>,
    pub activity_stop: Option<String>,
    pub status: Option<String>,
    pub notification_type: Option<String>,
    pub station: Option<String>,
    pub machine: Option<String>,
    pub equipment_list: Option<String>,
    pub equipment_group: Option<String>,
    pub equipment_part: Option<String>,
    pub problem_type: Option<String>,
    pub problem_cause: Option<String>,
    pub activity: Option<String>,
    pub activity_by: Option<String>,
    pub vendor_name: Option<String>,
    pub message: Option<String>,
    pub mttr: Option<String>,
    pub activity_duration: Option<String>,
    pub breakdown_hour: Option<String>,
    pub activity_count: Option<String>,
}

/// One maintenance event in canonical typed form.
///
/// Field conventions:
/// - dates are `None` when absent or unparseable, never a sentinel date
/// - `station`, `machine`, `equipment_part`, `problem_type`, `activity_by`
///   are filled with "Unknown" when missing
/// - the remaining text fields keep their raw missingness
/// - numerics default to 0 when missing or non-numeric
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkOrderRecord {
    pub id: i64,
    pub notification_date: Option<NaiveDateTime>,
    pub malfunction_start: Option<NaiveDateTime>,
    pub malfunction_stop: Option<NaiveDateTime>,
    pub activity_start: Option<NaiveDateTime>,
    pub activity_stop: Option<NaiveDateTime>,
    pub status: Option<String>,
    pub notification_type: Option<String>,
    pub station: String,
    pub machine: String,
    pub equipment_list: Option<String>,
    pub equipment_group: Option<String>,
    pub equipment_part: String,
    pub problem_type: String,
    pub problem_cause: Option<String>,
    pub activity: Option<String>,
    pub activity_by: String,
    pub vendor_name: Option<String>,
    pub message: Option<String>,
    pub mttr: f64,
    pub activity_duration: f64,
    pub breakdown_hour: f64,
    pub activity_count: f64,
}

impl WorkOrderRecord {
    /// Day portion of the notification timestamp, the anchor for all
    /// time-windowed aggregation and calendar placement.
    pub fn notification_day(&self) -> Option<NaiveDate> {
        self.notification_date.map(|dt| dt.date())
    }

    /// Grouping key for the top stations/machines chart.
    /// Blank cells degrade to the same placeholders the source data uses.
    pub fn station_machine_key(&self) -> String {
        let station = if self.station.is_empty() {
            "Unknown"
        } else {
            &self.station
        };
        let machine = if self.machine.is_empty() {
            "No Machine"
        } else {
            &self.machine
        };
        format!("{} - {}", station, machine)
    }

    /// Render the record back to raw cells (store writes, idempotence).
    pub fn to_raw(&self) -> RawRecord {
        RawRecord {
            id: Some(self.id.to_string()),
            notification_date: self.notification_date.map(fmt_dt),
            malfunction_start: self.malfunction_start.map(fmt_dt),
            malfunction_stop: self.malfunction_stop.map(fmt_dt),
            activity_start: self.activity_start.map(fmt_dt),
            activity_stop: self.activity_stop.map(fmt_dt),
            status: self.status.clone(),
            notification_type: self.notification_type.clone(),
            station: Some(self.station.clone()),
            machine: Some(self.machine.clone()),
            equipment_list: self.equipment_list.clone(),
            equipment_group: self.equipment_group.clone(),
            equipment_part: Some(self.equipment_part.clone()),
            problem_type: Some(self.problem_type.clone()),
            problem_cause: self.problem_cause.clone(),
            activity: self.activity.clone(),
            activity_by: Some(self.activity_by.clone()),
            vendor_name: self.vendor_name.clone(),
            message: self.message.clone(),
            mttr: Some(self.mttr.to_string()),
            activity_duration: Some(self.activity_duration.to_string()),
            breakdown_hour: Some(self.breakdown_hour.to_string()),
            activity_count: Some(self.activity_count.to_string()),
        }
    }
}

/// Canonical timestamp rendering (round-trips through the normalizer).
pub fn fmt_dt(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// The full set of work-order records held for a session, in stable
/// import order. Every pipeline stage preserves that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub records: Vec<WorkOrderRecord>,
}

impl Dataset {
    pub fn new(records: Vec<WorkOrderRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WorkOrderRecord> {
        self.records.iter()
    }

    /// Most recent notification date in the dataset, if any.
    pub fn max_notification_date(&self) -> Option<NaiveDateTime> {
        self.records
            .iter()
            .filter_map(|r| r.notification_date)
            .max()
    }

    /// Earliest notification date in the dataset, if any.
    pub fn min_notification_date(&self) -> Option<NaiveDateTime> {
        self.records
            .iter()
            .filter_map(|r| r.notification_date)
            .min()
    }

    pub fn to_raw(&self) -> Vec<RawRecord> {
        self.records.iter().map(|r| r.to_raw()).collect()
    }
}
