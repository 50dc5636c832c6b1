//! Canonical column names of the work-order schema.
//!
//! The CSV exports use human-readable headers ("Notification date",
//! "Work Order Status", ...). The SQLite table uses the same names with
//! spaces and slashes replaced by underscores; the mapping is reversed on
//! read so the rest of the pipeline only ever sees display names.

pub const ID: &str = "ID";
pub const NOTIFICATION_DATE: &str = "Notification date";
pub const STATUS: &str = "Work Order Status";
pub const NOTIFICATION_TYPE: &str = "Notification type";
pub const STATION: &str = "StationList";
pub const MACHINE: &str = "MachineList";
pub const EQUIPMENT_LIST: &str = "EquipmentList";
pub const EQUIPMENT_GROUP: &str = "Equipment Group";
pub const EQUIPMENT_PART: &str = "Equipment Part";
pub const PROBLEM_TYPE: &str = "Problem type";
pub const PROBLEM_CAUSE: &str = "Problem Cause";
pub const ACTIVITY: &str = "Activity";
pub const ACTIVITY_BY: &str = "Activity by 1";
pub const VENDOR_NAME: &str = "Vendor Name";
pub const MESSAGE: &str = "Message";
pub const MTTR: &str = "MTTR";
pub const ACTIVITY_DURATION: &str = "Activity Duration";
pub const BREAKDOWN_HOUR: &str = "Breakdown Hour";
pub const ACTIVITY_COUNT: &str = "ActivityCount";
pub const MALFUNCTION_START: &str = "Malfunction Start Date";
pub const MALFUNCTION_STOP: &str = "Malfunction Stop Date";
pub const ACTIVITY_START: &str = "Activity Start Date";
pub const ACTIVITY_STOP: &str = "Activity Stop Date";

/// All display columns, in storage/export order.
pub const DISPLAY_COLUMNS: [&str; 23] = [
    ID,
    NOTIFICATION_DATE,
    STATUS,
    NOTIFICATION_TYPE,
    STATION,
    MACHINE,
    EQUIPMENT_LIST,
    EQUIPMENT_GROUP,
    EQUIPMENT_PART,
    PROBLEM_TYPE,
    PROBLEM_CAUSE,
    ACTIVITY,
    ACTIVITY_BY,
    VENDOR_NAME,
    MESSAGE,
    MTTR,
    ACTIVITY_DURATION,
    BREAKDOWN_HOUR,
    ACTIVITY_COUNT,
    MALFUNCTION_START,
    MALFUNCTION_STOP,
    ACTIVITY_START,
    ACTIVITY_STOP,
];

/// Display name → SQLite identifier.
pub fn db_ident(display: &str) -> String {
    display.replace([' ', '/'], "_")
}

/// SQLite identifiers for all columns, in the same order.
pub fn db_columns() -> Vec<String> {
    DISPLAY_COLUMNS.iter().map(|c| db_ident(c)).collect()
}
