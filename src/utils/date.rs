use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

/// Primary timestamp format of the upstream CSV exports.
pub const PRIMARY_DATETIME_FORMAT: &str = "%m/%d/%Y %H:%M";

/// Fallback formats tried when the primary one does not match.
/// Includes the canonical rendering used when writing records back out,
/// so a re-imported export parses cleanly.
const LENIENT_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

const LENIENT_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a timestamp cell: primary format first, then the lenient list,
/// then date-only forms (midnight). Returns None instead of failing.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(s, PRIMARY_DATETIME_FORMAT) {
        return Some(dt);
    }

    for fmt in LENIENT_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in LENIENT_DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// Monday of the ISO week containing the date.
pub fn week_start(d: NaiveDate) -> NaiveDate {
    d - Duration::days(d.weekday().num_days_from_monday() as i64)
}
