use crate::core::calendar::CalendarEvent;
use crate::errors::AppResult;
use crate::export::notify_export_success;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write calendar events as a JSON array in the FullCalendar event shape.
pub fn write_events(path: &Path, events: &[CalendarEvent]) -> AppResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), events)?;
    notify_export_success("Calendar", path);
    Ok(())
}

/// Same payload as a string, for printing to stdout.
pub fn events_to_json(events: &[CalendarEvent]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(events)?)
}
