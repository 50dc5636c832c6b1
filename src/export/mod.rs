pub mod csv;
pub mod json;

use crate::ui::messages::success;
use chrono::Local;
use std::path::Path;

/// Helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

/// Default filename for a view export, timestamped to avoid clobbering
/// earlier exports.
pub fn default_export_name() -> String {
    format!(
        "work_orders_filtered_{}.csv",
        Local::now().format("%Y%m%d_%H%M%S")
    )
}
