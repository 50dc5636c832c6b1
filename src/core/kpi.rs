//! KPI computation and period-over-period deltas.

use crate::core::filters::apply_filters;
use crate::models::filter::FilterSelection;
use crate::models::kpi::{DeltaSet, KpiSet};
use crate::models::record::Dataset;
use chrono::Duration;

/// Length of the comparison window, and the amount both endpoints are
/// shifted back by. A fixed 30-day shift, not calendar-month-aware.
pub const PREVIOUS_WINDOW_DAYS: i64 = 30;

/// Summary KPIs over a dataset. An empty dataset yields all zeros, so
/// `completion_rate` is always in `[0, 100]`.
pub fn compute_kpis(dataset: &Dataset) -> KpiSet {
    if dataset.is_empty() {
        return KpiSet::default();
    }

    let total_orders = dataset.len() as u64;
    let completed_orders = dataset
        .iter()
        .filter(|r| r.status.as_deref() == Some("Completed"))
        .count() as u64;
    let completion_rate = completed_orders as f64 / total_orders as f64 * 100.0;

    let avg_mttr = dataset.iter().map(|r| r.mttr).sum::<f64>() / total_orders as f64;
    let avg_duration =
        dataset.iter().map(|r| r.activity_duration).sum::<f64>() / total_orders as f64;

    KpiSet {
        total_orders,
        completed_orders,
        completion_rate,
        avg_mttr,
        avg_duration,
    }
}

/// Change of each KPI against a previous period.
///
/// Without a previous period every delta is 0. In percentage mode a
/// previous value of 0 yields 0 when the current value is also 0 and
/// `f64::INFINITY` otherwise; the caller decides how to render that.
pub fn compute_delta(current: &KpiSet, previous: Option<&KpiSet>, as_percentage: bool) -> DeltaSet {
    let Some(prev) = previous else {
        return DeltaSet::default();
    };

    DeltaSet {
        total_orders: delta_value(
            current.total_orders as f64,
            prev.total_orders as f64,
            as_percentage,
        ),
        completed_orders: delta_value(
            current.completed_orders as f64,
            prev.completed_orders as f64,
            as_percentage,
        ),
        completion_rate: delta_value(current.completion_rate, prev.completion_rate, as_percentage),
        avg_mttr: delta_value(current.avg_mttr, prev.avg_mttr, as_percentage),
        avg_duration: delta_value(current.avg_duration, prev.avg_duration, as_percentage),
    }
}

fn delta_value(current: f64, previous: f64, as_percentage: bool) -> f64 {
    if !as_percentage {
        return current - previous;
    }
    if previous != 0.0 {
        (current - previous) / previous * 100.0
    } else if current == 0.0 {
        0.0
    } else {
        f64::INFINITY
    }
}

/// Filtered dataset of the comparison period.
///
/// With an explicit date range the previous window is the same-length
/// range shifted back 30 days. Without one it is derived from the
/// dataset's most recent notification date: it ends 30 days before that
/// maximum and spans the preceding 30 days. A dataset with no valid
/// dates has an empty previous window. All categorical dimensions are
/// carried over unchanged.
pub fn previous_window(dataset: &Dataset, selection: &FilterSelection) -> Dataset {
    let prev_selection = if selection.date_range.is_some() {
        selection.shifted_back(PREVIOUS_WINDOW_DAYS)
    } else {
        match dataset.max_notification_date() {
            Some(max) => {
                let end = max.date() - Duration::days(PREVIOUS_WINDOW_DAYS);
                let start = end - Duration::days(PREVIOUS_WINDOW_DAYS);
                selection.with_date_range(start, end)
            }
            None => return Dataset::default(),
        }
    };

    apply_filters(dataset, &prev_selection)
}
