use serde::Serialize;

/// Scalar summary statistics over a dataset. Values are always plain
/// numbers; an empty dataset yields all zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct KpiSet {
    pub total_orders: u64,
    pub completed_orders: u64,
    /// Percentage of completed orders, 0 when the dataset is empty.
    pub completion_rate: f64,
    pub avg_mttr: f64,
    pub avg_duration: f64,
}

/// Change of each KPI against a previous period, either as a percentage
/// or as an absolute difference. A previous value of 0 with a nonzero
/// current value is reported as `f64::INFINITY`; the presentation layer
/// decides how to render it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DeltaSet {
    pub total_orders: f64,
    pub completed_orders: f64,
    pub completion_rate: f64,
    pub avg_mttr: f64,
    pub avg_duration: f64,
}
