//! Formatting utilities used for CLI and export outputs.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Percentage with one decimal, es: "66.7%".
pub fn fmt_pct(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Hours with two decimals, es: "4.00".
pub fn fmt_hours(value: f64) -> String {
    format!("{:.2}", value)
}

/// Delta against the previous window, signed percentage.
/// An unbounded delta (previous value was 0) renders as "∞".
pub fn fmt_delta_pct(value: f64) -> String {
    if value.is_infinite() {
        return "∞".to_string();
    }
    format!("{:+.1}%", value)
}
