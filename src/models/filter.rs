use chrono::{Duration, NaiveDate};

/// Selecting "All" on a dimension means no restriction, even when other
/// specific values are selected alongside it.
pub const WILDCARD: &str = "All";

/// Accepted values for one categorical dimension.
/// An empty set behaves like the wildcard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DimFilter {
    values: Vec<String>,
}

impl DimFilter {
    /// No restriction on this dimension.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    pub fn is_wildcard(&self) -> bool {
        self.values.is_empty() || self.values.iter().any(|v| v == WILDCARD)
    }

    /// A missing value never matches a specific selection.
    pub fn matches(&self, value: Option<&str>) -> bool {
        if self.is_wildcard() {
            return true;
        }
        value.is_some_and(|v| self.values.iter().any(|s| s == v))
    }
}

impl From<Vec<String>> for DimFilter {
    fn from(values: Vec<String>) -> Self {
        Self::new(values)
    }
}

/// A user-selected predicate over the dataset: an optional inclusive date
/// range on the notification date plus four categorical dimensions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterSelection {
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub status: DimFilter,
    pub station: DimFilter,
    pub notification_type: DimFilter,
    pub staff: DimFilter,
}

impl FilterSelection {
    /// Same selection with both date-range endpoints shifted back by a
    /// fixed number of days. A selection without a range is unchanged.
    pub fn shifted_back(&self, days: i64) -> Self {
        let mut prev = self.clone();
        if let Some((start, end)) = self.date_range {
            prev.date_range = Some((start - Duration::days(days), end - Duration::days(days)));
        }
        prev
    }

    /// Same selection with the date range replaced.
    pub fn with_date_range(&self, start: NaiveDate, end: NaiveDate) -> Self {
        let mut sel = self.clone();
        sel.date_range = Some((start, end));
        sel
    }
}
