pub mod calendar;
pub mod charts;
pub mod filters;
pub mod kpi;
pub mod normalize;
pub mod session;
