pub mod columns;
pub mod filter;
pub mod kpi;
pub mod record;
