//! Typed records and the CSV loaders that produce them.

pub mod filter;
pub mod loader;
pub mod records;

pub use filter::{OutlierRescale, filter_factors, records_for_side};
pub use loader::{
    LoadReport, SkippedRow, load_factors, load_yearly, parse_factors, parse_year, parse_yearly,
};
pub use records::{Metric, Side, StatRecord, Subjects, YearlyRecord};
