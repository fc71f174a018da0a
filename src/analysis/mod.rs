// Calculation core: period-scaled table metrics and the cumulative
// collections projection.
pub mod growth;
pub mod projection;
pub mod table;

pub use projection::{compute_aggregate_series, compute_series};
pub use table::compute_table_metrics;
