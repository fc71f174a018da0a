mod reading;
mod series;
mod table_metrics;

pub use reading::BucketReading;
pub use series::Series;
pub use table_metrics::{LocationMetrics, TableMetrics};
