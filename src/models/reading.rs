use serde::{Deserialize, Serialize};

/// One selected bucket, shaped for a ticker / tooltip overlay: the two
/// stacked values at that bucket and which segment the headline is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketReading {
    pub year_label: String,
    pub baseline_value: f64,
    pub headline_value: f64,
    pub is_projected: bool,
}
