use serde::{Deserialize, Serialize};

/// One table row: a location's figures scaled to the selected period.
/// `start_avg` / `new_avg` / `growth` are post-rounding whole patient
/// counts; `growth` is floored at zero (a regression never displays as
/// negative growth).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationMetrics {
    pub name: String,
    pub start_avg: i64,
    pub new_avg: i64,
    pub growth: i64,
    /// Rounded whole percent. 0 when the baseline is zero or growth is flat.
    pub growth_percent: i64,
    pub avg_revenue: f64,
    pub growth_total: f64,
}

/// Everything a renderer needs to paint the results table plus the
/// investment and return summary cards. Row order preserves roster order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableMetrics {
    pub locations: Vec<LocationMetrics>,
    pub total_growth: i64,
    pub total_return: f64,
    /// Investment figures are pre-rounded currency; rounding for display
    /// is the renderer's call.
    pub total_investment: f64,
    pub program_investment: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_investment: Option<f64>,
    /// Period suffix for the summary cards, e.g. "/year".
    pub period_label: String,
}
