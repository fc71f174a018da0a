use {
    crate::utils::TimeUtils,
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
};

/// One practice site with its own patient and revenue figures.
/// `start_avg` / `new_avg` are MONTHLY new-patient averages; period scaling
/// happens in the calculators, never here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    /// Baseline monthly new-patient count before the program.
    pub start_avg: f64,
    /// Current monthly new-patient count after the program.
    pub new_avg: f64,
    /// Average revenue per new patient, currency units.
    pub avg_revenue: f64,
    /// Calendar date the program began at this site.
    pub start_date: NaiveDate,
}

impl Location {
    pub fn new(
        name: impl Into<String>,
        start_avg: f64,
        new_avg: f64,
        avg_revenue: f64,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            start_avg,
            new_avg,
            avg_revenue,
            start_date,
        }
    }

    /// Whole months on the program as of `as_of`.
    pub fn months_on_program(&self, as_of: NaiveDate) -> i64 {
        TimeUtils::months_between(self.start_date, as_of)
    }

    /// Fractional years on the program as of `as_of`.
    pub fn years_on_program(&self, as_of: NaiveDate) -> f64 {
        TimeUtils::years_between(self.start_date, as_of)
    }
}
