use {
    super::{Location, LookupError},
    crate::utils::TimeUtils,
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
};

/// Fixed recurring monthly costs attached to a roster.
/// Later datasets dropped the separate training line, hence the Option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investment {
    pub program: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training: Option<f64>,
}

impl Investment {
    pub fn monthly_total(&self) -> f64 {
        self.program + self.training.unwrap_or(0.0)
    }
}

/// The full set of locations plus investment costs evaluated together.
/// An immutable snapshot: switching the active practice replaces the
/// roster wholesale, it is never merged or mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    pub locations: Vec<Location>,
    pub investment: Investment,
}

impl Roster {
    pub fn new(locations: Vec<Location>, investment: Investment) -> Self {
        Self {
            locations,
            investment,
        }
    }

    /// Lookup by display name. A miss is a typed NotFound, so callers can
    /// fall back deliberately instead of substituting the wrong site.
    pub fn find_location(&self, name: &str) -> Result<&Location, LookupError> {
        self.locations
            .iter()
            .find(|loc| loc.name == name)
            .ok_or_else(|| LookupError::LocationNotFound(name.to_string()))
    }

    pub fn earliest_start_date(&self) -> Option<NaiveDate> {
        self.locations.iter().map(|loc| loc.start_date).min()
    }

    /// Whole months between the earliest program start and `as_of`.
    /// 0 for an empty roster.
    pub fn months_on_program(&self, as_of: NaiveDate) -> i64 {
        self.earliest_start_date()
            .map(|start| TimeUtils::months_between(start, as_of))
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn two_site_roster() -> Roster {
        Roster::new(
            vec![
                Location::new("North", 10.0, 12.0, 2000.0, ymd(2022, 6, 1)),
                Location::new("South", 20.0, 25.0, 1800.0, ymd(2023, 3, 1)),
            ],
            Investment {
                program: 399.08,
                training: Some(816.5),
            },
        )
    }

    #[test]
    fn find_location_hits_and_misses() {
        let roster = two_site_roster();
        assert_eq!(roster.find_location("South").unwrap().start_avg, 20.0);
        assert_eq!(
            roster.find_location("West").unwrap_err(),
            LookupError::LocationNotFound("West".to_string())
        );
    }

    #[test]
    fn earliest_start_wins_for_program_duration() {
        let roster = two_site_roster();
        assert_eq!(roster.earliest_start_date(), Some(ymd(2022, 6, 1)));
        assert_eq!(roster.months_on_program(ymd(2025, 6, 1)), 36);
    }

    #[test]
    fn monthly_total_handles_missing_training_line() {
        let with = Investment {
            program: 399.08,
            training: Some(816.5),
        };
        let without = Investment {
            program: 399.08,
            training: None,
        };
        assert!((with.monthly_total() - 1215.58).abs() < 1e-9);
        assert!((without.monthly_total() - 399.08).abs() < 1e-9);
    }
}
