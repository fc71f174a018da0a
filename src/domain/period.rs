use {
    super::Roster,
    crate::utils::TimeUtils,
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// The table's time-scaling selector. Maps to a month-count multiplier
/// used to scale monthly baseline figures into the selected window.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportingPeriod {
    #[default]
    #[strum(to_string = "monthly")]
    Monthly,

    #[strum(to_string = "quarterly")]
    Quarterly,

    #[strum(to_string = "yearly")]
    Yearly,

    /// Whole program-to-date window. Earlier datasets carried a fixed
    /// per-roster duration constant; it is gone in later ones, so the
    /// window is derived from the roster's earliest program start.
    #[strum(to_string = "total")]
    Total,

    #[strum(to_string = "custom")]
    Custom { years: u32 },
}

impl ReportingPeriod {
    /// Month-count multiplier for this period. `Total` on a roster with no
    /// elapsed months falls back to a single month rather than zeroing out
    /// the whole table.
    pub fn multiplier(&self, roster: &Roster, as_of: NaiveDate) -> f64 {
        match self {
            Self::Monthly => 1.0,
            Self::Quarterly => TimeUtils::MONTHS_IN_QUARTER as f64,
            Self::Yearly => TimeUtils::MONTHS_IN_YEAR as f64,
            Self::Total => roster.months_on_program(as_of).max(1) as f64,
            Self::Custom { years } => (TimeUtils::MONTHS_IN_YEAR * i64::from(*years)) as f64,
        }
    }

    /// Human-readable period suffix for display, e.g. "/month" or "/3 years".
    pub fn label(&self) -> String {
        match self {
            Self::Monthly => "/month".to_string(),
            Self::Quarterly => "/quarter".to_string(),
            Self::Yearly => "/year".to_string(),
            Self::Total => "/total".to_string(),
            Self::Custom { years } => {
                format!("/{} year{}", years, if *years > 1 { "s" } else { "" })
            }
        }
    }

    /// Lenient parser for renderer-supplied period strings. Unrecognized
    /// input fails closed to `Monthly` (multiplier 1), never an error.
    pub fn parse_lenient(raw: &str, custom_years: u32) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "monthly" => Self::Monthly,
            "quarterly" => Self::Quarterly,
            "yearly" => Self::Yearly,
            "total" => Self::Total,
            "custom" => Self::Custom {
                years: custom_years.max(1),
            },
            other => {
                log::warn!("unknown reporting period `{other}`, treating as monthly");
                Self::Monthly
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Investment, Location};
    use pretty_assertions::assert_eq;

    fn roster() -> Roster {
        Roster::new(
            vec![Location::new(
                "Solo",
                10.0,
                12.0,
                2500.0,
                NaiveDate::from_ymd_opt(2022, 10, 1).unwrap(),
            )],
            Investment {
                program: 399.08,
                training: None,
            },
        )
    }

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()
    }

    #[test]
    fn fixed_multipliers() {
        let r = roster();
        assert_eq!(ReportingPeriod::Monthly.multiplier(&r, as_of()), 1.0);
        assert_eq!(ReportingPeriod::Quarterly.multiplier(&r, as_of()), 3.0);
        assert_eq!(ReportingPeriod::Yearly.multiplier(&r, as_of()), 12.0);
        assert_eq!(
            ReportingPeriod::Custom { years: 3 }.multiplier(&r, as_of()),
            36.0
        );
    }

    #[test]
    fn total_multiplier_tracks_program_duration() {
        assert_eq!(ReportingPeriod::Total.multiplier(&roster(), as_of()), 36.0);
    }

    #[test]
    fn total_multiplier_never_hits_zero() {
        let r = roster();
        let same_day = NaiveDate::from_ymd_opt(2022, 10, 1).unwrap();
        assert_eq!(ReportingPeriod::Total.multiplier(&r, same_day), 1.0);
    }

    #[test]
    fn labels_match_the_display_suffixes() {
        assert_eq!(ReportingPeriod::Monthly.label(), "/month");
        assert_eq!(ReportingPeriod::Custom { years: 1 }.label(), "/1 year");
        assert_eq!(ReportingPeriod::Custom { years: 3 }.label(), "/3 years");
    }

    #[test]
    fn unknown_period_fails_closed_to_monthly() {
        assert_eq!(
            ReportingPeriod::parse_lenient("fortnightly", 2),
            ReportingPeriod::Monthly
        );
        assert_eq!(
            ReportingPeriod::parse_lenient(" Custom ", 2),
            ReportingPeriod::Custom { years: 2 }
        );
    }
}
