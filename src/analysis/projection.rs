use {
    crate::{
        analysis::growth,
        config::constants::PROJECTION_HORIZON_YEARS,
        domain::{Location, Roster},
        models::Series,
        utils::TimeUtils,
    },
    chrono::{Datelike, NaiveDate},
};

/// Cumulative-collections projection for a single location.
///
/// `as_of` is the injected "now": the timeline runs from the location's
/// program start through `as_of` plus the projection horizon, in yearly
/// buckets. Identical inputs always yield the identical series.
pub fn compute_series(location: &Location, growth_rate_pct: f64, as_of: NaiveDate) -> Series {
    build_series(std::slice::from_ref(location), growth_rate_pct, as_of)
}

/// Roster-wide projection. Staggered-start join: each location joins the
/// running totals in its own start year and contributes nothing to the
/// buckets before it.
pub fn compute_aggregate_series(roster: &Roster, growth_rate_pct: f64, as_of: NaiveDate) -> Series {
    build_series(&roster.locations, growth_rate_pct, as_of)
}

fn build_series(locations: &[Location], growth_rate_pct: f64, as_of: NaiveDate) -> Series {
    let Some(first_start) = locations.iter().map(|loc| loc.start_date).min() else {
        return Series::default();
    };

    let growth_rate_pct = growth::clamp_growth_rate(growth_rate_pct);

    // 1. Plan the timeline: yearly buckets from the earliest program start
    // through as_of + horizon.
    let horizon_end = add_years(as_of, PROJECTION_HORIZON_YEARS);
    let total_months = TimeUtils::months_between(first_start, horizon_end).max(0);
    let bucket_count = (total_months as u64).div_ceil(TimeUtils::MONTHS_IN_YEAR as u64) as usize;

    let first_year = first_start.year();
    // Inclusive boundary: the as_of calendar year still counts as historical.
    let boundary_year = as_of.year();
    let first_future_year = boundary_year + 1;
    let period_months = TimeUtils::MONTHS_IN_YEAR as f64;

    // 2. Fix each location's implied compound annual rate for the walk.
    let annualized: Vec<f64> = locations
        .iter()
        .map(|loc| growth::annualized_rate(loc.start_avg, loc.new_avg, loc.years_on_program(as_of)))
        .collect();

    let mut series = Series {
        actual_growth_rate: aggregate_actual_rate(locations),
        ..Series::default()
    };

    // 3. Walk the buckets, accumulating the three running totals.
    let mut cum_start = 0.0;
    let mut cum_member = 0.0;
    let mut cum_projected = 0.0;
    let mut seeded = false;

    for i in 0..bucket_count {
        let year = first_year + i as i32;
        let historical = year <= boundary_year;

        if !historical && !seeded {
            // Continuity: the projected line starts where the member line ends.
            cum_projected = cum_member;
            seeded = true;
        }

        for (loc, &rate) in locations.iter().zip(&annualized) {
            let loc_start_year = loc.start_date.year();
            if loc_start_year > year {
                continue; // Not started yet
            }

            // Flat zero-growth baseline, every bucket.
            cum_start += loc.start_avg * period_months * loc.avg_revenue;

            if historical {
                let years_from_start = (year - loc_start_year) as f64;
                cum_member +=
                    loc.start_avg * (1.0 + rate).powf(years_from_start) * period_months * loc.avg_revenue;
            } else {
                let years_from_now = (year - first_future_year) as f64;
                cum_projected += loc.new_avg
                    * (1.0 + growth_rate_pct / 100.0).powf(years_from_now)
                    * period_months
                    * loc.avg_revenue;
            }
        }

        series.labels.push(TimeUtils::year_label(year));
        series.start_series.push(cum_start);
        if historical {
            series.member_series.push(Some(cum_member));
            series.projected_series.push(None);
        } else {
            series.member_series.push(None);
            series.projected_series.push(Some(cum_projected));
        }
    }

    series
}

/// Realized growth for the displayed roster: current vs baseline summed
/// across locations, so larger sites weigh more than a plain mean would.
fn aggregate_actual_rate(locations: &[Location]) -> f64 {
    let start_sum: f64 = locations.iter().map(|loc| loc.start_avg).sum();
    let new_sum: f64 = locations.iter().map(|loc| loc.new_avg).sum();
    growth::actual_growth_rate(start_sum, new_sum)
}

/// `date` shifted forward by whole years, sliding Feb 29 back a day when
/// the target year has no leap day.
fn add_years(date: NaiveDate, years: i32) -> NaiveDate {
    let target = date.year() + years;
    date.with_year(target)
        .or_else(|| date.pred_opt().and_then(|d| d.with_year(target)))
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Investment;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bradley() -> Location {
        Location::new("Bradley Place", 27.0, 35.08, 2978.0, ymd(2022, 10, 1))
    }

    fn as_of() -> NaiveDate {
        ymd(2025, 10, 1)
    }

    #[test]
    fn timeline_covers_start_through_horizon() {
        let series = compute_series(&bradley(), 5.0, as_of());
        // 156 whole months from 2022-10-01 to 2035-10-01, in 13 yearly buckets.
        assert_eq!(series.len(), 13);
        assert_eq!(series.labels.first().unwrap(), "'22");
        assert_eq!(series.labels.last().unwrap(), "'34");
    }

    #[test]
    fn buckets_split_at_the_as_of_year_inclusive() {
        let series = compute_series(&bradley(), 5.0, as_of());
        for (i, label) in series.labels.iter().enumerate() {
            let historical = series.member_series[i].is_some();
            let projected = series.projected_series[i].is_some();
            assert_ne!(historical, projected, "bucket {label} must be exactly one segment");
        }
        // 2022..=2025 historical, 2026.. projected.
        assert!(series.member_series[3].is_some());
        assert!(series.projected_series[4].is_some());
    }

    #[test]
    fn baseline_is_flat_and_strictly_cumulative() {
        let series = compute_series(&bradley(), 5.0, as_of());
        let per_year = 27.0 * 12.0 * 2978.0;
        for (i, value) in series.start_series.iter().enumerate() {
            assert!((value - per_year * (i + 1) as f64).abs() < 1e-6);
        }
    }

    #[test]
    fn projected_line_continues_from_the_member_line() {
        let series = compute_series(&bradley(), 8.0, as_of());
        let last_member = series
            .member_series
            .iter()
            .flatten()
            .last()
            .copied()
            .unwrap();
        let first_future = series
            .projected_series
            .iter()
            .flatten()
            .next()
            .copied()
            .unwrap();
        // First future bucket = seed + one year of current-average collections
        // at exponent zero.
        let first_increment = 35.08 * 12.0 * 2978.0;
        assert!((first_future - (last_member + first_increment)).abs() < 1e-6);
    }

    #[test]
    fn zero_baseline_location_is_safe_everywhere() {
        let dormant = Location::new("Dormant", 0.0, 9.0, 1500.0, ymd(2023, 1, 1));
        let series = compute_series(&dormant, 5.0, as_of());
        assert_eq!(series.actual_growth_rate, 0.0);
        assert!(series.start_series.iter().all(|v| *v == 0.0));
        assert!(series
            .member_series
            .iter()
            .flatten()
            .all(|v| v.is_finite()));
    }

    #[test]
    fn out_of_range_growth_rate_is_clamped_not_rejected() {
        let capped = compute_series(&bradley(), 250.0, as_of());
        let at_limit = compute_series(&bradley(), 100.0, as_of());
        assert_eq!(capped, at_limit);
    }

    #[test]
    fn aggregate_respects_staggered_starts() {
        let early = Location::new("Early", 10.0, 12.0, 2000.0, ymd(2021, 1, 1));
        let late = Location::new("Late", 20.0, 22.0, 1000.0, ymd(2024, 1, 1));
        let roster = Roster::new(
            vec![early.clone(), late],
            Investment {
                program: 399.08,
                training: None,
            },
        );
        let aggregate = compute_aggregate_series(&roster, 5.0, as_of());
        let solo = compute_series(&early, 5.0, as_of());

        // 2021 through 2023 the late site has not started: the aggregate
        // baseline matches the early site alone.
        for i in 0..3 {
            assert!((aggregate.start_series[i] - solo.start_series[i]).abs() < 1e-6);
        }
        // From 2024 the late site joins and the aggregate pulls ahead.
        assert!(aggregate.start_series[3] > solo.start_series[3]);
    }

    #[test]
    fn empty_roster_yields_an_empty_series() {
        let roster = Roster::new(
            vec![],
            Investment {
                program: 399.08,
                training: None,
            },
        );
        assert!(compute_aggregate_series(&roster, 5.0, as_of()).is_empty());
    }

    #[test]
    fn determinism_holds_for_the_full_series() {
        let a = compute_series(&bradley(), 7.5, as_of());
        let b = compute_series(&bradley(), 7.5, as_of());
        assert_eq!(a, b);
    }
}
