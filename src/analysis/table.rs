use {
    crate::{
        domain::{ReportingPeriod, Roster},
        models::{LocationMetrics, TableMetrics},
    },
    chrono::NaiveDate,
};

/// Scale the roster's monthly figures into the selected reporting period.
///
/// Pure function of its inputs. Patient counts are rounded per location
/// AFTER scaling (whole patients per window), growth is floored at zero,
/// and the investment totals stay pre-rounded currency. `as_of` only
/// matters for `ReportingPeriod::Total`, whose window is program-to-date.
pub fn compute_table_metrics(
    roster: &Roster,
    period: ReportingPeriod,
    as_of: NaiveDate,
) -> TableMetrics {
    let multiplier = period.multiplier(roster, as_of);

    let locations: Vec<LocationMetrics> = roster
        .locations
        .iter()
        .map(|loc| {
            let start_avg = (loc.start_avg * multiplier).round() as i64;
            let new_avg = (loc.new_avg * multiplier).round() as i64;
            // Never show negative growth
            let growth = (new_avg - start_avg).max(0);
            let growth_percent = if loc.start_avg > 0.0 && growth > 0 {
                (growth as f64 / (loc.start_avg * multiplier) * 100.0).round() as i64
            } else {
                0
            };

            LocationMetrics {
                name: loc.name.clone(),
                start_avg,
                new_avg,
                growth,
                growth_percent,
                avg_revenue: loc.avg_revenue,
                growth_total: growth as f64 * loc.avg_revenue,
            }
        })
        .collect();

    let total_growth = locations.iter().map(|m| m.growth).sum();
    let total_return = locations.iter().map(|m| m.growth_total).sum();

    TableMetrics {
        total_growth,
        total_return,
        total_investment: roster.investment.monthly_total() * multiplier,
        program_investment: roster.investment.program * multiplier,
        training_investment: roster.investment.training.map(|t| t * multiplier),
        period_label: period.label(),
        locations,
    }
}
