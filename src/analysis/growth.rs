//! Growth-rate arithmetic shared by the table and series calculators.
//! Every zero-baseline division collapses to 0.0, never NaN or Infinity.

use crate::config::constants::MAX_GROWTH_RATE_PCT;

/// Realized growth since program start, in percent.
pub fn actual_growth_rate(start_avg: f64, new_avg: f64) -> f64 {
    if start_avg <= f64::EPSILON {
        return 0.0;
    }
    (new_avg - start_avg) / start_avg * 100.0
}

/// Compound annual growth rate implied by the start/current monthly
/// averages over `years_elapsed`. 0 when no time has elapsed or the
/// baseline is zero.
pub fn annualized_rate(start_avg: f64, new_avg: f64, years_elapsed: f64) -> f64 {
    if start_avg <= f64::EPSILON || years_elapsed <= 0.0 {
        return 0.0;
    }
    (new_avg / start_avg).powf(1.0 / years_elapsed) - 1.0
}

/// Defensive clamp for user-supplied growth-rate percentages.
/// Callers clamp at the input boundary too; this is the engine-side guard.
pub fn clamp_growth_rate(pct: f64) -> f64 {
    if !pct.is_finite() {
        log::warn!("non-finite growth rate, treating as 0%");
        return 0.0;
    }
    let clamped = pct.clamp(0.0, MAX_GROWTH_RATE_PCT);
    if clamped != pct {
        log::warn!("growth rate {pct}% out of range, clamped to {clamped}%");
    }
    clamped
}
