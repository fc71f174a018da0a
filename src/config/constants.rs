// Top Level Constants

/// How far past the evaluation date the projection timeline runs.
pub const PROJECTION_HORIZON_YEARS: i32 = 10;

/// Upper bound for the user-adjustable future growth-rate assumption.
/// Out-of-range input is clamped, never rejected.
pub const MAX_GROWTH_RATE_PCT: f64 = 100.0;

/// Starting point for the growth-rate control in the dashboard.
pub const DEFAULT_GROWTH_RATE_PCT: f64 = 5.0;

/// Year count pre-selected in the "custom" period dropdown.
pub const DEFAULT_CUSTOM_YEARS: u32 = 2;
