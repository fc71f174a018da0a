// Domain types and value objects
mod errors;
mod location;
mod period;
mod roster;
mod selector;

// Re-export commonly used types
pub use errors::LookupError;
pub use location::Location;
pub use period::ReportingPeriod;
pub use roster::{Investment, Roster};
pub use selector::LocationSelector;
