use serde::{Deserialize, Serialize};

/// Which location a projection request targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LocationSelector {
    #[default]
    All,
    Named(String),
}

impl LocationSelector {
    /// `"all"` (any casing) or empty input selects the aggregate view.
    /// Anything else is taken as a location name, resolved later against
    /// the active roster.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Named(trimmed.to_string())
        }
    }
}
