use {
    super::BucketReading,
    serde::{Deserialize, Serialize},
};

/// Cumulative collections over the projection timeline, as the parallel
/// arrays a chart renderer consumes. One entry per yearly bucket.
///
/// `member_series` and `projected_series` are `None` on buckets where the
/// segment does not apply -- absent, never zero. Exactly one of the two is
/// present per bucket: member up to and including the evaluation year,
/// projected after it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Series {
    /// Abbreviated bucket labels, e.g. `'26`.
    pub labels: Vec<String>,
    /// Flat zero-growth baseline, cumulative.
    pub start_series: Vec<f64>,
    /// Historical actuals compounded at the realized annual rate, cumulative.
    pub member_series: Vec<Option<f64>>,
    /// Future collections under the assumed growth rate, cumulative.
    pub projected_series: Vec<Option<f64>>,
    /// Realized growth since program start, percent. Display only; the
    /// projection math never reads it.
    pub actual_growth_rate: f64,
}

impl Series {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Ticker lookup for a selected bucket: the stacked baseline and
    /// headline (member or projected) values, plus which segment the
    /// headline came from. Pure lookup over already-computed data.
    pub fn reading(&self, index: usize) -> Option<BucketReading> {
        let year_label = self.labels.get(index)?.clone();
        let baseline_value = *self.start_series.get(index)?;
        let member = self.member_series.get(index).copied().flatten();
        let projected = self.projected_series.get(index).copied().flatten();

        let (headline_value, is_projected) = match (member, projected) {
            (Some(v), _) => (v, false),
            (None, Some(v)) => (v, true),
            // Both absent should not happen for a well-formed series;
            // fall back to the baseline rather than failing the lookup.
            (None, None) => (baseline_value, false),
        };

        Some(BucketReading {
            year_label,
            baseline_value,
            headline_value,
            is_projected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Series {
        Series {
            labels: vec!["'24".into(), "'25".into(), "'26".into()],
            start_series: vec![100.0, 200.0, 300.0],
            member_series: vec![Some(120.0), Some(250.0), None],
            projected_series: vec![None, None, Some(410.0)],
            actual_growth_rate: 25.0,
        }
    }

    #[test]
    fn reading_picks_the_member_segment_when_historical() {
        let r = sample().reading(1).unwrap();
        assert_eq!(r.year_label, "'25");
        assert_eq!(r.baseline_value, 200.0);
        assert_eq!(r.headline_value, 250.0);
        assert!(!r.is_projected);
    }

    #[test]
    fn reading_flags_projected_buckets() {
        let r = sample().reading(2).unwrap();
        assert_eq!(r.headline_value, 410.0);
        assert!(r.is_projected);
    }

    #[test]
    fn reading_out_of_range_is_none() {
        assert!(sample().reading(3).is_none());
    }
}
