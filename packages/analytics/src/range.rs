//! Rate range over county rollups for the choropleth color scale.

use cancer_map_analytics_models::{CountyData, RateRange};

/// Returns the min/max over all county rates strictly greater than
/// zero.
///
/// Zero-rate counties are excluded so "no data" does not drag the
/// color-scale domain down to zero. When no county has a positive rate
/// the documented [`RateRange::DEFAULT`] of `{0, 100}` is returned.
/// All-equal positive rates yield `min == max`; collapsing that
/// degenerate domain to a single color is the presentation layer's
/// concern.
#[must_use]
pub fn rate_range(counties: &[CountyData]) -> RateRange {
    let mut positive = counties.iter().map(|c| c.rate).filter(|r| *r > 0.0);

    let Some(first) = positive.next() else {
        return RateRange::DEFAULT;
    };

    let (min, max) = positive.fold((first, first), |(min, max), rate| {
        (min.min(rate), max.max(rate))
    });
    RateRange { min, max }
}
