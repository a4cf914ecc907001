//! Histogram binning for the chart panels.

use crate::error::{Result, RookeryError};

/// One equal-width histogram bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Lower edge of the bucket.
    pub lower: f64,
    /// Upper edge of the bucket.
    pub upper: f64,
    /// Number of values in the bucket.
    pub count: u64,
}

impl HistogramBin {
    /// Short label for chart axes (lower edge, no fraction).
    pub fn label(&self) -> String {
        format!("{:.0}", self.lower)
    }
}

/// Bin values into `bins` equal-width buckets over their min..max range.
///
/// Values equal to the upper edge land in the last bucket. An explicit
/// zero bin count is a computation failure reported to the requesting
/// panel; an empty input yields an empty set of buckets.
pub fn histogram(values: &[f64], bins: u32) -> Result<Vec<HistogramBin>> {
    if bins == 0 {
        return Err(RookeryError::computation(
            "histogram needs at least one bin",
        ));
    }
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return Ok(Vec::new());
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = if max > min {
        (max - min) / f64::from(bins)
    } else {
        1.0
    };

    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: min + width * f64::from(i),
            upper: min + width * f64::from(i + 1),
            count: 0,
        })
        .collect();

    for v in finite {
        let idx = (((v - min) / width) as usize).min(bins as usize - 1);
        out[idx].count += 1;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bins_is_an_error() {
        let err = histogram(&[1.0, 2.0], 0).unwrap_err();
        assert!(matches!(err, RookeryError::Computation { .. }));
    }

    #[test]
    fn empty_input_yields_no_buckets() {
        assert!(histogram(&[], 5).unwrap().is_empty());
        assert!(histogram(&[f64::NAN], 5).unwrap().is_empty());
    }

    #[test]
    fn counts_cover_every_value() {
        let values: Vec<f64> = (0..100).map(f64::from).collect();
        let bins = histogram(&values, 10).unwrap();
        assert_eq!(bins.len(), 10);
        assert_eq!(bins.iter().map(|b| b.count).sum::<u64>(), 100);
        // The maximum lands in the last bucket, not past the end.
        assert_eq!(bins.last().unwrap().count, 10);
    }

    #[test]
    fn constant_input_fills_one_bucket() {
        let bins = histogram(&[4.2; 7], 3).unwrap();
        assert_eq!(bins.iter().map(|b| b.count).sum::<u64>(), 7);
        assert_eq!(bins[0].count, 7);
    }
}
