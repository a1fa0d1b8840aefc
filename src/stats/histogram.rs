use serde::Serialize;

/// Equal-width histogram over `[min, max]`; the upper edge belongs to the
/// last bin.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Histogram {
    pub min: f64,
    pub max: f64,
    pub bin_width: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn new(min: f64, max: f64, num_bins: usize) -> Self {
        assert!(num_bins > 0, "histogram requires at least one bin");
        assert!(max > min, "histogram range must be non-empty");
        Histogram {
            min,
            max,
            bin_width: (max - min) / num_bins as f64,
            counts: vec![0; num_bins],
        }
    }

    /// Builds a histogram spanning the finite values. A single distinct value
    /// gets a unit-wide range centred on it, widened for large magnitudes.
    /// Returns `None` without finite values or bins.
    pub fn from_values(values: &[f64], num_bins: usize) -> Option<Self> {
        if num_bins == 0 {
            return None;
        }
        let (lo, hi) = values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })?;
        let (lo, hi) = if hi > lo {
            (lo, hi)
        } else {
            // Half a unit, or a few ulps where half a unit is lost to rounding.
            let pad = 0.5f64.max(lo.abs() * f64::EPSILON * 4.0);
            (lo - pad, hi + pad)
        };
        if !(hi > lo) {
            return None;
        }
        let mut hist = Histogram::new(lo, hi, num_bins);
        for &v in values {
            hist.accumulate(v);
        }
        Some(hist)
    }

    /// Adds `value`; values outside the range or non-finite are ignored.
    pub fn accumulate(&mut self, value: f64) {
        if !value.is_finite() || value < self.min || value > self.max {
            return;
        }
        let mut idx = ((value - self.min) / self.bin_width) as usize;
        if idx >= self.counts.len() {
            idx = self.counts.len() - 1;
        }
        self.counts[idx] += 1;
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn bin_edges(&self) -> Vec<f64> {
        (0..=self.counts.len())
            .map(|i| self.min + i as f64 * self.bin_width)
            .collect()
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::Histogram;

    #[test]
    fn maximum_lands_in_last_bin() {
        let hist = Histogram::from_values(&[0.0, 1.0, 2.0, 10.0], 10).unwrap();
        assert_eq!(hist.counts.len(), 10);
        assert_eq!(hist.counts[0], 1);
        assert_eq!(hist.counts[1], 1);
        assert_eq!(hist.counts[2], 1);
        assert_eq!(hist.counts[9], 1);
        assert_eq!(hist.total(), 4);
        assert_eq!(hist.max_count(), 1);
    }

    #[test]
    fn single_value_gets_unit_range() {
        let hist = Histogram::from_values(&[3.0, 3.0], 4).unwrap();
        assert_eq!(hist.min, 2.5);
        assert_eq!(hist.max, 3.5);
        assert_eq!(hist.counts, vec![0, 0, 2, 0]);
    }

    #[test]
    fn single_large_value_gets_representable_range() {
        let hist = Histogram::from_values(&[1e17], 10).unwrap();
        assert!(hist.min < 1e17 && hist.max > 1e17);
        assert!(hist.bin_width > 0.0);
        assert_eq!(hist.total(), 1);

        let hist = Histogram::from_values(&[-f64::MAX, -f64::MAX], 3).unwrap();
        assert_eq!(hist.total(), 2);
    }

    #[test]
    fn edges_span_range() {
        let hist = Histogram::new(-1.0, 1.0, 4);
        assert_eq!(hist.bin_edges(), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn empty_or_non_finite_input_has_no_histogram() {
        assert!(Histogram::from_values(&[], 10).is_none());
        assert!(Histogram::from_values(&[f64::NAN, f64::INFINITY], 10).is_none());
        assert!(Histogram::from_values(&[1.0], 0).is_none());
    }
}
