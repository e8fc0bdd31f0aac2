use anyhow::{bail, Result};

use crate::stats::Extent;

use super::Rgb;

/// Quantized color scale: a continuous domain cut into equal-width buckets,
/// one palette color per bucket.
#[derive(Clone, Debug, PartialEq)]
pub struct QuantizeScale {
    domain: Extent,
    range: Vec<Rgb>,
    thresholds: Vec<f64>,
}

impl QuantizeScale {
    /// Build a scale over `domain` with one bucket per palette color.
    pub fn new(domain: Extent, range: Vec<Rgb>) -> Result<Self> {
        if range.len() < 2 {
            bail!("[scale] palette needs at least 2 colors, got {}", range.len());
        }
        if !domain.min.is_finite() || !domain.max.is_finite() || domain.min > domain.max {
            bail!("[scale] invalid domain [{}, {}]", domain.min, domain.max);
        }

        // n thresholds split [min, max] into n + 1 equal buckets.
        let n = range.len() - 1;
        let (x0, x1) = (domain.min, domain.max);
        let thresholds = (0..n)
            .map(|i| ((i + 1) as f64 * x1 - (i as f64 - n as f64) * x0) / (n + 1) as f64)
            .collect();

        Ok(Self { domain, range, thresholds })
    }

    #[inline] pub fn domain(&self) -> Extent { self.domain }

    #[inline] pub fn range(&self) -> &[Rgb] { &self.range }

    #[inline] pub fn thresholds(&self) -> &[f64] { &self.thresholds }

    /// Bucket index for `value`, clamped to the domain edges. `None` for NaN.
    pub fn bucket(&self, value: f64) -> Option<usize> {
        if value.is_nan() { return None }
        if self.domain.is_degenerate() { return Some(0) }
        Some(self.thresholds.partition_point(|&t| t <= value))
    }

    /// Palette color for `value`. `None` for NaN.
    #[inline]
    pub fn color(&self, value: f64) -> Option<Rgb> {
        self.bucket(value).map(|i| self.range[i])
    }

    /// Value interval `[lo, hi)` covered by bucket `i`.
    pub fn invert_extent(&self, i: usize) -> Option<(f64, f64)> {
        if i >= self.range.len() { return None }
        let lo = if i == 0 { self.domain.min } else { self.thresholds[i - 1] };
        let hi = self.thresholds.get(i).copied().unwrap_or(self.domain.max);
        Some((lo, hi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::Scheme;

    fn three() -> Vec<Rgb> {
        vec![Rgb::from_u32(0x111111), Rgb::from_u32(0x222222), Rgb::from_u32(0x333333)]
    }

    #[test]
    fn thresholds_split_domain_evenly() {
        let scale = QuantizeScale::new(Extent { min: 10.0, max: 90.0 }, three()).unwrap();
        let t = scale.thresholds();
        assert_eq!(t.len(), 2);
        assert!((t[0] - 36.666_666).abs() < 1e-3);
        assert!((t[1] - 63.333_333).abs() < 1e-3);

        assert_eq!(scale.color(10.0), Some(three()[0]));
        assert_eq!(scale.color(50.0), Some(three()[1]));
        assert_eq!(scale.color(90.0), Some(three()[2]));
    }

    #[test]
    fn threshold_count_and_order_hold_for_every_palette_size() {
        for size in 2..=9 {
            let palette = Scheme::Reds.colors()[..size].to_vec();
            let scale = QuantizeScale::new(Extent { min: 2.6, max: 75.1 }, palette.clone()).unwrap();
            assert_eq!(scale.thresholds().len(), size - 1);
            assert!(scale.thresholds().windows(2).all(|w| w[0] <= w[1]));
            assert_eq!(scale.color(2.6), Some(palette[0]));
            assert_eq!(scale.color(75.1), Some(palette[size - 1]));
        }
    }

    #[test]
    fn every_value_in_domain_maps_to_one_palette_color() {
        let palette = Scheme::Reds.colors().to_vec();
        let scale = QuantizeScale::new(Extent { min: 0.0, max: 100.0 }, palette.clone()).unwrap();
        for step in 0..=1000 {
            let value = step as f64 / 10.0;
            let color = scale.color(value).unwrap();
            assert_eq!(palette.iter().filter(|&&c| c == color).count(), 1);
        }
    }

    #[test]
    fn values_outside_domain_clamp() {
        let scale = QuantizeScale::new(Extent { min: 10.0, max: 90.0 }, three()).unwrap();
        assert_eq!(scale.bucket(-5.0), Some(0));
        assert_eq!(scale.bucket(500.0), Some(2));
        assert_eq!(scale.bucket(f64::NAN), None);
    }

    #[test]
    fn degenerate_domain_maps_to_first_color() {
        let scale = QuantizeScale::new(Extent { min: 42.0, max: 42.0 }, three()).unwrap();
        assert_eq!(scale.thresholds().len(), 2);
        for value in [0.0, 42.0, 100.0] {
            assert_eq!(scale.color(value), Some(three()[0]));
        }
    }

    #[test]
    fn invert_extent_covers_domain() {
        let scale = QuantizeScale::new(Extent { min: 0.0, max: 30.0 }, three()).unwrap();
        assert_eq!(scale.invert_extent(0), Some((0.0, 10.0)));
        assert_eq!(scale.invert_extent(1), Some((10.0, 20.0)));
        assert_eq!(scale.invert_extent(2), Some((20.0, 30.0)));
        assert_eq!(scale.invert_extent(3), None);
    }

    #[test]
    fn rejects_short_palettes_and_bad_domains() {
        assert!(QuantizeScale::new(Extent { min: 0.0, max: 1.0 }, vec![Rgb::from_u32(0)]).is_err());
        assert!(QuantizeScale::new(Extent { min: 2.0, max: 1.0 }, three()).is_err());
        assert!(QuantizeScale::new(Extent { min: f64::NAN, max: 1.0 }, three()).is_err());
    }
}
