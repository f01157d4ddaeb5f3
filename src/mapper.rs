//! Linear coordinate mapping between ranges.

/// Map a value from one linear range onto another.
///
/// Returns exactly `to_min` when `v == from_min` and exactly `to_max` when
/// `v == from_max`; values outside the source range extrapolate linearly.
/// The source range may run in either direction, as may the target range.
///
/// When `from_min == from_max` the result is non-finite (NaN or infinity);
/// avoiding degenerate source ranges is the caller's responsibility.
pub fn map(v: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
    let t = (v - from_min) / (from_max - from_min);
    to_min * (1.0 - t) + to_max * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_exactly() {
        assert_eq!(map(0.1, 0.1, 0.7, 0.3, 0.9), 0.3);
        assert_eq!(map(0.7, 0.1, 0.7, 0.3, 0.9), 0.9);
        assert_eq!(map(-5.0, -5.0, 5.0, 600.0, 0.0), 600.0);
        assert_eq!(map(5.0, -5.0, 5.0, 600.0, 0.0), 0.0);
    }

    #[test]
    fn midpoint_interpolates() {
        let mapped = map(5.0, 0.0, 10.0, 100.0, 200.0);
        assert!((mapped - 150.0).abs() < 1e-12);
    }

    #[test]
    fn values_outside_range_extrapolate() {
        let mapped = map(20.0, 0.0, 10.0, 0.0, 100.0);
        assert!((mapped - 200.0).abs() < 1e-9);
        let mapped = map(-10.0, 0.0, 10.0, 0.0, 100.0);
        assert!((mapped + 100.0).abs() < 1e-9);
    }

    #[test]
    fn inverted_target_range_maps_downward() {
        let mapped = map(2.5, 0.0, 10.0, 600.0, 0.0);
        assert!((mapped - 450.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_source_range_is_non_finite() {
        assert!(!map(1.0, 3.0, 3.0, 0.0, 100.0).is_finite());
    }
}
