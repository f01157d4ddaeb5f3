//! Function sampling and cached curves.

use std::collections::HashMap;
use std::f64::consts::TAU;

use crate::geom::Point;
use crate::mapper::map;

/// Time-varying parameters of the base oscillatory function.
///
/// Per-frame state is carried explicitly rather than captured by closures:
/// the animation driver re-derives the parameters once per tick and passes
/// them into pure evaluation calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    /// Oscillation frequency in cycles per plot unit.
    pub frequency: f64,
    /// Phase offset in radians.
    pub phase: f64,
}

impl WaveParams {
    /// Create parameters from a frequency and a phase.
    pub const fn new(frequency: f64, phase: f64) -> Self {
        Self { frequency, phase }
    }

    /// Derive slowly varying parameters from a monotonic clock reading.
    pub fn drift(elapsed_secs: f64) -> Self {
        Self {
            frequency: 2.0 + 0.5 * (elapsed_secs * 0.25).sin(),
            phase: 0.5 * elapsed_secs,
        }
    }

    /// Evaluate the base wave at `t`.
    pub fn eval(self, t: f64) -> f64 {
        (TAU * self.frequency * t + self.phase).cos()
    }
}

impl Default for WaveParams {
    fn default() -> Self {
        Self::new(2.0, 0.0)
    }
}

/// Sample a function over `[start, end]` at a fixed number of points.
///
/// Point `i` has `x = map(i, 0, n - 1, start, end)`, so the first point
/// lands exactly on `start` and the last exactly on `end`. Sampling is
/// side-effect-free: identical arguments and a pure `f` yield identical
/// output. `n == 1` hits the mapper's degenerate division and produces a
/// single non-finite x; this is not guarded.
pub fn sample(f: impl Fn(f64) -> f64, start: f64, end: f64, n: usize) -> Vec<Point> {
    let mut points = Vec::with_capacity(n);
    if n == 0 {
        return points;
    }
    let last = (n - 1) as f64;
    for i in 0..n {
        let x = map(i as f64, 0.0, last, start, end);
        points.push(Point::new(x, f(x)));
    }
    points
}

/// Cache of sampled curves keyed by logical curve name.
///
/// Only curves whose generating function is time-invariant belong here; the
/// cache never recomputes on its own, so callers must invalidate an entry
/// if its generating function changes.
#[derive(Debug, Clone, Default)]
pub struct CurveCache {
    entries: HashMap<String, Vec<Point>>,
}

impl CurveCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached points for `name`, sampling them on first use.
    pub fn get_or_sample(
        &mut self,
        name: &str,
        f: impl Fn(f64) -> f64,
        start: f64,
        end: f64,
        n: usize,
    ) -> &[Point] {
        if !self.entries.contains_key(name) {
            self.entries.insert(name.to_owned(), sample(f, start, end, n));
        }
        self.entries.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check whether a curve is cached.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Drop one cached curve. Returns true if an entry was removed.
    pub fn invalidate(&mut self, name: &str) -> bool {
        self.entries.remove(name).is_some()
    }

    /// Drop all cached curves.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn sample_hits_both_domain_endpoints() {
        let points = sample(|x| x * x, -2.0, 3.0, 11);
        assert_eq!(points.len(), 11);
        assert_eq!(points.first().unwrap().x, -2.0);
        assert_eq!(points.last().unwrap().x, 3.0);
    }

    #[test]
    fn sample_is_deterministic() {
        let a = sample(f64::sin, 0.0, 10.0, 100);
        let b = sample(f64::sin, 0.0, 10.0, 100);
        assert_eq!(a, b);
    }

    #[test]
    fn sample_evaluates_function_at_each_x() {
        let points = sample(|x| 2.0 * x + 1.0, 0.0, 4.0, 5);
        for point in &points {
            assert!((point.y - (2.0 * point.x + 1.0)).abs() < 1e-12);
        }
        assert!((points[2].x - 2.0).abs() < 1e-12);
    }

    #[test]
    fn sample_with_zero_points_is_empty() {
        assert!(sample(f64::sin, 0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn sample_with_one_point_is_non_finite() {
        let points = sample(|x| x, 0.0, 1.0, 1);
        assert_eq!(points.len(), 1);
        assert!(!points[0].x.is_finite());
    }

    #[test]
    fn cache_samples_once_per_name() {
        let calls = Cell::new(0usize);
        let f = |x: f64| {
            calls.set(calls.get() + 1);
            x
        };
        let mut cache = CurveCache::new();
        cache.get_or_sample("line", f, 0.0, 1.0, 10);
        cache.get_or_sample("line", f, 0.0, 1.0, 10);
        assert_eq!(calls.get(), 10);
        assert!(cache.contains("line"));
    }

    #[test]
    fn invalidate_forces_resampling() {
        let calls = Cell::new(0usize);
        let f = |x: f64| {
            calls.set(calls.get() + 1);
            x
        };
        let mut cache = CurveCache::new();
        cache.get_or_sample("line", f, 0.0, 1.0, 10);
        assert!(cache.invalidate("line"));
        assert!(!cache.invalidate("line"));
        cache.get_or_sample("line", f, 0.0, 1.0, 10);
        assert_eq!(calls.get(), 20);
    }

    #[test]
    fn wave_params_drift_is_bounded() {
        for step in 0..200 {
            let params = WaveParams::drift(step as f64 * 0.1);
            assert!(params.frequency >= 1.5 && params.frequency <= 2.5);
        }
    }
}
