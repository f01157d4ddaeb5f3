//! Fixed-step numerical integration and derived Fourier components.

use std::f64::consts::TAU;

use crate::mapper::map;

/// Approximate a definite integral by a fixed-step Riemann sum.
///
/// The step width is the distance between consecutive sample x-values and
/// the sum runs over the same `n` sample points the sampler would produce,
/// so accuracy is solely a function of `n`. This is simple, not adaptive
/// quadrature: no error estimate, no refinement. A degenerate sample count
/// (`n == 1`) propagates as a non-finite result.
pub fn integrate(f: impl Fn(f64) -> f64, start: f64, end: f64, n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let last = (n - 1) as f64;
    let step = map(1.0, 0.0, last, start, end) - map(0.0, 0.0, last, start, end);
    let mut sum = 0.0;
    for i in 0..n {
        let x = map(i as f64, 0.0, last, start, end);
        sum += step * f(x);
    }
    sum
}

/// Compute the cosine (real) and sine (imaginary) transform components of
/// `f` at the queried `frequency`.
///
/// The integration window is `[0, periods / frequency]`, a fixed multiple
/// of the oscillation period at that frequency. Components are recomputed
/// from scratch on every call; there is no memoization across frequency
/// queries.
pub fn fourier_components(
    f: impl Fn(f64) -> f64,
    frequency: f64,
    periods: f64,
    n: usize,
) -> (f64, f64) {
    let window = periods / frequency;
    let re = integrate(|t| f(t) * (TAU * frequency * t).cos(), 0.0, window, n);
    let im = integrate(|t| f(t) * (TAU * frequency * t).sin(), 0.0, window, n);
    (re, im)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_function_integrates_to_zero() {
        for &n in &[2usize, 10, 1000] {
            assert_eq!(integrate(|_| 0.0, -5.0, 17.0, n), 0.0);
        }
        assert_eq!(integrate(|_| 0.0, 0.0, 1.0, 0), 0.0);
    }

    #[test]
    fn constant_function_error_shrinks_with_sample_count() {
        let exact = 3.0 * 7.0;
        let coarse = (integrate(|_| 3.0, 1.0, 8.0, 10) - exact).abs();
        let fine = (integrate(|_| 3.0, 1.0, 8.0, 1000) - exact).abs();
        assert!(coarse > fine);
        assert!(fine < 0.05);
    }

    #[test]
    fn linear_function_approximates_analytic_integral() {
        // ∫0..4 x dx = 8
        let approx = integrate(|x| x, 0.0, 4.0, 10_000);
        assert!((approx - 8.0).abs() < 0.01);
    }

    #[test]
    fn reversed_range_negates_the_integral() {
        let forward = integrate(|x| x * x, 0.0, 2.0, 5000);
        let backward = integrate(|x| x * x, 2.0, 0.0, 5000);
        assert!((forward + backward).abs() < 1e-9);
    }

    #[test]
    fn fourier_components_peak_at_matching_frequency() {
        let wave = |t: f64| (TAU * 2.0 * t).cos();
        let (re_match, _) = fourier_components(wave, 2.0, 40.0, 20_000);
        let (re_miss, _) = fourier_components(wave, 5.0, 40.0, 20_000);
        assert!(re_match > re_miss.abs() * 4.0);
    }

    #[test]
    fn sine_component_picks_up_phase_shifted_wave() {
        let wave = |t: f64| (TAU * 3.0 * t).sin();
        let (_, im) = fourier_components(wave, 3.0, 40.0, 20_000);
        // ∫ sin² over the window is half the window width.
        let window = 40.0 / 3.0;
        assert!((im - window / 2.0).abs() < 0.1);
    }
}
