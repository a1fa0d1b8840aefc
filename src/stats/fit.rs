//! Least-squares fit of the flight length CDF to a 2D Poisson model.
//!
//! For points scattered as a Poisson process of density `λ`, the distance to
//! the nearest neighbour follows `F(r) = 1 - exp(-λπr²)`. The single parameter
//! is fitted to the empirical CDF with Levenberg–Marquardt damping on the
//! scalar normal equation `JᵀJ·Δ = -Jᵀr`.

use super::cdf::CdfPoint;
use serde::{Deserialize, Serialize};
use std::f64::consts::{LN_2, PI};

const EPS: f64 = 1e-300;
const MU_MAX: f64 = 1e12;
const MU_MIN: f64 = 1e-12;

/// `F(r) = 1 - exp(-λπr²)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PoissonCdf {
    pub lambda: f64,
}

impl PoissonCdf {
    pub fn new(lambda: f64) -> Self {
        Self { lambda }
    }

    #[inline]
    pub fn evaluate(&self, r: f64) -> f64 {
        1.0 - (-self.lambda * PI * r * r).exp()
    }

    /// `∂F/∂λ` at `r`.
    #[inline]
    fn d_lambda(&self, r: f64) -> f64 {
        PI * r * r * (-self.lambda * PI * r * r).exp()
    }

    pub fn evaluate_all(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&r| self.evaluate(r)).collect()
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FitOptions {
    /// Starting density. When unset the start is taken from the data so that
    /// the model's median matches the empirical median.
    pub initial_lambda: Option<f64>,
    pub max_iterations: usize,
    /// Relative step size below which the fit is considered converged.
    pub tolerance: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            initial_lambda: None,
            max_iterations: 200,
            tolerance: 1e-10,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoissonFit {
    pub lambda: f64,
    pub residual_sum_sq: f64,
    pub iterations: usize,
    pub converged: bool,
}

impl PoissonFit {
    pub fn model(&self) -> PoissonCdf {
        PoissonCdf::new(self.lambda)
    }
}

#[derive(Default)]
struct NormalEquationAccum {
    jtj: f64,
    jtr: f64,
}

impl NormalEquationAccum {
    fn accumulate(&mut self, model: &PoissonCdf, point: &CdfPoint) {
        let j = model.d_lambda(point.value);
        let r = model.evaluate(point.value) - point.probability;
        self.jtj += j * j;
        self.jtr += j * r;
    }
}

fn residual_sum_sq(model: &PoissonCdf, points: &[CdfPoint]) -> f64 {
    let sse: f64 = points
        .iter()
        .map(|p| {
            let r = model.evaluate(p.value) - p.probability;
            r * r
        })
        .sum();
    if sse.is_finite() {
        sse
    } else {
        f64::INFINITY
    }
}

/// Density whose model median equals the empirical median:
/// `F(m) = 1/2` gives `λ = ln 2 / (π·m²)`. Falls back to `1.0` when the
/// median is zero or the result is not a positive finite number.
pub fn median_lambda(points: &[CdfPoint]) -> f64 {
    let median = points
        .iter()
        .find(|p| p.probability >= 0.5)
        .map(|p| p.value.abs());
    match median {
        Some(m) if m > 0.0 => {
            let lambda = LN_2 / (PI * m * m);
            if lambda.is_finite() && lambda > 0.0 {
                lambda
            } else {
                1.0
            }
        }
        _ => 1.0,
    }
}

/// Fits `λ` to the empirical CDF. Returns `None` when there are no points.
pub fn fit_poisson_lambda(points: &[CdfPoint], options: &FitOptions) -> Option<PoissonFit> {
    if points.is_empty() {
        return None;
    }

    let initial = options
        .initial_lambda
        .unwrap_or_else(|| median_lambda(points));
    let mut model = PoissonCdf::new(initial);
    let mut cost = residual_sum_sq(&model, points);
    let mut mu = 1e-3;
    let mut converged = false;
    let mut iterations = 0;

    while iterations < options.max_iterations {
        iterations += 1;
        let mut accum = NormalEquationAccum::default();
        for point in points {
            accum.accumulate(&model, point);
        }
        if accum.jtj <= EPS {
            // Model saturated over every point; no gradient to follow.
            break;
        }

        let mut accepted = None;
        while mu <= MU_MAX {
            let delta = -accum.jtr / (accum.jtj * (1.0 + mu));
            let candidate = PoissonCdf::new(model.lambda + delta);
            let candidate_cost = residual_sum_sq(&candidate, points);
            if candidate_cost <= cost {
                model = candidate;
                cost = candidate_cost;
                mu = (mu * 0.1).max(MU_MIN);
                accepted = Some(delta);
                break;
            }
            mu *= 10.0;
        }

        match accepted {
            Some(delta) if delta.abs() > options.tolerance * (model.lambda.abs() + options.tolerance) => {}
            _ => {
                converged = true;
                break;
            }
        }
    }

    Some(PoissonFit {
        lambda: model.lambda,
        residual_sum_sq: cost,
        iterations,
        converged,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::cdf::empirical_cdf;

    fn exact_points(lambda: f64) -> Vec<CdfPoint> {
        let model = PoissonCdf::new(lambda);
        (1..=40)
            .map(|i| {
                let r = 0.5 * i as f64;
                CdfPoint {
                    value: r,
                    probability: model.evaluate(r),
                }
            })
            .collect()
    }

    #[test]
    fn recovers_lambda_from_exact_curve() {
        for lambda in [0.01, 0.05, 2.0] {
            let fit = fit_poisson_lambda(&exact_points(lambda), &FitOptions::default()).unwrap();
            assert!(fit.converged, "lambda={lambda} did not converge: {fit:?}");
            assert!(
                (fit.lambda - lambda).abs() < 1e-6,
                "expected {lambda}, got {}",
                fit.lambda
            );
            assert!(fit.residual_sum_sq < 1e-12);
        }
    }

    #[test]
    fn fits_sampled_lengths() {
        // Inverse-CDF samples on a regular probability grid.
        let lambda = 0.05;
        let lengths: Vec<f64> = (1..300)
            .map(|i| {
                let u = i as f64 / 300.0;
                (-(1.0 - u).ln() / (lambda * PI)).sqrt()
            })
            .collect();
        let points = empirical_cdf(&lengths);
        let fit = fit_poisson_lambda(&points, &FitOptions::default()).unwrap();
        assert!(fit.converged);
        assert!(
            (fit.lambda - lambda).abs() < 0.005,
            "expected about {lambda}, got {}",
            fit.lambda
        );
    }

    #[test]
    fn long_flights_fit_from_median_start() {
        // Every length is above 15: a unit start saturates each point.
        let lambda = 1e-5;
        let lengths: Vec<f64> = (1..100)
            .map(|i| {
                let u = i as f64 / 100.0;
                (-(1.0 - u).ln() / (lambda * PI)).sqrt()
            })
            .collect();
        assert!(lengths[0] > 15.0);
        let points = empirical_cdf(&lengths);

        let unit_start = FitOptions {
            initial_lambda: Some(1.0),
            ..FitOptions::default()
        };
        let stuck = fit_poisson_lambda(&points, &unit_start).unwrap();
        assert_eq!(stuck.lambda, 1.0);
        assert!(!stuck.converged);

        let fit = fit_poisson_lambda(&points, &FitOptions::default()).unwrap();
        assert!(fit.converged, "{fit:?}");
        assert!(
            (fit.lambda - lambda).abs() < 1e-6,
            "expected about {lambda}, got {}",
            fit.lambda
        );
    }

    #[test]
    fn median_start_matches_half_probability() {
        let points = empirical_cdf(&[1.0, 2.0, 3.0, 4.0]);
        let lambda = median_lambda(&points);
        assert!((PoissonCdf::new(lambda).evaluate(2.0) - 0.5).abs() < 1e-12);
        assert_eq!(median_lambda(&empirical_cdf(&[0.0, 0.0, 1.0])), 1.0);
    }

    #[test]
    fn empty_input_has_no_fit() {
        assert!(fit_poisson_lambda(&[], &FitOptions::default()).is_none());
    }

    #[test]
    fn model_is_a_cdf() {
        let model = PoissonCdf::new(0.2);
        assert_eq!(model.evaluate(0.0), 0.0);
        assert!(model.evaluate(100.0) > 0.999_999);
        let values = model.evaluate_all(&[0.5, 1.0, 2.0]);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }
}
