//! Aggregate statistics over extracted flights: per-series summaries,
//! histograms, the empirical CDF of flight lengths and its Poisson fit.

mod aggregate;
mod cdf;
mod fit;
mod histogram;

pub use aggregate::{SegmentAggregate, Series, SeriesSummary};
pub use cdf::{empirical_cdf, CdfPoint};
pub use fit::{fit_poisson_lambda, median_lambda, FitOptions, PoissonCdf, PoissonFit};
pub use histogram::Histogram;
