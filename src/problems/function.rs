//! Minimization of a scalar function over a bounded interval.

use crate::error::ConfigError;
use crate::ga::{BinaryProblem, RealCodec};
use std::convert::Infallible;

/// The cubic `f(x) = x³ - 6x + 14`.
///
/// On `[-10, 10]` it has a local minimum at `x = √2` with
/// `f(√2) = 14 - 4√2 ≈ 8.343`, and its global minimum at the boundary
/// `x = -10`.
pub fn cubic_objective(x: f64) -> f64 {
    x.powi(3) - 6.0 * x + 14.0
}

/// A real function `f: [lo, hi] → ℝ` searched through a fixed-point codec.
///
/// Evaluation simply applies `f` to the decoded `x`. The problem itself is
/// direction-agnostic; pair it with [`Direction::Minimize`](crate::ga::Direction)
/// (the [`GaConfig::function_minimization`](crate::ga::GaConfig::function_minimization)
/// preset) to minimize.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::{GaConfig, GaRunner};
/// use u_bitga::problems::FunctionProblem;
///
/// // Minimize (x - 3)^2 on [0, 8] with 12-bit resolution.
/// let problem = FunctionProblem::new(0.0, 8.0, 12, |x: f64| (x - 3.0).powi(2)).unwrap();
/// let config = GaConfig::default().with_population_size(30).with_seed(7);
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert!((result.best_phenotype - 3.0).abs() < 0.5);
/// ```
#[derive(Clone)]
pub struct FunctionProblem<F> {
    codec: RealCodec,
    objective: F,
}

impl<F> FunctionProblem<F>
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    /// Searches `objective` over `[lo, hi]` with `width`-bit genotypes.
    pub fn new(lo: f64, hi: f64, width: u32, objective: F) -> Result<Self, ConfigError> {
        Ok(Self::with_codec(RealCodec::new(lo, hi, width)?, objective))
    }

    /// Searches `objective` through an existing codec.
    pub fn with_codec(codec: RealCodec, objective: F) -> Self {
        Self { codec, objective }
    }

    /// Evaluates the objective at `x` directly.
    pub fn objective(&self, x: f64) -> f64 {
        (self.objective)(x)
    }
}

impl FunctionProblem<fn(f64) -> f64> {
    /// [`cubic_objective`] on `[-10, 10]` with a 10-bit codec.
    pub fn cubic() -> Self {
        let codec = RealCodec::new(-10.0, 10.0, 10).expect("static interval is valid");
        Self::with_codec(codec, cubic_objective)
    }
}

impl<F> std::fmt::Debug for FunctionProblem<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionProblem")
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}

impl<F> BinaryProblem for FunctionProblem<F>
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    type Codec = RealCodec;
    type Error = Infallible;

    fn codec(&self) -> &RealCodec {
        &self.codec
    }

    fn evaluate(&self, x: &f64) -> Result<f64, Infallible> {
        Ok((self.objective)(*x))
    }
}
