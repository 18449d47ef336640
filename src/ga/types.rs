//! Core trait definitions for the GA framework.
//!
//! [`BinaryProblem`] is the contract between the generic evolutionary loop
//! and a concrete problem: it names a [`Codec`] and scores decoded
//! phenotypes. [`Direction`] fixes whether lower or higher scores win.

use super::codec::Codec;
use super::genotype::Genotype;
use super::runner::GenerationStats;
use rand::Rng;
use std::cmp::Ordering;

/// Shorthand for the phenotype type of a problem's codec.
pub type Phenotype<P> = <<P as BinaryProblem>::Codec as Codec>::Phenotype;

/// Optimization direction.
///
/// NaN fitness never counts as better than anything and always ranks last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Lower fitness is better.
    #[default]
    Minimize,
    /// Higher fitness is better.
    Maximize,
}

impl Direction {
    /// Returns `true` if `a` is strictly better than `b`.
    pub fn is_better(self, a: f64, b: f64) -> bool {
        if a.is_nan() {
            return false;
        }
        if b.is_nan() {
            return true;
        }
        match self {
            Direction::Minimize => a < b,
            Direction::Maximize => a > b,
        }
    }

    /// Ordering that sorts the best fitness first and NaN last.
    pub fn best_first(self, a: f64, b: f64) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
                match self {
                    Direction::Minimize => ord,
                    Direction::Maximize => ord.reverse(),
                }
            }
        }
    }
}

/// Defines a binary-encoded optimization problem.
///
/// This is the trait users implement to plug their domain into the
/// generic loop. It covers:
///
/// 1. **Encoding**: the [`Codec`] that fixes genotype length and decoding
/// 2. **Evaluation**: the fitness of a decoded phenotype
/// 3. **Initialization**: how random genotypes are drawn (defaults to the codec)
///
/// Selection, crossover and mutation are generic over bit strings and are
/// chosen through [`GaConfig`](super::GaConfig), not implemented here.
///
/// # Thread Safety
///
/// `BinaryProblem` must be `Send + Sync` because the runner may evaluate
/// individuals in parallel when the `parallel` feature is enabled.
///
/// # Implementing
///
/// ```
/// use std::convert::Infallible;
/// use u_bitga::ga::{BinaryProblem, BitCodec};
///
/// struct OneMax {
///     codec: BitCodec,
/// }
///
/// impl BinaryProblem for OneMax {
///     type Codec = BitCodec;
///     type Error = Infallible;
///
///     fn codec(&self) -> &BitCodec {
///         &self.codec
///     }
///
///     fn evaluate(&self, bits: &Vec<bool>) -> Result<f64, Infallible> {
///         Ok(bits.iter().filter(|&&b| b).count() as f64)
///     }
/// }
/// ```
pub trait BinaryProblem: Send + Sync {
    /// Codec used to decode genotypes before evaluation.
    type Codec: Codec;

    /// Error reported by [`evaluate`](BinaryProblem::evaluate).
    ///
    /// Use [`std::convert::Infallible`] for total fitness functions.
    type Error: std::error::Error + Send + Sync + 'static;

    fn codec(&self) -> &Self::Codec;

    /// Scores a phenotype.
    ///
    /// Must be pure: the runner calls it once per individual per
    /// generation, possibly from several threads. An `Err` aborts the run.
    fn evaluate(
        &self,
        phenotype: &<Self::Codec as Codec>::Phenotype,
    ) -> Result<f64, Self::Error>;

    /// Creates a random genotype for the initial population.
    fn random_genotype<R: Rng>(&self, rng: &mut R) -> Genotype {
        self.codec().random_genotype(rng)
    }

    /// Called at the end of each generation with that generation's statistics.
    ///
    /// The default implementation is a no-op.
    fn on_generation(&self, _stats: &GenerationStats) {}
}
