//! Binary-encoded Genetic Algorithm framework.
//!
//! A generic GA over fixed-length bit strings. Users describe their problem
//! by implementing [`BinaryProblem`]: a [`Codec`] mapping genotypes to
//! phenotypes, plus a fitness function. Selection, crossover, mutation,
//! elitism and replacement are provided by the framework and chosen through
//! [`GaConfig`].
//!
//! # Core Traits
//!
//! - [`Codec`]: Genotype ⇄ phenotype mapping with a fixed genotype length
//! - [`BinaryProblem`]: Problem definition (codec, evaluation, initialization)
//!
//! # Key Types
//!
//! - [`Genotype`]: Fixed-length bit string
//! - [`GaConfig`]: Algorithm parameters (population size, operators, presets)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best solution plus per-generation [`GenerationStats`]
//!
//! # Submodules
//!
//! - [`operators`]: One-point / two-point crossover and bit-flip mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod codec;
mod config;
mod genotype;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use codec::{BitCodec, Codec, RealCodec};
pub use config::{BestTracking, Elitism, GaConfig};
pub use genotype::Genotype;
pub use operators::Crossover;
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use selection::Selection;
pub use types::{BinaryProblem, Direction, Phenotype};
