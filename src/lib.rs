//! Binary-encoded genetic algorithm engine.
//!
//! Candidate solutions are fixed-length bit strings decoded into problem
//! values by a codec. The engine evolves a population through selection,
//! crossover, mutation and optional elitism:
//!
//! - **GA core** ([`ga`]): genotypes, codecs, selection (tournament,
//!   roulette), one-/two-point crossover, bit-flip mutation, configuration
//!   presets and the generational runner.
//! - **Problems** ([`problems`]): bounded real-function minimization and
//!   the 0/1 knapsack problem with a hard capacity penalty.
//! - **Randomness** ([`random`]): seedable generator so that runs are
//!   reproducible.
//!
//! # Quick start
//!
//! ```
//! use u_bitga::ga::{GaConfig, GaRunner};
//! use u_bitga::problems::KnapsackProblem;
//!
//! let problem = KnapsackProblem::reference();
//! let config = GaConfig::knapsack().with_seed(1);
//! let result = GaRunner::run(&problem, &config).unwrap();
//! assert!(problem.is_feasible(&result.best_phenotype));
//! ```
//!
//! # Logging
//!
//! Runs emit [`tracing`] events: `info` at start and end of a run, `debug`
//! once per generation. Nothing is printed unless a subscriber is installed.

pub mod error;
pub mod ga;
pub mod problems;
pub mod random;

pub use error::{ConfigError, EncodeError, GaError};
