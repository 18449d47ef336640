//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::operators::Crossover;
use super::selection::Selection;
use super::types::Direction;
use crate::error::ConfigError;

/// How many of the best individuals survive unchanged into the next generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Elitism {
    /// Carry forward exactly this many individuals (0 disables elitism).
    Count(usize),
    /// Carry forward `floor(ratio * population_size)` individuals.
    Ratio(f64),
}

impl Elitism {
    /// No individual is carried over.
    pub const NONE: Elitism = Elitism::Count(0);

    /// Number of elites for a population of `population_size`.
    pub fn count(&self, population_size: usize) -> usize {
        match *self {
            Elitism::Count(n) => n,
            Elitism::Ratio(r) => (population_size as f64 * r) as usize,
        }
    }
}

impl Default for Elitism {
    fn default() -> Self {
        Elitism::Count(1)
    }
}

/// Which individual a run reports as its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BestTracking {
    /// Best individual over every evaluated population, initial one included.
    #[default]
    BestEver,
    /// Best individual of the last population only.
    FinalGeneration,
}

/// Configuration for the binary Genetic Algorithm.
///
/// Controls population size, operator choice and rates, elitism,
/// optimization direction and termination.
///
/// # Defaults
///
/// ```
/// use u_bitga::ga::{Direction, GaConfig};
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 10);
/// assert_eq!(config.max_generations, 50);
/// assert_eq!(config.direction, Direction::Minimize);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_bitga::ga::{Crossover, Direction, Elitism, GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(150)
///     .with_selection(Selection::Roulette)
///     .with_crossover(Crossover::TwoPoint)
///     .with_elitism(Elitism::Count(1))
///     .with_mutation_rate(0.3)
///     .with_direction(Direction::Maximize);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GaConfig {
    /// Number of individuals in the population. Fixed for the run.
    pub population_size: usize,

    /// Number of generations to evolve. The run always completes all of them.
    pub max_generations: usize,

    /// Selection strategy for choosing parents.
    pub selection: Selection,

    /// Crossover operator applied to each selected pair.
    pub crossover: Crossover,

    /// Probability of recombining a selected pair (0.0–1.0).
    ///
    /// When crossover is skipped, both parents are cloned unchanged before
    /// mutation.
    pub crossover_rate: f64,

    /// Per-bit flip probability applied to every offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Individuals carried unchanged into the next generation.
    pub elitism: Elitism,

    /// Whether lower or higher fitness is better.
    pub direction: Direction,

    /// Which individual is reported as the run's best.
    pub tracking: BestTracking,

    /// Whether to evaluate individuals in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` cargo feature. Results are
    /// identical to sequential evaluation.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed. Ignored by
    /// [`GaRunner::run_with_rng`](super::GaRunner::run_with_rng).
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            max_generations: 50,
            selection: Selection::default(),
            crossover: Crossover::default(),
            crossover_rate: 1.0,
            mutation_rate: 0.01,
            elitism: Elitism::default(),
            direction: Direction::default(),
            tracking: BestTracking::default(),
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the crossover operator.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the per-bit mutation rate.
    ///
    /// Not clamped: an out-of-range rate is reported by [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the elitism policy.
    pub fn with_elitism(mut self, elitism: Elitism) -> Self {
        self.elitism = elitism;
        self
    }

    /// Carries forward the best `n` individuals each generation.
    pub fn with_elite_count(self, n: usize) -> Self {
        self.with_elitism(Elitism::Count(n))
    }

    /// Carries forward `floor(ratio * population_size)` individuals.
    pub fn with_elite_ratio(self, ratio: f64) -> Self {
        self.with_elitism(Elitism::Ratio(ratio))
    }

    /// Sets the optimization direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets how the reported best individual is chosen.
    pub fn with_tracking(mut self, tracking: BestTracking) -> Self {
        self.tracking = tracking;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Convenience builder for setting tournament size.
    ///
    /// Equivalent to `.with_selection(Selection::Tournament(k))`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Number of elites this configuration carries over each generation.
    pub fn elite_count(&self) -> usize {
        self.elitism.count(self.population_size)
    }

    /// Preset for bounded real-function minimization.
    ///
    /// - Population: 10, Generations: 50, Mutation: 0.01 per bit
    /// - Binary tournament, one-point crossover, no elitism
    /// - Reports the best of the final generation
    pub fn function_minimization() -> Self {
        Self {
            elitism: Elitism::NONE,
            tracking: BestTracking::FinalGeneration,
            ..Self::default()
        }
    }

    /// Preset for 0/1 knapsack maximization.
    ///
    /// - Population: 150, Generations: 50, Mutation: 0.3 per bit
    /// - Roulette selection, two-point crossover, single elite
    /// - Reports the best individual ever seen
    pub fn knapsack() -> Self {
        Self {
            population_size: 150,
            max_generations: 50,
            selection: Selection::Roulette,
            crossover: Crossover::TwoPoint,
            mutation_rate: 0.3,
            elitism: Elitism::Count(1),
            direction: Direction::Maximize,
            tracking: BestTracking::BestEver,
            ..Self::default()
        }
    }

    /// Validates the problem-independent parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange(self.mutation_rate));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(ConfigError::CrossoverRateOutOfRange(self.crossover_rate));
        }
        if let Elitism::Ratio(r) = self.elitism {
            if !(0.0..=1.0).contains(&r) {
                return Err(ConfigError::EliteRatioOutOfRange(r));
            }
        }
        let elite = self.elite_count();
        if elite > self.population_size {
            return Err(ConfigError::EliteCountExceedsPopulation {
                elite,
                population: self.population_size,
            });
        }
        if let Selection::Tournament(k) = self.selection {
            if k == 0 || k > self.population_size {
                return Err(ConfigError::InvalidTournamentSize {
                    size: k,
                    population: self.population_size,
                });
            }
        }
        Ok(())
    }

    /// Validates the configuration against a problem's genotype length.
    pub fn validate_for(&self, genotype_len: usize) -> Result<(), ConfigError> {
        self.validate()?;
        let required = self.crossover.min_genotype_len();
        if genotype_len < required {
            return Err(ConfigError::GenotypeTooShort {
                crossover: self.crossover.name(),
                required,
                len: genotype_len,
            });
        }
        Ok(())
    }
}
