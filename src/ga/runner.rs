//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → elite carry-over → selection → crossover →
//! mutation → replacement → repeat, for a fixed number of generations.

use super::codec::Codec;
use super::config::{BestTracking, GaConfig};
use super::genotype::Genotype;
use super::operators::bit_flip_mutation;
use super::types::{BinaryProblem, Direction, Phenotype};
use crate::error::GaError;
use crate::random::create_rng;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info};

/// Snapshot of one evaluated population.
///
/// Generation 0 is the initial random population; generation `g ≥ 1` is
/// the population produced by the `g`-th round of breeding.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    pub generation: usize,

    /// Fitness of the best individual in this population.
    pub best_fitness: f64,

    /// Arithmetic mean fitness of the population.
    pub mean_fitness: f64,

    /// Genotype of the best individual in this population.
    pub best: Genotype,
}

impl GenerationStats {
    fn capture(
        generation: usize,
        population: &[Genotype],
        fitness: &[f64],
        direction: Direction,
    ) -> Self {
        let best_idx = best_index(fitness, direction);
        let mean_fitness = fitness.iter().sum::<f64>() / fitness.len() as f64;
        Self {
            generation,
            best_fitness: fitness[best_idx],
            mean_fitness,
            best: population[best_idx].clone(),
        }
    }
}

/// Result of a GA optimization run.
///
/// Contains the reported best solution (see [`BestTracking`]) along with
/// the full per-generation history.
#[derive(Debug, Clone)]
pub struct GaResult<Ph> {
    /// The reported best genotype.
    pub best: Genotype,

    /// `best` decoded through the problem's codec.
    pub best_phenotype: Ph,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Generation in which `best` was found (0 = initial population).
    pub best_generation: usize,

    /// Total number of generations executed.
    pub generations: usize,

    /// Statistics for the initial population and every generation after it.
    ///
    /// Always holds `generations + 1` entries.
    pub history: Vec<GenerationStats>,
}

impl<Ph> GaResult<Ph> {
    /// Best fitness of each population, initial one first.
    pub fn fitness_history(&self) -> Vec<f64> {
        self.history.iter().map(|s| s.best_fitness).collect()
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_bitga::ga::{GaConfig, GaRunner};
/// use u_bitga::problems::FunctionProblem;
///
/// let problem = FunctionProblem::cubic();
/// let config = GaConfig::function_minimization().with_seed(42);
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.history.len(), config.max_generations + 1);
/// assert!((-10.0..=10.0).contains(&result.best_phenotype));
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from [`GaConfig::seed`].
    ///
    /// Without a seed, a random one is drawn from the thread-local generator.
    pub fn run<P: BinaryProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<Phenotype<P>>, GaError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs the GA drawing every random decision from `rng`.
    ///
    /// # Errors
    /// - [`GaError::Configuration`] before any evaluation if the
    ///   configuration is invalid for this problem
    /// - [`GaError::Evaluation`] as soon as the fitness function fails
    /// - [`GaError::DegenerateSelection`] if a roulette spin is exhausted
    pub fn run_with_rng<P, R>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult<Phenotype<P>>, GaError>
    where
        P: BinaryProblem,
        R: Rng,
    {
        let genotype_len = problem.codec().genotype_len();
        config.validate_for(genotype_len)?;
        let elite_count = config.elite_count();

        info!(
            population_size = config.population_size,
            generations = config.max_generations,
            genotype_len,
            selection = config.selection.name(),
            crossover = config.crossover.name(),
            elite_count,
            "starting GA run"
        );

        // 1. Initialize population
        let mut population: Vec<Genotype> = (0..config.population_size)
            .map(|_| problem.random_genotype(rng))
            .collect();

        // 2. Evaluate initial population
        let mut fitness = evaluate_population(problem, &population, config.parallel, 0)?;

        // 3. Track best
        let initial = GenerationStats::capture(0, &population, &fitness, config.direction);
        let mut best_ever = initial.clone();
        let mut history = Vec::with_capacity(config.max_generations + 1);
        history.push(initial);

        // 4. Evolutionary loop
        for generation in 1..=config.max_generations {
            population = breed(&population, &fitness, config, elite_count, rng)?;
            fitness = evaluate_population(problem, &population, config.parallel, generation)?;

            let stats =
                GenerationStats::capture(generation, &population, &fitness, config.direction);
            if config
                .direction
                .is_better(stats.best_fitness, best_ever.best_fitness)
            {
                best_ever = stats.clone();
            }

            debug!(
                generation,
                best_fitness = stats.best_fitness,
                mean_fitness = stats.mean_fitness,
                best = %stats.best,
                "generation complete"
            );
            problem.on_generation(&stats);
            history.push(stats);
        }

        let reported = match config.tracking {
            BestTracking::BestEver => best_ever,
            BestTracking::FinalGeneration => match history.last() {
                Some(last) => last.clone(),
                None => best_ever,
            },
        };
        let best_phenotype = problem.codec().decode(&reported.best);

        info!(
            best_fitness = reported.best_fitness,
            best_generation = reported.generation,
            best = %reported.best,
            "GA run finished"
        );

        Ok(GaResult {
            best: reported.best,
            best_phenotype,
            best_fitness: reported.best_fitness,
            best_generation: reported.generation,
            generations: config.max_generations,
            history,
        })
    }
}

/// Builds the next population: elites first, then mutated offspring until
/// exactly `config.population_size` individuals are present.
fn breed<R: Rng>(
    population: &[Genotype],
    fitness: &[f64],
    config: &GaConfig,
    elite_count: usize,
    rng: &mut R,
) -> Result<Vec<Genotype>, GaError> {
    let size = config.population_size;
    let mut next_gen: Vec<Genotype> = Vec::with_capacity(size);

    // Elite preservation
    if elite_count > 0 {
        next_gen.extend(
            ranked_indices(fitness, config.direction)
                .into_iter()
                .take(elite_count)
                .map(|i| population[i].clone()),
        );
    }

    // Generate offspring
    while next_gen.len() < size {
        let p1 = config.selection.select(fitness, config.direction, rng)?;
        let p2 = config.selection.select(fitness, config.direction, rng)?;

        let recombine = config.crossover_rate >= 1.0 || rng.random::<f64>() < config.crossover_rate;
        let (mut child1, mut child2) = if recombine {
            config.crossover.apply(&population[p1], &population[p2], rng)
        } else {
            (population[p1].clone(), population[p2].clone())
        };

        bit_flip_mutation(&mut child1, config.mutation_rate, rng);
        next_gen.push(child1);

        if next_gen.len() < size {
            bit_flip_mutation(&mut child2, config.mutation_rate, rng);
            next_gen.push(child2);
        }
    }

    Ok(next_gen)
}

/// Evaluate all individuals, returning fitness aligned with `population`.
fn evaluate_population<P: BinaryProblem>(
    problem: &P,
    population: &[Genotype],
    parallel: bool,
    generation: usize,
) -> Result<Vec<f64>, GaError> {
    if parallel {
        return evaluate_parallel(problem, population, generation);
    }
    population
        .iter()
        .enumerate()
        .map(|(index, genotype)| score(problem, generation, index, genotype))
        .collect()
}

#[cfg(feature = "parallel")]
fn evaluate_parallel<P: BinaryProblem>(
    problem: &P,
    population: &[Genotype],
    generation: usize,
) -> Result<Vec<f64>, GaError> {
    // Indexed collect keeps population order.
    population
        .par_iter()
        .enumerate()
        .map(|(index, genotype)| score(problem, generation, index, genotype))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn evaluate_parallel<P: BinaryProblem>(
    problem: &P,
    population: &[Genotype],
    generation: usize,
) -> Result<Vec<f64>, GaError> {
    evaluate_population(problem, population, false, generation)
}

/// Decode and evaluate a single individual.
fn score<P: BinaryProblem>(
    problem: &P,
    generation: usize,
    index: usize,
    genotype: &Genotype,
) -> Result<f64, GaError> {
    let phenotype = problem.codec().decode(genotype);
    problem
        .evaluate(&phenotype)
        .map_err(|err| GaError::evaluation(generation, index, err))
}

/// Index of the best fitness; the earliest index wins ties.
fn best_index(fitness: &[f64], direction: Direction) -> usize {
    (1..fitness.len()).fold(0, |best, i| {
        if direction.is_better(fitness[i], fitness[best]) {
            i
        } else {
            best
        }
    })
}

/// Population indices sorted best first (stable, NaN last).
fn ranked_indices(fitness: &[f64], direction: Direction) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..fitness.len()).collect();
    indices.sort_by(|&a, &b| direction.best_first(fitness[a], fitness[b]));
    indices
}

// ============================================================================
// Tests
// ============================================================================
