//! End-to-end runs of the two bundled problems.

use u_bitga::ga::{
    BestTracking, BinaryProblem, Codec, Crossover, Direction, GaConfig, GaRunner, Selection,
};
use u_bitga::problems::{cubic_objective, FunctionProblem, Item, KnapsackProblem};
use u_bitga::{ConfigError, GaError};

/// Value/weight-ratio greedy that skips items which no longer fit.
fn greedy_value(items: &[Item], capacity: f64) -> f64 {
    let mut order: Vec<&Item> = items.iter().collect();
    order.sort_by(|a, b| (b.value / b.weight).total_cmp(&(a.value / a.weight)));

    let (mut weight, mut value) = (0.0, 0.0);
    for item in order {
        if weight + item.weight <= capacity {
            weight += item.weight;
            value += item.value;
        }
    }
    value
}

// ---- Function minimization ----

#[test]
fn cubic_reaches_local_minimum_or_better() {
    let local_min = 14.0 - 4.0 * 2f64.sqrt();
    let problem = FunctionProblem::cubic();
    let config = GaConfig::function_minimization();

    let mut successes = 0;
    for seed in 0..10 {
        let result = GaRunner::run(&problem, &config.clone().with_seed(seed)).unwrap();

        assert_eq!(result.history.len(), config.max_generations + 1);
        assert!((-10.0..=10.0).contains(&result.best_phenotype));
        assert!((result.best_fitness - cubic_objective(result.best_phenotype)).abs() < 1e-9);
        // Final-generation tracking reports the last entry of the history.
        assert_eq!(result.best_generation, config.max_generations);
        assert_eq!(result.history.last().unwrap().best_fitness, result.best_fitness);

        if result.best_fitness <= local_min + 0.01 {
            successes += 1;
        }
    }
    assert!(successes >= 8, "only {successes}/10 runs reached the local minimum");
}

#[test]
fn cubic_with_elitism_never_regresses() {
    let problem = FunctionProblem::cubic();
    let config = GaConfig::function_minimization()
        .with_elite_count(1)
        .with_tracking(BestTracking::BestEver)
        .with_seed(11);
    let result = GaRunner::run(&problem, &config).unwrap();

    let history = result.fitness_history();
    for pair in history.windows(2) {
        assert!(pair[1] <= pair[0], "best fitness regressed: {pair:?}");
    }
    let overall = history.iter().copied().fold(f64::INFINITY, f64::min);
    assert_eq!(result.best_fitness, overall);
}

// ---- Knapsack ----

#[test]
fn greedy_baseline_on_reference_instance() {
    let problem = KnapsackProblem::reference();
    assert_eq!(greedy_value(problem.items(), problem.capacity()), 805.0);
}

#[test]
fn knapsack_matches_greedy_baseline() {
    let problem = KnapsackProblem::reference();
    let baseline = greedy_value(problem.items(), problem.capacity());

    for seed in [1, 2, 3] {
        let config = GaConfig::knapsack().with_seed(seed);
        let result = GaRunner::run(&problem, &config).unwrap();

        assert!(problem.is_feasible(&result.best_phenotype));
        assert_eq!(result.best_fitness, problem.score(&result.best_phenotype));
        assert!(
            result.best_fitness >= baseline,
            "seed {seed}: {} < greedy {baseline}",
            result.best_fitness
        );
        assert!(result.best_fitness <= 830.0);
    }
}

#[test]
fn knapsack_elite_keeps_history_monotone() {
    let problem = KnapsackProblem::reference();
    let result = GaRunner::run(&problem, &GaConfig::knapsack().with_seed(5)).unwrap();

    let history = result.fitness_history();
    assert_eq!(history.len(), 51);
    for pair in history.windows(2) {
        assert!(pair[1] >= pair[0], "best fitness regressed: {pair:?}");
    }
    assert_eq!(result.best_fitness, history[history.len() - 1]);
}

#[test]
fn knapsack_with_custom_items() {
    // Only {0, 2} fits exactly and beats every other feasible subset.
    let items = vec![
        Item::new(5.0, 10.0),
        Item::new(6.0, 11.0),
        Item::new(5.0, 10.0),
        Item::new(9.0, 1.0),
    ];
    let problem = KnapsackProblem::new(items, 10.0);
    let config = GaConfig::knapsack()
        .with_population_size(40)
        .with_max_generations(30)
        .with_seed(3);
    let result = GaRunner::run(&problem, &config).unwrap();

    assert_eq!(result.best_fitness, 20.0);
    assert_eq!(result.best_phenotype, vec![true, false, true, false]);
}

// ---- Reproducibility ----

#[test]
fn same_seed_same_run() {
    let problem = KnapsackProblem::reference();
    let config = GaConfig::knapsack().with_seed(99);

    let a = GaRunner::run(&problem, &config).unwrap();
    let b = GaRunner::run(&problem, &config).unwrap();
    assert_eq!(a.history, b.history);
    assert_eq!(a.best, b.best);
    assert_eq!(a.best_fitness, b.best_fitness);

    let cubic = FunctionProblem::cubic();
    let config = GaConfig::function_minimization().with_seed(99);
    let a = GaRunner::run(&cubic, &config).unwrap();
    let b = GaRunner::run(&cubic, &config).unwrap();
    assert_eq!(a.history, b.history);
    assert_eq!(a.best_phenotype, b.best_phenotype);
}

#[test]
fn operator_combinations_stay_valid() {
    let problem = KnapsackProblem::reference();
    for selection in [Selection::Tournament(2), Selection::Tournament(5), Selection::Roulette] {
        for crossover in [Crossover::OnePoint, Crossover::TwoPoint] {
            let config = GaConfig::knapsack()
                .with_population_size(20)
                .with_max_generations(10)
                .with_selection(selection)
                .with_crossover(crossover)
                .with_seed(8);
            let result = GaRunner::run(&problem, &config).unwrap();

            assert_eq!(result.best.len(), problem.codec().genotype_len());
            assert!(problem.is_feasible(&result.best_phenotype));
            for stats in &result.history {
                assert_eq!(stats.best.len(), 10);
                assert!(stats.best_fitness >= stats.mean_fitness);
            }
        }
    }
}

// ---- Configuration errors ----

#[test]
fn invalid_configurations_are_rejected() {
    let problem = KnapsackProblem::reference();

    let err = GaRunner::run(&problem, &GaConfig::knapsack().with_population_size(1)).unwrap_err();
    assert!(matches!(
        err,
        GaError::Configuration(ConfigError::PopulationTooSmall(1))
    ));

    let err = GaRunner::run(&problem, &GaConfig::knapsack().with_mutation_rate(1.5)).unwrap_err();
    assert!(matches!(
        err,
        GaError::Configuration(ConfigError::MutationRateOutOfRange(_))
    ));

    let err = GaRunner::run(&problem, &GaConfig::knapsack().with_max_generations(0)).unwrap_err();
    assert!(matches!(
        err,
        GaError::Configuration(ConfigError::ZeroGenerations)
    ));
}

#[test]
fn genotype_too_short_for_two_point() {
    let problem = KnapsackProblem::new(vec![Item::new(1.0, 1.0), Item::new(2.0, 2.0)], 3.0);
    let err = GaRunner::run(&problem, &GaConfig::knapsack()).unwrap_err();
    assert!(matches!(
        err,
        GaError::Configuration(ConfigError::GenotypeTooShort {
            required: 3,
            len: 2,
            ..
        })
    ));

    let config = GaConfig::knapsack().with_crossover(Crossover::OnePoint).with_seed(0);
    let result = GaRunner::run(&problem, &config).unwrap();
    assert_eq!(result.best_fitness, 3.0);
}

#[test]
fn maximize_direction_with_function_problem() {
    let problem = FunctionProblem::new(0.0, 4.0, 8, |x: f64| -(x - 1.0).powi(2)).unwrap();
    let config = GaConfig::default()
        .with_direction(Direction::Maximize)
        .with_population_size(20)
        .with_seed(4);
    let result = GaRunner::run(&problem, &config).unwrap();

    assert!((result.best_phenotype - 1.0).abs() < 0.25);
    assert!(result.best_fitness <= 0.0);
}
