//! Selection strategies for the GA.
//!
//! Selection determines which individuals are chosen as parents for
//! crossover. Strategies work on the fitness vector aligned with the
//! population and return an index into it; repeated calls sample with
//! replacement, so both parents of a pair may be the same individual.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Direction;
use crate::error::GaError;
use rand::seq::index;
use rand::Rng;
use tracing::trace;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::{Direction, Selection};
/// use u_bitga::random::create_rng;
///
/// let fitness = [4.0, 1.0];
/// let mut rng = create_rng(42);
///
/// // A size-2 tournament over two individuals always returns the better one.
/// let idx = Selection::Tournament(2)
///     .select(&fitness, Direction::Minimize, &mut rng)
///     .unwrap();
/// assert_eq!(idx, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Tournament selection: draw `k` distinct individuals, keep the best.
    ///
    /// - k=1: uniform random choice
    /// - k=2: the classic binary tournament (default)
    /// - larger k: stronger selection pressure
    ///
    /// Ties go to the contender drawn first.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Under [`Direction::Maximize`] the raw fitness is the slice width
    /// (negative values count as zero). Under [`Direction::Minimize`] the
    /// widths are inverted as `max - f + ε` so the lowest fitness gets the
    /// widest slice.
    ///
    /// A wheel with no mass (for example every knapsack candidate is
    /// overweight and scores 0) falls back to a uniform pick.
    ///
    /// # Complexity
    /// O(n) per selection (linear scan)
    Roulette,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(2)
    }
}

impl Selection {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Selection::Tournament(_) => "tournament",
            Selection::Roulette => "roulette",
        }
    }

    /// Select a parent index given the population's fitness vector.
    ///
    /// # Errors
    /// [`GaError::DegenerateSelection`] if the roulette wheel is exhausted
    /// without covering the drawn pick.
    ///
    /// # Panics
    /// Panics if `fitness` is empty.
    pub fn select<R: Rng>(
        &self,
        fitness: &[f64],
        direction: Direction,
        rng: &mut R,
    ) -> Result<usize, GaError> {
        assert!(!fitness.is_empty(), "cannot select from empty population");

        match self {
            Selection::Tournament(k) => Ok(tournament(fitness, *k, direction, rng)),
            Selection::Roulette => roulette(fitness, direction, rng),
        }
    }
}

/// Tournament selection: sample `k` distinct indices, return the best.
fn tournament<R: Rng>(fitness: &[f64], k: usize, direction: Direction, rng: &mut R) -> usize {
    let n = fitness.len();
    let k = k.clamp(1, n);

    index::sample(rng, n, k)
        .into_iter()
        .fold(None, |best: Option<usize>, idx| match best {
            Some(b) if !direction.is_better(fitness[idx], fitness[b]) => Some(b),
            _ => Some(idx),
        })
        .unwrap_or(0)
}

/// Slice widths of the roulette wheel.
fn roulette_weights(fitness: &[f64], direction: Direction) -> Vec<f64> {
    const EPSILON: f64 = 1e-10;

    match direction {
        Direction::Maximize => fitness
            .iter()
            .map(|&f| if f > 0.0 && f.is_finite() { f } else { 0.0 })
            .collect(),
        Direction::Minimize => {
            let max_fitness = fitness
                .iter()
                .copied()
                .filter(|f| f.is_finite())
                .fold(f64::NEG_INFINITY, f64::max);
            fitness
                .iter()
                .map(|&f| {
                    if f.is_finite() {
                        max_fitness - f + EPSILON
                    } else {
                        0.0
                    }
                })
                .collect()
        }
    }
}

/// Roulette wheel selection with a uniform fallback for an empty wheel.
fn roulette<R: Rng>(fitness: &[f64], direction: Direction, rng: &mut R) -> Result<usize, GaError> {
    let n = fitness.len();
    if n == 1 {
        return Ok(0);
    }

    let weights = roulette_weights(fitness, direction);
    let total: f64 = weights.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        trace!(total, "roulette wheel has no mass, picking uniformly");
        return Ok(rng.random_range(0..n));
    }

    spin(&weights, total, rng)
}

/// Draws `pick ∈ [0, total)` and returns the first slot whose cumulative
/// width exceeds it.
fn spin<R: Rng>(weights: &[f64], total: f64, rng: &mut R) -> Result<usize, GaError> {
    let pick = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > pick {
            return Ok(i);
        }
    }

    Err(GaError::DegenerateSelection { pick, total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn counts(sel: Selection, fitness: &[f64], direction: Direction, draws: usize) -> Vec<u32> {
        let mut rng = create_rng(42);
        let mut counts = vec![0u32; fitness.len()];
        for _ in 0..draws {
            let idx = sel.select(fitness, direction, &mut rng).unwrap();
            counts[idx] += 1;
        }
        counts
    }

    // ---- Tournament ----

    #[test]
    fn test_binary_tournament_over_pair_is_deterministic() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let idx = Selection::Tournament(2)
                .select(&[4.0, 1.0], Direction::Minimize, &mut rng)
                .unwrap();
            assert_eq!(idx, 1);
            let idx = Selection::Tournament(2)
                .select(&[4.0, 1.0], Direction::Maximize, &mut rng)
                .unwrap();
            assert_eq!(idx, 0);
        }
    }

    #[test]
    fn test_tournament_never_returns_worst() {
        // Two distinct contenders: the single worst individual always loses.
        let fitness = [10.0, 5.0, 1.0, 8.0];
        let c = counts(Selection::Tournament(2), &fitness, Direction::Minimize, 5000);
        assert_eq!(c[0], 0, "worst individual selected: {c:?}");
        assert!(c[2] > c[1] && c[1] > c[3], "unexpected ordering: {c:?}");
    }

    #[test]
    fn test_tournament_full_size_always_best() {
        let fitness = [10.0, 5.0, 1.0, 8.0];
        let c = counts(Selection::Tournament(4), &fitness, Direction::Minimize, 1000);
        assert_eq!(c[2], 1000);
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let fitness = [10.0, 5.0, 1.0, 8.0];
        let c = counts(Selection::Tournament(1), &fitness, Direction::Minimize, 10000);
        for &n in &c {
            assert!(n > 1500, "expected uniform, got counts: {c:?}");
        }
    }

    #[test]
    fn test_tournament_size_clamped_to_population() {
        let fitness = [3.0, 2.0];
        let c = counts(Selection::Tournament(10), &fitness, Direction::Maximize, 100);
        assert_eq!(c, vec![100, 0]);
    }

    #[test]
    fn test_tournament_nan_loses() {
        let fitness = [f64::NAN, 100.0];
        let c = counts(Selection::Tournament(2), &fitness, Direction::Minimize, 100);
        assert_eq!(c, vec![0, 100]);
    }

    // ---- Roulette ----

    #[test]
    fn test_roulette_maximize_proportional() {
        let fitness = [1.0, 3.0, 0.0, 4.0];
        let c = counts(Selection::Roulette, &fitness, Direction::Maximize, 8000);
        assert_eq!(c[2], 0, "zero-fitness individual has no slice: {c:?}");
        assert!(c[3] > c[1] && c[1] > c[0], "unexpected ordering: {c:?}");
        // Expected shares 1/8, 3/8, 0, 4/8.
        assert!((800..1200).contains(&c[0]), "{c:?}");
        assert!((3600..4400).contains(&c[3]), "{c:?}");
    }

    #[test]
    fn test_roulette_minimize_favors_lowest() {
        let fitness = [100.0, 50.0, 1.0, 80.0];
        let c = counts(Selection::Roulette, &fitness, Direction::Minimize, 10000);
        assert!(
            c[2] > c[0],
            "best should be selected more often: best={}, worst={}",
            c[2],
            c[0]
        );
    }

    #[test]
    fn test_roulette_all_zero_falls_back_to_uniform() {
        let fitness = [0.0; 5];
        let c = counts(Selection::Roulette, &fitness, Direction::Maximize, 10000);
        for &n in &c {
            assert!(n > 1500, "expected uniform fallback, got {c:?}");
        }
    }

    #[test]
    fn test_roulette_negative_fitness_maximize() {
        let fitness = [-5.0, -1.0, 2.0];
        let c = counts(Selection::Roulette, &fitness, Direction::Maximize, 500);
        assert_eq!(c, vec![0, 0, 500]);
    }

    #[test]
    fn test_roulette_equal_fitness_minimize() {
        let fitness = [5.0; 4];
        let c = counts(Selection::Roulette, &fitness, Direction::Minimize, 10000);
        for &n in &c {
            assert!(n > 1500, "expected uniform with equal fitness, got {c:?}");
        }
    }

    #[test]
    fn test_spin_exhausted_wheel_is_an_error() {
        let mut rng = create_rng(42);
        let err = spin(&[0.0, 0.0], 1.0, &mut rng).unwrap_err();
        assert!(matches!(err, GaError::DegenerateSelection { total, .. } if total == 1.0));
    }

    // ---- Shared ----

    #[test]
    fn test_single_individual() {
        let mut rng = create_rng(42);
        for sel in [Selection::Tournament(3), Selection::Roulette] {
            assert_eq!(sel.select(&[5.0], Direction::Maximize, &mut rng).unwrap(), 0);
        }
    }

    #[test]
    fn test_default_is_binary_tournament() {
        assert_eq!(Selection::default(), Selection::Tournament(2));
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let mut rng = create_rng(42);
        let _ = Selection::Roulette.select(&[], Direction::Maximize, &mut rng);
    }
}
