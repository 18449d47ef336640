//! Bit-string genetic operators.
//!
//! Crossover and mutation operators for [`Genotype`] bit strings. All
//! operators preserve genotype length and return freshly allocated
//! offspring, so parents are never modified.
//!
//! # Crossover Operators
//!
//! - [`one_point_crossover`]: swap tails after a single cut
//! - [`two_point_crossover`]: swap the segment between two cuts
//!
//! # Mutation Operators
//!
//! - [`bit_flip_mutation`]: independent per-bit flip with probability `rate`
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - De Jong (1975), "An Analysis of the Behavior of a Class of Genetic
//!   Adaptive Systems"

use super::genotype::Genotype;
use rand::Rng;

/// Crossover operator used by the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossover {
    /// Single cut point `c ∈ [1, L-1]`; children exchange tails.
    #[default]
    OnePoint,
    /// Two cut points `1 ≤ c1 < c2 ≤ L-1`; children exchange the middle segment.
    TwoPoint,
}

impl Crossover {
    /// Minimum genotype length for which the operator has a valid cut.
    pub fn min_genotype_len(self) -> usize {
        match self {
            Crossover::OnePoint => 2,
            Crossover::TwoPoint => 3,
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Crossover::OnePoint => "one-point",
            Crossover::TwoPoint => "two-point",
        }
    }

    /// Recombines two parents into two children.
    ///
    /// # Panics
    /// Panics if the parents differ in length or are shorter than
    /// [`min_genotype_len`](Self::min_genotype_len).
    pub fn apply<R: Rng>(
        self,
        parent1: &Genotype,
        parent2: &Genotype,
        rng: &mut R,
    ) -> (Genotype, Genotype) {
        match self {
            Crossover::OnePoint => one_point_crossover(parent1, parent2, rng),
            Crossover::TwoPoint => two_point_crossover(parent1, parent2, rng),
        }
    }
}

// ============================================================================
// Crossover operators
// ============================================================================

/// One-point crossover with a uniformly drawn cut `c ∈ [1, L-1]`.
///
/// # Panics
/// Panics if parents have different lengths or fewer than 2 bits.
pub fn one_point_crossover<R: Rng>(
    parent1: &Genotype,
    parent2: &Genotype,
    rng: &mut R,
) -> (Genotype, Genotype) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n >= 2, "one-point crossover needs at least 2 bits");

    let cut = rng.random_range(1..n);
    one_point_crossover_at(parent1, parent2, cut)
}

/// One-point crossover at a fixed cut.
///
/// `child1 = p1[..cut] ++ p2[cut..]`, `child2 = p2[..cut] ++ p1[cut..]`.
///
/// # Panics
/// Panics if parents have different lengths or `cut > len`.
pub fn one_point_crossover_at(
    parent1: &Genotype,
    parent2: &Genotype,
    cut: usize,
) -> (Genotype, Genotype) {
    let (a, b) = (parent1.bits(), parent2.bits());
    assert_eq!(a.len(), b.len(), "parents must have equal length");
    assert!(cut <= a.len(), "cut point {cut} beyond length {}", a.len());

    let child1 = a[..cut].iter().chain(&b[cut..]).copied().collect();
    let child2 = b[..cut].iter().chain(&a[cut..]).copied().collect();
    (child1, child2)
}

/// Two-point crossover with `c1 ∈ [1, L-2]` and `c2 ∈ [c1+1, L-1]`.
///
/// Both cuts are interior, so every child receives at least one bit from
/// each parent.
///
/// # Panics
/// Panics if parents have different lengths or fewer than 3 bits.
pub fn two_point_crossover<R: Rng>(
    parent1: &Genotype,
    parent2: &Genotype,
    rng: &mut R,
) -> (Genotype, Genotype) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n >= 3, "two-point crossover needs at least 3 bits");

    let first = rng.random_range(1..n - 1);
    let second = rng.random_range(first + 1..n);
    two_point_crossover_at(parent1, parent2, first, second)
}

/// Two-point crossover at fixed cuts: the segment `[first, second)` is swapped.
///
/// # Panics
/// Panics if parents have different lengths or unless
/// `first <= second <= len`.
pub fn two_point_crossover_at(
    parent1: &Genotype,
    parent2: &Genotype,
    first: usize,
    second: usize,
) -> (Genotype, Genotype) {
    let (a, b) = (parent1.bits(), parent2.bits());
    assert_eq!(a.len(), b.len(), "parents must have equal length");
    assert!(
        first <= second && second <= a.len(),
        "invalid cut points ({first}, {second}) for length {}",
        a.len()
    );

    let child1 = a[..first]
        .iter()
        .chain(&b[first..second])
        .chain(&a[second..])
        .copied()
        .collect();
    let child2 = b[..first]
        .iter()
        .chain(&a[first..second])
        .chain(&b[second..])
        .copied()
        .collect();
    (child1, child2)
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Bit-flip mutation: each bit flips independently with probability `rate`.
///
/// A bit flips when a uniform draw in `[0, 1)` is below `rate`, so
/// `rate = 0` never changes the genotype and `rate = 1` inverts every bit.
/// One draw is consumed per bit regardless of `rate`.
///
/// # Complexity
/// O(L)
pub fn bit_flip_mutation<R: Rng>(genotype: &mut Genotype, rate: f64, rng: &mut R) {
    for i in 0..genotype.len() {
        if rng.random::<f64>() < rate {
            genotype.flip(i);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
