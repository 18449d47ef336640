//! Seedable random source.
//!
//! Every stochastic step of a run (initialization, selection, crossover
//! points, mutation) draws from a single generator so that a seed fully
//! determines the run.

use rand::SeedableRng;
use rand_pcg::Pcg64;

/// The generator used when a run is seeded from [`GaConfig::seed`](crate::ga::GaConfig::seed).
///
/// PCG64 output is stable across platforms and `rand` releases, so seeded
/// histories can be compared between builds.
pub type GaRng = Pcg64;

/// Creates a generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> GaRng {
    Pcg64::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(7);
        let mut b = create_rng(7);
        for _ in 0..100 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn test_different_seed_different_stream() {
        let mut a = create_rng(1);
        let mut b = create_rng(2);
        let xs: Vec<u64> = (0..8).map(|_| a.random()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.random()).collect();
        assert_ne!(xs, ys);
    }
}
