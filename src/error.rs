//! Error types for the GA engine.
//!
//! Configuration problems are reported before the evolutionary loop starts.
//! Evaluation failures abort the run at the generation where they occur.

use thiserror::Error;

/// Errors returned by [`GaRunner`](crate::ga::GaRunner) and the codecs.
#[derive(Debug, Error)]
pub enum GaError {
    /// The configuration (or codec definition) is invalid.
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigError),

    /// The roulette wheel was exhausted without covering the drawn pick.
    ///
    /// Only reachable when the cumulative fitness sums are inconsistent
    /// with the wheel total.
    #[error("degenerate roulette wheel: pick {pick} not covered by total {total}")]
    DegenerateSelection { pick: f64, total: f64 },

    /// A phenotype could not be encoded into a genotype.
    #[error("infeasible encoding: {0}")]
    InfeasibleEncoding(#[from] EncodeError),

    /// The problem's fitness function reported a failure.
    #[error("fitness evaluation failed in generation {generation} for individual {index}")]
    Evaluation {
        generation: usize,
        index: usize,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl GaError {
    pub(crate) fn evaluation<E>(generation: usize, index: usize, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        GaError::Evaluation {
            generation,
            index,
            source: Box::new(source),
        }
    }
}

/// Invalid parameter detected by [`GaConfig::validate`](crate::ga::GaConfig::validate)
/// or a codec constructor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    #[error("max_generations must be at least 1")]
    ZeroGenerations,

    #[error("mutation_rate must lie in [0, 1], got {0}")]
    MutationRateOutOfRange(f64),

    #[error("crossover_rate must lie in [0, 1], got {0}")]
    CrossoverRateOutOfRange(f64),

    #[error("{crossover} crossover needs genotypes of at least {required} bits, got {len}")]
    GenotypeTooShort {
        crossover: &'static str,
        required: usize,
        len: usize,
    },

    #[error("elite count {elite} exceeds population size {population}")]
    EliteCountExceedsPopulation { elite: usize, population: usize },

    #[error("elite ratio must lie in [0, 1], got {0}")]
    EliteRatioOutOfRange(f64),

    #[error("tournament size must be in 1..={population}, got {size}")]
    InvalidTournamentSize { size: usize, population: usize },

    #[error("codec width must be in 1..=52 bits, got {0}")]
    InvalidCodecWidth(u32),

    #[error("interval [{lo}, {hi}] must be finite with lo < hi")]
    InvalidInterval { lo: f64, hi: f64 },
}

/// Failure to map a phenotype (or text) onto a genotype.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("value {value} lies outside the codec range [{lo}, {hi}]")]
    OutOfRange { value: f64, lo: f64, hi: f64 },

    #[error("expected {expected} bits, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("invalid bit symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[derive(Debug, Error)]
    #[error("sensor offline")]
    struct SensorError;

    #[test]
    fn test_config_error_converts() {
        let err: GaError = ConfigError::ZeroGenerations.into();
        assert!(matches!(
            err,
            GaError::Configuration(ConfigError::ZeroGenerations)
        ));
        assert_eq!(
            err.to_string(),
            "invalid configuration: max_generations must be at least 1"
        );
    }

    #[test]
    fn test_evaluation_error_keeps_source() {
        let err = GaError::evaluation(3, 7, SensorError);
        assert_eq!(
            err.to_string(),
            "fitness evaluation failed in generation 3 for individual 7"
        );
        let source = err.source().expect("source is attached");
        assert_eq!(source.to_string(), "sensor offline");
    }

    #[test]
    fn test_encode_error_message() {
        let err = EncodeError::OutOfRange {
            value: 11.0,
            lo: -10.0,
            hi: 10.0,
        };
        assert_eq!(
            err.to_string(),
            "value 11 lies outside the codec range [-10, 10]"
        );
    }
}
