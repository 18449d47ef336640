//! Genotype ⇄ phenotype codecs.
//!
//! A [`Codec`] fixes the genotype length of a problem and maps bit strings
//! to the values the fitness function understands.
//!
//! - [`RealCodec`]: fixed-width unsigned integer, linearly interpolated over
//!   a closed interval `[lo, hi]`
//! - [`BitCodec`]: identity mapping onto a boolean inclusion vector

use super::genotype::Genotype;
use crate::error::{ConfigError, EncodeError};
use rand::Rng;

/// Maps between genotypes and a problem-specific phenotype.
pub trait Codec {
    /// The decoded, problem-meaningful value.
    type Phenotype;

    /// Number of bits in every genotype produced or accepted by this codec.
    fn genotype_len(&self) -> usize;

    /// Encodes a phenotype into a genotype.
    ///
    /// Fails with [`EncodeError`] when the phenotype lies outside the
    /// codec's declared domain.
    fn encode(&self, phenotype: &Self::Phenotype) -> Result<Genotype, EncodeError>;

    /// Decodes a genotype. Decoding is total and deterministic.
    fn decode(&self, genotype: &Genotype) -> Self::Phenotype;

    /// Draws a random genotype for population initialization.
    ///
    /// The default samples every bit independently and uniformly.
    fn random_genotype<R: Rng>(&self, rng: &mut R) -> Genotype {
        Genotype::random(self.genotype_len(), rng)
    }
}

// ============================================================================
// Real interval codec
// ============================================================================

/// Fixed-point encoding of a real number in `[lo, hi]`.
///
/// A `width`-bit genotype holding the unsigned value `v` (most significant
/// bit first) decodes to
///
/// ```text
/// lo + v / (2^width - 1) * (hi - lo)
/// ```
///
/// Encoding rounds to the nearest representable value, so a round trip is
/// exact only up to one quantization step.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::{Codec, RealCodec};
///
/// let codec = RealCodec::new(-10.0, 10.0, 10).unwrap();
/// let g = codec.encode(&1.5).unwrap();
/// assert!((codec.decode(&g) - 1.5).abs() <= codec.step());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RealCodec {
    lo: f64,
    hi: f64,
    width: u32,
}

impl RealCodec {
    /// Largest supported width: every integer up to `2^52` is exact in `f64`.
    pub const MAX_WIDTH: u32 = 52;

    /// Creates a codec over `[lo, hi]` using `width` bits.
    pub fn new(lo: f64, hi: f64, width: u32) -> Result<Self, ConfigError> {
        if width == 0 || width > Self::MAX_WIDTH {
            return Err(ConfigError::InvalidCodecWidth(width));
        }
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(ConfigError::InvalidInterval { lo, hi });
        }
        Ok(Self { lo, hi, width })
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Largest integer representable in `width` bits.
    pub fn max_value(&self) -> u64 {
        (1u64 << self.width) - 1
    }

    /// Distance between two adjacent representable phenotypes.
    pub fn step(&self) -> f64 {
        (self.hi - self.lo) / self.max_value() as f64
    }

    /// Nearest representable integer for `x`, clamped to the codec range.
    fn quantize(&self, x: f64) -> u64 {
        let max = self.max_value() as f64;
        let scaled = ((x - self.lo) / (self.hi - self.lo) * max).round();
        scaled.clamp(0.0, max) as u64
    }
}

impl Codec for RealCodec {
    type Phenotype = f64;

    fn genotype_len(&self) -> usize {
        self.width as usize
    }

    fn encode(&self, x: &f64) -> Result<Genotype, EncodeError> {
        if !(self.lo..=self.hi).contains(x) {
            return Err(EncodeError::OutOfRange {
                value: *x,
                lo: self.lo,
                hi: self.hi,
            });
        }
        Ok(Genotype::from_unsigned(self.quantize(*x), self.genotype_len()))
    }

    fn decode(&self, genotype: &Genotype) -> f64 {
        let ratio = genotype.to_unsigned() as f64 / self.max_value() as f64;
        self.lo + ratio * (self.hi - self.lo)
    }

    /// Samples the phenotype uniformly in `[lo, hi]` and quantizes it.
    fn random_genotype<R: Rng>(&self, rng: &mut R) -> Genotype {
        let x = rng.random_range(self.lo..=self.hi);
        Genotype::from_unsigned(self.quantize(x), self.genotype_len())
    }
}

// ============================================================================
// Identity bit codec
// ============================================================================

/// Identity codec: bit `i` is the inclusion flag of item `i`.
///
/// Genotype and phenotype coincide; decoding only changes the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitCodec {
    len: usize,
}

impl BitCodec {
    pub fn new(len: usize) -> Self {
        Self { len }
    }
}

impl Codec for BitCodec {
    type Phenotype = Vec<bool>;

    fn genotype_len(&self) -> usize {
        self.len
    }

    fn encode(&self, selection: &Vec<bool>) -> Result<Genotype, EncodeError> {
        if selection.len() != self.len {
            return Err(EncodeError::LengthMismatch {
                expected: self.len,
                actual: selection.len(),
            });
        }
        Ok(Genotype::new(selection.clone()))
    }

    fn decode(&self, genotype: &Genotype) -> Vec<bool> {
        genotype.bits().to_vec()
    }
}
