//! Fixed-length bit-string genotype.

use crate::error::EncodeError;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// A candidate solution encoded as an ordered sequence of bits.
///
/// The length is fixed for a run: crossover and mutation never change it.
/// Each population slot owns its genotype; offspring are always fresh
/// allocations, so mutating a child can never affect a parent.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::Genotype;
///
/// let g: Genotype = "1010".parse().unwrap();
/// assert_eq!(g.len(), 4);
/// assert_eq!(g.to_unsigned(), 0b1010);
/// assert_eq!(g.to_string(), "1010");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genotype {
    bits: Vec<bool>,
}

impl Genotype {
    /// Wraps an existing bit vector.
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// All-zero genotype of the given length.
    pub fn zeros(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    /// Genotype whose bits are drawn independently and uniformly.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self {
            bits: (0..len).map(|_| rng.random::<bool>()).collect(),
        }
    }

    /// Builds a `width`-bit genotype holding `value`, most significant bit first.
    ///
    /// Bits of `value` above `width` are discarded.
    pub fn from_unsigned(value: u64, width: usize) -> Self {
        let bits = (0..width)
            .map(|i| {
                let shift = (width - 1 - i) as u32;
                value.checked_shr(shift).unwrap_or(0) & 1 == 1
            })
            .collect();
        Self { bits }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Returns the bit at `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Inverts the bit at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn flip(&mut self, index: usize) {
        self.bits[index] = !self.bits[index];
    }

    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Interprets the bits as an unsigned integer, most significant bit first.
    ///
    /// Only the last 64 bits contribute for longer genotypes.
    pub fn to_unsigned(&self) -> u64 {
        self.bits
            .iter()
            .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit))
    }

    pub fn into_bits(self) -> Vec<bool> {
        self.bits
    }
}

impl From<Vec<bool>> for Genotype {
    fn from(bits: Vec<bool>) -> Self {
        Self::new(bits)
    }
}

impl FromIterator<bool> for Genotype {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Genotype {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, symbol)| match symbol {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(EncodeError::InvalidSymbol { symbol, position }),
            })
            .collect::<Result<Vec<bool>, _>>()
            .map(Self::new)
    }
}
