//! Bit string genome
//!
//! This module provides the fixed-length bit string genome. Each problem
//! variable is a block of [`GENE_BITS`] consecutive bits, decoded as a
//! signed integer.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenomeError;
use crate::genome::traits::Genome;

/// Bits per encoded problem variable
pub const GENE_BITS: usize = 10;

/// Signed offset subtracted when a block's leading bit is set
const SIGN_OFFSET: i32 = 1 << GENE_BITS;

/// Smallest integer a gene block can decode to
pub const MIN_GENE_VALUE: i32 = -(1 << (GENE_BITS - 1));

/// Largest integer a gene block can decode to
pub const MAX_GENE_VALUE: i32 = (1 << (GENE_BITS - 1)) - 1;

/// Fixed-length bit string genome
///
/// Solutions are vectors of bits, `GENE_BITS` per problem variable. Each
/// block decodes as two's complement: the unsigned value of the block,
/// minus 2^10 when the leading bit is set, giving integers in
/// [-512, 511].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitString {
    /// The bits of this genome
    bits: Vec<bool>,
}

impl BitString {
    /// Create a new bit string with the given bits
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Create an all-zeros bit string for `dimension` problem variables
    pub fn zeros(dimension: usize) -> Self {
        Self {
            bits: vec![false; dimension * GENE_BITS],
        }
    }

    /// Encode a vector of signed integers, one gene block per value.
    ///
    /// Fails when a value falls outside the encodable range.
    pub fn from_ints(values: &[i32]) -> Result<Self, GenomeError> {
        let mut bits = Vec::with_capacity(values.len() * GENE_BITS);
        for &value in values {
            if !(MIN_GENE_VALUE..=MAX_GENE_VALUE).contains(&value) {
                return Err(GenomeError::ValueOutOfRange {
                    value,
                    min: MIN_GENE_VALUE,
                    max: MAX_GENE_VALUE,
                });
            }
            let unsigned = if value < 0 {
                (value + SIGN_OFFSET) as u32
            } else {
                value as u32
            };
            for shift in (0..GENE_BITS).rev() {
                bits.push((unsigned >> shift) & 1 == 1);
            }
        }
        Ok(Self { bits })
    }

    /// Get the bits as a slice
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Get a specific bit
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Flip a specific bit
    pub fn flip(&mut self, index: usize) {
        if let Some(bit) = self.bits.get_mut(index) {
            *bit = !*bit;
        }
    }

    /// Decode one gene block as a signed integer
    pub fn decode_gene(&self, gene_index: usize) -> i32 {
        let block = &self.bits[gene_index * GENE_BITS..(gene_index + 1) * GENE_BITS];
        let unsigned = block
            .iter()
            .fold(0i32, |acc, &bit| (acc << 1) | i32::from(bit));
        if block[0] {
            unsigned - SIGN_OFFSET
        } else {
            unsigned
        }
    }
}

impl Genome for BitString {
    fn random<R: Rng>(dimension: usize, rng: &mut R) -> Self {
        let bits = (0..dimension * GENE_BITS).map(|_| rng.gen()).collect();
        Self { bits }
    }

    fn dimension(&self) -> usize {
        self.bits.len() / GENE_BITS
    }

    fn len(&self) -> usize {
        self.bits.len()
    }

    fn decode(&self) -> Vec<f64> {
        (0..self.dimension())
            .map(|i| f64::from(self.decode_gene(i)))
            .collect()
    }
}

impl std::ops::Index<usize> for BitString {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        &self.bits[index]
    }
}

impl From<Vec<bool>> for BitString {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl std::fmt::Display for BitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", if *bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}
