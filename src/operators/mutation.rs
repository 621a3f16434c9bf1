//! Mutation operators
//!
//! This module provides the per-gene mutation operators for both genome
//! representations.

use rand::Rng;

use crate::genome::bit_string::BitString;
use crate::genome::real_vector::{RealVector, GENE_MAX, GENE_MIN};
use crate::genome::traits::Genome;
use crate::operators::traits::MutationOperator;

/// Bit-flip mutation for bit strings
///
/// Each bit flips independently with the configured probability.
#[derive(Clone, Debug)]
pub struct BitFlipMutation {
    /// Per-bit mutation probability
    pub mutation_probability: f64,
}

impl BitFlipMutation {
    /// Create a new bit-flip mutation with the given per-bit probability
    pub fn new(mutation_probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&mutation_probability),
            "Probability must be in [0, 1]"
        );
        Self {
            mutation_probability,
        }
    }
}

impl MutationOperator<BitString> for BitFlipMutation {
    fn mutate<R: Rng>(&self, genome: &mut BitString, rng: &mut R) {
        for i in 0..genome.len() {
            if rng.gen::<f64>() < self.mutation_probability {
                genome.flip(i);
            }
        }
    }
}

/// Uniform-reset mutation for real vectors
///
/// Each gene is independently replaced by a fresh uniform draw from
/// [`GENE_MIN`, `GENE_MAX`] with the configured probability. The old
/// value does not influence the new one.
#[derive(Clone, Debug)]
pub struct UniformResetMutation {
    /// Per-gene mutation probability
    pub mutation_probability: f64,
}

impl UniformResetMutation {
    /// Create a new uniform-reset mutation with the given per-gene
    /// probability
    pub fn new(mutation_probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&mutation_probability),
            "Probability must be in [0, 1]"
        );
        Self {
            mutation_probability,
        }
    }
}

impl MutationOperator<RealVector> for UniformResetMutation {
    fn mutate<R: Rng>(&self, genome: &mut RealVector, rng: &mut R) {
        for gene in genome.genes_mut() {
            if rng.gen::<f64>() < self.mutation_probability {
                *gene = rng.gen_range(GENE_MIN..=GENE_MAX);
            }
        }
    }
}
