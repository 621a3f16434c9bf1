//! Real-valued vector genome
//!
//! This module provides the fixed-length real-valued vector genome for
//! the continuous representation.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::genome::traits::Genome;

/// Lower bound of the gene domain
pub const GENE_MIN: f64 = -512.0;

/// Upper bound of the gene domain
pub const GENE_MAX: f64 = 511.0;

/// Fixed-length real-valued vector genome
///
/// Solutions are vectors of real numbers, one gene per problem variable,
/// initialized and re-drawn uniformly within [`GENE_MIN`, `GENE_MAX`].
/// Crossover may blend genes outside that interval; only initialization
/// and mutation draw from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RealVector {
    /// The genes of this genome
    genes: Vec<f64>,
}

impl RealVector {
    /// Create a new real vector with the given genes
    pub fn new(genes: Vec<f64>) -> Self {
        Self { genes }
    }

    /// Create a zero-filled vector of the given dimension
    pub fn zeros(dimension: usize) -> Self {
        Self {
            genes: vec![0.0; dimension],
        }
    }

    /// Get the genes as a slice
    pub fn genes(&self) -> &[f64] {
        &self.genes
    }

    /// Get the genes as a mutable slice
    pub fn genes_mut(&mut self) -> &mut [f64] {
        &mut self.genes
    }

    /// Take the underlying vector
    pub fn into_inner(self) -> Vec<f64> {
        self.genes
    }
}

impl Genome for RealVector {
    fn random<R: Rng>(dimension: usize, rng: &mut R) -> Self {
        let genes = (0..dimension)
            .map(|_| rng.gen_range(GENE_MIN..=GENE_MAX))
            .collect();
        Self { genes }
    }

    fn dimension(&self) -> usize {
        self.genes.len()
    }

    fn len(&self) -> usize {
        self.genes.len()
    }

    fn decode(&self) -> Vec<f64> {
        self.genes.clone()
    }
}

impl std::ops::Index<usize> for RealVector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.genes[index]
    }
}

impl From<Vec<f64>> for RealVector {
    fn from(genes: Vec<f64>) -> Self {
        Self { genes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_real_vector_new() {
        let rv = RealVector::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(rv.genes(), &[1.0, 2.0, 3.0]);
        assert_eq!(rv.dimension(), 3);
    }

    #[test]
    fn test_real_vector_zeros() {
        let rv = RealVector::zeros(4);
        assert_eq!(rv.genes(), &[0.0; 4]);
    }

    #[test]
    fn test_real_vector_decode_is_identity() {
        let rv = RealVector::new(vec![-100.5, 420.9, 0.0]);
        assert_eq!(rv.decode(), vec![-100.5, 420.9, 0.0]);
    }

    #[test]
    fn test_real_vector_random_within_domain() {
        let mut rng = StdRng::seed_from_u64(7);
        let rv = RealVector::random(50, &mut rng);
        assert_eq!(rv.dimension(), 50);
        for &gene in rv.genes() {
            assert!((GENE_MIN..=GENE_MAX).contains(&gene));
        }
    }

    #[test]
    fn test_real_vector_indexing() {
        let rv = RealVector::new(vec![5.0, -3.0]);
        assert_eq!(rv[0], 5.0);
        assert_eq!(rv[1], -3.0);
    }

    #[test]
    fn test_real_vector_serialization() {
        let rv = RealVector::new(vec![1.5, -2.5]);
        let serialized = serde_json::to_string(&rv).unwrap();
        let deserialized: RealVector = serde_json::from_str(&serialized).unwrap();
        assert_eq!(rv, deserialized);
    }
}
