//! Crossover operators
//!
//! This module provides the crossover operators for both genome
//! representations: uniform crossover for either, two-point crossover
//! for bit strings, and whole-arithmetic crossover for real vectors.

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::error::OperatorError;
use crate::genome::bit_string::BitString;
use crate::genome::real_vector::RealVector;
use crate::genome::traits::Genome;
use crate::operators::traits::CrossoverOperator;

fn check_lengths(len1: usize, len2: usize) -> Result<(), OperatorError> {
    if len1 != len2 {
        return Err(OperatorError::CrossoverFailed(format!(
            "parent lengths do not match ({} vs {})",
            len1, len2
        )));
    }
    Ok(())
}

/// Uniform crossover
///
/// Each position is independently kept or swapped between the two
/// children with equal probability. Works on bit positions for binary
/// genomes and gene positions for real-valued ones.
#[derive(Clone, Debug, Default)]
pub struct UniformCrossover;

impl UniformCrossover {
    /// Create a new uniform crossover
    pub fn new() -> Self {
        Self
    }
}

impl CrossoverOperator<BitString> for UniformCrossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &BitString,
        parent2: &BitString,
        rng: &mut R,
    ) -> Result<(BitString, BitString), OperatorError> {
        check_lengths(parent1.len(), parent2.len())?;

        let mut child1_bits = Vec::with_capacity(parent1.len());
        let mut child2_bits = Vec::with_capacity(parent2.len());

        for i in 0..parent1.len() {
            if rng.gen::<f64>() < 0.5 {
                child1_bits.push(parent1[i]);
                child2_bits.push(parent2[i]);
            } else {
                child1_bits.push(parent2[i]);
                child2_bits.push(parent1[i]);
            }
        }

        Ok((child1_bits.into(), child2_bits.into()))
    }
}

impl CrossoverOperator<RealVector> for UniformCrossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &RealVector,
        parent2: &RealVector,
        rng: &mut R,
    ) -> Result<(RealVector, RealVector), OperatorError> {
        check_lengths(parent1.len(), parent2.len())?;

        let mut child1_genes = Vec::with_capacity(parent1.len());
        let mut child2_genes = Vec::with_capacity(parent2.len());

        for i in 0..parent1.len() {
            if rng.gen::<f64>() < 0.5 {
                child1_genes.push(parent1[i]);
                child2_genes.push(parent2[i]);
            } else {
                child1_genes.push(parent2[i]);
                child2_genes.push(parent1[i]);
            }
        }

        Ok((child1_genes.into(), child2_genes.into()))
    }
}

/// Two-point crossover for bit strings
///
/// Draws two distinct cut points without replacement from the interior
/// positions {1, …, len−1}, sorts them, and exchanges the middle
/// segment. Genomes shorter than 3 bits leave no room for two distinct
/// interior points and are rejected.
#[derive(Clone, Debug, Default)]
pub struct TwoPointCrossover;

impl TwoPointCrossover {
    /// Create a new two-point crossover
    pub fn new() -> Self {
        Self
    }
}

impl CrossoverOperator<BitString> for TwoPointCrossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &BitString,
        parent2: &BitString,
        rng: &mut R,
    ) -> Result<(BitString, BitString), OperatorError> {
        check_lengths(parent1.len(), parent2.len())?;

        let n = parent1.len();
        if n < 3 {
            return Err(OperatorError::CrossoverFailed(format!(
                "genome length {} leaves no room for two distinct cut points",
                n
            )));
        }

        let mut points = (1..n).choose_multiple(rng, 2);
        points.sort_unstable();
        let (cut1, cut2) = (points[0], points[1]);

        let bits1 = parent1.bits();
        let bits2 = parent2.bits();

        let child1 = [&bits1[..cut1], &bits2[cut1..cut2], &bits1[cut2..]].concat();
        let child2 = [&bits2[..cut1], &bits1[cut1..cut2], &bits2[cut2..]].concat();

        Ok((child1.into(), child2.into()))
    }
}

/// Whole-arithmetic crossover for real vectors
///
/// Blends every gene pair with a fixed coefficient:
/// `c1[i] = α·p1[i] + (1−α)·p2[i]` and symmetrically for `c2`.
#[derive(Clone, Debug)]
pub struct WholeArithmeticCrossover {
    /// Blend coefficient
    pub alpha: f64,
}

impl WholeArithmeticCrossover {
    /// Blend coefficient used by the generational loop
    pub const DEFAULT_ALPHA: f64 = 0.2;

    /// Create a new whole-arithmetic crossover with the given coefficient
    pub fn new(alpha: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&alpha),
            "Blend coefficient must be in [0, 1]"
        );
        Self { alpha }
    }
}

impl Default for WholeArithmeticCrossover {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ALPHA)
    }
}

impl CrossoverOperator<RealVector> for WholeArithmeticCrossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &RealVector,
        parent2: &RealVector,
        _rng: &mut R,
    ) -> Result<(RealVector, RealVector), OperatorError> {
        check_lengths(parent1.len(), parent2.len())?;

        let a = self.alpha;
        let mut child1_genes = Vec::with_capacity(parent1.len());
        let mut child2_genes = Vec::with_capacity(parent2.len());

        for i in 0..parent1.len() {
            child1_genes.push(a * parent1[i] + (1.0 - a) * parent2[i]);
            child2_genes.push((1.0 - a) * parent1[i] + a * parent2[i]);
        }

        Ok((child1_genes.into(), child2_genes.into()))
    }
}

/// Crossover mode for the binary representation
#[derive(Clone, Debug)]
pub enum BinaryCrossover {
    /// Per-bit uniform swap
    Uniform(UniformCrossover),
    /// Middle-segment exchange between two sorted cut points
    TwoPoint(TwoPointCrossover),
}

impl BinaryCrossover {
    /// Pick the mode a run configuration asks for
    pub fn from_mode(uniform: bool) -> Self {
        if uniform {
            Self::Uniform(UniformCrossover::new())
        } else {
            Self::TwoPoint(TwoPointCrossover::new())
        }
    }
}

impl CrossoverOperator<BitString> for BinaryCrossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &BitString,
        parent2: &BitString,
        rng: &mut R,
    ) -> Result<(BitString, BitString), OperatorError> {
        match self {
            Self::Uniform(op) => op.crossover(parent1, parent2, rng),
            Self::TwoPoint(op) => op.crossover(parent1, parent2, rng),
        }
    }
}

/// Crossover mode for the real-valued representation
#[derive(Clone, Debug)]
pub enum RealCrossover {
    /// Per-gene uniform swap
    Uniform(UniformCrossover),
    /// Fixed-coefficient whole-arithmetic blend
    Arithmetic(WholeArithmeticCrossover),
}

impl RealCrossover {
    /// Pick the mode a run configuration asks for
    pub fn from_mode(uniform: bool) -> Self {
        if uniform {
            Self::Uniform(UniformCrossover::new())
        } else {
            Self::Arithmetic(WholeArithmeticCrossover::default())
        }
    }
}

impl CrossoverOperator<RealVector> for RealCrossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &RealVector,
        parent2: &RealVector,
        rng: &mut R,
    ) -> Result<(RealVector, RealVector), OperatorError> {
        match self {
            Self::Uniform(op) => op.crossover(parent1, parent2, rng),
            Self::Arithmetic(op) => op.crossover(parent1, parent2, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uniform_crossover_bits_come_from_parents() {
        let mut rng = StdRng::seed_from_u64(11);
        let parent1 = BitString::new(vec![true; 30]);
        let parent2 = BitString::new(vec![false; 30]);

        let (child1, child2) = UniformCrossover::new()
            .crossover(&parent1, &parent2, &mut rng)
            .unwrap();

        assert_eq!(child1.len(), 30);
        assert_eq!(child2.len(), 30);
        for i in 0..30 {
            // The two children split each position between the parents
            assert_ne!(child1[i], child2[i]);
        }
    }

    #[test]
    fn test_uniform_crossover_genes_never_blend() {
        let mut rng = StdRng::seed_from_u64(12);
        let parent1 = RealVector::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let parent2 = RealVector::new(vec![10.0, 20.0, 30.0, 40.0, 50.0]);

        let (child1, child2) = UniformCrossover::new()
            .crossover(&parent1, &parent2, &mut rng)
            .unwrap();

        for i in 0..5 {
            assert!(child1[i] == parent1[i] || child1[i] == parent2[i]);
            assert!(child2[i] == parent1[i] || child2[i] == parent2[i]);
            assert_ne!(child1[i], child2[i]);
        }
    }

    #[test]
    fn test_uniform_crossover_length_mismatch_fails() {
        let mut rng = StdRng::seed_from_u64(13);
        let parent1 = RealVector::new(vec![1.0, 2.0]);
        let parent2 = RealVector::new(vec![1.0, 2.0, 3.0]);

        let result = UniformCrossover::new().crossover(&parent1, &parent2, &mut rng);
        assert!(matches!(result, Err(OperatorError::CrossoverFailed(_))));
    }

    #[test]
    fn test_two_point_crossover_exchanges_middle_segment() {
        let mut rng = StdRng::seed_from_u64(14);
        let parent1 = BitString::new(vec![false; 40]);
        let parent2 = BitString::new(vec![true; 40]);

        let (child1, child2) = TwoPointCrossover::new()
            .crossover(&parent1, &parent2, &mut rng)
            .unwrap();

        // child1 is all-zero outside one contiguous all-one segment
        let ones: Vec<usize> = (0..40).filter(|&i| child1[i]).collect();
        assert!(!ones.is_empty());
        let first = ones[0];
        let last = *ones.last().unwrap();
        assert_eq!(ones.len(), last - first + 1);
        assert!(first >= 1 && last < 39);

        // child2 mirrors child1
        for i in 0..40 {
            assert_ne!(child1[i], child2[i]);
        }
    }

    #[test]
    fn test_two_point_crossover_cut_points_are_distinct() {
        // With distinct sorted cut points the exchanged segment is never
        // empty, so children always differ from their parents
        let parent1 = BitString::new(vec![false; 20]);
        let parent2 = BitString::new(vec![true; 20]);

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (child1, _) = TwoPointCrossover::new()
                .crossover(&parent1, &parent2, &mut rng)
                .unwrap();
            assert!(child1.bits().iter().any(|&b| b));
            assert!(child1.bits().iter().any(|&b| !b));
        }
    }

    #[test]
    fn test_two_point_crossover_short_genome_fails() {
        let mut rng = StdRng::seed_from_u64(15);
        let parent1 = BitString::new(vec![true, false]);
        let parent2 = BitString::new(vec![false, true]);

        let result = TwoPointCrossover::new().crossover(&parent1, &parent2, &mut rng);
        assert!(matches!(result, Err(OperatorError::CrossoverFailed(_))));
    }

    #[test]
    fn test_arithmetic_crossover_blends_genes() {
        let mut rng = StdRng::seed_from_u64(16);
        let parent1 = RealVector::new(vec![0.0, 10.0]);
        let parent2 = RealVector::new(vec![100.0, 20.0]);

        let (child1, child2) = WholeArithmeticCrossover::default()
            .crossover(&parent1, &parent2, &mut rng)
            .unwrap();

        assert_relative_eq!(child1[0], 80.0);
        assert_relative_eq!(child1[1], 18.0);
        assert_relative_eq!(child2[0], 20.0);
        assert_relative_eq!(child2[1], 12.0);
    }

    #[test]
    fn test_arithmetic_crossover_preserves_gene_sums() {
        let mut rng = StdRng::seed_from_u64(17);
        let parent1 = RealVector::new(vec![3.0, -7.0, 250.0]);
        let parent2 = RealVector::new(vec![-4.0, 11.0, -30.0]);

        let (child1, child2) = WholeArithmeticCrossover::default()
            .crossover(&parent1, &parent2, &mut rng)
            .unwrap();

        for i in 0..3 {
            assert_relative_eq!(child1[i] + child2[i], parent1[i] + parent2[i]);
        }
    }

    #[test]
    #[should_panic(expected = "Blend coefficient must be in [0, 1]")]
    fn test_arithmetic_crossover_rejects_bad_alpha() {
        WholeArithmeticCrossover::new(1.5);
    }

    #[test]
    fn test_binary_crossover_mode_dispatch() {
        assert!(matches!(
            BinaryCrossover::from_mode(true),
            BinaryCrossover::Uniform(_)
        ));
        assert!(matches!(
            BinaryCrossover::from_mode(false),
            BinaryCrossover::TwoPoint(_)
        ));
    }

    #[test]
    fn test_real_crossover_mode_dispatch() {
        assert!(matches!(
            RealCrossover::from_mode(true),
            RealCrossover::Uniform(_)
        ));
        assert!(matches!(
            RealCrossover::from_mode(false),
            RealCrossover::Arithmetic(_)
        ));
    }
}
