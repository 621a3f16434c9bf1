//! Fitness evaluation
//!
//! This module defines the objective abstraction and the Schwefel
//! benchmark function. Fitness values are minimized: lower is better.

use crate::genome::traits::Genome;

/// Per-dimension offset of the Schwefel function
pub const SCHWEFEL_OFFSET: f64 = 418.98291;

/// Objective function over a genome type
///
/// Evaluation is a pure function of the gene values and is recomputed
/// wherever a fitness is needed; nothing caches it on the individual.
pub trait Objective<G: Genome> {
    /// Evaluate the genome (lower = better)
    fn evaluate(&self, genome: &G) -> f64;
}

/// Schwefel benchmark function
///
/// `f(x) = n * 418.98291 - Σ x_i * sin(sqrt(|x_i|))`
///
/// Highly multimodal with many local minima; the global minimum is near
/// x_i ≈ 420.9687 per dimension with value 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct Schwefel;

impl Schwefel {
    /// Create a new Schwefel objective
    pub fn new() -> Self {
        Self
    }

    /// Evaluate the function on a decoded solution vector
    pub fn evaluate_raw(&self, x: &[f64]) -> f64 {
        x.len() as f64 * SCHWEFEL_OFFSET
            - x.iter().map(|xi| xi * xi.abs().sqrt().sin()).sum::<f64>()
    }
}

impl<G: Genome> Objective<G> for Schwefel {
    fn evaluate(&self, genome: &G) -> f64 {
        self.evaluate_raw(&genome.decode())
    }
}
