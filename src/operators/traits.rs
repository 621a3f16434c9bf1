//! Operator traits
//!
//! This module defines the core operator traits for the evolutionary
//! loop.

use rand::Rng;

use crate::error::OperatorError;
use crate::fitness::Objective;
use crate::genome::traits::Genome;

/// Selection operator trait
///
/// Selects individuals from a population for reproduction. The objective
/// is passed in because fitness is never cached on individuals; each
/// selection re-evaluates the contenders it draws.
pub trait SelectionOperator<G: Genome> {
    /// Select a single individual from the population.
    ///
    /// Returns the index of the selected individual.
    fn select<O: Objective<G>, R: Rng>(
        &self,
        population: &[G],
        objective: &O,
        rng: &mut R,
    ) -> Result<usize, OperatorError>;

    /// Build a parent pool of `count` selected individuals
    fn select_pool<O: Objective<G>, R: Rng>(
        &self,
        population: &[G],
        objective: &O,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<G>, OperatorError> {
        (0..count)
            .map(|_| {
                self.select(population, objective, rng)
                    .map(|idx| population[idx].clone())
            })
            .collect()
    }
}

/// Crossover operator trait
///
/// Combines genetic material from two parents to create two offspring.
/// Operators are unconditional; the per-pair crossover probability gate
/// lives in the generational loop.
pub trait CrossoverOperator<G: Genome> {
    /// Apply crossover to two parents and produce two offspring
    fn crossover<R: Rng>(
        &self,
        parent1: &G,
        parent2: &G,
        rng: &mut R,
    ) -> Result<(G, G), OperatorError>;
}

/// Mutation operator trait
///
/// Applies random per-gene changes to a genome in place.
pub trait MutationOperator<G: Genome> {
    /// Apply mutation to a genome in place
    fn mutate<R: Rng>(&self, genome: &mut G, rng: &mut R);
}
