//! Run configuration
//!
//! This module defines the immutable set of hyperparameters describing a
//! single evolutionary run.

use serde::{Deserialize, Serialize};

use crate::error::{EvoResult, EvolutionError};

/// Genome representation for a run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// Fixed-length bit strings, 10 bits per problem variable
    Binary,
    /// Real-valued vectors, one gene per problem variable
    Real,
}

/// Hyperparameters for one evolutionary run
///
/// Immutable for the duration of the run. Supplied whole by the caller;
/// `validate` checks the preconditions the evolutionary loop relies on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Genome representation
    pub representation: Representation,
    /// Number of problem variables
    pub dimension: usize,
    /// Number of individuals in the population
    pub population_size: usize,
    /// Number of generations to evolve
    pub num_generations: usize,
    /// Probability that a parent pair recombines (per pair)
    pub cross_prob: f64,
    /// Probability that a gene mutates (per gene)
    pub mut_prob: f64,
    /// Number of contenders per selection tournament
    pub tournament_size: usize,
    /// Use uniform crossover; otherwise the representation-specific
    /// alternative (two-point for binary, whole-arithmetic for real)
    pub uniform_crossover: bool,
}

impl RunConfig {
    /// Check the preconditions the run relies on.
    ///
    /// Failures here are caller errors; nothing downstream recovers from
    /// them.
    pub fn validate(&self) -> EvoResult<()> {
        if self.dimension == 0 {
            return Err(EvolutionError::Configuration(
                "dimension must be positive".to_string(),
            ));
        }
        if self.population_size == 0 {
            return Err(EvolutionError::Configuration(
                "population size must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.cross_prob) {
            return Err(EvolutionError::Configuration(format!(
                "crossover probability {} outside [0, 1]",
                self.cross_prob
            )));
        }
        if !(0.0..=1.0).contains(&self.mut_prob) {
            return Err(EvolutionError::Configuration(format!(
                "mutation probability {} outside [0, 1]",
                self.mut_prob
            )));
        }
        if self.tournament_size == 0 {
            return Err(EvolutionError::Configuration(
                "tournament size must be positive".to_string(),
            ));
        }
        if self.tournament_size > self.population_size {
            return Err(EvolutionError::Configuration(format!(
                "tournament size {} exceeds population size {}",
                self.tournament_size, self.population_size
            )));
        }
        Ok(())
    }
}
