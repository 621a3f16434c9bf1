//! Selection operators
//!
//! This module provides tournament selection for the evolutionary loop.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::OperatorError;
use crate::fitness::Objective;
use crate::genome::traits::Genome;
use crate::operators::traits::SelectionOperator;

/// Tournament selection operator
///
/// Each pick samples `tournament_size` distinct individuals from the
/// population (without replacement within one tournament, independently
/// across tournaments) and keeps the one with minimum fitness. Ties go
/// to the contender encountered first.
#[derive(Clone, Debug)]
pub struct TournamentSelection {
    /// Number of individuals competing per tournament
    pub tournament_size: usize,
}

impl TournamentSelection {
    /// Create a new tournament selection with the given size
    pub fn new(tournament_size: usize) -> Self {
        Self { tournament_size }
    }
}

impl<G: Genome> SelectionOperator<G> for TournamentSelection {
    fn select<O: Objective<G>, R: Rng>(
        &self,
        population: &[G],
        objective: &O,
        rng: &mut R,
    ) -> Result<usize, OperatorError> {
        if self.tournament_size == 0 || self.tournament_size > population.len() {
            return Err(OperatorError::SelectionFailed(format!(
                "cannot sample {} distinct contenders from a population of {}",
                self.tournament_size,
                population.len()
            )));
        }

        let indices: Vec<usize> = (0..population.len()).collect();
        let mut winner: Option<(usize, f64)> = None;
        for &idx in indices.choose_multiple(rng, self.tournament_size) {
            let fitness = objective.evaluate(&population[idx]);
            // Strict comparison keeps the first minimal contender on ties
            match winner {
                Some((_, best)) if fitness >= best => {}
                _ => winner = Some((idx, fitness)),
            }
        }

        winner
            .map(|(idx, _)| idx)
            .ok_or_else(|| OperatorError::SelectionFailed("empty tournament".to_string()))
    }
}
