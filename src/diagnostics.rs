//! Diagnostics and statistics
//!
//! This module provides per-generation statistics collection for
//! evolutionary runs. Statistics live in memory on the run report and
//! are dropped with it; nothing is persisted.

use serde::{Deserialize, Serialize};

/// Statistics for a single generation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number (0 = freshly initialized population)
    pub generation: usize,
    /// Number of individuals in the population
    pub population_size: usize,
    /// Best (lowest) fitness in this generation
    pub best_fitness: f64,
    /// Worst (highest) fitness in this generation
    pub worst_fitness: f64,
    /// Mean fitness
    pub mean_fitness: f64,
}

impl GenerationStats {
    /// Compute statistics from a generation's fitness values
    pub fn from_fitnesses(generation: usize, fitnesses: &[f64]) -> Self {
        if fitnesses.is_empty() {
            return Self {
                generation,
                population_size: 0,
                best_fitness: f64::INFINITY,
                worst_fitness: f64::NEG_INFINITY,
                mean_fitness: 0.0,
            };
        }

        let mut best = f64::INFINITY;
        let mut worst = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &fitness in fitnesses {
            best = best.min(fitness);
            worst = worst.max(fitness);
            sum += fitness;
        }

        Self {
            generation,
            population_size: fitnesses.len(),
            best_fitness: best,
            worst_fitness: worst,
            mean_fitness: sum / fitnesses.len() as f64,
        }
    }
}

/// Statistics for a whole evolutionary run
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EvolutionStats {
    /// Per-generation statistics, in order
    generations: Vec<GenerationStats>,
}

impl EvolutionStats {
    /// Create an empty statistics recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Record statistics for one generation
    pub fn record(&mut self, stats: GenerationStats) {
        self.generations.push(stats);
    }

    /// Get the recorded generations, in order
    pub fn generations(&self) -> &[GenerationStats] {
        &self.generations
    }

    /// Number of recorded generations (including generation 0)
    pub fn num_generations(&self) -> usize {
        self.generations.len()
    }

    /// Best fitness per generation, in order
    pub fn best_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.best_fitness).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_generation_stats_from_fitnesses() {
        let stats = GenerationStats::from_fitnesses(3, &[5.0, 1.0, 3.0]);
        assert_eq!(stats.generation, 3);
        assert_eq!(stats.population_size, 3);
        assert_eq!(stats.best_fitness, 1.0);
        assert_eq!(stats.worst_fitness, 5.0);
        assert_relative_eq!(stats.mean_fitness, 3.0);
    }

    #[test]
    fn test_generation_stats_empty() {
        let stats = GenerationStats::from_fitnesses(0, &[]);
        assert_eq!(stats.population_size, 0);
        assert_eq!(stats.best_fitness, f64::INFINITY);
    }

    #[test]
    fn test_evolution_stats_history() {
        let mut stats = EvolutionStats::new();
        stats.record(GenerationStats::from_fitnesses(0, &[4.0, 2.0]));
        stats.record(GenerationStats::from_fitnesses(1, &[3.0, 1.0]));

        assert_eq!(stats.num_generations(), 2);
        assert_eq!(stats.best_fitness_history(), vec![2.0, 1.0]);
        assert_eq!(stats.generations()[1].generation, 1);
    }

    #[test]
    fn test_evolution_stats_serde_roundtrip() {
        let mut stats = EvolutionStats::new();
        stats.record(GenerationStats::from_fitnesses(0, &[1.0, 2.0, 3.0]));

        let serialized = serde_json::to_string(&stats).unwrap();
        let deserialized: EvolutionStats = serde_json::from_str(&serialized).unwrap();
        assert_eq!(
            deserialized.best_fitness_history(),
            stats.best_fitness_history()
        );
    }
}
