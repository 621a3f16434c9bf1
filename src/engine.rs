//! Generational evolutionary loop
//!
//! This module implements the elitist (μ+λ) generational genetic
//! algorithm shared by both representations, and the entry point that
//! wires a [`RunConfig`](crate::config::RunConfig) to concrete
//! operators.

use std::cmp::Ordering;
use std::marker::PhantomData;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::{Representation, RunConfig};
use crate::diagnostics::{EvolutionStats, GenerationStats};
use crate::error::{EvoResult, EvolutionError};
use crate::fitness::{Objective, Schwefel};
use crate::genome::bit_string::BitString;
use crate::genome::real_vector::RealVector;
use crate::genome::traits::Genome;
use crate::operators::crossover::{BinaryCrossover, RealCrossover};
use crate::operators::mutation::{BitFlipMutation, UniformResetMutation};
use crate::operators::selection::TournamentSelection;
use crate::operators::traits::{CrossoverOperator, MutationOperator, SelectionOperator};

/// Outcome of an evolutionary run
#[derive(Clone, Debug)]
pub struct RunReport<G: Genome> {
    /// Fittest genome of the final population
    pub best_genome: G,
    /// Minimum fitness in the final population
    pub best_fitness: f64,
    /// Per-generation statistics (generation 0 is the initial population)
    pub stats: EvolutionStats,
}

/// Generational genetic algorithm
///
/// One generic loop parameterized by the genome type and its operator
/// set. Each generation: select a parent pool the size of the
/// population, shuffle it, recombine consecutive pairs (gated per pair
/// on the crossover probability), mutate every child, then keep the
/// best `population_size` individuals of parents ∪ children.
pub struct Ga<G, S, C, M, O>
where
    G: Genome,
{
    dimension: usize,
    population_size: usize,
    num_generations: usize,
    cross_prob: f64,
    selection: S,
    crossover: C,
    mutation: M,
    objective: O,
    _phantom: PhantomData<G>,
}

impl<G, S, C, M, O> Ga<G, S, C, M, O>
where
    G: Genome,
    S: SelectionOperator<G>,
    C: CrossoverOperator<G>,
    M: MutationOperator<G>,
    O: Objective<G>,
{
    /// Create a new loop from a run configuration and an operator set
    pub fn new(config: &RunConfig, selection: S, crossover: C, mutation: M, objective: O) -> Self {
        Self {
            dimension: config.dimension,
            population_size: config.population_size,
            num_generations: config.num_generations,
            cross_prob: config.cross_prob,
            selection,
            crossover,
            mutation,
            objective,
            _phantom: PhantomData,
        }
    }

    /// Run the genetic algorithm to completion.
    ///
    /// The generator is the single source of randomness; runs are
    /// reproducible given the same seed and configuration. An odd
    /// population size leaves the final shuffled parent unpaired each
    /// generation; it produces no children.
    pub fn run<R: Rng>(&self, rng: &mut R) -> EvoResult<RunReport<G>> {
        let mut population: Vec<G> = (0..self.population_size)
            .map(|_| G::random(self.dimension, rng))
            .collect();

        let mut stats = EvolutionStats::new();
        stats.record(self.generation_stats(0, &population));

        for generation in 1..=self.num_generations {
            population = self.step(population, rng)?;
            stats.record(self.generation_stats(generation, &population));
        }

        let (best_index, best_fitness) = self.best_of(&population)?;

        Ok(RunReport {
            best_genome: population.swap_remove(best_index),
            best_fitness,
            stats,
        })
    }

    /// Advance the population by one generation
    fn step<R: Rng>(&self, population: Vec<G>, rng: &mut R) -> EvoResult<Vec<G>> {
        let mut parents =
            self.selection
                .select_pool(&population, &self.objective, population.len(), rng)?;
        parents.shuffle(rng);

        let mut children = Vec::with_capacity(parents.len());
        for pair in parents.chunks_exact(2) {
            let (mut child1, mut child2) = if rng.gen::<f64>() < self.cross_prob {
                self.crossover.crossover(&pair[0], &pair[1], rng)?
            } else {
                (pair[0].clone(), pair[1].clone())
            };
            self.mutation.mutate(&mut child1, rng);
            self.mutation.mutate(&mut child2, rng);
            children.push(child1);
            children.push(child2);
        }

        // Elitist μ+λ replacement: best of parents ∪ children survive.
        // The sort is stable, so on equal fitness the current population
        // outranks the children it produced.
        let mut pooled: Vec<(f64, G)> = population
            .into_iter()
            .chain(children)
            .map(|genome| (self.objective.evaluate(&genome), genome))
            .collect();
        pooled.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        pooled.truncate(self.population_size);

        Ok(pooled.into_iter().map(|(_, genome)| genome).collect())
    }

    /// Index and fitness of the fittest individual
    fn best_of(&self, population: &[G]) -> EvoResult<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (index, genome) in population.iter().enumerate() {
            let fitness = self.objective.evaluate(genome);
            match best {
                Some((_, lowest)) if fitness >= lowest => {}
                _ => best = Some((index, fitness)),
            }
        }
        best.ok_or(EvolutionError::EmptyPopulation)
    }

    fn generation_stats(&self, generation: usize, population: &[G]) -> GenerationStats {
        let fitnesses: Vec<f64> = population
            .iter()
            .map(|genome| self.objective.evaluate(genome))
            .collect();
        GenerationStats::from_fitnesses(generation, &fitnesses)
    }
}

/// Run a full evolutionary experiment described by a configuration.
///
/// Validates the configuration, dispatches on representation and
/// crossover mode, prints the final best fitness to standard output as a
/// single numeric value, and returns it for reuse by a surrounding
/// harness.
pub fn run<R: Rng>(config: &RunConfig, rng: &mut R) -> EvoResult<f64> {
    let best = run_silent(config, rng)?;
    println!("{}", best);
    Ok(best)
}

/// Run a full experiment without printing; returns the final best
/// fitness.
pub fn run_silent<R: Rng>(config: &RunConfig, rng: &mut R) -> EvoResult<f64> {
    config.validate()?;
    match config.representation {
        Representation::Binary => {
            let ga = Ga::new(
                config,
                TournamentSelection::new(config.tournament_size),
                BinaryCrossover::from_mode(config.uniform_crossover),
                BitFlipMutation::new(config.mut_prob),
                Schwefel::new(),
            );
            Ok(ga.run(rng)?.best_fitness)
        }
        Representation::Real => {
            let ga = Ga::new(
                config,
                TournamentSelection::new(config.tournament_size),
                RealCrossover::from_mode(config.uniform_crossover),
                UniformResetMutation::new(config.mut_prob),
                Schwefel::new(),
            );
            Ok(ga.run(rng)?.best_fitness)
        }
    }
}
