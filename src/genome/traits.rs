//! Core genome trait
//!
//! This module defines the `Genome` trait, the capability set that lets
//! one generic evolutionary loop serve both representations.

use rand::Rng;
use serde::{de::DeserializeOwned, Serialize};

/// Core genome abstraction for the evolutionary loop.
///
/// A genome knows how to construct itself at random for a given problem
/// dimension and how to decode itself into the real-valued phenotype the
/// objective function consumes. Decoding is a pure function of the gene
/// values; it never mutates the genome.
pub trait Genome: Clone + Serialize + DeserializeOwned + 'static {
    /// Generate a random genome for a problem with `dimension` variables
    fn random<R: Rng>(dimension: usize, rng: &mut R) -> Self;

    /// Number of problem variables this genome encodes
    fn dimension(&self) -> usize;

    /// Number of positions genetic operators act on (bits for binary
    /// genomes, genes for real-valued ones)
    fn len(&self) -> usize;

    /// Whether the genome holds no positions at all
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decode into the phenotype vector evaluated by the objective
    fn decode(&self) -> Vec<f64>;
}
