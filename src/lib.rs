//! # schwefel-ga
//!
//! A genetic algorithm framework minimizing the Schwefel benchmark
//! function over two genome representations: fixed-length bit strings
//! decoded as signed integers, and real-valued vectors.
//!
//! Both representations share one generic generational loop with
//! tournament selection, configurable crossover, per-gene mutation, and
//! elitist (μ+λ) replacement. All randomness flows through an injectable
//! generator, so seeded runs are reproducible.
//!
//! ## Quick Start
//!
//! ```rust
//! use schwefel_ga::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let config = RunConfig {
//!     representation: Representation::Binary,
//!     dimension: 2,
//!     population_size: 10,
//!     num_generations: 20,
//!     cross_prob: 0.9,
//!     mut_prob: 0.01,
//!     tournament_size: 3,
//!     uniform_crossover: true,
//! };
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let best = schwefel_ga::run(&config, &mut rng).unwrap();
//! assert!(best.is_finite());
//! ```

pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod fitness;
pub mod genome;
pub mod operators;

pub use engine::{run, run_silent};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{Representation, RunConfig};
    pub use crate::diagnostics::{EvolutionStats, GenerationStats};
    pub use crate::engine::{run, run_silent, Ga, RunReport};
    pub use crate::error::*;
    pub use crate::fitness::{Objective, Schwefel, SCHWEFEL_OFFSET};
    pub use crate::genome::prelude::*;
    pub use crate::operators::prelude::*;
}
