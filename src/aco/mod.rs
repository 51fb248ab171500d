//! Ant Colony Optimization (ACO) for the Traveling Salesman Problem.
//!
//! A population of ants builds tours over a complete weighted graph. Each
//! ant picks its next city with probability proportional to
//! `pheromone^alpha * (1 / distance)^beta`. After every iteration all trails
//! evaporate and each ant deposits `Q / tour_length` on the edges it used,
//! so shorter tours attract later ants.
//!
//! # Key Types
//!
//! - [`AcoConfig`]: Hyperparameters (ant count, evaporation, alpha, beta, Q, seed)
//! - [`AntColony`]: Owns ants and trails, runs the iteration loop
//! - [`Ant`]: Builds one tour per iteration
//! - [`PheromoneMatrix`]: Directed trail levels
//! - [`DistanceGraph`]: Validated view over the caller's distance matrix
//! - [`AcoResult`] / [`IterationBest`]: Run result and per-iteration best
//! - [`RandomSource`]: The draw stream; any [`rand::Rng`] qualifies
//!
//! # Determinism
//!
//! A run is fully determined by its configuration and random stream.
//! Draws are consumed in a fixed order each iteration: one start city per
//! ant in population order, then for each construction step one unit draw
//! per ant in population order.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

mod ant;
mod colony;
mod config;
mod graph;
mod pheromone;
mod random;
mod selection;
mod types;

pub use ant::Ant;
pub use colony::AntColony;
pub use config::AcoConfig;
pub use graph::{tour_length, DistanceGraph};
pub use pheromone::PheromoneMatrix;
pub use random::{create_rng, RandomSource};
pub use types::{AcoResult, IterationBest};
