//! Ant Colony Optimization for the Traveling Salesman Problem.
//!
//! Implements the Ant System: simulated ants construct tours over a
//! weighted complete graph, guided by pheromone trails that shorter tours
//! reinforce and that evaporate every iteration.
//!
//! - [`aco`]: Colony, ants, pheromone matrix, and the iteration loop
//! - [`error`]: Error type shared by every fallible operation
//!
//! # Example
//!
//! ```
//! use u_aco::aco::{tour_length, AcoConfig, AntColony, DistanceGraph};
//!
//! let distances = vec![
//!     vec![0.0, 6.0, 5.0, 12.0],
//!     vec![6.0, 0.0, 15.0, 3.0],
//!     vec![5.0, 15.0, 0.0, 21.0],
//!     vec![12.0, 3.0, 21.0, 0.0],
//! ];
//! let config = AcoConfig::default()
//!     .with_num_ants(5)
//!     .with_evaporation(0.1)
//!     .with_alpha(1.0)
//!     .with_beta(1.0)
//!     .with_q(20.0)
//!     .with_seed(42);
//!
//! let mut colony = AntColony::new(&distances, config)?;
//! let result = colony.solve(10)?;
//!
//! let graph = DistanceGraph::new(&distances)?;
//! assert_eq!(tour_length(&result.best_tour, &graph)?, result.best_length);
//! # Ok::<(), u_aco::error::AcoError>(())
//! ```
//!
//! # Architecture
//!
//! Single-threaded and sequential. The engine never prints or sleeps;
//! progress is reported through [`aco::AntColony::solve_with_observer`] and
//! `tracing` events.

pub mod aco;
pub mod error;
