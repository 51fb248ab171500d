//! Error types for u-aco.
//!
//! Every failure is fatal to a run: a colony with a corrupted distance
//! graph or pheromone matrix cannot be repaired mid-search.

use thiserror::Error;

/// Errors raised while building or running an ant colony.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcoError {
    // ===== Graph Errors =====
    /// The distance matrix has no rows.
    #[error("distance graph is empty")]
    EmptyGraph,

    /// A tour needs at least two cities.
    #[error("distance graph needs at least 2 cities, got {cities}")]
    TooFewCities {
        /// Number of cities in the graph.
        cities: usize,
    },

    /// A row length differs from the number of rows.
    #[error("distance graph is not square: row {row} has {len} entries, expected {expected}")]
    NonSquareGraph {
        /// Offending row index.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Number of rows in the matrix.
        expected: usize,
    },

    /// An edge cost that would feed a reciprocal or power with a
    /// non-finite, zero, or negative value.
    #[error("invalid distance {value} on edge {from} -> {to}")]
    InvalidDistance {
        /// Source city.
        from: usize,
        /// Destination city.
        to: usize,
        /// Rejected edge cost.
        value: f64,
    },

    // ===== Configuration Errors =====
    /// A hyperparameter is outside its domain.
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// What the value violates.
        reason: String,
    },

    /// `solve` was asked for zero iterations, so there is no tour to return.
    #[error("at least one iteration is required")]
    NoIterations,

    // ===== Tour Errors =====
    /// A tour length was requested before every slot was filled.
    #[error("tour is incomplete: {missing} of {cities} cities unvisited")]
    IncompleteTour {
        /// Number of unfilled slots.
        missing: usize,
        /// Tour size.
        cities: usize,
    },

    /// A tour references a city the graph does not have.
    #[error("city {city} is out of range for a graph of {cities} cities")]
    CityOutOfRange {
        /// Offending city index.
        city: usize,
        /// Number of cities in the graph.
        cities: usize,
    },

    // ===== Search Errors =====
    /// The selection weights from a city diverged, or no city was left to pick.
    #[error("degenerate selection weights from city {from}: total {total}")]
    DegenerateWeights {
        /// City the ant was leaving.
        from: usize,
        /// Sum of the desirability weights over unvisited cities.
        total: f64,
    },
}
