//! Pheromone trail matrix.
//!
//! Readable by anyone holding a shared reference; mutated only by the
//! colony's update phase, between construction phases.

use super::ant::Ant;

/// Square matrix of directed pheromone levels, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    n: usize,
    trails: Vec<f64>,
}

impl PheromoneMatrix {
    /// Creates an `n x n` matrix with every cell set to `initial`.
    pub fn new(n: usize, initial: f64) -> Self {
        Self {
            n,
            trails: vec![initial; n * n],
        }
    }

    /// Number of cities.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the matrix has no cities.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Pheromone on the directed edge `from -> to`.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.trails[from * self.n + to]
    }

    /// All outgoing trail levels from `from`.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.trails[from * self.n..(from + 1) * self.n]
    }

    /// Every cell, row-major.
    pub fn cells(&self) -> &[f64] {
        &self.trails
    }

    /// Smallest cell value.
    pub fn min(&self) -> f64 {
        self.trails.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Multiplies every cell by `factor`.
    pub(crate) fn evaporate(&mut self, factor: f64) {
        for t in &mut self.trails {
            *t *= factor;
        }
    }

    /// Adds `amount` to every directed edge of the ant's closed tour.
    pub(crate) fn deposit_tour(&mut self, ant: &Ant, amount: f64) {
        for (from, to) in ant.edges() {
            self.trails[from * self.n + to] += amount;
        }
    }
}
