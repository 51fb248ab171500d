//! Probabilistic next-city selection.
//!
//! For an ant at city `i`, every unvisited city `j` gets the desirability
//!
//! ```text
//! weight(i, j) = tau(i, j)^alpha * (1 / d(i, j))^beta
//! ```
//!
//! and is chosen with probability `weight(i, j) / sum(weight(i, *))` by
//! roulette-wheel sampling over unvisited cities in ascending index order.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"

use super::ant::Ant;
use super::graph::DistanceGraph;
use super::pheromone::PheromoneMatrix;
use super::random::RandomSource;
use crate::error::AcoError;
use tracing::trace;

/// Precomputes `(1 / d(i, j))^beta` for every off-diagonal pair.
///
/// The diagonal is never read and is left at 0.
pub(crate) fn heuristic_matrix(graph: &DistanceGraph<'_>, beta: f64) -> Vec<f64> {
    let n = graph.len();
    let mut eta = vec![0.0; n * n];
    for i in 0..n {
        for j in 0..n {
            if i != j {
                eta[i * n + j] = (1.0 / graph.distance(i, j)).powf(beta);
            }
        }
    }
    eta
}

/// Read-only view over the trail state used during tour construction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TrailView<'a> {
    pheromone: &'a PheromoneMatrix,
    heuristic: &'a [f64],
    alpha: f64,
}

impl<'a> TrailView<'a> {
    pub(crate) fn new(pheromone: &'a PheromoneMatrix, heuristic: &'a [f64], alpha: f64) -> Self {
        debug_assert_eq!(heuristic.len(), pheromone.len() * pheromone.len());
        Self {
            pheromone,
            heuristic,
            alpha,
        }
    }

    #[inline]
    fn weight(&self, from: usize, to: usize) -> f64 {
        let n = self.pheromone.len();
        self.pheromone.get(from, to).powf(self.alpha) * self.heuristic[from * n + to]
    }

    /// Fills `weights` with the desirability of every city from `from`
    /// (0 for visited cities) and returns their sum.
    ///
    /// Long-unused trails can evaporate until every candidate weight
    /// underflows to 0. The candidates are then weighted equally, so the
    /// pick is uniform over unvisited cities. Fails if the sum is not
    /// finite or no city is left to visit.
    pub(crate) fn weights(
        &self,
        ant: &Ant,
        from: usize,
        weights: &mut [f64],
    ) -> Result<f64, AcoError> {
        let mut total = 0.0;
        let mut candidates = 0usize;
        for (to, w) in weights.iter_mut().enumerate() {
            *w = if ant.is_visited(to) {
                0.0
            } else {
                candidates += 1;
                self.weight(from, to)
            };
            total += *w;
        }
        if !total.is_finite() || candidates == 0 {
            return Err(AcoError::DegenerateWeights { from, total });
        }
        if total <= 0.0 {
            trace!(from, candidates, "all weights underflowed, picking uniformly");
            for (to, w) in weights.iter_mut().enumerate() {
                if !ant.is_visited(to) {
                    *w = 1.0;
                }
            }
            total = candidates as f64;
        }
        Ok(total)
    }

    /// Picks the next city for `ant`, currently at `from`.
    ///
    /// Draws one `r` in `[0, 1)` and returns the first unvisited city, in
    /// index order, at which the cumulative probability reaches `r`. If
    /// rounding keeps the cumulative mass below `r`, the last unvisited
    /// city scanned is returned.
    pub(crate) fn select_next<R: RandomSource + ?Sized>(
        &self,
        ant: &Ant,
        from: usize,
        weights: &mut [f64],
        rng: &mut R,
    ) -> Result<usize, AcoError> {
        let total = self.weights(ant, from, weights)?;
        let r = rng.next_unit();

        let mut cumulative = 0.0;
        let mut last = None;
        for (to, &w) in weights.iter().enumerate() {
            if ant.is_visited(to) {
                continue;
            }
            cumulative += w / total;
            last = Some(to);
            if cumulative >= r {
                return Ok(to);
            }
        }

        trace!(from, r, cumulative, "roulette fell through, taking last unvisited city");
        last.ok_or(AcoError::DegenerateWeights { from, total })
    }

    /// Selection probability of every city from `from` (0 for visited).
    pub(crate) fn probabilities(&self, ant: &Ant, from: usize) -> Result<Vec<f64>, AcoError> {
        let mut weights = vec![0.0; ant.num_cities()];
        let total = self.weights(ant, from, &mut weights)?;
        for w in &mut weights {
            *w /= total;
        }
        Ok(weights)
    }
}
