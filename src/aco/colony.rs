//! Ant colony state and the iteration loop.
//!
//! [`AntColony`] owns the ants and the pheromone matrix, borrows the
//! distance graph, and repeats:
//! reset ants -> construct tours -> update pheromones -> track best.

use super::ant::Ant;
use super::config::AcoConfig;
use super::graph::DistanceGraph;
use super::pheromone::PheromoneMatrix;
use super::random::{create_rng, RandomSource};
use super::selection::{heuristic_matrix, TrailView};
use super::types::{AcoResult, IterationBest};
use crate::error::AcoError;
use tracing::{debug, info};

/// An Ant System colony over a borrowed distance graph.
///
/// # Usage
///
/// ```
/// use u_aco::aco::{AcoConfig, AntColony};
///
/// let distances = vec![
///     vec![0.0, 6.0, 5.0, 12.0],
///     vec![6.0, 0.0, 15.0, 3.0],
///     vec![5.0, 15.0, 0.0, 21.0],
///     vec![12.0, 3.0, 21.0, 0.0],
/// ];
/// let config = AcoConfig::default().with_num_ants(5).with_seed(42);
/// let mut colony = AntColony::new(&distances, config).unwrap();
/// let result = colony.solve(10).unwrap();
/// assert_eq!(result.best_tour.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct AntColony<'g> {
    graph: DistanceGraph<'g>,
    config: AcoConfig,
    pheromone: PheromoneMatrix,
    heuristic: Vec<f64>,
    ants: Vec<Ant>,
    // scratch buffers reused every iteration
    weights: Vec<f64>,
    lengths: Vec<f64>,
    completed: usize,
}

impl<'g> AntColony<'g> {
    /// Builds a colony over `distances`.
    ///
    /// Fails if the matrix or the configuration is invalid.
    pub fn new(distances: &'g [Vec<f64>], config: AcoConfig) -> Result<Self, AcoError> {
        config.validate()?;
        let graph = DistanceGraph::new(distances)?;
        let n = graph.len();

        debug!(
            cities = n,
            ants = config.num_ants,
            evaporation = config.evaporation,
            alpha = config.alpha,
            beta = config.beta,
            q = config.q,
            "ant colony created"
        );

        Ok(Self {
            graph,
            pheromone: PheromoneMatrix::new(n, config.initial_pheromone),
            heuristic: heuristic_matrix(&graph, config.beta),
            ants: (0..config.num_ants).map(|_| Ant::new(n)).collect(),
            weights: vec![0.0; n],
            lengths: vec![0.0; config.num_ants],
            completed: 0,
            config,
        })
    }

    /// The distance graph.
    pub fn graph(&self) -> &DistanceGraph<'g> {
        &self.graph
    }

    /// The configuration.
    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    /// Number of cities.
    pub fn num_cities(&self) -> usize {
        self.graph.len()
    }

    /// Current pheromone levels.
    pub fn pheromone(&self) -> &PheromoneMatrix {
        &self.pheromone
    }

    /// The ant population, in population order.
    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    /// Iterations this colony has run so far, across all `solve` calls.
    pub fn iterations_completed(&self) -> usize {
        self.completed
    }

    /// Selection probability of every city for the ant at `ant_index`,
    /// leaving its current city. Visited cities get 0.
    ///
    /// Returns `None` if there is no such ant, it has not been placed, or
    /// its tour is already complete.
    pub fn selection_probabilities(&self, ant_index: usize) -> Option<Result<Vec<f64>, AcoError>> {
        let ant = self.ants.get(ant_index)?;
        if ant.is_complete() {
            return None;
        }
        let from = ant.current_city()?;
        let view = TrailView::new(&self.pheromone, &self.heuristic, self.config.alpha);
        Some(view.probabilities(ant, from))
    }

    /// Runs exactly `max_iterations` iterations and returns the best tour.
    ///
    /// Draws come from `config.seed`, or from a random seed when unset.
    pub fn solve(&mut self, max_iterations: usize) -> Result<AcoResult, AcoError> {
        let mut rng = match self.config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        self.solve_with_rng(max_iterations, &mut rng)
    }

    /// Runs exactly `max_iterations` iterations drawing from `rng`.
    pub fn solve_with_rng<R: RandomSource + ?Sized>(
        &mut self,
        max_iterations: usize,
        rng: &mut R,
    ) -> Result<AcoResult, AcoError> {
        self.solve_with_observer(max_iterations, rng, |_| {})
    }

    /// Runs exactly `max_iterations` iterations, calling `on_iteration`
    /// with each iteration's best tour as soon as the iteration completes.
    ///
    /// The global best is the shortest iteration best; ties keep the
    /// earliest. Iteration indices count across every run on this colony,
    /// so `best_iteration` matches the `iteration` the observer saw.
    pub fn solve_with_observer<R, F>(
        &mut self,
        max_iterations: usize,
        rng: &mut R,
        mut on_iteration: F,
    ) -> Result<AcoResult, AcoError>
    where
        R: RandomSource + ?Sized,
        F: FnMut(&IterationBest),
    {
        if max_iterations == 0 {
            return Err(AcoError::NoIterations);
        }

        let mut length_history = Vec::with_capacity(max_iterations);
        let mut best: Option<IterationBest> = None;

        for _ in 0..max_iterations {
            let current = self.run_iteration(rng)?;
            length_history.push(current.length);
            on_iteration(&current);

            if best.as_ref().is_none_or(|b| current.length < b.length) {
                best = Some(current);
            }
        }

        let best = best.ok_or(AcoError::NoIterations)?;
        info!(
            iterations = max_iterations,
            best_iteration = best.iteration,
            best_length = best.length,
            "ant colony finished"
        );

        Ok(AcoResult {
            best_tour: best.tour,
            best_length: best.length,
            best_iteration: best.iteration,
            iterations: max_iterations,
            length_history,
        })
    }

    /// Runs one full iteration and returns its best tour.
    pub fn run_iteration<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<IterationBest, AcoError> {
        self.reset_ants(rng);
        self.construct_tours(rng)?;
        self.update_pheromones()?;
        let best = self.update_best()?;
        self.completed += 1;

        debug!(
            iteration = best.iteration,
            best_length = best.length,
            "iteration complete"
        );
        Ok(best)
    }

    /// Clears every ant and places it on a uniformly random city.
    fn reset_ants<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let n = self.graph.len();
        for ant in &mut self.ants {
            ant.clear();
            ant.set_start(rng.next_index(n));
        }
    }

    /// Fills the remaining `n - 1` slots of every ant's tour.
    ///
    /// Each step advances all ants by one city, in population order.
    /// Pheromones are only read here.
    fn construct_tours<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Result<(), AcoError> {
        let n = self.graph.len();
        let view = TrailView::new(&self.pheromone, &self.heuristic, self.config.alpha);

        for position in 1..n {
            for ant in &mut self.ants {
                let from = ant.current_city().ok_or(AcoError::IncompleteTour {
                    missing: n,
                    cities: n,
                })?;
                let next = view.select_next(ant, from, &mut self.weights, rng)?;
                ant.visit(position, next);
            }
        }
        Ok(())
    }

    /// Evaporates the whole matrix, then lets every ant deposit
    /// `q / tour_length` on each edge of its tour.
    fn update_pheromones(&mut self) -> Result<(), AcoError> {
        for (len, ant) in self.lengths.iter_mut().zip(&self.ants) {
            *len = ant.tour_length(&self.graph)?;
        }

        self.pheromone.evaporate(self.config.evaporation);
        for (ant, &len) in self.ants.iter().zip(&self.lengths) {
            self.pheromone.deposit_tour(ant, self.config.q / len);
        }
        Ok(())
    }

    /// Shortest tour of this iteration, first ant wins ties.
    fn update_best(&self) -> Result<IterationBest, AcoError> {
        let mut best_idx = 0;
        for (i, &len) in self.lengths.iter().enumerate().skip(1) {
            if len < self.lengths[best_idx] {
                best_idx = i;
            }
        }

        let n = self.graph.len();
        let tour = self.ants[best_idx].tour().ok_or(AcoError::IncompleteTour {
            missing: n,
            cities: n,
        })?;
        Ok(IterationBest {
            iteration: self.completed,
            tour,
            length: self.lengths[best_idx],
        })
    }
}
