//! A single tour-building agent.

use super::graph::DistanceGraph;
use crate::error::AcoError;

/// An ant: builds one tour per iteration.
///
/// Ants are allocated once per population slot and reused across
/// iterations via [`clear`](Ant::clear). The tour is a fixed-size buffer of
/// slots, each either unvisited (`None`) or holding a city. The visited set
/// mirrors the filled slots for O(1) membership queries.
#[derive(Debug, Clone)]
pub struct Ant {
    tour: Vec<Option<usize>>,
    visited: Vec<bool>,
    placed: usize,
}

impl Ant {
    /// Creates an ant for a graph of `num_cities` cities, all slots unvisited.
    pub fn new(num_cities: usize) -> Self {
        Self {
            tour: vec![None; num_cities],
            visited: vec![false; num_cities],
            placed: 0,
        }
    }

    /// Resets every slot to unvisited and empties the visited set.
    pub fn clear(&mut self) {
        self.tour.fill(None);
        self.visited.fill(false);
        self.placed = 0;
    }

    /// Places the starting city in slot 0.
    pub fn set_start(&mut self, city: usize) {
        self.place(0, city);
    }

    /// Places `city` at tour slot `position` (1..n).
    ///
    /// The caller guarantees `city` is unvisited.
    pub fn visit(&mut self, position: usize, city: usize) {
        debug_assert!(position > 0, "slot 0 is filled by set_start");
        self.place(position, city);
    }

    fn place(&mut self, position: usize, city: usize) {
        debug_assert!(!self.visited[city], "city {city} already visited");
        debug_assert!(self.tour[position].is_none(), "slot {position} already filled");
        self.tour[position] = Some(city);
        self.visited[city] = true;
        self.placed += 1;
    }

    /// Whether `city` is already on this ant's tour.
    #[inline]
    pub fn is_visited(&self, city: usize) -> bool {
        self.visited[city]
    }

    /// The most recently placed city, or `None` on a cleared ant.
    pub fn current_city(&self) -> Option<usize> {
        self.placed
            .checked_sub(1)
            .and_then(|last| self.tour.get(last).copied().flatten())
    }

    /// Number of tour slots (the number of cities).
    pub fn num_cities(&self) -> usize {
        self.tour.len()
    }

    /// Whether every slot holds a city.
    pub fn is_complete(&self) -> bool {
        self.placed == self.tour.len()
    }

    /// Raw slot view; `None` marks an unvisited slot.
    pub fn slots(&self) -> &[Option<usize>] {
        &self.tour
    }

    /// The completed tour, or `None` if any slot is still unvisited.
    pub fn tour(&self) -> Option<Vec<usize>> {
        self.tour.iter().copied().collect()
    }

    /// Length of the closed tour: consecutive edges plus the closing edge.
    ///
    /// Fails with [`AcoError::IncompleteTour`] if any slot is unvisited.
    pub fn tour_length(&self, graph: &DistanceGraph<'_>) -> Result<f64, AcoError> {
        let cities = self.tour.len();
        if !self.is_complete() {
            return Err(AcoError::IncompleteTour {
                missing: cities - self.placed,
                cities,
            });
        }
        let city = |slot: usize| {
            self.tour[slot].ok_or(AcoError::IncompleteTour { missing: 1, cities })
        };

        let mut length = graph.distance(city(cities - 1)?, city(0)?);
        for i in 0..cities - 1 {
            length += graph.distance(city(i)?, city(i + 1)?);
        }
        Ok(length)
    }

    /// Directed edges of the completed tour, closing edge last.
    pub(crate) fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.tour.len();
        (0..n).filter_map(move |i| Some((self.tour[i]?, self.tour[(i + 1) % n]?)))
    }
}
