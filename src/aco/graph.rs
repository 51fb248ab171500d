//! Distance graph and tour length evaluation.

use crate::error::AcoError;

/// A validated, borrowed view over a square distance matrix.
///
/// `distance(i, j)` is the cost of travelling directly from `i` to `j`.
/// The matrix need not be symmetric. Diagonal entries are never read
/// by the search.
///
/// # Examples
///
/// ```
/// use u_aco::aco::DistanceGraph;
///
/// let matrix = vec![vec![0.0, 2.0], vec![3.0, 0.0]];
/// let graph = DistanceGraph::new(&matrix).unwrap();
/// assert_eq!(graph.len(), 2);
/// assert!(!graph.is_symmetric());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DistanceGraph<'g> {
    rows: &'g [Vec<f64>],
}

impl<'g> DistanceGraph<'g> {
    /// Validates `rows` and wraps it without copying.
    ///
    /// Rejects empty or non-square matrices, fewer than 2 cities, and any
    /// off-diagonal entry that is not finite and strictly positive.
    pub fn new(rows: &'g [Vec<f64>]) -> Result<Self, AcoError> {
        let n = rows.len();
        if n == 0 {
            return Err(AcoError::EmptyGraph);
        }
        for (row, r) in rows.iter().enumerate() {
            if r.len() != n {
                return Err(AcoError::NonSquareGraph {
                    row,
                    len: r.len(),
                    expected: n,
                });
            }
        }
        if n < 2 {
            return Err(AcoError::TooFewCities { cities: n });
        }
        for (from, r) in rows.iter().enumerate() {
            for (to, &value) in r.iter().enumerate() {
                let ok = if from == to {
                    value.is_finite()
                } else {
                    value.is_finite() && value > 0.0
                };
                if !ok {
                    return Err(AcoError::InvalidDistance { from, to, value });
                }
            }
        }
        Ok(Self { rows })
    }

    /// Number of cities.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false for a validated graph; present for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cost of the directed edge `from -> to`.
    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.rows[from][to]
    }

    /// The underlying matrix.
    pub fn rows(&self) -> &'g [Vec<f64>] {
        self.rows
    }

    /// Whether `distance(i, j) == distance(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        let n = self.len();
        (0..n).all(|i| (i + 1..n).all(|j| self.rows[i][j] == self.rows[j][i]))
    }
}

/// Length of `tour` read as a closed cycle: consecutive edges plus the
/// edge from the last city back to the first.
///
/// # Examples
///
/// ```
/// use u_aco::aco::{tour_length, DistanceGraph};
///
/// let matrix = vec![
///     vec![0.0, 6.0, 5.0, 12.0],
///     vec![6.0, 0.0, 15.0, 3.0],
///     vec![5.0, 15.0, 0.0, 21.0],
///     vec![12.0, 3.0, 21.0, 0.0],
/// ];
/// let graph = DistanceGraph::new(&matrix).unwrap();
/// // 0 -> 2 -> 3 -> 1 -> 0
/// assert_eq!(tour_length(&[0, 2, 3, 1], &graph).unwrap(), 5.0 + 21.0 + 3.0 + 6.0);
/// ```
pub fn tour_length(tour: &[usize], graph: &DistanceGraph<'_>) -> Result<f64, AcoError> {
    let n = graph.len();
    let (&first, &last) = match (tour.first(), tour.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(AcoError::IncompleteTour {
                missing: n,
                cities: n,
            })
        }
    };
    if let Some(&city) = tour.iter().find(|&&c| c >= n) {
        return Err(AcoError::CityOutOfRange { city, cities: n });
    }

    let closing = graph.distance(last, first);
    Ok(tour
        .windows(2)
        .map(|w| graph.distance(w[0], w[1]))
        .fold(closing, |acc, d| acc + d))
}
