//! Result types for a colony run.

use std::fmt;

/// The shortest tour built during one iteration.
///
/// An owned copy: ant buffers are reused by the next iteration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationBest {
    /// Zero-based iteration index.
    pub iteration: usize,

    /// City permutation, read as a closed cycle.
    pub tour: Vec<usize>,

    /// Cyclic length of `tour`.
    pub length: f64,
}

/// Formats the tour as a closed, 1-based path: `1 -> 3 -> 4 -> 2 -> 1`.
impl fmt::Display for IterationBest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, city) in self.tour.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", city + 1)?;
        }
        if let Some(first) = self.tour.first() {
            write!(f, " -> {}", first + 1)?;
        }
        Ok(())
    }
}

/// Result of an ACO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// Shortest tour found in any iteration.
    pub best_tour: Vec<usize>,

    /// Cyclic length of `best_tour`.
    pub best_length: f64,

    /// Iteration in which `best_tour` was first found.
    ///
    /// Counted across every run on the same colony, like
    /// [`IterationBest::iteration`]; `length_history[0]` is not necessarily
    /// iteration 0.
    pub best_iteration: usize,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Best length of each iteration, in order.
    ///
    /// Per iteration, not a running minimum: later entries may be worse.
    pub length_history: Vec<f64>,
}
