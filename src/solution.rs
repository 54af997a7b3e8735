//! Result type shared by both solving strategies.

/// One optimal way to cut a rod.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Maximum total revenue.
    pub max_profit: i64,
    /// Piece lengths in the order they are taken off the rod.
    pub cuts: Vec<usize>,
    /// Number of cut operations needed to produce `cuts` from one rod.
    pub number_of_cuts: usize,
}

impl Solution {
    /// Build a solution from a profit and its piece list, deriving the cut count.
    pub fn from_cuts(max_profit: i64, cuts: Vec<usize>) -> Self {
        let number_of_cuts = cuts.len().saturating_sub(1);
        Self {
            max_profit,
            cuts,
            number_of_cuts,
        }
    }

    /// Number of pieces sold.
    #[inline]
    pub fn pieces(&self) -> usize {
        self.cuts.len()
    }

    /// Total length covered by the pieces.
    #[inline]
    pub fn total_length(&self) -> usize {
        self.cuts.iter().sum()
    }
}
