//! Tabulated bottom-up solver.
//!
//! Fills the profit table for lengths `1..=N` in increasing order. Entry `j`
//! only reads entries `j - i` for `i in [1, j]`, all of which are already
//! final when `j` is computed. Alongside the profit, the table keeps the
//! piece count of the chosen decomposition and its first piece, which
//! [`reconstruct`](crate::reconstruct::reconstruct) follows to rebuild the
//! piece list.
//!
//! Tie-break: strictly more pieces wins; if profit and piece count both tie,
//! the larger first piece wins.

use crate::reconstruct::reconstruct;
use crate::solution::Solution;
use crate::traits::CutStrategy;
use crate::validate::{RodError, RodInstance};

/// Bottom-up strategy marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BottomUp;

impl CutStrategy for BottomUp {
    fn name(&self) -> &'static str {
        "bottom_up"
    }

    fn solve_instance(&self, rod: &RodInstance<'_>) -> Solution {
        let table = DpTable::fill(rod);
        let cuts = reconstruct(table.best_first_cut(), rod.length());
        Solution::from_cuts(table.max_profit(), cuts)
    }
}

/// Validate and solve with the bottom-up strategy.
pub fn solve(length: i64, prices: &[i64]) -> Result<Solution, RodError> {
    BottomUp.solve(length, prices)
}

/// Profit, piece-count and first-cut tables indexed by length `0..=N`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpTable {
    profit_at: Vec<i64>,
    pieces_at: Vec<usize>,
    best_first_cut: Vec<usize>,
}

impl DpTable {
    /// Fill all three tables for `rod`.
    pub fn fill(rod: &RodInstance<'_>) -> Self {
        let length = rod.length();

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("fill_table", length);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut profit_at = vec![0i64; length + 1];
        let mut pieces_at = vec![0usize; length + 1];
        let mut best_first_cut = vec![0usize; length + 1];

        for j in 1..=length {
            let mut best_profit = i64::MIN;
            let mut best_pieces = 0usize;
            let mut best_cut = 0usize;

            for i in 1..=j {
                let profit = rod.price_of(i) + profit_at[j - i];
                let pieces = 1 + pieces_at[j - i];
                let better = best_cut == 0
                    || profit > best_profit
                    || (profit == best_profit
                        && (pieces > best_pieces || (pieces == best_pieces && i > best_cut)));
                if better {
                    best_profit = profit;
                    best_pieces = pieces;
                    best_cut = i;
                }
            }

            profit_at[j] = best_profit;
            pieces_at[j] = best_pieces;
            best_first_cut[j] = best_cut;
        }

        Self {
            profit_at,
            pieces_at,
            best_first_cut,
        }
    }

    /// Rod length this table was filled for.
    #[inline]
    pub fn length(&self) -> usize {
        self.profit_at.len() - 1
    }

    /// Optimal revenue for the full rod.
    #[inline]
    pub fn max_profit(&self) -> i64 {
        self.profit_at[self.length()]
    }

    /// Best revenue per length.
    pub fn profit_at(&self) -> &[i64] {
        &self.profit_at
    }

    /// Piece count of the chosen decomposition per length.
    pub fn pieces_at(&self) -> &[usize] {
        &self.pieces_at
    }

    /// First piece of the chosen decomposition per length; entry 0 is 0.
    pub fn best_first_cut(&self) -> &[usize] {
        &self.best_first_cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;

    #[test]
    fn reference_scenarios() {
        let s = solve(5, &[2, 5, 7, 8, 10]).unwrap();
        assert_eq!(s.max_profit, 12);
        assert_eq!(s.total_length(), 5);

        let s = solve(3, &[1, 3, 8]).unwrap();
        assert_eq!(s.max_profit, 8);
        assert_eq!(s.cuts, vec![3]);
        assert_eq!(s.number_of_cuts, 0);

        let s = solve(4, &[3, 5, 6, 7]).unwrap();
        assert_eq!(s.max_profit, 12);
        assert_eq!(s.cuts, vec![1, 1, 1, 1]);
        assert_eq!(s.number_of_cuts, 3);
    }

    #[test]
    fn larger_first_cut_wins_on_full_tie() {
        let s = solve(3, &[1, 3, 3]).unwrap();
        assert_eq!(s.max_profit, 4);
        assert_eq!(s.cuts, vec![2, 1]);
    }

    #[test]
    fn tables_for_classic_prices() {
        let prices = [2, 5, 7, 8, 10];
        let rod = validate(5, &prices).unwrap();
        let table = DpTable::fill(&rod);
        assert_eq!(table.profit_at(), &[0, 2, 5, 7, 10, 12]);
        assert_eq!(table.length(), 5);
        assert_eq!(table.pieces_at(), &[0, 1, 1, 2, 2, 3]);
        assert_eq!(table.best_first_cut(), &[0, 1, 2, 2, 2, 2]);
        assert!(table
            .best_first_cut()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(j, &c)| (1..=j).contains(&c)));
    }

    #[test]
    fn negative_prices_still_sell_the_rod() {
        let s = solve(2, &[-5, -1]).unwrap();
        assert_eq!(s.max_profit, -1);
        assert_eq!(s.cuts, vec![2]);
    }

    #[test]
    fn single_unit_rod() {
        let s = solve(1, &[7]).unwrap();
        assert_eq!(s.max_profit, 7);
        assert_eq!(s.cuts, vec![1]);
        assert_eq!(s.number_of_cuts, 0);
    }

    #[test]
    fn rejects_invalid_input() {
        assert_eq!(
            solve(-3, &[1, 2, 3]),
            Err(RodError::InvalidLength { length: -3 })
        );
        assert!(matches!(
            solve(2, &[]),
            Err(RodError::InvalidPriceTable { .. })
        ));
    }
}
