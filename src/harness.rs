//! Side-by-side runs of both strategies.
//!
//! [`compare`] validates once and hands the same instance to both solvers.
//! The optimal revenue must match; the piece lists may legitimately differ
//! when several optimal decompositions exist, since the strategies break
//! ties differently.

use crate::bottom_up::BottomUp;
use crate::solution::Solution;
use crate::top_down::TopDown;
use crate::traits::CutStrategy;
use crate::validate::{validate, RodError, RodInstance};
#[cfg(feature = "parallel")]
use rayon::join;

/// Results of both strategies on one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub top_down: Solution,
    pub bottom_up: Solution,
}

impl Comparison {
    /// Whether both strategies report the same optimal revenue.
    pub fn profits_agree(&self) -> bool {
        self.top_down.max_profit == self.bottom_up.max_profit
    }

    /// Whether both strategies returned the same piece list.
    pub fn cuts_agree(&self) -> bool {
        self.top_down.cuts == self.bottom_up.cuts
    }
}

/// Validate `(length, prices)` and solve it with both strategies.
pub fn compare(length: i64, prices: &[i64]) -> Result<Comparison, RodError> {
    let rod = validate(length, prices)?;

    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("compare", length = rod.length());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let (top_down, bottom_up) = solve_pair(&rod);
    let comparison = Comparison {
        top_down,
        bottom_up,
    };

    #[cfg(feature = "tracing")]
    if !comparison.profits_agree() {
        tracing::error!(
            top_down = comparison.top_down.max_profit,
            bottom_up = comparison.bottom_up.max_profit,
            "strategies disagree on optimal revenue"
        );
    }

    Ok(comparison)
}

#[cfg(feature = "parallel")]
fn solve_pair(rod: &RodInstance<'_>) -> (Solution, Solution) {
    join(
        || TopDown.solve_instance(rod),
        || BottomUp.solve_instance(rod),
    )
}

#[cfg(not(feature = "parallel"))]
fn solve_pair(rod: &RodInstance<'_>) -> (Solution, Solution) {
    (TopDown.solve_instance(rod), BottomUp.solve_instance(rod))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_scenarios_agree_on_profit() {
        for (length, prices, expected) in [
            (5, vec![2, 5, 7, 8, 10], 12),
            (3, vec![1, 3, 8], 8),
            (4, vec![3, 5, 6, 7], 12),
        ] {
            let cmp = compare(length, &prices).unwrap();
            assert!(cmp.profits_agree());
            assert_eq!(cmp.top_down.max_profit, expected);
        }
    }

    #[test]
    fn tie_exposes_both_decompositions() {
        let cmp = compare(5, &[2, 5, 7, 8, 10]).unwrap();
        assert!(cmp.profits_agree());
        assert!(!cmp.cuts_agree());
        assert_eq!(cmp.top_down.cuts, vec![1, 2, 2]);
        assert_eq!(cmp.bottom_up.cuts, vec![2, 2, 1]);
        assert_eq!(cmp.top_down.number_of_cuts, 2);
        assert_eq!(cmp.bottom_up.number_of_cuts, 2);
    }

    #[test]
    fn unique_optimum_agrees_on_cuts() {
        let cmp = compare(3, &[1, 3, 8]).unwrap();
        assert!(cmp.cuts_agree());
    }

    #[test]
    fn invalid_input_fails_before_solving() {
        assert_eq!(
            compare(2, &[1]),
            Err(RodError::InvalidPriceTable {
                expected: 2,
                actual: 1
            })
        );
    }
}
