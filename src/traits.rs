//! Core trait for rod-cutting strategies.
//!
//! To plug a new solving strategy into the builder, the harness and the
//! probe, implement [`CutStrategy`] for a (usually zero-sized) solver type.
//!
//! Contract for implementations of [`CutStrategy::solve_instance`]:
//! - `max_profit` is the optimum of
//!   `profit(n) = max over i in [1, n] of price[i-1] + profit(n - i)`.
//! - `cuts` lists piece lengths, first piece first, summing to the rod length.
//! - Among optimal decompositions one with the most pieces is returned.
//! - No state survives the call; every cache is local to it.

use crate::solution::Solution;
use crate::validate::{validate, RodError, RodInstance};

/// A rod-cutting solving strategy.
pub trait CutStrategy {
    /// Short identifier used in logs and probe output.
    fn name(&self) -> &'static str;

    /// Solve an already validated instance. Total on valid input.
    fn solve_instance(&self, rod: &RodInstance<'_>) -> Solution;

    /// Validate `(length, prices)` and solve it.
    fn solve(&self, length: i64, prices: &[i64]) -> Result<Solution, RodError> {
        let rod = validate(length, prices)?;
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("rod_solve", strategy = self.name(), length = rod.length());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();
        Ok(self.solve_instance(&rod))
    }
}
