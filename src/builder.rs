use crate::bottom_up::BottomUp;
use crate::solution::Solution;
use crate::top_down::TopDown;
use crate::traits::CutStrategy;
use crate::utils::{prefers_top_down, DEFAULT_TOP_DOWN_LIMIT};
use crate::validate::{validate, RodError};

/// Which solver a [`Solver`] dispatches to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    TopDown,
    BottomUp,
    /// Top-down up to the configured length limit, bottom-up above it.
    #[default]
    Auto,
}

pub struct SolverBuilder {
    strategy: Option<Strategy>,
    top_down_limit: Option<usize>,
}

impl SolverBuilder {
    pub fn new() -> Self {
        Self {
            strategy: None,
            top_down_limit: None,
        }
    }
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }
    pub fn with_top_down_limit(mut self, limit: usize) -> Self {
        self.top_down_limit = Some(limit);
        self
    }
    pub fn build(self) -> Solver {
        Solver {
            strategy: self.strategy.unwrap_or_default(),
            top_down_limit: self.top_down_limit.unwrap_or(DEFAULT_TOP_DOWN_LIMIT),
        }
    }
}

impl Default for SolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Configured entry point dispatching to one of the two strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solver {
    strategy: Strategy,
    top_down_limit: usize,
}

impl Solver {
    /// Configured strategy, before `Auto` is resolved.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Concrete strategy used for a rod of `length`; never `Auto`.
    pub fn strategy_for(&self, length: usize) -> Strategy {
        match self.strategy {
            Strategy::Auto if prefers_top_down(length, self.top_down_limit) => Strategy::TopDown,
            Strategy::Auto => Strategy::BottomUp,
            fixed => fixed,
        }
    }

    /// Validate and solve with the resolved strategy.
    pub fn solve(&self, length: i64, prices: &[i64]) -> Result<Solution, RodError> {
        let rod = validate(length, prices)?;
        let resolved = self.strategy_for(rod.length());

        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("rod_solve", strategy = ?resolved, length = rod.length());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let solution = match resolved {
            Strategy::TopDown => TopDown.solve_instance(&rod),
            _ => BottomUp.solve_instance(&rod),
        };
        Ok(solution)
    }
}

impl Default for Solver {
    fn default() -> Self {
        SolverBuilder::new().build()
    }
}
