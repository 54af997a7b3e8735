//! Optimal rod cutting
//!
//! This crate computes the maximum revenue obtainable by cutting a rod of
//! integer length `N` into integer-length pieces, given a price for every
//! piece length, and reconstructs one optimal list of pieces.
//!
//! ## Core idea
//! 1. Validate the `(length, prices)` pair into a [`RodInstance`].
//! 2. Solve it with either strategy:
//!    - [`top_down`]: memoized descent over an explicit arena keyed by
//!      sub-length, driven by a heap-allocated frame stack.
//!    - [`bottom_up`]: tabulation in increasing length order with a
//!      per-length best-first-cut table.
//! 3. Both strategies share the [`reconstruct`] walk that turns a first-cut
//!    table into the ordered piece list.
//!
//! The two strategies always agree on the optimal revenue. When several
//! decompositions reach it, both prefer the one with more pieces; on a full
//! tie the top-down solver keeps the first candidate found while the
//! bottom-up solver keeps the one with the larger first piece.
//!
//! ## Quick start
//! ```
//! use rodcut::{bottom_up, top_down};
//!
//! let prices = [2, 5, 7, 8, 10];
//! let memo = top_down::solve(5, &prices).unwrap();
//! let table = bottom_up::solve(5, &prices).unwrap();
//! assert_eq!(memo.max_profit, 12);
//! assert_eq!(table.max_profit, 12);
//! assert_eq!(memo.cuts.iter().sum::<usize>(), 5);
//! ```
//!
//! ## Picking a strategy
//! [`SolverBuilder`] selects a strategy up front. [`Strategy::Auto`] uses
//! the top-down solver for short rods and switches to the bottom-up solver
//! above [`utils::DEFAULT_TOP_DOWN_LIMIT`], since the bottom-up table needs no
//! frame stack at all.

pub mod bottom_up;
pub mod builder;
pub mod harness;
pub mod reconstruct;
pub mod solution;
pub mod top_down;
pub mod traits;
pub mod utils;
pub mod validate;

pub use crate::bottom_up::BottomUp;
pub use crate::builder::{Solver, SolverBuilder, Strategy};
pub use crate::harness::{compare, Comparison};
pub use crate::solution::Solution;
pub use crate::top_down::TopDown;
pub use crate::traits::CutStrategy;
pub use crate::validate::{validate, RodError, RodInstance};
