//! Memoized top-down solver.
//!
//! The recurrence is evaluated on demand starting from the full rod:
//!
//! ```text
//! profit(0) = 0
//! profit(n) = max over i in [1, n] of price[i-1] + profit(n - i)
//! ```
//!
//! Instead of recursing on the call stack, descent is driven by an explicit
//! frame stack stored on the heap. A frame is pushed only for a sub-length
//! that has not been solved yet, and every pushed sub-length is strictly
//! shorter than the frame below it, so the stack never holds more than `N`
//! frames. That bound is reported by [`MemoTable::peak_depth`].
//!
//! Solved sub-lengths live in an arena indexed by sub-length. Each entry keeps
//! the first piece of its decomposition; the remainder is the memoized
//! decomposition of the shorter rod, so the piece list is rebuilt with
//! [`reconstruct`](crate::reconstruct::reconstruct).
//!
//! Tie-break: among candidates with the maximal profit the one with strictly
//! more pieces wins; on equal piece count the first one found while scanning
//! `i` upward is kept.

use crate::reconstruct::reconstruct;
use crate::solution::Solution;
use crate::traits::CutStrategy;
use crate::validate::{RodError, RodInstance};

/// Top-down strategy marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopDown;

impl CutStrategy for TopDown {
    fn name(&self) -> &'static str {
        "top_down"
    }

    fn solve_instance(&self, rod: &RodInstance<'_>) -> Solution {
        let memo = MemoTable::build(rod);
        let cuts = reconstruct(&memo.first_cuts(), rod.length());
        Solution::from_cuts(memo.max_profit(), cuts)
    }
}

/// Validate and solve with the top-down strategy.
pub fn solve(length: i64, prices: &[i64]) -> Result<Solution, RodError> {
    TopDown.solve(length, prices)
}

/// Solved sub-problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    profit: i64,
    pieces: usize,
    first_cut: usize,
}

/// Pending sub-length on the descent stack.
#[derive(Debug, Clone, Copy)]
struct Frame {
    n: usize,
    next: usize,
    best: Option<Entry>,
}

impl Frame {
    fn open(n: usize) -> Self {
        Self {
            n,
            next: 1,
            best: None,
        }
    }

    fn offer(&mut self, candidate: Entry) {
        let better = match self.best {
            None => true,
            Some(best) => {
                candidate.profit > best.profit
                    || (candidate.profit == best.profit && candidate.pieces > best.pieces)
            }
        };
        if better {
            self.best = Some(candidate);
        }
    }
}

/// Memo arena produced by one top-down solve.
///
/// Built fresh by [`MemoTable::build`] and owned by the caller; nothing is
/// shared between solves.
#[derive(Debug, Clone)]
pub struct MemoTable {
    entries: Vec<Option<Entry>>,
    peak_depth: usize,
}

impl MemoTable {
    /// Evaluate the recurrence for `rod`, solving each sub-length once.
    pub fn build(rod: &RodInstance<'_>) -> Self {
        let length = rod.length();

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("memo_descent", length);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut entries: Vec<Option<Entry>> = vec![None; length + 1];
        entries[0] = Some(Entry {
            profit: 0,
            pieces: 0,
            first_cut: 0,
        });

        let mut stack = Vec::new();
        let mut peak_depth = 0;
        if entries[length].is_none() {
            stack.push(Frame::open(length));
            peak_depth = 1;
        }

        while let Some(top) = stack.last().copied() {
            if top.next > top.n {
                entries[top.n] = top.best;
                stack.pop();
                continue;
            }

            let rest = top.n - top.next;
            let Some(sub) = entries[rest] else {
                stack.push(Frame::open(rest));
                peak_depth = peak_depth.max(stack.len());
                continue;
            };

            let candidate = Entry {
                profit: rod.price_of(top.next) + sub.profit,
                pieces: sub.pieces + 1,
                first_cut: top.next,
            };
            if let Some(frame) = stack.last_mut() {
                frame.offer(candidate);
                frame.next += 1;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(peak_depth, "memo descent finished");

        Self {
            entries,
            peak_depth,
        }
    }

    /// Rod length this table was built for.
    pub fn length(&self) -> usize {
        self.entries.len() - 1
    }

    /// Optimal revenue for the full rod.
    pub fn max_profit(&self) -> i64 {
        self.profit_at(self.length()).unwrap_or(0)
    }

    /// Optimal revenue for sub-length `n`, if it was solved.
    pub fn profit_at(&self, n: usize) -> Option<i64> {
        self.entries.get(n).copied().flatten().map(|e| e.profit)
    }

    /// Piece count of the memoized decomposition of sub-length `n`.
    pub fn pieces_at(&self, n: usize) -> Option<usize> {
        self.entries.get(n).copied().flatten().map(|e| e.pieces)
    }

    /// First-cut table indexed by sub-length; entry 0 is 0.
    pub fn first_cuts(&self) -> Vec<usize> {
        self.entries
            .iter()
            .map(|e| e.map_or(0, |e| e.first_cut))
            .collect()
    }

    /// Deepest the descent stack grew while building this table.
    pub fn peak_depth(&self) -> usize {
        self.peak_depth
    }
}
