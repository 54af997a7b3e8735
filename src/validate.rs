//! Input validation for rod-cutting instances.
//!
//! Every solve goes through [`validate`] first. A [`RodInstance`] can only be
//! obtained from it, so solvers receiving one never have to re-check lengths.

use thiserror::Error;

/// Caller-input errors detected before any solving work begins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RodError {
    /// The rod length was zero or negative.
    #[error("rod length must be positive, got {length}")]
    InvalidLength { length: i64 },

    /// The price table was empty or did not have one entry per piece length.
    #[error("price table must have exactly {expected} entries, got {actual}")]
    InvalidPriceTable { expected: i64, actual: usize },
}

/// A validated rod: positive length and a price for every piece length
/// `1..=length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RodInstance<'a> {
    length: usize,
    prices: &'a [i64],
}

impl<'a> RodInstance<'a> {
    /// Rod length `N`.
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Full price table; `prices()[k]` is the revenue of a piece of length `k + 1`.
    #[inline]
    pub fn prices(&self) -> &'a [i64] {
        self.prices
    }

    /// Revenue of a single piece of length `piece` (1-based).
    ///
    /// # Panics
    /// Panics if `piece` is zero or longer than the rod.
    #[inline]
    pub fn price_of(&self, piece: usize) -> i64 {
        self.prices[piece - 1]
    }
}

/// Check a raw `(length, prices)` pair.
///
/// The length is checked first, so a non-positive length is reported as
/// [`RodError::InvalidLength`] even when the table is also malformed.
pub fn validate(length: i64, prices: &[i64]) -> Result<RodInstance<'_>, RodError> {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("validate", length, table_len = prices.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    if length <= 0 {
        return Err(RodError::InvalidLength { length });
    }
    let n = usize::try_from(length).map_err(|_| RodError::InvalidPriceTable {
        expected: length,
        actual: prices.len(),
    })?;
    if prices.is_empty() || prices.len() != n {
        return Err(RodError::InvalidPriceTable {
            expected: length,
            actual: prices.len(),
        });
    }
    Ok(RodInstance { length: n, prices })
}
