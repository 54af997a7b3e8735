//! Assorted utilities and helpers.

/// Longest rod the [`Strategy::Auto`](crate::builder::Strategy::Auto) policy
/// still hands to the top-down solver.
///
/// Above this the bottom-up table is used, which needs no descent stack.
pub const DEFAULT_TOP_DOWN_LIMIT: usize = 4096;

/// Whether `Auto` should pick the top-down solver for a rod of `length`.
#[inline]
pub fn prefers_top_down(length: usize, top_down_limit: usize) -> bool {
    length <= top_down_limit
}

/// Total revenue of selling `cuts` at `prices`.
///
/// Returns `None` if any piece is zero or longer than the price table.
pub fn revenue(cuts: &[usize], prices: &[i64]) -> Option<i64> {
    cuts.iter().try_fold(0i64, |acc, &piece| {
        let price = prices.get(piece.checked_sub(1)?)?;
        Some(acc + price)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_is_inclusive() {
        assert!(prefers_top_down(1, DEFAULT_TOP_DOWN_LIMIT));
        assert!(prefers_top_down(DEFAULT_TOP_DOWN_LIMIT, DEFAULT_TOP_DOWN_LIMIT));
        assert!(!prefers_top_down(DEFAULT_TOP_DOWN_LIMIT + 1, DEFAULT_TOP_DOWN_LIMIT));
        assert!(!prefers_top_down(1, 0));
    }

    #[test]
    fn revenue_sums_piece_prices() {
        let prices = [2, 5, 7, 8, 10];
        assert_eq!(revenue(&[2, 2, 1], &prices), Some(12));
        assert_eq!(revenue(&[5], &prices), Some(10));
        assert_eq!(revenue(&[], &prices), Some(0));
    }

    #[test]
    fn revenue_rejects_unpriced_pieces() {
        let prices = [1, 2];
        assert_eq!(revenue(&[0], &prices), None);
        assert_eq!(revenue(&[1, 3], &prices), None);
    }
}
