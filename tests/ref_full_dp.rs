use rodcut::{bottom_up, top_down, utils::revenue};
use proptest::prelude::*;

/// Best revenue and largest piece count over every ordered composition of `n`.
fn exhaustive(prices: &[i64]) -> (i64, usize) {
    let n = prices.len();
    let mut best: Option<(i64, usize)> = None;
    // Bit k set means a cut after position k + 1.
    for mask in 0u32..(1 << (n - 1)) {
        let mut profit = 0i64;
        let mut pieces = 0usize;
        let mut start = 0usize;
        for pos in 1..=n {
            let cut_here = pos == n || mask & (1 << (pos - 1)) != 0;
            if cut_here {
                profit += prices[pos - start - 1];
                pieces += 1;
                start = pos;
            }
        }
        best = match best {
            None => Some((profit, pieces)),
            Some((p, k)) if profit > p || (profit == p && pieces > k) => Some((profit, pieces)),
            keep => keep,
        };
    }
    best.unwrap_or((0, 0))
}

fn price_table() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-3i64..25, 1..11)
}

proptest! {
    #[test]
    fn top_down_matches_enumeration(prices in price_table()) {
        let n = prices.len() as i64;
        let (profit, pieces) = exhaustive(&prices);
        let s = top_down::solve(n, &prices).unwrap();
        prop_assert_eq!(s.max_profit, profit);
        prop_assert_eq!(s.cuts.len(), pieces);
        prop_assert_eq!(revenue(&s.cuts, &prices), Some(profit));
    }

    #[test]
    fn bottom_up_matches_enumeration(prices in price_table()) {
        let n = prices.len() as i64;
        let (profit, pieces) = exhaustive(&prices);
        let s = bottom_up::solve(n, &prices).unwrap();
        prop_assert_eq!(s.max_profit, profit);
        prop_assert_eq!(s.cuts.len(), pieces);
        prop_assert_eq!(revenue(&s.cuts, &prices), Some(profit));
    }
}

#[test]
fn clrs_price_table() {
    let prices = [1, 5, 8, 9, 10, 17, 17, 20, 24, 30];
    let expected = [1, 5, 8, 10, 13, 17, 18, 22, 25, 30];
    for n in 1..=prices.len() {
        let table = &prices[..n];
        assert_eq!(exhaustive(table).0, expected[n - 1]);
        assert_eq!(top_down::solve(n as i64, table).unwrap().max_profit, expected[n - 1]);
        assert_eq!(bottom_up::solve(n as i64, table).unwrap().max_profit, expected[n - 1]);
    }
}
