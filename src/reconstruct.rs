//! Rebuild a piece list from a first-cut table.
//!
//! Both solvers end up with a table where entry `j` holds the first piece
//! taken off an optimally cut rod of length `j`. Following those choices from
//! `N` down to zero yields the full decomposition, first piece first.

/// Walk `first_cut` from `length` down to zero and collect the pieces.
///
/// Runs in at most `length` steps because every valid entry satisfies
/// `1 <= first_cut[j] <= j`.
///
/// # Panics
/// Panics if `first_cut` is shorter than `length + 1` or if an entry on the
/// walked chain lies outside `[1, j]`.
pub fn reconstruct(first_cut: &[usize], length: usize) -> Vec<usize> {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("reconstruct", length);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    assert!(
        first_cut.len() > length,
        "first-cut table covers lengths 0..{} but rod has length {length}",
        first_cut.len()
    );

    let mut cuts = Vec::new();
    let mut remaining = length;
    while remaining > 0 {
        let cut = first_cut[remaining];
        assert!(
            (1..=remaining).contains(&cut),
            "first cut {cut} recorded for length {remaining} is out of range"
        );
        cuts.push(cut);
        remaining -= cut;
    }
    cuts
}
