//! g-index computation
//!
//! Counts are sorted descending and scanned from k = 1. The first k whose
//! running sum lies in `[k², (k+1)²)` is returned; 0 if none does.

/// g-index from per-article received-citation counts
pub fn g_index(mut counts: Vec<usize>) -> usize {
    if counts.iter().all(|&c| c == 0) {
        return 0;
    }

    counts.sort_unstable_by(|a, b| b.cmp(a));

    let mut sum = 0usize;
    for (i, count) in counts.into_iter().enumerate() {
        let k = i + 1;
        sum += count;
        if sum >= k * k && sum < (k + 1) * (k + 1) {
            return k;
        }
    }

    0
}
