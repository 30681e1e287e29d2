//! Forward moving-average smoothing over the extent sequence.

/// Smooth `values` in place with a forward window of `depth` elements.
///
/// For each index i in [0, len - depth), the value becomes the truncated
/// integer average of the ORIGINAL elements at [i, i + depth) — windows read
/// from a snapshot, never from already-smoothed neighbors. Indices
/// >= len - depth are never written and keep their pre-filter values;
/// sequences no longer than `depth` come back untouched.
///
/// Leaving the tail unfiltered is a contract, not a bug to fix: the output
/// stream is defined byte-for-byte by this exact edge policy.
pub fn smooth(values: &mut [u32], depth: usize) {
    if depth == 0 || values.len() <= depth {
        return;
    }

    let snapshot = values.to_vec();
    for i in 0..(values.len() - depth) {
        let sum: u64 = snapshot[i..i + depth].iter().map(|&v| v as u64).sum();
        values[i] = (sum / depth as u64) as u32;
    }
}
