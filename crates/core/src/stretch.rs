//! Normalization and linear-interpolation time-stretching: the smoothed
//! pixel-row sequence becomes an unsigned 8-bit PCM sample stream.

use anyhow::{bail, Result};

/// Expand each source value into `rate` interpolated PCM bytes.
///
/// Values are first rescaled to [0, 255] against the global min/max of the
/// whole sequence. Each output group then walks linearly from the previous
/// element's normalized target (truncated to an integer after every element,
/// starting at 0) up to the current one; step x of `rate` lands at x/rate of
/// the way, so the final byte of a group stops one step short of the target.
///
/// Fails on a flat sequence (max == min): normalization would divide by
/// zero, so that case is rejected up front instead of emitting NaN bytes.
pub fn normalize_and_stretch(values: &[u32], rate: usize) -> Result<Vec<u8>> {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        bail!("Cannot stretch an empty sample sequence");
    };
    if min == max {
        bail!(
            "Degenerate waveform: all {} samples equal {}, no amplitude range to normalize",
            values.len(),
            min
        );
    }

    let range = (max - min) as f64;
    let mut pcm = Vec::with_capacity(values.len() * rate);
    let mut last = 0.0f64;

    for &v in values {
        let normalized = (v - min) as f64 / range * 255.0;

        for x in 0..rate {
            let t = x as f64 / rate as f64;
            let interpolated = t * normalized + (1.0 - t) * last;
            // Guaranteed in range by construction; clamp anyway so a broken
            // invariant can never wrap into garbage audio.
            pcm.push(interpolated.clamp(0.0, 255.0) as u8);
        }

        // The carried baseline is the integer-truncated target, not the last
        // interpolated step. Downstream bytes depend on this exact loss.
        last = normalized.trunc();
    }

    Ok(pcm)
}
