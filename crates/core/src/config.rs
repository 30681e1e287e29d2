//! Pipeline tunables. These are fixed constants, not user-facing knobs;
//! the struct exists so each stage takes its numbers explicitly instead of
//! reading module globals.

/// Luminance below which a pixel counts as part of the trace.
pub const DARK_THRESHOLD: f32 = 0.5;

/// Moving-average window for the smoothing filter.
pub const FILTER_DEPTH: usize = 4;

/// Output samples generated per source sample.
pub const TIME_STRETCH_RATE: usize = 9;

/// Output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 48_000;

/// Mono output.
pub const CHANNEL_COUNT: u16 = 1;

/// Unsigned 8-bit PCM.
pub const BYTES_PER_SAMPLE: u16 = 1;

/// Configuration for one conversion run.
#[derive(Debug, Clone, Copy)]
pub struct TraceConfig {
    /// Brightness threshold for dark-pixel classification
    pub dark_threshold: f32,
    /// Smoothing window size
    pub filter_depth: usize,
    /// Interpolated output samples per source sample
    pub stretch_rate: usize,
    /// WAV sample rate
    pub sample_rate: u32,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            dark_threshold: DARK_THRESHOLD,
            filter_depth: FILTER_DEPTH,
            stretch_rate: TIME_STRETCH_RATE,
            sample_rate: SAMPLE_RATE,
        }
    }
}
