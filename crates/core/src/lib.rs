//! wavetrace-core — turn a bitmap waveform trace into mono 8-bit PCM audio.
//!
//! The pipeline is a single forward pass:
//! raster → per-column dark-pixel extents → smoothing filter →
//! normalize + time-stretch → WAV bytes.

pub mod config;
pub mod extract;
pub mod pipeline;
pub mod raster;
pub mod smooth;
pub mod stretch;
pub mod wav;
