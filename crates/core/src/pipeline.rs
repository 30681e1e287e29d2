//! End-to-end conversion: image file in, sample dump + WAV file out.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::TraceConfig;
use crate::extract::extract_extents;
use crate::raster::load_raster;
use crate::smooth::smooth;
use crate::stretch::normalize_and_stretch;
use crate::wav::{encode_wav, write_fresh};

/// What one conversion run produced.
#[derive(Debug)]
pub struct ConversionResult {
    /// Plain-text dump of the smoothed samples, one integer per line
    pub samples_path: PathBuf,
    /// The playable WAV file
    pub wav_path: PathBuf,
    /// Smoothed source samples (pre-stretch)
    pub sample_count: usize,
    /// Bytes in the WAV data chunk
    pub pcm_len: usize,
}

/// Default location of the sample dump: the input's file stem with a `.txt`
/// extension, in the current working directory.
pub fn samples_txt_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "waveform".to_string());
    PathBuf::from(format!("{stem}.txt"))
}

/// Run the whole pipeline on one image.
///
/// Stages run strictly forward: decode, per-column extent extraction,
/// smoothing, sample dump, normalize + time-stretch, WAV encode. Any
/// pre-existing file at `samples_path` or `wav_path` is deleted before its
/// replacement is written. A flat waveform aborts before the WAV stage, so
/// no audio file is left behind in that case.
pub fn convert(
    input: &Path,
    samples_path: &Path,
    wav_path: &Path,
    config: &TraceConfig,
) -> Result<ConversionResult> {
    let raster = load_raster(input)?;
    log::info!(
        "Image {}: {} x {}",
        input.display(),
        raster.width(),
        raster.height()
    );

    let mut values = extract_extents(&raster, config);
    log::info!(
        "Extracted {} min/max extent samples from {} columns",
        values.len(),
        raster.width()
    );

    smooth(&mut values, config.filter_depth);
    log::info!("Applied smoothing filter with depth {}", config.filter_depth);

    let dump: String = values.iter().map(|v| format!("{v}\n")).collect();
    write_fresh(samples_path, dump.as_bytes())?;
    log::info!("Wrote sample dump: {}", samples_path.display());

    let pcm = normalize_and_stretch(&values, config.stretch_rate)?;
    log::info!(
        "Time-stretched {} samples into {} PCM bytes (rate {})",
        values.len(),
        pcm.len(),
        config.stretch_rate
    );

    let wav = encode_wav(&pcm, config.sample_rate);
    write_fresh(wav_path, &wav)?;
    log::info!("Wrote WAV: {}", wav_path.display());

    Ok(ConversionResult {
        samples_path: samples_path.to_path_buf(),
        wav_path: wav_path.to_path_buf(),
        sample_count: values.len(),
        pcm_len: pcm.len(),
    })
}
