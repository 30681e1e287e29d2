//! wavetrace CLI — play a picture of a waveform.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use wavetrace_core::config::TraceConfig;
use wavetrace_core::pipeline::{convert, samples_txt_path};

#[derive(Parser)]
#[command(
    name = "wavetrace",
    about = "Convert a bitmap waveform trace into a mono 8-bit PCM WAV file",
    version,
)]
struct Cli {
    /// Input bitmap depicting a waveform trace
    input: PathBuf,

    /// Output WAV path
    #[arg(long, default_value = "playable-image.wav")]
    output: PathBuf,

    /// Show verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(cli) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if !cli.input.exists() {
        bail!("File not found: {}", cli.input.display());
    }

    let samples_path = samples_txt_path(&cli.input);
    let result = convert(
        &cli.input,
        &samples_path,
        &cli.output,
        &TraceConfig::default(),
    )?;

    println!(
        "Converted {} source samples into {} PCM bytes",
        result.sample_count, result.pcm_len
    );
    println!("Samples: {}", result.samples_path.display());
    println!(
        "Output: {} (unsigned 8-bit PCM mono)",
        result.wav_path.display()
    );

    Ok(())
}
