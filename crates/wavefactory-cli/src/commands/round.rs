//! Round command implementation
//!
//! Renders a loopable tone, optionally tiled several times so the seam can be
//! auditioned.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use wavefactory_core::wav::{SampleEncoding, WavFormat};
use wavefactory_core::waveform::MAX_SAMPLES;
use wavefactory_core::{generate_round_tone_with_cut, LoopShape};

use super::output::{print_written, write_samples};

/// Parameters for the round command.
#[derive(Debug, Clone, Copy)]
pub struct RoundArgs {
    pub shape: LoopShape,
    pub frequency: f64,
    pub min_duration: f64,
    pub sample_rate: u32,
    pub repeat: usize,
    pub encoding: SampleEncoding,
}

/// Run the round command
///
/// # Returns
/// Exit code: 0 on success
pub fn run(args: &RoundArgs, output: &Path) -> Result<ExitCode> {
    let (cut, tone) = generate_round_tone_with_cut(
        args.shape,
        args.frequency,
        args.min_duration,
        args.sample_rate,
    )
    .with_context(|| {
        format!(
            "Cannot build round tone: {} Hz, at least {}s at {} Hz",
            args.frequency, args.min_duration, args.sample_rate
        )
    })?;

    let crossing = match cut.precise {
        Some(_) => "precise".green(),
        None => "first".yellow(),
    };
    println!(
        "{} {} samples, cut at {} crossing",
        "Loop:".cyan().bold(),
        cut.length,
        crossing
    );

    let repeat = args.repeat.max(1);
    match tone.len().checked_mul(repeat) {
        Some(total) if total <= MAX_SAMPLES => {}
        _ => bail!(
            "{} copies of a {}-sample loop exceed the limit of {} samples",
            repeat,
            tone.len(),
            MAX_SAMPLES
        ),
    }
    let samples = tone.repeat(repeat);
    let format = WavFormat {
        sample_rate: args.sample_rate,
        encoding: args.encoding,
    };
    let wav = write_samples(output, &samples, format)?;
    print_written(output, &wav);

    Ok(ExitCode::SUCCESS)
}
