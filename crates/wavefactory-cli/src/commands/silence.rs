//! Silence command implementation

use anyhow::{Context, Result};
use std::path::Path;
use std::process::ExitCode;

use wavefactory_core::silence;
use wavefactory_core::wav::{SampleEncoding, WavFormat};

use super::output::{print_written, write_samples};

/// Run the silence command
///
/// # Arguments
/// * `duration` - Duration in seconds, rounded up to whole samples
/// * `sample_rate` - Sample rate in Hz
/// * `encoding` - Payload encoding of the written file
/// * `output` - Output WAV path
pub fn run(
    duration: f64,
    sample_rate: u32,
    encoding: SampleEncoding,
    output: &Path,
) -> Result<ExitCode> {
    let samples = silence(duration, sample_rate)
        .with_context(|| format!("Invalid silence: {}s at {} Hz", duration, sample_rate))?;
    let format = WavFormat {
        sample_rate,
        encoding,
    };
    let wav = write_samples(output, &samples, format)?;
    print_written(output, &wav);

    Ok(ExitCode::SUCCESS)
}
