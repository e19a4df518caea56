//! Tone command implementation
//!
//! Renders a fixed-length waveform to a WAV file.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

use wavefactory_core::wav::{SampleEncoding, WavFormat};
use wavefactory_core::{generate, Waveform, WaveformSpec};

use super::output::{print_written, write_samples};

/// Run the tone command
///
/// # Arguments
/// * `shape` - Waveform shape
/// * `spec` - Frequency, duration, sample rate and fade ratio
/// * `encoding` - Payload encoding of the written file
/// * `output` - Output WAV path
///
/// # Returns
/// Exit code: 0 on success
pub fn run(
    shape: Waveform,
    spec: &WaveformSpec,
    encoding: SampleEncoding,
    output: &Path,
) -> Result<ExitCode> {
    let samples = generate(shape, spec).with_context(|| {
        format!(
            "Invalid {} tone: {} Hz for {}s at {} Hz",
            shape, spec.frequency, spec.duration, spec.sample_rate
        )
    })?;
    debug!(%shape, samples = samples.len(), "tone generated");

    let format = WavFormat {
        sample_rate: spec.sample_rate,
        encoding,
    };
    let wav = write_samples(output, &samples, format)?;
    print_written(output, &wav);

    Ok(ExitCode::SUCCESS)
}
