//! Mix command implementation
//!
//! Overlays one WAV file onto another with soft saturation. The output keeps
//! the length and sample rate of the base file.

use anyhow::{bail, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

use wavefactory_core::mix;
use wavefactory_core::wav::{DecodedWav, SampleEncoding, WavFormat};

use super::output::{print_written, read_wav, write_samples};

/// Run the mix command
///
/// # Arguments
/// * `base` - WAV file mixed into
/// * `overlay` - WAV file mixed on top
/// * `offset` - Overlay start position in seconds
/// * `encoding` - Output encoding; defaults to the base file's encoding
/// * `output` - Output WAV path
pub fn run(
    base: &Path,
    overlay: &Path,
    offset: f64,
    encoding: Option<SampleEncoding>,
    output: &Path,
) -> Result<ExitCode> {
    if !offset.is_finite() || offset < 0.0 {
        bail!("invalid mix offset: {} seconds", offset);
    }

    let base_wav = read_wav(base)?;
    let overlay_wav = read_wav(overlay)?;
    ensure_mono(base, &base_wav)?;
    ensure_mono(overlay, &overlay_wav)?;

    let sample_rate = base_wav.header.sample_rate;
    if sample_rate == 0 {
        bail!("{} has no format chunk, cannot determine sample rate", base.display());
    }
    let overlay_rate = overlay_wav.header.sample_rate;
    if overlay_rate != 0 && overlay_rate != sample_rate {
        bail!(
            "sample rates differ: {} is {} Hz, {} is {} Hz",
            base.display(),
            sample_rate,
            overlay.display(),
            overlay_rate
        );
    }

    let offset_samples = (offset * sample_rate as f64).round() as usize;
    let mut samples = base_wav.samples;
    let written = mix(&overlay_wav.samples, &mut samples, offset_samples);
    debug!(offset_samples, written, "overlay mixed");

    let dropped = overlay_wav.samples.len() - written;
    if dropped > 0 {
        println!(
            "  {} {} overlay samples past the end of the base were dropped",
            "!".yellow(),
            dropped
        );
    }

    let encoding = encoding.unwrap_or_else(|| {
        SampleEncoding::from_header(base_wav.header.audio_format, base_wav.header.bits_per_sample)
            .unwrap_or_default()
    });
    let format = WavFormat {
        sample_rate,
        encoding,
    };
    let wav = write_samples(output, &samples, format)?;
    print_written(output, &wav);

    Ok(ExitCode::SUCCESS)
}

fn ensure_mono(path: &Path, wav: &DecodedWav) -> Result<()> {
    if wav.header.channel_count > 1 {
        bail!(
            "{} has {} channels; only mono files can be mixed",
            path.display(),
            wav.header.channel_count
        );
    }
    Ok(())
}
