//! Shape-parameterized waveform generation.
//!
//! Every shape shares one path: validate, evaluate the raw waveform per sample,
//! apply the linear fade envelope, then narrow to `f32` or quantize to PCM.

use crate::codec::samples_to_pcm16;
use crate::envelope::LinearFade;
use crate::error::ValidationError;
use crate::waveform::{Waveform, WaveformSpec};

/// Generates a normalized sample buffer.
///
/// # Arguments
/// * `shape` - Waveform shape
/// * `spec` - Frequency, duration, sample rate and fade ratio
///
/// # Returns
/// `floor(duration * sample_rate)` samples, or the first violated constraint
pub fn generate(shape: Waveform, spec: &WaveformSpec) -> Result<Vec<f32>, ValidationError> {
    let samples = render(shape, spec)?;
    Ok(samples.into_iter().map(|s| s as f32).collect())
}

/// Generates a 16-bit little-endian PCM buffer.
///
/// The output is exactly twice as many bytes as [`generate`] returns samples.
pub fn generate_pcm16(shape: Waveform, spec: &WaveformSpec) -> Result<Vec<u8>, ValidationError> {
    Ok(samples_to_pcm16(&generate(shape, spec)?))
}

fn render(shape: Waveform, spec: &WaveformSpec) -> Result<Vec<f64>, ValidationError> {
    spec.validate()?;

    let num_samples = spec.num_samples();
    let sample_rate = spec.sample_rate as f64;

    let mut output: Vec<f64> = (0..num_samples)
        .map(|i| shape.value_at(spec.frequency, sample_rate, i))
        .collect();

    LinearFade::new(num_samples, spec.fade_ratio).apply(&mut output);

    Ok(output)
}
