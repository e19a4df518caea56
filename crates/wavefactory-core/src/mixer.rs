//! Silence buffers and soft-saturating mixing.

use crate::error::ValidationError;
use crate::waveform::validate_sample_count;

/// Number of samples in a silence of `duration` seconds: `ceil(duration * sample_rate)`.
///
/// Silence rounds up while waveform generators round down. A zero duration is
/// valid and yields no samples.
///
/// # Errors
/// Zero sample rate, negative or non-finite duration, or a length above
/// [`MAX_SAMPLES`](crate::waveform::MAX_SAMPLES).
pub fn silence_len(duration: f64, sample_rate: u32) -> Result<usize, ValidationError> {
    if sample_rate == 0 {
        return Err(ValidationError::InvalidSampleRate { rate: sample_rate });
    }
    if !(duration >= 0.0) || duration.is_infinite() {
        return Err(ValidationError::InvalidDuration { duration });
    }

    let samples = duration * sample_rate as f64;
    validate_sample_count(samples)?;
    Ok(samples.ceil() as usize)
}

/// Creates a buffer of zero samples.
pub fn silence(duration: f64, sample_rate: u32) -> Result<Vec<f32>, ValidationError> {
    Ok(vec![0.0; silence_len(duration, sample_rate)?])
}

/// Creates zeroed 16-bit PCM bytes, two per silent sample.
pub fn silence_pcm16(duration: f64, sample_rate: u32) -> Result<Vec<u8>, ValidationError> {
    Ok(vec![0u8; silence_len(duration, sample_rate)? * 2])
}

/// Mixes `source` into `destination` starting at `offset`.
///
/// Each written sample becomes `tanh(source[i] + destination[offset + i])`, a soft
/// saturation that keeps the sum inside (-1, 1). Samples that would land past the
/// end of `destination` are dropped; `destination` is never resized.
///
/// # Returns
/// Number of samples written
pub fn mix(source: &[f32], destination: &mut [f32], offset: usize) -> usize {
    let writable = source.len().min(destination.len().saturating_sub(offset));
    if writable == 0 {
        return 0;
    }

    for (dst, &src) in destination[offset..offset + writable]
        .iter_mut()
        .zip(source)
    {
        *dst = (src + *dst).tanh();
    }

    writable
}
