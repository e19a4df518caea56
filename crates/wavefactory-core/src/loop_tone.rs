//! Round tones: waveforms cut at an upward zero crossing.
//!
//! A round tone is at least `min_duration` long and ends just before the waveform
//! crosses from negative to non-negative, so back-to-back copies join without a
//! click. The output always starts at phase zero.
//!
//! The search runs over a window of twice the minimum length. It records the first
//! upward crossing as a fallback and, for sine tones, keeps scanning for a crossing
//! whose value lands within [`PRECISE_CROSSING_THRESHOLD`] of zero.

use tracing::debug;

use crate::codec::samples_to_pcm16;
use crate::error::{WaveError, WaveResult};
use crate::waveform::{validate_duration, validate_sample_count, validate_tone, Waveform};

/// Largest post-crossing value accepted as a precise crossing.
pub const PRECISE_CROSSING_THRESHOLD: f64 = 0.005;

/// Shapes that can be generated as round tones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoopShape {
    /// Full-scale sine.
    Sine,
    /// Square with plateau values of `±amplitude`, clamped to [0, 1].
    Square {
        /// Plateau amplitude.
        amplitude: f64,
    },
}

impl LoopShape {
    /// Square wave at full scale.
    pub fn square() -> Self {
        LoopShape::Square { amplitude: 1.0 }
    }

    /// The underlying waveform whose crossings are searched.
    pub fn waveform(self) -> Waveform {
        match self {
            LoopShape::Sine => Waveform::Sine,
            LoopShape::Square { .. } => Waveform::Square,
        }
    }

    fn gain(self) -> f64 {
        match self {
            LoopShape::Sine => 1.0,
            LoopShape::Square { amplitude } => amplitude.clamp(0.0, 1.0),
        }
    }

    fn searches_precise_crossing(self) -> bool {
        matches!(self, LoopShape::Sine)
    }
}

/// Result of a zero-crossing search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopCut {
    /// First upward crossing at or after the minimum length.
    pub first: usize,
    /// Upward crossing landing within the precision threshold, if one was found.
    pub precise: Option<usize>,
    /// Selected tone length in samples.
    pub length: usize,
}

/// Searches for the sample index at which a round tone is cut.
///
/// # Arguments
/// * `shape` - Tone shape
/// * `frequency` - Frequency in Hz
/// * `min_duration` - Minimum tone duration in seconds
/// * `sample_rate` - Sample rate in Hz
///
/// # Returns
/// The crossing indices, or [`WaveError::NoZeroCrossing`] when the window of
/// `2 * floor(min_duration * sample_rate)` samples contains no upward crossing
pub fn find_loop_cut(
    shape: LoopShape,
    frequency: f64,
    min_duration: f64,
    sample_rate: u32,
) -> WaveResult<LoopCut> {
    validate_tone(frequency, sample_rate)?;
    validate_duration(min_duration)?;
    // The search window spans twice the minimum length.
    validate_sample_count(2.0 * min_duration * sample_rate as f64)?;

    let rate = sample_rate as f64;
    let min_samples = (min_duration * rate).floor() as usize;
    let window = min_samples.saturating_mul(2);
    let waveform = shape.waveform();

    let mut first = None;
    let mut precise = None;

    // Each step looks back one sample, so the scan cannot start at index 0.
    let start = min_samples.max(1);
    let mut previous = waveform.value_at(frequency, rate, start - 1);

    for i in start..window {
        let current = waveform.value_at(frequency, rate, i);

        if previous < 0.0 && current >= 0.0 {
            if first.is_none() {
                first = Some(i);
            }
            if !shape.searches_precise_crossing() {
                break;
            }
            if current <= PRECISE_CROSSING_THRESHOLD {
                precise = Some(i);
                break;
            }
        }

        previous = current;
    }

    let first = first.ok_or(WaveError::NoZeroCrossing {
        min_samples,
        window,
    })?;
    let length = first.max(precise.unwrap_or(0));

    debug!(
        ?shape,
        frequency, min_samples, first, ?precise, length, "round tone cut selected"
    );

    Ok(LoopCut {
        first,
        precise,
        length,
    })
}

/// Generates a round tone as normalized samples.
///
/// # Arguments
/// * `shape` - Tone shape
/// * `frequency` - Frequency in Hz
/// * `min_duration` - Minimum tone duration in seconds
/// * `sample_rate` - Sample rate in Hz
pub fn generate_round_tone(
    shape: LoopShape,
    frequency: f64,
    min_duration: f64,
    sample_rate: u32,
) -> WaveResult<Vec<f32>> {
    let (_, samples) =
        generate_round_tone_with_cut(shape, frequency, min_duration, sample_rate)?;
    Ok(samples)
}

/// Generates a round tone and returns the cut it was trimmed at.
pub fn generate_round_tone_with_cut(
    shape: LoopShape,
    frequency: f64,
    min_duration: f64,
    sample_rate: u32,
) -> WaveResult<(LoopCut, Vec<f32>)> {
    let cut = find_loop_cut(shape, frequency, min_duration, sample_rate)?;

    let rate = sample_rate as f64;
    let waveform = shape.waveform();
    let gain = shape.gain();

    let samples = (0..cut.length)
        .map(|i| (gain * waveform.value_at(frequency, rate, i)) as f32)
        .collect();

    Ok((cut, samples))
}

/// Generates a round tone as 16-bit little-endian PCM.
pub fn generate_round_tone_pcm16(
    shape: LoopShape,
    frequency: f64,
    min_duration: f64,
    sample_rate: u32,
) -> WaveResult<Vec<u8>> {
    let samples = generate_round_tone(shape, frequency, min_duration, sample_rate)?;
    Ok(samples_to_pcm16(&samples))
}
