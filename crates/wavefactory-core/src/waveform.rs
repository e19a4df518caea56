//! Periodic waveform shapes and generation parameters.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ValidationError;

/// 2 * PI.
pub const TWO_PI: f64 = 2.0 * PI;

/// Largest buffer any generator produces, in samples.
///
/// At four bytes per sample this still fits a WAV `data` chunk.
pub const MAX_SAMPLES: usize = (u32::MAX / 4) as usize;

/// Periodic waveform shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    /// `sin(phase)`.
    Sine,
    /// Sign of the sine, with 0 at exact zero crossings.
    Square,
    /// `(2/pi) * asin(sin(phase))`.
    Triangle,
    /// `(2/pi) * atan(tan(phase / 2))`.
    Sawtooth,
}

impl Waveform {
    /// All shapes, in declaration order.
    pub const ALL: [Waveform; 4] = [
        Waveform::Sine,
        Waveform::Square,
        Waveform::Triangle,
        Waveform::Sawtooth,
    ];

    /// Evaluates the raw (unenveloped) waveform at a sample index.
    ///
    /// # Arguments
    /// * `frequency` - Frequency in Hz
    /// * `sample_rate` - Sample rate in Hz
    /// * `index` - Sample index from the start of the buffer
    pub fn value_at(self, frequency: f64, sample_rate: f64, index: usize) -> f64 {
        let i = index as f64;
        match self {
            Waveform::Sine => (TWO_PI * frequency * i / sample_rate).sin(),
            Waveform::Square => sign((TWO_PI * frequency * i / sample_rate).sin()),
            Waveform::Triangle => {
                (2.0 / PI) * (TWO_PI * frequency * i / sample_rate).sin().asin()
            }
            Waveform::Sawtooth => (2.0 / PI) * (PI * frequency * i / sample_rate).tan().atan(),
        }
    }

    /// Lowercase name used in configuration files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Triangle => "triangle",
            Waveform::Sawtooth => "sawtooth",
        }
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown waveform name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown waveform '{0}' (expected sine, square, triangle or sawtooth)")]
pub struct ParseWaveformError(pub String);

impl FromStr for Waveform {
    type Err = ParseWaveformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sine" | "sin" => Ok(Waveform::Sine),
            "square" => Ok(Waveform::Square),
            "triangle" | "tri" => Ok(Waveform::Triangle),
            "sawtooth" | "saw" => Ok(Waveform::Sawtooth),
            _ => Err(ParseWaveformError(s.to_string())),
        }
    }
}

/// Sign function that maps exactly zero to zero.
///
/// `f64::signum` returns 1.0 for +0.0, which would turn the first sample of a
/// square wave into a full-scale step.
#[inline]
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Parameters for generating a fixed-length waveform buffer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WaveformSpec {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Duration in seconds.
    pub duration: f64,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Fraction of the buffer ramped at each edge, in [0, 0.5].
    #[serde(default)]
    pub fade_ratio: f64,
}

impl WaveformSpec {
    /// Creates a spec with no fade.
    pub fn new(frequency: f64, duration: f64, sample_rate: u32) -> Self {
        Self {
            frequency,
            duration,
            sample_rate,
            fade_ratio: 0.0,
        }
    }

    /// Sets the fade ratio.
    pub fn with_fade(mut self, fade_ratio: f64) -> Self {
        self.fade_ratio = fade_ratio;
        self
    }

    /// Number of samples generated: `floor(duration * sample_rate)`.
    pub fn num_samples(&self) -> usize {
        (self.duration * self.sample_rate as f64).floor() as usize
    }

    /// Half the sample rate.
    pub fn nyquist(&self) -> f64 {
        self.sample_rate as f64 / 2.0
    }

    /// Checks every parameter constraint.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_tone(self.frequency, self.sample_rate)?;
        validate_duration(self.duration)?;
        validate_sample_count(self.duration * self.sample_rate as f64)?;

        if !(0.0..=0.5).contains(&self.fade_ratio) {
            return Err(ValidationError::InvalidFadeRatio {
                ratio: self.fade_ratio,
            });
        }

        Ok(())
    }
}

/// Checks sample rate and frequency constraints shared by all generators.
pub(crate) fn validate_tone(frequency: f64, sample_rate: u32) -> Result<(), ValidationError> {
    if sample_rate == 0 {
        return Err(ValidationError::InvalidSampleRate { rate: sample_rate });
    }

    // Written as a negated comparison so NaN is rejected.
    if !(frequency > 0.0) {
        return Err(ValidationError::NonPositiveFrequency { freq: frequency });
    }

    let nyquist = sample_rate as f64 / 2.0;
    if frequency > nyquist {
        return Err(ValidationError::AboveNyquist {
            freq: frequency,
            nyquist,
        });
    }

    Ok(())
}

pub(crate) fn validate_duration(duration: f64) -> Result<(), ValidationError> {
    if !(duration > 0.0) || duration.is_infinite() {
        return Err(ValidationError::InvalidDuration { duration });
    }
    Ok(())
}

/// Checks that a buffer of `samples` (before rounding) stays within [`MAX_SAMPLES`].
pub(crate) fn validate_sample_count(samples: f64) -> Result<(), ValidationError> {
    // Ceil covers the silence rounding; NaN is rejected by the negated comparison.
    if !(samples.ceil() <= MAX_SAMPLES as f64) {
        return Err(ValidationError::TooManySamples {
            samples,
            max: MAX_SAMPLES,
        });
    }
    Ok(())
}
