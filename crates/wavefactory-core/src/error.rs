//! Error types for waveform generation and WAV decoding.

use thiserror::Error;

/// Result type for fallible wavefactory operations.
pub type WaveResult<T> = Result<T, WaveError>;

/// Parameter constraint violations detected before any buffer is allocated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Sample rate is zero.
    #[error("invalid sample rate: {rate} Hz (must be greater than 0)")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Frequency is zero, negative or NaN.
    #[error("invalid frequency: {freq} Hz (must be greater than 0)")]
    NonPositiveFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Frequency lies above half the sample rate.
    #[error("invalid frequency: {freq} Hz exceeds the Nyquist limit of {nyquist} Hz")]
    AboveNyquist {
        /// The invalid frequency.
        freq: f64,
        /// Half the sample rate.
        nyquist: f64,
    },

    /// Duration is zero, negative or NaN.
    #[error("invalid duration: {duration} seconds (must be greater than 0)")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Duration times sample rate exceeds the buffer limit.
    #[error("invalid duration: {samples} samples exceeds the limit of {max}")]
    TooManySamples {
        /// Requested sample count, before rounding.
        samples: f64,
        /// Largest supported sample count.
        max: usize,
    },

    /// Fade ratio lies outside [0, 0.5].
    #[error("invalid fade ratio: {ratio} (must be between 0 and 0.5)")]
    InvalidFadeRatio {
        /// The invalid ratio.
        ratio: f64,
    },
}

/// Errors that can occur while generating tones or decoding WAV data.
#[derive(Debug, Error)]
pub enum WaveError {
    /// Generation parameters failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No upward zero crossing inside the round-tone search window.
    #[error(
        "no upward zero crossing between sample {min_samples} and the end of the {window}-sample search window"
    )]
    NoZeroCrossing {
        /// Minimum tone length in samples.
        min_samples: usize,
        /// Search window length in samples.
        window: usize,
    },

    /// The container has no `data` chunk.
    #[error("container has no data chunk")]
    MissingData,

    /// The `fmt ` chunk describes an encoding other than 16-bit PCM or 32-bit float.
    #[error("unsupported sample encoding: format code {format_code}, {bits_per_sample} bits per sample")]
    UnsupportedEncoding {
        /// WAV audio format code.
        format_code: u16,
        /// Bits per sample.
        bits_per_sample: u16,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WaveError {
    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            WaveError::Validation(_) => "WAVE_001",
            WaveError::NoZeroCrossing { .. } => "WAVE_002",
            WaveError::MissingData => "WAVE_003",
            WaveError::UnsupportedEncoding { .. } => "WAVE_004",
            WaveError::Io(_) => "WAVE_005",
        }
    }

    /// Returns true if this error came from parameter validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, WaveError::Validation(_))
    }
}
