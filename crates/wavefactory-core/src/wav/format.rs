//! WAV file format parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// WAV `fmt` format code for integer PCM.
pub const FORMAT_PCM: u16 = 1;
/// WAV `fmt` format code for IEEE float.
pub const FORMAT_IEEE_FLOAT: u16 = 3;
/// WAV `fmt` format code for WAVE_FORMAT_EXTENSIBLE.
pub const FORMAT_EXTENSIBLE: u16 = 0xFFFE;

/// Sample encoding of a WAV payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleEncoding {
    /// Signed 16-bit little-endian integers.
    #[default]
    Pcm16,
    /// 32-bit little-endian IEEE floats.
    Float32,
}

impl SampleEncoding {
    /// Format code written to the `fmt` chunk.
    pub fn format_code(self) -> u16 {
        match self {
            SampleEncoding::Pcm16 => FORMAT_PCM,
            SampleEncoding::Float32 => FORMAT_IEEE_FLOAT,
        }
    }

    /// Bits per sample.
    pub fn bits_per_sample(self) -> u16 {
        match self {
            SampleEncoding::Pcm16 => 16,
            SampleEncoding::Float32 => 32,
        }
    }

    /// Picks the encoding described by a `fmt` chunk.
    ///
    /// A header with no `fmt` chunk at all (format 0, 0 bits) is treated as 16-bit
    /// PCM, since payload-only loaders have always assumed that layout.
    pub fn from_header(format_code: u16, bits_per_sample: u16) -> Option<Self> {
        match (format_code, bits_per_sample) {
            (0, 0) => Some(SampleEncoding::Pcm16),
            (FORMAT_PCM | FORMAT_EXTENSIBLE, 16) => Some(SampleEncoding::Pcm16),
            (FORMAT_IEEE_FLOAT | FORMAT_EXTENSIBLE, 32) => Some(SampleEncoding::Float32),
            _ => None,
        }
    }

    /// Lowercase name used in configuration files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            SampleEncoding::Pcm16 => "pcm16",
            SampleEncoding::Float32 => "float32",
        }
    }
}

impl fmt::Display for SampleEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SampleEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pcm16" | "pcm" | "i16" => Ok(SampleEncoding::Pcm16),
            "float32" | "float" | "f32" => Ok(SampleEncoding::Float32),
            _ => Err(format!(
                "unknown sample encoding '{}' (expected pcm16 or float32)",
                s
            )),
        }
    }
}

/// WAV file format parameters (mono only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Payload sample encoding.
    pub encoding: SampleEncoding,
}

impl WavFormat {
    /// Creates a 16-bit PCM format.
    pub fn pcm16(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            encoding: SampleEncoding::Pcm16,
        }
    }

    /// Creates a 32-bit float format.
    pub fn float32(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            encoding: SampleEncoding::Float32,
        }
    }

    /// Number of channels. Always 1.
    pub fn channels(&self) -> u16 {
        1
    }

    /// Calculates bytes per sample (per channel).
    pub(crate) fn bytes_per_sample(&self) -> u16 {
        self.encoding.bits_per_sample() / 8
    }

    /// Calculates block align (bytes per sample frame).
    pub(crate) fn block_align(&self) -> u16 {
        self.channels() * self.bytes_per_sample()
    }

    /// Calculates byte rate (bytes per second).
    pub(crate) fn byte_rate(&self) -> u32 {
        self.sample_rate.saturating_mul(self.block_align() as u32)
    }
}
