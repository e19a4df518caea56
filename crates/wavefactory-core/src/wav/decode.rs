//! WAV decoding: header scan plus sample conversion.

use tracing::debug;

use crate::codec::{f32le_to_samples, pcm16_to_samples};
use crate::error::{WaveError, WaveResult};

use super::format::SampleEncoding;
use super::parser::{parse_wav_header, WavHeaderInfo};

/// A decoded WAV file.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedWav {
    /// Header facts from the scan.
    pub header: WavHeaderInfo,
    /// Normalized samples. Multi-channel payloads are returned interleaved.
    pub samples: Vec<f32>,
}

/// Decodes a WAV container into normalized samples.
///
/// The data window is clamped to the bytes present, so a file truncated after its
/// header yields the samples that survived instead of an error.
///
/// # Errors
/// * [`WaveError::MissingData`] - no `data` tag was found
/// * [`WaveError::UnsupportedEncoding`] - not 16-bit PCM or 32-bit float
pub fn decode_wav(bytes: &[u8]) -> WaveResult<DecodedWav> {
    let header = parse_wav_header(bytes);
    if !header.has_data() {
        return Err(WaveError::MissingData);
    }

    let encoding = SampleEncoding::from_header(header.audio_format, header.bits_per_sample)
        .ok_or(WaveError::UnsupportedEncoding {
            format_code: header.audio_format,
            bits_per_sample: header.bits_per_sample,
        })?;

    let payload = header.data(bytes);
    if payload.len() < header.data_byte_length {
        debug!(
            declared = header.data_byte_length,
            available = payload.len(),
            "data chunk truncated"
        );
    }

    let samples = match encoding {
        SampleEncoding::Pcm16 => pcm16_to_samples(payload),
        SampleEncoding::Float32 => f32le_to_samples(payload),
    };

    Ok(DecodedWav { header, samples })
}
