//! Encoded WAV output type.

use super::format::WavFormat;
use super::writer::{encode_samples, write_wav_to_vec};

/// A complete WAV file together with facts about its payload.
#[derive(Debug, Clone)]
pub struct EncodedWav {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the data payload only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples in the payload.
    pub num_samples: usize,
}

impl EncodedWav {
    /// Encodes mono samples with the given format.
    pub fn from_samples(samples: &[f32], format: WavFormat) -> Self {
        let payload = encode_samples(&format, samples);
        Self::from_payload(payload, samples.len(), format)
    }

    /// Wraps already-encoded payload bytes, e.g. from `generate_pcm16`.
    pub fn from_payload(payload: Vec<u8>, num_samples: usize, format: WavFormat) -> Self {
        let pcm_hash = blake3::hash(&payload).to_hex().to_string();
        let wav_data = write_wav_to_vec(&format, &payload);

        Self {
            wav_data,
            pcm_hash,
            sample_rate: format.sample_rate,
            num_samples,
        }
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.num_samples as f64 / self.sample_rate as f64
    }
}
