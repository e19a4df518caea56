//! Conversion between normalized float samples and raw sample bytes.
//!
//! 16-bit PCM uses a scale of 32768, so `-1.0` maps to `i16::MIN` and values at or
//! above `32767.5 / 32768` saturate at `i16::MAX`. Decoding divides by the same
//! scale, which makes PCM -> float -> PCM bit-exact.

/// Scale between normalized samples and 16-bit PCM words.
pub const PCM16_SCALE: f32 = 32768.0;

/// Converts normalized samples to 16-bit little-endian PCM bytes.
///
/// Each sample maps to `round(s * 32768)` saturated to the `i16` range. The output
/// is always exactly `2 * samples.len()` bytes.
///
/// Out-of-range input saturates instead of wrapping: `+1.0` encodes as `32767`,
/// not `-32768` as a truncating 16-bit cast would produce.
///
/// # Arguments
/// * `samples` - Normalized samples, nominally in [-1.0, 1.0)
///
/// # Returns
/// PCM data as little-endian 16-bit samples
pub fn samples_to_pcm16(samples: &[f32]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        pcm.extend_from_slice(&quantize_pcm16(sample).to_le_bytes());
    }

    pcm
}

/// Quantizes a single sample to a 16-bit PCM word.
#[inline]
pub fn quantize_pcm16(sample: f32) -> i16 {
    // Float-to-int `as` casts saturate, and NaN maps to 0.
    (sample as f64 * PCM16_SCALE as f64).round() as i16
}

/// Converts 16-bit little-endian PCM bytes to normalized samples.
///
/// A trailing odd byte is ignored, so the result has `bytes.len() / 2` samples.
pub fn pcm16_to_samples(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(2)
        .map(|word| i16::from_le_bytes([word[0], word[1]]) as f32 / PCM16_SCALE)
        .collect()
}

/// Converts normalized samples to 32-bit little-endian IEEE float bytes.
pub fn samples_to_f32le(samples: &[f32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * 4);
    for &sample in samples {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }
    bytes
}

/// Converts 32-bit little-endian IEEE float bytes to samples.
///
/// Trailing bytes that do not form a whole word are ignored.
pub fn f32le_to_samples(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(4)
        .map(|word| f32::from_le_bytes([word[0], word[1], word[2], word[3]]))
        .collect()
}
