//! Core WAV writing functions.

use std::io::{self, Write};

use crate::codec::{samples_to_f32le, samples_to_pcm16};

use super::format::{SampleEncoding, WavFormat};

/// Length of the RIFF, `fmt ` and `data` headers written by [`write_wav`].
pub const CANONICAL_HEADER_LEN: usize = 44;

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `payload` - Encoded sample bytes
///
/// # Returns
/// Result indicating success or I/O error
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, payload: &[u8]) -> io::Result<()> {
    let data_size = u32::try_from(payload.len()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "payload exceeds the 4 GiB WAV limit",
        )
    })?;
    let file_size = data_size.saturating_add(36); // Total file size minus 8 bytes for RIFF header

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?;
    writer.write_all(&format.encoding.format_code().to_le_bytes())?;
    writer.write_all(&format.channels().to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.encoding.bits_per_sample().to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(payload)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
///
/// # Panics
/// If the payload is longer than `u32::MAX` bytes.
pub fn write_wav_to_vec(format: &WavFormat, payload: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(CANONICAL_HEADER_LEN + payload.len());
    write_wav(&mut buffer, format, payload).expect("payload fits in a WAV data chunk");
    buffer
}

/// Encodes normalized samples into the payload bytes for a format.
pub fn encode_samples(format: &WavFormat, samples: &[f32]) -> Vec<u8> {
    match format.encoding {
        SampleEncoding::Pcm16 => samples_to_pcm16(samples),
        SampleEncoding::Float32 => samples_to_f32le(samples),
    }
}
