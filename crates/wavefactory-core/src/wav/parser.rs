//! Tag-scanning WAV header parser.

use serde::Serialize;

/// ASCII tag of the format sub-chunk.
const FMT_TAG: &[u8; 4] = b"fmt ";
/// ASCII tag of the data sub-chunk.
const DATA_TAG: &[u8; 4] = b"data";

// Field offsets relative to the start of the `fmt ` tag.
const FMT_AUDIO_FORMAT: usize = 8;
const FMT_CHANNELS: usize = 10;
const FMT_SAMPLE_RATE: usize = 12;
const FMT_BITS_PER_SAMPLE: usize = 22;

// Offsets relative to the start of the `data` tag.
const DATA_LENGTH: usize = 4;
const DATA_PAYLOAD: usize = 8;

/// Facts extracted from a WAV container.
///
/// Every field is zero when the corresponding tag was not found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WavHeaderInfo {
    /// `fmt` audio format code (1 = PCM, 3 = IEEE float).
    pub audio_format: u16,
    /// Number of channels.
    pub channel_count: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Byte offset of the data payload.
    pub data_byte_offset: usize,
    /// Declared length of the data payload in bytes.
    pub data_byte_length: usize,
}

impl WavHeaderInfo {
    /// Parses a container. Equivalent to [`parse_wav_header`].
    pub fn parse(bytes: &[u8]) -> Self {
        parse_wav_header(bytes)
    }

    /// Returns true if a `data` tag was found.
    ///
    /// The payload may still be empty if the chunk declares zero length.
    pub fn has_data(&self) -> bool {
        self.data_byte_offset != 0
    }

    /// Returns the data payload, clamped to the bytes actually present.
    pub fn data<'a>(&self, bytes: &'a [u8]) -> &'a [u8] {
        let start = self.data_byte_offset.min(bytes.len());
        let end = self
            .data_byte_offset
            .saturating_add(self.data_byte_length)
            .min(bytes.len());
        &bytes[start..end]
    }

    /// Number of sample frames the declared data length holds.
    pub fn sample_count(&self) -> usize {
        let frame_bytes = (self.bits_per_sample / 8) as usize * self.channel_count as usize;
        if frame_bytes == 0 {
            return 0;
        }
        self.data_byte_length / frame_bytes
    }

    /// Duration of the declared data in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.sample_count() as f64 / self.sample_rate as f64
    }
}

/// Scans a byte buffer for the `fmt ` and `data` tags.
///
/// The scan visits every offset up to `len - 4` (exclusive) and never stops early,
/// so a tag that appears more than once is reported from its last occurrence.
/// Fields that would be read past the end of the buffer are zero. No RIFF size or
/// chunk length is validated and the function never panics.
///
/// # Arguments
/// * `bytes` - Complete container bytes
///
/// # Returns
/// Best-effort header facts; all-zero when neither tag is present
pub fn parse_wav_header(bytes: &[u8]) -> WavHeaderInfo {
    let mut info = WavHeaderInfo::default();

    for offset in 0..bytes.len().saturating_sub(4) {
        let tag = &bytes[offset..offset + 4];

        if tag == FMT_TAG {
            info.audio_format = read_u16(bytes, offset + FMT_AUDIO_FORMAT);
            info.channel_count = read_u16(bytes, offset + FMT_CHANNELS);
            info.sample_rate = read_u32(bytes, offset + FMT_SAMPLE_RATE);
            info.bits_per_sample = read_u16(bytes, offset + FMT_BITS_PER_SAMPLE);
        } else if tag == DATA_TAG {
            info.data_byte_length = read_u32(bytes, offset + DATA_LENGTH) as usize;
            info.data_byte_offset = offset + DATA_PAYLOAD;
        }
    }

    info
}

/// Computes the BLAKE3 hash of a WAV file's data payload.
///
/// # Returns
/// Hex-encoded hash, or None if the buffer has no `data` tag
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    let info = parse_wav_header(wav_data);
    if !info.has_data() {
        return None;
    }
    Some(blake3::hash(info.data(wav_data)).to_hex().to_string())
}

fn read_u16(bytes: &[u8], pos: usize) -> u16 {
    match bytes.get(pos..pos + 2) {
        Some(b) => u16::from_le_bytes([b[0], b[1]]),
        None => 0,
    }
}

fn read_u32(bytes: &[u8], pos: usize) -> u32 {
    match bytes.get(pos..pos + 4) {
        Some(b) => u32::from_le_bytes([b[0], b[1], b[2], b[3]]),
        None => 0,
    }
}
