//! Shared file handling for commands that read or write WAV files.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

use wavefactory_core::wav::{decode_wav, DecodedWav, EncodedWav, WavFormat};

/// Encodes samples and writes them as a WAV file, creating parent directories.
pub(crate) fn write_samples(path: &Path, samples: &[f32], format: WavFormat) -> Result<EncodedWav> {
    let wav = EncodedWav::from_samples(samples, format);
    write_encoded(path, &wav)?;
    Ok(wav)
}

/// Writes an already encoded WAV file, creating parent directories.
pub(crate) fn write_encoded(path: &Path, wav: &EncodedWav) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, &wav.wav_data)
        .with_context(|| format!("Failed to write WAV file: {}", path.display()))
}

/// Reads and decodes a WAV file.
pub(crate) fn read_wav(path: &Path) -> Result<DecodedWav> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read WAV file: {}", path.display()))?;
    decode_wav(&bytes).with_context(|| format!("Failed to decode WAV file: {}", path.display()))
}

/// Prints the one-line summary shown after a file is written.
pub(crate) fn print_written(path: &Path, wav: &EncodedWav) {
    println!(
        "{} {} ({} samples, {:.3}s, {})",
        "Wrote".green().bold(),
        path.display(),
        wav.num_samples,
        wav.duration_seconds(),
        wav.pcm_hash[..16].dimmed()
    );
}
