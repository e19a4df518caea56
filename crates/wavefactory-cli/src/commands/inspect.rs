//! Inspect command implementation
//!
//! Prints the header facts the tag scanner finds in a WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use wavefactory_core::wav::{compute_pcm_hash, parse_wav_header, SampleEncoding, WavHeaderInfo};

/// Machine-readable inspect output.
#[derive(Debug, Serialize)]
pub struct InspectOutput {
    /// Inspected file path.
    pub path: String,
    /// File size in bytes.
    pub file_size: usize,
    /// Raw header fields.
    pub header: WavHeaderInfo,
    /// Decodable sample encoding, if the format is supported.
    pub encoding: Option<SampleEncoding>,
    /// Sample frames in the declared data chunk.
    pub sample_count: usize,
    /// Duration of the declared data in seconds.
    pub duration_seconds: f64,
    /// Payload bytes actually present in the file.
    pub available_bytes: usize,
    /// BLAKE3 hash of the payload.
    pub pcm_hash: Option<String>,
}

impl InspectOutput {
    /// Collects inspect facts for an in-memory file.
    pub fn from_bytes(path: &str, bytes: &[u8]) -> Self {
        let header = parse_wav_header(bytes);
        let encoding = if header.has_data() {
            SampleEncoding::from_header(header.audio_format, header.bits_per_sample)
        } else {
            None
        };

        Self {
            path: path.to_string(),
            file_size: bytes.len(),
            header,
            encoding,
            sample_count: header.sample_count(),
            duration_seconds: header.duration_seconds(),
            available_bytes: header.data(bytes).len(),
            pcm_hash: compute_pcm_hash(bytes),
        }
    }
}

/// Run the inspect command
///
/// # Arguments
/// * `input` - WAV file to inspect
/// * `json_output` - Whether to print JSON instead of colored text
///
/// # Returns
/// Exit code: 0 if a data chunk was found, 1 otherwise
pub fn run(input: &Path, json_output: bool) -> Result<ExitCode> {
    let bytes =
        fs::read(input).with_context(|| format!("Failed to read file: {}", input.display()))?;
    let report = InspectOutput::from_bytes(&input.to_string_lossy(), &bytes);

    if json_output {
        let json = serde_json::to_string_pretty(&report)?;
        println!("{}", json);
    } else {
        print_human(&report);
    }

    if report.header.has_data() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

fn print_human(report: &InspectOutput) {
    let header = &report.header;

    println!("{} {}", "Inspecting:".cyan().bold(), report.path);
    println!("{} {} bytes", "Size:".dimmed(), report.file_size);

    if header.audio_format == 0 && header.sample_rate == 0 {
        println!("  {} no fmt chunk found", "!".yellow());
    } else {
        let encoding = match report.encoding {
            Some(encoding) => encoding.to_string().green(),
            None => "unsupported".red(),
        };
        println!(
            "  {} format {} ({}), {} channel(s), {} Hz, {} bits",
            "fmt ".bold(),
            header.audio_format,
            encoding,
            header.channel_count,
            header.sample_rate,
            header.bits_per_sample
        );
    }

    if !header.has_data() {
        println!("  {} no data chunk found", "x".red());
        return;
    }

    println!(
        "  {} {} bytes at offset {}",
        "data".bold(),
        header.data_byte_length,
        header.data_byte_offset
    );
    if report.available_bytes < header.data_byte_length {
        println!(
            "  {} truncated: only {} payload bytes present",
            "!".yellow(),
            report.available_bytes
        );
    }
    println!(
        "{} {} samples, {:.3}s",
        "Length:".dimmed(),
        report.sample_count,
        report.duration_seconds
    );
    if let Some(hash) = &report.pcm_hash {
        println!("{} {}", "PCM hash:".dimmed(), hash);
    }
}
