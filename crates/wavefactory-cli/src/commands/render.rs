//! Render command implementation
//!
//! Renders every tone listed in a JSON render config to `<out_dir>/<name>.wav`.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use tracing::warn;

use wavefactory_core::wav::WavFormat;

use super::output::{print_written, write_samples};
use crate::config::RenderConfig;

/// Run the render command
///
/// Tones that fail validation are reported and skipped; the rest are still
/// written.
///
/// # Arguments
/// * `config_path` - Path to the JSON render config
/// * `out_dir` - Directory that receives the WAV files
///
/// # Returns
/// Exit code: 0 if every tone rendered, 1 otherwise
pub fn run(config_path: &Path, out_dir: &Path) -> Result<ExitCode> {
    let start = Instant::now();
    let config = RenderConfig::load(config_path)?;

    println!(
        "{} {} ({} tones, {} Hz, {})",
        "Rendering:".cyan().bold(),
        config_path.display(),
        config.tones.len(),
        config.sample_rate,
        config.encoding
    );

    let format = WavFormat {
        sample_rate: config.sample_rate,
        encoding: config.encoding,
    };

    let mut failed = 0usize;
    for tone in &config.tones {
        let samples = match tone.render(config.sample_rate) {
            Ok(samples) => samples,
            Err(e) => {
                warn!(name = tone.name(), code = e.code(), "tone skipped");
                println!(
                    "  {} {} [{}] {}: {}",
                    "x".red(),
                    tone.name(),
                    tone.kind(),
                    e.code().dimmed(),
                    e
                );
                failed += 1;
                continue;
            }
        };

        let path = out_dir.join(format!("{}.wav", tone.name()));
        let wav = write_samples(&path, &samples, format)?;
        print_written(&path, &wav);
    }

    let duration_ms = start.elapsed().as_millis();
    if failed == 0 {
        println!(
            "\n{} Rendered {} tones ({}ms)",
            "SUCCESS".green().bold(),
            config.tones.len(),
            duration_ms
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} {} of {} tones failed ({}ms)",
            "FAILED".red().bold(),
            failed,
            config.tones.len(),
            duration_ms
        );
        Ok(ExitCode::from(1))
    }
}
