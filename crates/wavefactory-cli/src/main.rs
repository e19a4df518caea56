//! WaveFactory CLI - Command-line interface for deterministic tone rendering
//!
//! This binary renders waveforms, loopable tones and silence to WAV files,
//! mixes WAV files together and inspects WAV headers.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use wavefactory_cli::commands;
use wavefactory_cli::config::{RoundShape, DEFAULT_SAMPLE_RATE};
use wavefactory_core::wav::SampleEncoding;
use wavefactory_core::{Waveform, WaveformSpec};

/// WaveFactory - Deterministic Audio Toolkit
#[derive(Parser)]
#[command(name = "wavefactory")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a fixed-length waveform
    Tone {
        /// Waveform shape (sine, square, triangle, sawtooth)
        #[arg(short, long)]
        shape: Waveform,

        /// Frequency in Hz
        #[arg(short, long)]
        frequency: f64,

        /// Duration in seconds
        #[arg(short, long)]
        duration: f64,

        /// Sample rate in Hz
        #[arg(short = 'r', long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,

        /// Fraction of the tone faded in and out, 0 to 0.5
        #[arg(long, default_value_t = 0.0)]
        fade: f64,

        /// Payload encoding (pcm16, float32)
        #[arg(short, long, default_value = "pcm16")]
        encoding: SampleEncoding,

        /// Output WAV path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Render a tone cut at a zero crossing so it loops without clicks
    Round {
        /// Tone shape
        #[arg(short, long, value_enum)]
        shape: RoundShape,

        /// Frequency in Hz
        #[arg(short, long)]
        frequency: f64,

        /// Minimum tone duration in seconds
        #[arg(short, long)]
        min_duration: f64,

        /// Square plateau amplitude, 0 to 1
        #[arg(short, long, default_value_t = 1.0)]
        amplitude: f64,

        /// Sample rate in Hz
        #[arg(short = 'r', long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,

        /// Number of back-to-back copies to write
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        repeat: u32,

        /// Payload encoding (pcm16, float32)
        #[arg(short, long, default_value = "pcm16")]
        encoding: SampleEncoding,

        /// Output WAV path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Render silence
    Silence {
        /// Duration in seconds, rounded up to whole samples
        #[arg(short, long)]
        duration: f64,

        /// Sample rate in Hz
        #[arg(short = 'r', long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,

        /// Payload encoding (pcm16, float32)
        #[arg(short, long, default_value = "pcm16")]
        encoding: SampleEncoding,

        /// Output WAV path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Mix one WAV file onto another with soft saturation
    Mix {
        /// WAV file mixed into; sets the output length and sample rate
        #[arg(short, long)]
        base: PathBuf,

        /// WAV file mixed on top
        #[arg(long)]
        overlay: PathBuf,

        /// Overlay start position in seconds
        #[arg(long, default_value_t = 0.0)]
        offset: f64,

        /// Output encoding (default: same as base)
        #[arg(short, long)]
        encoding: Option<SampleEncoding>,

        /// Output WAV path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print the header facts of a WAV file
    Inspect {
        /// WAV file to inspect
        input: PathBuf,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render every tone listed in a JSON config
    Render {
        /// Path to the render config (JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// Output directory (default: current directory)
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Tone {
            shape,
            frequency,
            duration,
            sample_rate,
            fade,
            encoding,
            output,
        } => {
            let spec = WaveformSpec::new(frequency, duration, sample_rate).with_fade(fade);
            commands::tone::run(shape, &spec, encoding, &output)
        }
        Commands::Round {
            shape,
            frequency,
            min_duration,
            amplitude,
            sample_rate,
            repeat,
            encoding,
            output,
        } => {
            let args = commands::round::RoundArgs {
                shape: shape.with_amplitude(amplitude),
                frequency,
                min_duration,
                sample_rate,
                repeat: repeat as usize,
                encoding,
            };
            commands::round::run(&args, &output)
        }
        Commands::Silence {
            duration,
            sample_rate,
            encoding,
            output,
        } => commands::silence::run(duration, sample_rate, encoding, &output),
        Commands::Mix {
            base,
            overlay,
            offset,
            encoding,
            output,
        } => commands::mix::run(&base, &overlay, offset, encoding, &output),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
        Commands::Render { config, out_dir } => commands::render::run(&config, &out_dir),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_tone() {
        let cli = Cli::try_parse_from([
            "wavefactory",
            "tone",
            "--shape",
            "saw",
            "--frequency",
            "220",
            "--duration",
            "0.5",
            "--fade",
            "0.1",
            "-o",
            "saw.wav",
        ])
        .unwrap();
        match cli.command {
            Commands::Tone {
                shape,
                frequency,
                sample_rate,
                fade,
                encoding,
                output,
                ..
            } => {
                assert_eq!(shape, Waveform::Sawtooth);
                assert_eq!(frequency, 220.0);
                assert_eq!(sample_rate, 44100);
                assert_eq!(fade, 0.1);
                assert_eq!(encoding, SampleEncoding::Pcm16);
                assert_eq!(output, PathBuf::from("saw.wav"));
            }
            _ => panic!("expected tone command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_shape() {
        let result = Cli::try_parse_from([
            "wavefactory",
            "tone",
            "--shape",
            "noise",
            "--frequency",
            "220",
            "--duration",
            "0.5",
            "-o",
            "x.wav",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parses_round_with_repeat() {
        let cli = Cli::try_parse_from([
            "wavefactory",
            "round",
            "--shape",
            "square",
            "--frequency",
            "60",
            "--min-duration",
            "0.25",
            "--amplitude",
            "0.5",
            "--repeat",
            "4",
            "-e",
            "float32",
            "-o",
            "hum.wav",
        ])
        .unwrap();
        match cli.command {
            Commands::Round {
                shape,
                amplitude,
                repeat,
                encoding,
                ..
            } => {
                assert_eq!(shape, RoundShape::Square);
                assert_eq!(amplitude, 0.5);
                assert_eq!(repeat, 4);
                assert_eq!(encoding, SampleEncoding::Float32);
            }
            _ => panic!("expected round command"),
        }
    }

    #[test]
    fn test_cli_rejects_zero_repeat() {
        let result = Cli::try_parse_from([
            "wavefactory",
            "round",
            "--shape",
            "sine",
            "--frequency",
            "60",
            "--min-duration",
            "0.25",
            "--repeat",
            "0",
            "-o",
            "hum.wav",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parses_inspect_with_global_verbose() {
        let cli = Cli::try_parse_from(["wavefactory", "inspect", "a.wav", "--json", "-v"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Inspect { input, json } => {
                assert_eq!(input, PathBuf::from("a.wav"));
                assert!(json);
            }
            _ => panic!("expected inspect command"),
        }
    }

    #[test]
    fn test_cli_parses_mix_defaults() {
        let cli = Cli::try_parse_from([
            "wavefactory",
            "mix",
            "--base",
            "a.wav",
            "--overlay",
            "b.wav",
            "-o",
            "c.wav",
        ])
        .unwrap();
        match cli.command {
            Commands::Mix {
                offset, encoding, ..
            } => {
                assert_eq!(offset, 0.0);
                assert_eq!(encoding, None);
            }
            _ => panic!("expected mix command"),
        }
    }

    #[test]
    fn test_cli_parses_render() {
        let cli =
            Cli::try_parse_from(["wavefactory", "render", "--config", "tones.json"]).unwrap();
        match cli.command {
            Commands::Render { config, out_dir } => {
                assert_eq!(config, PathBuf::from("tones.json"));
                assert_eq!(out_dir, PathBuf::from("."));
            }
            _ => panic!("expected render command"),
        }
    }
}
