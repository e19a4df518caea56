//! JSON render configuration.
//!
//! A render file lists named tones that `wavefactory render` writes as one WAV
//! file each:
//!
//! ```json
//! {
//!   "sample_rate": 44100,
//!   "encoding": "pcm16",
//!   "tones": [
//!     { "name": "a4", "kind": "waveform", "shape": "sine", "frequency": 440.0, "duration": 1.0 },
//!     { "name": "hum", "kind": "round", "shape": "square", "frequency": 60.0, "min_duration": 0.5 },
//!     { "name": "gap", "kind": "silence", "duration": 0.25 }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use wavefactory_core::wav::SampleEncoding;
use wavefactory_core::{
    generate, generate_round_tone, silence, LoopShape, WaveResult, Waveform, WaveformSpec,
};

/// Default sample rate for rendered tones.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

fn default_amplitude() -> f64 {
    1.0
}

/// Top-level render file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Sample rate shared by every tone.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Payload encoding of the written files.
    #[serde(default)]
    pub encoding: SampleEncoding,
    /// Tones to render, in order.
    pub tones: Vec<ToneEntry>,
}

/// Shapes accepted for round tones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RoundShape {
    Sine,
    Square,
}

impl RoundShape {
    /// Builds the loop shape with a square plateau amplitude.
    pub fn with_amplitude(self, amplitude: f64) -> LoopShape {
        match self {
            RoundShape::Sine => LoopShape::Sine,
            RoundShape::Square => LoopShape::Square { amplitude },
        }
    }
}

/// A single named tone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum ToneEntry {
    /// Fixed-length waveform with an optional edge fade.
    Waveform {
        name: String,
        shape: Waveform,
        frequency: f64,
        duration: f64,
        #[serde(default)]
        fade_ratio: f64,
    },
    /// Tone cut at an upward zero crossing.
    Round {
        name: String,
        shape: RoundShape,
        frequency: f64,
        min_duration: f64,
        #[serde(default = "default_amplitude")]
        amplitude: f64,
    },
    /// Zero samples.
    Silence { name: String, duration: f64 },
}

impl ToneEntry {
    /// Output name, used as the file stem.
    pub fn name(&self) -> &str {
        match self {
            ToneEntry::Waveform { name, .. }
            | ToneEntry::Round { name, .. }
            | ToneEntry::Silence { name, .. } => name,
        }
    }

    /// Short label for the entry kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ToneEntry::Waveform { .. } => "waveform",
            ToneEntry::Round { .. } => "round",
            ToneEntry::Silence { .. } => "silence",
        }
    }

    /// Renders the entry as normalized samples.
    pub fn render(&self, sample_rate: u32) -> WaveResult<Vec<f32>> {
        match *self {
            ToneEntry::Waveform {
                shape,
                frequency,
                duration,
                fade_ratio,
                ..
            } => {
                let spec =
                    WaveformSpec::new(frequency, duration, sample_rate).with_fade(fade_ratio);
                Ok(generate(shape, &spec)?)
            }
            ToneEntry::Round {
                shape,
                frequency,
                min_duration,
                amplitude,
                ..
            } => generate_round_tone(
                shape.with_amplitude(amplitude),
                frequency,
                min_duration,
                sample_rate,
            ),
            ToneEntry::Silence { duration, .. } => Ok(silence(duration, sample_rate)?),
        }
    }
}

impl RenderConfig {
    /// Parses and checks a render file from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: RenderConfig =
            serde_json::from_str(json).context("Failed to parse render config")?;
        config.check()?;
        Ok(config)
    }

    /// Reads and parses a render file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read render config: {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Invalid render config: {}", path.display()))
    }

    /// Checks structural rules that serde cannot express.
    ///
    /// Tone parameters are validated by the generators at render time.
    pub fn check(&self) -> Result<()> {
        if self.tones.is_empty() {
            bail!("render config lists no tones");
        }

        let mut seen = HashSet::new();
        for tone in &self.tones {
            let name = tone.name();
            if !is_valid_name(name) {
                bail!(
                    "invalid tone name '{}' (use letters, digits, '-', '_' or '.')",
                    name
                );
            }
            if !seen.insert(name) {
                bail!("duplicate tone name '{}'", name);
            }
        }

        Ok(())
    }
}

/// A tone name must be a plain file stem.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FULL_CONFIG: &str = r#"{
        "sample_rate": 22050,
        "encoding": "float32",
        "tones": [
            { "name": "a4", "kind": "waveform", "shape": "sine",
              "frequency": 440.0, "duration": 0.1, "fade_ratio": 0.05 },
            { "name": "hum", "kind": "round", "shape": "square",
              "frequency": 60.0, "min_duration": 0.1, "amplitude": 0.5 },
            { "name": "gap", "kind": "silence", "duration": 0.25 }
        ]
    }"#;

    #[test]
    fn test_parse_full_config() {
        let config = RenderConfig::from_json_str(FULL_CONFIG).unwrap();
        assert_eq!(config.sample_rate, 22050);
        assert_eq!(config.encoding, SampleEncoding::Float32);
        assert_eq!(
            config.tones,
            vec![
                ToneEntry::Waveform {
                    name: "a4".to_string(),
                    shape: Waveform::Sine,
                    frequency: 440.0,
                    duration: 0.1,
                    fade_ratio: 0.05,
                },
                ToneEntry::Round {
                    name: "hum".to_string(),
                    shape: RoundShape::Square,
                    frequency: 60.0,
                    min_duration: 0.1,
                    amplitude: 0.5,
                },
                ToneEntry::Silence {
                    name: "gap".to_string(),
                    duration: 0.25,
                },
            ]
        );
    }

    #[test]
    fn test_shape_names_are_canonical() {
        // Aliases such as "saw" are accepted on the command line only.
        let json = r#"{"tones": [
            { "name": "t", "kind": "waveform", "shape": "saw", "frequency": 100.0, "duration": 0.5 }
        ]}"#;
        assert!(RenderConfig::from_json_str(json).is_err());
    }

    #[test]
    fn test_defaults_are_applied() {
        let config = RenderConfig::from_json_str(
            r#"{"tones": [
                { "name": "t", "kind": "waveform", "shape": "sawtooth", "frequency": 100.0, "duration": 0.5 },
                { "name": "r", "kind": "round", "shape": "sine", "frequency": 100.0, "min_duration": 0.5 }
            ]}"#,
        )
        .unwrap();
        assert_eq!(config.sample_rate, DEFAULT_SAMPLE_RATE);
        assert_eq!(config.encoding, SampleEncoding::Pcm16);
        assert!(matches!(
            config.tones[0],
            ToneEntry::Waveform { fade_ratio, .. } if fade_ratio == 0.0
        ));
        assert!(matches!(
            config.tones[1],
            ToneEntry::Round { amplitude, .. } if amplitude == 1.0
        ));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let top = r#"{"tones": [], "bitrate": 320}"#;
        assert!(RenderConfig::from_json_str(top).is_err());

        let entry = r#"{"tones": [
            { "name": "gap", "kind": "silence", "duration": 0.25, "volume": 1.0 }
        ]}"#;
        assert!(RenderConfig::from_json_str(entry).is_err());
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let json = r#"{"tones": [{ "name": "x", "kind": "noise", "duration": 1.0 }]}"#;
        assert!(RenderConfig::from_json_str(json).is_err());
    }

    #[test]
    fn test_check_rejects_bad_names() {
        let empty = r#"{"tones": []}"#;
        assert!(RenderConfig::from_json_str(empty).is_err());

        for name in ["", "../escape", "a/b", ".hidden"] {
            let json = format!(
                r#"{{"tones": [{{ "name": "{}", "kind": "silence", "duration": 0.1 }}]}}"#,
                name
            );
            assert!(RenderConfig::from_json_str(&json).is_err(), "{}", name);
        }

        let duplicate = r#"{"tones": [
            { "name": "gap", "kind": "silence", "duration": 0.1 },
            { "name": "gap", "kind": "silence", "duration": 0.2 }
        ]}"#;
        let err = RenderConfig::from_json_str(duplicate).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_render_entries() {
        let config = RenderConfig::from_json_str(FULL_CONFIG).unwrap();

        let a4 = config.tones[0].render(config.sample_rate).unwrap();
        assert_eq!(a4.len(), 2205);

        let hum = config.tones[1].render(config.sample_rate).unwrap();
        assert!(hum.len() >= 2205);
        assert!(hum.iter().all(|s| s.abs() <= 0.5));

        let gap = config.tones[2].render(config.sample_rate).unwrap();
        assert_eq!(gap.len(), 5513);
        assert!(gap.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_render_rejects_negative_silence() {
        for duration in [-0.5, f64::NAN] {
            let gap = ToneEntry::Silence {
                name: "gap".to_string(),
                duration,
            };
            let err = gap.render(44100).unwrap_err();
            assert!(err.is_validation(), "{}", duration);
        }
    }

    #[test]
    fn test_render_rejects_oversized_entries() {
        let long = ToneEntry::Silence {
            name: "forever".to_string(),
            duration: 1e300,
        };
        assert!(long.render(44100).unwrap_err().is_validation());

        let long = ToneEntry::Waveform {
            name: "drone".to_string(),
            shape: Waveform::Sine,
            frequency: 440.0,
            duration: 1e300,
            fade_ratio: 0.0,
        };
        assert!(long.render(44100).unwrap_err().is_validation());
    }

    #[test]
    fn test_render_reports_validation_errors() {
        let tone = ToneEntry::Waveform {
            name: "high".to_string(),
            shape: Waveform::Sine,
            frequency: 30000.0,
            duration: 1.0,
            fade_ratio: 0.0,
        };
        let err = tone.render(44100).unwrap_err();
        assert!(err.is_validation());
    }
}
