//! WaveFactory Core
//!
//! Deterministic audio-signal toolkit: periodic waveform synthesis, loopable
//! tones, 16-bit PCM conversion and a minimal WAV container parser.
//!
//! # Overview
//!
//! - **Waveforms** - Sine, square, triangle and sawtooth with linear fade envelopes
//! - **Round tones** - Sine/square tones cut at an upward zero crossing so copies tile without clicks
//! - **Codec** - Normalized `f32` samples to and from 16-bit little-endian PCM
//! - **WAV** - Tag-scanning header parser, canonical writer and decoder
//! - **Mixing** - Silence buffers and `tanh`-saturated additive mixing
//!
//! # Determinism
//!
//! Every operation is a pure function of its inputs. Given the same parameters the
//! output is byte-identical across runs (on the same platform), and the BLAKE3 PCM
//! hash of a written WAV file is stable.
//!
//! # Example
//!
//! ```
//! use wavefactory_core::{generate, Waveform, WaveformSpec};
//! use wavefactory_core::wav::{EncodedWav, WavFormat};
//!
//! let spec = WaveformSpec::new(440.0, 0.5, 44100).with_fade(0.05);
//! let samples = generate(Waveform::Sine, &spec)?;
//! assert_eq!(samples.len(), 22050);
//!
//! let wav = EncodedWav::from_samples(&samples, WavFormat::pcm16(44100));
//! assert_eq!(&wav.wav_data[0..4], b"RIFF");
//! # Ok::<(), wavefactory_core::ValidationError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`codec`] - Float/PCM sample conversion
//! - [`envelope`] - Linear fade-in/fade-out envelope
//! - [`waveform`] - Waveform shapes and generation parameters
//! - [`generate()`] - Shape-parameterized buffer generator
//! - [`loop_tone`] - Zero-crossing cut tones for seamless looping
//! - [`mixer`] - Silence and soft-saturating mix
//! - [`wav`] - WAV header parser, writer and decoder
//! - [`loader`] - Host-owned decode cache

pub mod codec;
pub mod envelope;
pub mod error;
pub mod generate;
pub mod loader;
pub mod loop_tone;
pub mod mixer;
pub mod wav;
pub mod waveform;

// Re-export main types at crate root
pub use error::{ValidationError, WaveError, WaveResult};
pub use generate::{generate, generate_pcm16};
pub use loop_tone::{
    generate_round_tone, generate_round_tone_pcm16, generate_round_tone_with_cut, LoopShape,
};
pub use mixer::{mix, silence, silence_pcm16};
pub use waveform::{Waveform, WaveformSpec};
