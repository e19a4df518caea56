//! Property-based tests for generation, conversion and parsing.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p wavefactory-core --test test_properties
//! ```

use proptest::prelude::*;

use wavefactory_core::codec::{pcm16_to_samples, samples_to_pcm16};
use wavefactory_core::wav::{decode_wav, parse_wav_header};
use wavefactory_core::{
    generate, generate_pcm16, generate_round_tone, mix, silence, LoopShape, ValidationError,
    WaveError, Waveform, WaveformSpec,
};

fn any_waveform() -> impl Strategy<Value = Waveform> {
    prop_oneof![
        Just(Waveform::Sine),
        Just(Waveform::Square),
        Just(Waveform::Triangle),
        Just(Waveform::Sawtooth),
    ]
}

fn any_sample_rate() -> impl Strategy<Value = u32> {
    prop_oneof![Just(8000u32), Just(22050), Just(44100), Just(48000)]
}

// ============================================================================
// 1. Generation
// ============================================================================

proptest! {
    /// Buffer length is floor(duration * sample_rate); PCM is twice that in bytes.
    #[test]
    fn generated_length_is_floor_of_duration(
        shape in any_waveform(),
        frequency in 1.0f64..4000.0,
        duration in 0.001f64..0.5,
        sample_rate in any_sample_rate(),
        fade_ratio in 0.0f64..=0.5,
    ) {
        let spec = WaveformSpec::new(frequency, duration, sample_rate).with_fade(fade_ratio);
        let expected = (duration * sample_rate as f64).floor() as usize;

        let samples = generate(shape, &spec).unwrap();
        prop_assert_eq!(samples.len(), expected);

        let pcm = generate_pcm16(shape, &spec).unwrap();
        prop_assert_eq!(pcm.len(), expected * 2);
    }

    /// Without a fade every sample equals the raw shape function.
    #[test]
    fn zero_fade_leaves_shape_untouched(
        shape in any_waveform(),
        frequency in 1.0f64..4000.0,
        sample_rate in any_sample_rate(),
    ) {
        let spec = WaveformSpec::new(frequency, 0.02, sample_rate);
        let samples = generate(shape, &spec).unwrap();
        for (i, &s) in samples.iter().enumerate() {
            prop_assert_eq!(s, shape.value_at(frequency, sample_rate as f64, i) as f32);
        }
    }

    /// Faded output never exceeds the raw amplitude.
    #[test]
    fn fade_only_attenuates(
        shape in any_waveform(),
        fade_ratio in 0.0f64..=0.5,
    ) {
        let spec = WaveformSpec::new(440.0, 0.05, 22050).with_fade(fade_ratio);
        let samples = generate(shape, &spec).unwrap();
        for (i, &s) in samples.iter().enumerate() {
            let raw = shape.value_at(440.0, 22050.0, i) as f32;
            prop_assert!(s.abs() <= raw.abs() + 1e-6);
        }
    }

    /// Square waves take only the values -1, 0 and 1 and flip sign every half period.
    #[test]
    fn square_wave_values_and_period(
        half_period in 2usize..100,
        sample_rate in any_sample_rate(),
    ) {
        let period = half_period * 2;
        let frequency = sample_rate as f64 / period as f64;
        let spec = WaveformSpec::new(frequency, 0.05, sample_rate);
        let samples = generate(Waveform::Square, &spec).unwrap();

        prop_assert!(samples.iter().all(|&s| s == -1.0 || s == 0.0 || s == 1.0));

        for i in 0..samples.len().saturating_sub(period) {
            if i % half_period == 0 {
                continue;
            }
            prop_assert_eq!(samples[i], samples[i + period]);
            prop_assert_eq!(samples[i], -samples[i + half_period]);
        }
    }

    /// Frequencies above Nyquist are always rejected.
    #[test]
    fn above_nyquist_is_rejected(
        shape in any_waveform(),
        sample_rate in any_sample_rate(),
        excess in 0.001f64..10000.0,
    ) {
        let frequency = sample_rate as f64 / 2.0 + excess;
        let spec = WaveformSpec::new(frequency, 0.1, sample_rate);
        prop_assert!(generate(shape, &spec).is_err());
    }

    /// Durations too long to buffer are validation errors, never allocations.
    #[test]
    fn oversized_durations_are_rejected(
        shape in any_waveform(),
        sample_rate in any_sample_rate(),
        duration in 1.0e12f64..1.0e300,
    ) {
        let spec = WaveformSpec::new(100.0, duration, sample_rate);
        let generate_rejected = matches!(
            generate(shape, &spec),
            Err(ValidationError::TooManySamples { .. })
        );
        prop_assert!(generate_rejected);
        let silence_rejected = matches!(
            silence(duration, sample_rate),
            Err(ValidationError::TooManySamples { .. })
        );
        prop_assert!(silence_rejected);
        let round_tone_rejected = matches!(
            generate_round_tone(LoopShape::Sine, 100.0, duration, sample_rate),
            Err(WaveError::Validation(ValidationError::TooManySamples { .. }))
        );
        prop_assert!(round_tone_rejected);
    }
}

// ============================================================================
// 2. Sample codec
// ============================================================================

proptest! {
    /// Float -> PCM -> float stays within one quantization step.
    #[test]
    fn float_roundtrip_within_quantization(samples in prop::collection::vec(-1.0f32..1.0, 0..256)) {
        let restored = pcm16_to_samples(&samples_to_pcm16(&samples));
        prop_assert_eq!(restored.len(), samples.len());
        for (a, b) in samples.iter().zip(&restored) {
            prop_assert!((a - b).abs() <= 1.0 / 32768.0, "{} vs {}", a, b);
        }
    }

    /// PCM -> float -> PCM is bit-exact.
    #[test]
    fn pcm_roundtrip_is_bit_exact(words in prop::collection::vec(any::<i16>(), 0..256)) {
        let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
        prop_assert_eq!(samples_to_pcm16(&pcm16_to_samples(&bytes)), bytes);
    }

    /// Decoding drops a trailing odd byte.
    #[test]
    fn pcm_decode_length_floors(bytes in prop::collection::vec(any::<u8>(), 0..257)) {
        prop_assert_eq!(pcm16_to_samples(&bytes).len(), bytes.len() / 2);
    }
}

// ============================================================================
// 3. Parsing and mixing
// ============================================================================

proptest! {
    /// Arbitrary bytes never panic the parser or decoder.
    #[test]
    fn parser_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let info = parse_wav_header(&bytes);
        let _ = info.data(&bytes);
        let _ = decode_wav(&bytes);
    }

    /// A data tag spliced into noise is always found.
    #[test]
    fn parser_finds_spliced_data_tag(
        prefix in prop::collection::vec(0u8..0x20, 0..64),
        // Below 0x6000_0000 the length bytes cannot spell another tag.
        length in 0u32..0x6000_0000,
        suffix in prop::collection::vec(0u8..0x20, 1..64),
    ) {
        let mut bytes = prefix.clone();
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&length.to_le_bytes());
        bytes.extend_from_slice(&suffix);

        let info = parse_wav_header(&bytes);
        prop_assert_eq!(info.data_byte_offset, prefix.len() + 8);
        prop_assert_eq!(info.data_byte_length, length as usize);
        prop_assert!(info.data(&bytes).len() <= suffix.len());
    }

    /// Mixing writes min(source, destination - offset) samples and stays in [-1, 1].
    #[test]
    fn mix_truncates_and_saturates(
        source in prop::collection::vec(-4.0f32..4.0, 0..64),
        destination in prop::collection::vec(-1.0f32..1.0, 0..64),
        offset in 0usize..80,
    ) {
        let mut mixed = destination.clone();
        let written = mix(&source, &mut mixed, offset);

        prop_assert_eq!(written, source.len().min(destination.len().saturating_sub(offset)));
        prop_assert_eq!(mixed.len(), destination.len());
        prop_assert!(mixed.iter().all(|s| s.abs() <= 1.0));
        for i in 0..destination.len() {
            if i < offset || i >= offset + written {
                prop_assert_eq!(mixed[i], destination[i]);
            }
        }
    }
}
