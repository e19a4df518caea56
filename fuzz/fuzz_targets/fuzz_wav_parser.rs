//! Fuzz target for the WAV tag scanner and decoder.
//!
//! The scanner reads fields at fixed offsets from wherever a tag appears, so
//! tags near the end of the buffer and absurd declared lengths must all be
//! handled without panicking.
//!
//! Run with: `cargo +nightly fuzz run fuzz_wav_parser`

#![no_main]

use libfuzzer_sys::fuzz_target;
use wavefactory_core::wav::{compute_pcm_hash, decode_wav, parse_wav_header};

fuzz_target!(|data: &[u8]| {
    let info = parse_wav_header(data);
    let payload = info.data(data);
    assert!(payload.len() <= info.data_byte_length);
    let _ = info.sample_count();
    let _ = compute_pcm_hash(data);

    if let Ok(decoded) = decode_wav(data) {
        assert!(decoded.samples.len() <= payload.len() / 2);
    }

    // The same bytes behind a canonical header exercise the multi-tag path.
    let mut framed = Vec::with_capacity(data.len() + 12);
    framed.extend_from_slice(b"RIFF\0\0\0\0WAVE");
    framed.extend_from_slice(data);
    let _ = decode_wav(&framed);
});
