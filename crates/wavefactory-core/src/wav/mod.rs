//! WAV container support.
//!
//! Reading is a tag scan rather than a chunk walk: the parser looks for the ASCII
//! tags `fmt ` and `data` anywhere in the buffer and reads fields at fixed offsets
//! from each tag. This matches canonical 16/18-byte `fmt` chunks and never fails.
//! Writing always produces a canonical 44-byte mono header.

mod decode;
mod format;
mod parser;
mod result;
mod writer;


// Re-export public API
pub use decode::{decode_wav, DecodedWav};
pub use format::{SampleEncoding, WavFormat};
pub use parser::{compute_pcm_hash, parse_wav_header, WavHeaderInfo};
pub use result::EncodedWav;
pub use writer::{encode_samples, write_wav, write_wav_to_vec, CANONICAL_HEADER_LEN};
