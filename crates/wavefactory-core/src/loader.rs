//! Host-side decode cache.
//!
//! Hosts that load the same sounds repeatedly keep a [`WaveCache`] and fetch raw
//! bytes through a [`WaveSource`]. The cache is an ordinary value owned by the
//! host; there is no global instance. Decoded buffers are handed out as
//! `Arc<[f32]>`, so callers share them without being able to mutate them.
//!
//! Loading never fails: a read or decode error is logged and an empty buffer is
//! cached in its place, so a missing asset plays as silence.

use std::collections::HashMap;
use std::fmt::Debug;
use std::fs;
use std::hash::Hash;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::WaveResult;
use crate::wav::decode_wav;

/// Provides raw container bytes for a resource handle.
pub trait WaveSource<K: ?Sized> {
    /// Reads the complete container for `key` into memory.
    fn read_bytes(&self, key: &K) -> io::Result<Vec<u8>>;
}

/// Reads resources from files below a root directory.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    /// Creates a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl<P: AsRef<Path> + ?Sized> WaveSource<P> for FileSource {
    fn read_bytes(&self, key: &P) -> io::Result<Vec<u8>> {
        fs::read(self.root.join(key))
    }
}

/// Decode cache keyed by resource handle.
#[derive(Debug)]
pub struct WaveCache<K> {
    entries: HashMap<K, Arc<[f32]>>,
}

impl<K> Default for WaveCache<K> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone + Debug> WaveCache<K> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the decoded samples for `key`, loading them on first use.
    ///
    /// Failures are logged and cached as an empty buffer.
    pub fn load<S: WaveSource<K> + ?Sized>(&mut self, key: &K, source: &S) -> Arc<[f32]> {
        if let Some(samples) = self.entries.get(key) {
            return Arc::clone(samples);
        }

        let samples: Arc<[f32]> = match read_and_decode(key, source) {
            Ok(samples) => {
                debug!(?key, samples = samples.len(), "decoded wave resource");
                samples.into()
            }
            Err(err) => {
                warn!(
                    ?key,
                    code = err.code(),
                    error = %err,
                    "failed to load wave resource, substituting silence"
                );
                Arc::from(Vec::new())
            }
        };

        self.entries.insert(key.clone(), Arc::clone(&samples));
        samples
    }

    /// Returns a cached buffer without loading.
    pub fn get(&self, key: &K) -> Option<Arc<[f32]>> {
        self.entries.get(key).cloned()
    }

    /// Returns true if `key` has been loaded (successfully or not).
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes a cached buffer so the next load reads it again.
    pub fn evict(&mut self, key: &K) -> Option<Arc<[f32]>> {
        self.entries.remove(key)
    }

    /// Removes every cached buffer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn read_and_decode<K: ?Sized, S: WaveSource<K> + ?Sized>(
    key: &K,
    source: &S,
) -> WaveResult<Vec<f32>> {
    let bytes = source.read_bytes(key)?;
    Ok(decode_wav(&bytes)?.samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use crate::wav::{EncodedWav, WavFormat};

    /// In-memory source that counts reads.
    struct MemorySource {
        files: HashMap<u32, Vec<u8>>,
        reads: Cell<usize>,
    }

    impl MemorySource {
        fn new() -> Self {
            Self {
                files: HashMap::new(),
                reads: Cell::new(0),
            }
        }
    }

    impl WaveSource<u32> for MemorySource {
        fn read_bytes(&self, key: &u32) -> io::Result<Vec<u8>> {
            self.reads.set(self.reads.get() + 1);
            self.files
                .get(key)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such resource"))
        }
    }

    fn wav_bytes(samples: &[f32]) -> Vec<u8> {
        EncodedWav::from_samples(samples, WavFormat::pcm16(8000)).wav_data
    }

    #[test]
    fn test_load_decodes_and_caches() {
        let mut source = MemorySource::new();
        source.files.insert(7, wav_bytes(&[0.5, -0.5]));

        let mut cache: WaveCache<u32> = WaveCache::new();
        let first = cache.load(&7, &source);
        let second = cache.load(&7, &source);

        assert_eq!(first.to_vec(), vec![0.5f32, -0.5]);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(source.reads.get(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_missing_resource_yields_cached_silence() {
        let source = MemorySource::new();
        let mut cache: WaveCache<u32> = WaveCache::new();

        assert!(cache.load(&1, &source).is_empty());
        assert!(cache.contains(&1));
        assert!(cache.load(&1, &source).is_empty());
        assert_eq!(source.reads.get(), 1);
    }

    #[test]
    fn test_undecodable_resource_yields_silence() {
        let mut source = MemorySource::new();
        source.files.insert(2, b"not a wave file".to_vec());

        let mut cache: WaveCache<u32> = WaveCache::new();
        assert!(cache.load(&2, &source).is_empty());
    }

    #[test]
    fn test_evict_forces_reload() {
        let mut source = MemorySource::new();
        source.files.insert(3, wav_bytes(&[0.25]));

        let mut cache: WaveCache<u32> = WaveCache::new();
        cache.load(&3, &source);
        assert!(cache.evict(&3).is_some());
        assert!(cache.get(&3).is_none());
        cache.load(&3, &source);
        assert_eq!(source.reads.get(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_file_source_reads_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("beep.wav"), wav_bytes(&[0.5; 4])).unwrap();

        let source = FileSource::new(dir.path());
        let mut cache: WaveCache<PathBuf> = WaveCache::new();

        let samples = cache.load(&PathBuf::from("beep.wav"), &source);
        assert_eq!(samples.len(), 4);

        let missing = cache.load(&PathBuf::from("missing.wav"), &source);
        assert!(missing.is_empty());
        assert_eq!(cache.len(), 2);
    }
}
