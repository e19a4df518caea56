//! Linear fade-in/fade-out envelope.
//!
//! The envelope ramps the first `R` samples up from zero and the last `R` samples
//! down towards zero, where `R = round(num_samples * fade_ratio)`. Samples between
//! the two ramps pass through unscaled.

/// Edge fade envelope for a buffer of known length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearFade {
    num_samples: usize,
    ramp_samples: usize,
}

impl LinearFade {
    /// Creates an envelope for `num_samples` samples with the given fade ratio.
    pub fn new(num_samples: usize, fade_ratio: f64) -> Self {
        let ramp_samples = (num_samples as f64 * fade_ratio).round() as usize;
        Self {
            num_samples,
            ramp_samples,
        }
    }

    /// Number of samples in each ramp.
    pub fn ramp_samples(&self) -> usize {
        self.ramp_samples
    }

    /// Returns the gain applied at sample index `i`.
    ///
    /// The fade-in takes precedence where the two ramps overlap, which happens
    /// for odd lengths at a fade ratio of 0.5.
    #[inline]
    pub fn gain_at(&self, i: usize) -> f64 {
        let ramp = self.ramp_samples;
        if ramp == 0 {
            return 1.0;
        }

        if i < ramp {
            i as f64 / ramp as f64
        } else if i >= self.num_samples.saturating_sub(ramp) {
            self.num_samples.saturating_sub(i) as f64 / ramp as f64
        } else {
            1.0
        }
    }

    /// Applies the envelope in place.
    pub fn apply(&self, samples: &mut [f64]) {
        if self.ramp_samples == 0 {
            return;
        }
        for (i, sample) in samples.iter_mut().enumerate() {
            *sample *= self.gain_at(i);
        }
    }
}
