use crate::sample::Sample;

/// Fixed-capacity sample buffer shared by the loading and playback stages
///
/// Created once at startup and owned by the app for its whole lifetime; the
/// storage is never reallocated, only refilled.
pub struct Waveform<const N: usize> {
    samples: [Sample; N],
    len: usize,
}

impl<const N: usize> Waveform<N> {
    pub const fn new() -> Self {
        Self {
            samples: [Sample::min(); N],
            len: 0,
        }
    }

    /// Append a sample; returns `false` and drops it when the buffer is full
    pub fn push(&mut self, sample: Sample) -> bool {
        if self.is_full() {
            return false;
        }
        self.samples[self.len] = sample;
        self.len += 1;
        true
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for Waveform<N> {
    fn default() -> Self {
        Self::new()
    }
}
