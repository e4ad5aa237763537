//! Fixed-length mono sample buffer.
//!
//! A [`SampleBuffer`] is allocated once, zeroed, and never resized. Every other
//! stage of the engine (synthesis, fades, overlap-add) mutates it in place
//! through `&mut` borrows, so a buffer has exactly one owner at any point of
//! the render.

use core::ops::{Index, IndexMut};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::BufferError;

/// A mono buffer of `f64` samples at a fixed sample rate.
///
/// # Example
///
/// ```rust
/// use tessera_core::SampleBuffer;
///
/// // 100 ms at 1 kHz
/// let mut buf = SampleBuffer::new(100, 1000).unwrap();
/// assert_eq!(buf.len(), 100);
///
/// buf[3] = 0.5;
/// assert_eq!(buf.samples()[3], 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f64>,
    sample_rate: u32,
}

impl SampleBuffer {
    /// Creates a zeroed buffer holding `floor(duration_millis * sample_rate / 1000)`
    /// samples.
    ///
    /// A zero duration yields a valid, empty buffer. Negative durations and
    /// non-positive sample rates are rejected with
    /// [`BufferError::InvalidArgument`]; a length that cannot be allocated
    /// yields [`BufferError::Allocation`].
    pub fn new(duration_millis: i64, sample_rate: i64) -> Result<Self, BufferError> {
        let len = Self::len_for(duration_millis, sample_rate)?;
        let rate = u32::try_from(sample_rate)
            .map_err(|_| BufferError::invalid("sample_rate", sample_rate))?;
        Self::with_len(len, rate)
    }

    /// Sample count [`new`](Self::new) would allocate, without allocating.
    pub fn len_for(duration_millis: i64, sample_rate: i64) -> Result<usize, BufferError> {
        if duration_millis < 0 {
            return Err(BufferError::invalid("duration_millis", duration_millis));
        }
        if sample_rate <= 0 || u32::try_from(sample_rate).is_err() {
            return Err(BufferError::invalid("sample_rate", sample_rate));
        }

        // Both factors are non-negative i64, so the product fits in u128.
        let len = (duration_millis as u128 * sample_rate as u128) / 1000;
        usize::try_from(len).map_err(|_| BufferError::Allocation { samples: len })
    }

    /// Creates a zeroed buffer with an explicit sample count.
    pub fn with_len(len: usize, sample_rate: u32) -> Result<Self, BufferError> {
        if sample_rate == 0 {
            return Err(BufferError::invalid("sample_rate", 0));
        }
        let mut samples = Vec::new();
        samples
            .try_reserve_exact(len)
            .map_err(|_| BufferError::Allocation {
                samples: len as u128,
            })?;
        samples.resize(len, 0.0);
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Returns the number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the buffer holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the sample rate in Hz.
    #[inline]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Returns the buffer duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / f64::from(self.sample_rate)
    }

    /// Read-only view of the samples.
    #[inline]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Mutable view of the samples. The slice length is fixed.
    #[inline]
    pub fn samples_mut(&mut self) -> &mut [f64] {
        &mut self.samples
    }

    /// Largest absolute sample value, or 0.0 for an empty buffer.
    pub fn peak(&self) -> f64 {
        self.samples
            .iter()
            .fold(0.0, |acc: f64, s| acc.max(s.abs()))
    }
}

impl Index<usize> for SampleBuffer {
    type Output = f64;

    /// # Panics
    ///
    /// Panics if `idx >= len()`.
    #[inline]
    fn index(&self, idx: usize) -> &f64 {
        &self.samples[idx]
    }
}

impl IndexMut<usize> for SampleBuffer {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut f64 {
        &mut self.samples[idx]
    }
}
