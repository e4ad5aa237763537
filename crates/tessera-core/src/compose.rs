//! Render pipeline: synthesize, fade and overlap-add a run of segments.

use rand::Rng;

use crate::buffer::SampleBuffer;
use crate::error::BufferError;
use crate::fade::apply_fade;
use crate::mixer::{accumulate, overlap_offset};
use crate::oscillator::SineMethod;
use crate::synth::{DEFAULT_BASE_FREQ, draw_partials, synthesize_with};

/// Parameters of one render.
///
/// Every segment is an independent additive texture of
/// `partials_per_segment` sines; segments are faded at both edges and laid
/// out at half-length strides in the output buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Length of each segment in milliseconds.
    pub segment_millis: i64,
    /// Number of segments.
    pub segment_count: usize,
    /// Sine partials summed into each segment.
    pub partials_per_segment: usize,
    /// Lower bound of the frequency draw, Hz.
    pub min_freq: f64,
    /// Upper bound of the frequency draw, Hz. Must stay below Nyquist.
    pub max_freq: f64,
    /// Base of the harmonic lattice, Hz.
    pub base_freq: f64,
    /// Fade-in length as a fraction of the segment.
    pub fade_in: f64,
    /// Fade-out length as a fraction of the segment.
    pub fade_out: f64,
    /// Sine generation method.
    pub method: SineMethod,
}

impl Default for Composition {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            segment_millis: 2000,
            segment_count: 8,
            partials_per_segment: 16,
            min_freq: 55.0,
            max_freq: 2000.0,
            base_freq: DEFAULT_BASE_FREQ,
            fade_in: 0.5,
            fade_out: 0.5,
            method: SineMethod::Recursive,
        }
    }
}

impl Composition {
    /// Samples per segment.
    pub fn segment_len(&self) -> Result<usize, BufferError> {
        SampleBuffer::len_for(self.segment_millis, i64::from(self.sample_rate))
    }

    /// Samples in the rendered output.
    ///
    /// A layout too long to index is reported as [`BufferError::Allocation`].
    pub fn output_len(&self) -> Result<usize, BufferError> {
        let segment_len = self.segment_len()?;
        if self.segment_count == 0 {
            return Ok(0);
        }
        (segment_len / 2)
            .checked_mul(self.segment_count - 1)
            .and_then(|offset| offset.checked_add(segment_len))
            .ok_or(BufferError::Allocation {
                samples: (segment_len / 2) as u128 * self.segment_count as u128
                    + (segment_len - segment_len / 2) as u128,
            })
    }

    /// Render every segment and mix them into one buffer.
    ///
    /// All randomness comes from `rng`, so a seeded generator reproduces the
    /// output exactly.
    ///
    /// # Panics
    ///
    /// Panics if `max_freq` is at or above Nyquist and a draw lands there.
    pub fn render<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SampleBuffer, BufferError> {
        let segment_len = self.segment_len()?;
        let mut output = SampleBuffer::with_len(self.output_len()?, self.sample_rate)?;

        for k in 0..self.segment_count {
            let mut segment = SampleBuffer::new(self.segment_millis, i64::from(self.sample_rate))?;
            let partials = draw_partials(
                rng,
                self.partials_per_segment,
                self.min_freq,
                self.max_freq,
                self.base_freq,
            );

            #[cfg(feature = "tracing")]
            tracing::debug!(
                segment = k,
                partials = partials.len(),
                lowest = partials
                    .iter()
                    .map(|p| p.frequency)
                    .fold(f64::INFINITY, f64::min),
                highest = partials.iter().map(|p| p.frequency).fold(0.0, f64::max),
                "synthesizing segment"
            );

            synthesize_with(&mut segment, &partials, self.method);
            apply_fade(&mut segment, self.fade_in, self.fade_out);
            accumulate(
                &segment,
                0,
                &mut output,
                overlap_offset(segment_len, k),
                segment_len,
            );
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            samples = output.len(),
            peak = output.peak(),
            "composition rendered"
        );

        Ok(output)
    }
}
